use hanoi::stack::{LinkedStack, SnapshotOrder};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("push then pop 1000 values", |b| {
        b.iter(|| {
            let mut stack = LinkedStack::new("bench");
            for value in 0..1000u32 {
                stack.push(black_box(value)).unwrap();
            }
            while stack.pop().is_ok() {}
        })
    });

    c.bench_function("snapshot 1000 values", |b| {
        let mut stack = LinkedStack::new("bench");
        for value in 0..1000u32 {
            stack.push(value).unwrap();
        }
        b.iter(|| stack.snapshot(black_box(SnapshotOrder::BottomToTop)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
