use super::*;

#[test]
fn test_new_stack_is_empty_with_default_limit() {
    let stack: LinkedStack<u32> = LinkedStack::new("Left");
    assert!(stack.is_empty());
    assert!(stack.has_space());
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.limit(), DEFAULT_LIMIT);
    assert_eq!(stack.name(), "Left");
}

#[test]
fn test_size_tracks_pushes_minus_successful_pops() {
    let mut stack = LinkedStack::new("Middle");
    for value in 1..=10u32 {
        stack.push(value).unwrap();
    }
    for _ in 0..4 {
        stack.pop().unwrap();
    }
    assert_eq!(stack.size(), 6);

    for _ in 0..10 {
        let _ = stack.pop();
    }
    assert_eq!(stack.size(), 0);
    assert!(stack.is_empty());
}

#[test]
fn test_pop_returns_just_pushed_value() {
    let mut stack = LinkedStack::new("Right");
    stack.push(7u32).unwrap();
    stack.push(3).unwrap();
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(7));
}

#[test]
fn test_peek_is_idempotent() {
    let mut stack = LinkedStack::new("Left");
    stack.push(4u32).unwrap();
    stack.push(2).unwrap();
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.size(), 2);
}

#[test]
fn test_push_when_full_is_rejected() {
    let mut stack = LinkedStack::with_limit("Left", 3);
    stack.push(1u32).unwrap();
    stack.push(2).unwrap();
    stack.push(3).unwrap();
    assert!(!stack.is_empty());
    assert!(!stack.has_space());
    assert_eq!(stack.size(), 3);

    let error = stack.push(4).unwrap_err();
    assert_eq!(
        error,
        StackError::Full {
            name: "Left".to_string(),
            limit: 3,
            value: 4,
        }
    );
    assert_eq!(error.into_rejected_value(), Some(4));
    assert_eq!(stack.size(), 3);
    assert_eq!(stack.peek(), Ok(&3));
}

#[test]
fn test_empty_stack_reports_empty_on_pop_and_peek() {
    let mut stack: LinkedStack<u32> = LinkedStack::new("Left");
    let expected = StackError::Empty {
        name: "Left".to_string(),
    };
    assert_eq!(stack.pop(), Err(expected.clone()));
    assert_eq!(stack.peek(), Err(expected));
    assert_eq!(stack.size(), 0);
}

#[test]
fn test_snapshot_does_not_mutate() {
    let mut stack = LinkedStack::new("Left");
    for value in (1..=3u32).rev() {
        stack.push(value).unwrap();
    }
    assert_eq!(stack.snapshot(SnapshotOrder::TopToBottom), vec![1, 2, 3]);
    assert_eq!(stack.snapshot(SnapshotOrder::BottomToTop), vec![3, 2, 1]);
    assert_eq!(stack.size(), 3);
    assert_eq!(stack.peek(), Ok(&1));
}

#[test]
fn test_display_lists_bottom_to_top() {
    let mut stack = LinkedStack::new("Left");
    assert_eq!(stack.to_string(), "Left Stack: []");
    for value in (1..=3u32).rev() {
        stack.push(value).unwrap();
    }
    assert_eq!(stack.to_string(), "Left Stack: [3, 2, 1]");
}

#[test]
fn test_generic_over_ordered_values() {
    let mut stack = LinkedStack::with_limit("words", 2);
    stack.push("b".to_string()).unwrap();
    stack.push("a".to_string()).unwrap();
    assert!(stack.peek().unwrap() < &"b".to_string());
    assert_eq!(stack.iter().count(), 2);
}

#[test]
fn test_dropping_a_deep_stack() {
    let mut stack = LinkedStack::with_limit("deep", 200_000);
    for value in 0..200_000u32 {
        stack.push(value).unwrap();
    }
    assert_eq!(stack.size(), 200_000);
    drop(stack);
}

