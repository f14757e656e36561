//! The classic recursive solution, unrolled into an iterator.

use super::towers::TowerMove;

/// Minimum number of moves to transfer `disk_count` disks: `2^n - 1`.
pub fn optimal_move_count(disk_count: u32) -> u128 {
    if disk_count >= u128::BITS {
        return u128::MAX;
    }
    (1u128 << disk_count) - 1
}

struct Frame {
    disks: u32,
    from: usize,
    via: usize,
    to: usize,
}

/// Yields the optimal move sequence lazily. Memory stays proportional to
/// the disk count rather than the move count.
pub struct OptimalMoves {
    frames: Vec<Frame>,
}

impl OptimalMoves {
    pub fn new(disk_count: u32, from: usize, via: usize, to: usize) -> Self {
        Self {
            frames: vec![Frame {
                disks: disk_count,
                from,
                via,
                to,
            }],
        }
    }
}

impl Iterator for OptimalMoves {
    type Item = TowerMove;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Frame {
                disks,
                from,
                via,
                to,
            } = self.frames.pop()?;
            match disks {
                0 => continue,
                1 => return Some(TowerMove { from, to }),
                _ => {
                    // Pushed in reverse so the left subtree comes out first.
                    self.frames.push(Frame {
                        disks: disks - 1,
                        from: via,
                        via: from,
                        to,
                    });
                    self.frames.push(Frame {
                        disks: 1,
                        from,
                        via,
                        to,
                    });
                    self.frames.push(Frame {
                        disks: disks - 1,
                        from,
                        via: to,
                        to: via,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GameConfig;
    use crate::game::towers::Towers;

    #[test]
    fn test_optimal_move_count() {
        assert_eq!(optimal_move_count(3), 7);
        assert_eq!(optimal_move_count(10), 1023);
        assert_eq!(optimal_move_count(64), u64::MAX as u128);
    }

    #[test]
    fn test_three_disk_sequence() {
        let moves: Vec<(usize, usize)> = OptimalMoves::new(3, 0, 1, 2)
            .map(|m| (m.from, m.to))
            .collect();
        assert_eq!(
            moves,
            vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        );
    }

    #[test]
    fn test_solver_solves_every_size() {
        for disks in 3..=10 {
            let mut towers = Towers::new(&GameConfig::with_disks(disks)).unwrap();
            for planned in OptimalMoves::new(disks, 0, 1, 2) {
                towers.apply_move(planned.from, planned.to).unwrap();
            }
            assert!(towers.is_solved());
            assert_eq!(towers.move_count() as u128, optimal_move_count(disks));
        }
    }
}
