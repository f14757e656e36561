use std::fmt;

use log::debug;
use thiserror::Error;

use crate::stack::{LinkedStack, SnapshotOrder, StackError};

use super::config::{selection_key, ConfigError, GameConfig, STACK_COUNT, START_STACK};
use super::solver::optimal_move_count;

/// Disk sizes; a larger number is a wider disk.
pub type Disk = u32;

/// A request to move the top disk of `from` onto `to`, by stack index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerMove {
    pub from: usize,
    pub to: usize,
}

#[derive(Error, Debug)]
pub enum MoveError {
    #[error("Stack {name:?} has no disks to move")]
    EmptySource { name: String },
    #[error("Disk {disk} cannot be placed on the smaller disk {target} on stack {name:?}")]
    LargerOntoSmaller {
        disk: Disk,
        target: Disk,
        name: String,
    },
    #[error("Source and destination are the same stack")]
    SameStack,
    #[error("Stack {name:?} is full")]
    DestinationFull { name: String },
    #[error("There is no stack number {index}")]
    UnknownStack { index: usize },
    #[error("Stack error: {error}")]
    Stack {
        #[from]
        error: StackError<Disk>,
    },
}

/// One game session: three named stacks, the goal and the move counter.
pub struct Towers {
    stacks: [LinkedStack<Disk>; STACK_COUNT],
    disk_count: u32,
    goal: usize,
    move_count: u64,
}

impl Towers {
    /// Sets up the stacks and places every disk on the first one, largest first.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let [left, middle, right] = &config.stack_names;
        let mut stacks = [
            LinkedStack::with_limit(left.trim(), config.stack_limit),
            LinkedStack::with_limit(middle.trim(), config.stack_limit),
            LinkedStack::with_limit(right.trim(), config.stack_limit),
        ];
        for disk in (1..=config.disk_count).rev() {
            stacks[START_STACK]
                .push(disk)
                .map_err(|_| ConfigError::ExceedsStackLimit {
                    disks: config.disk_count,
                    limit: config.stack_limit,
                })?;
        }
        debug!(
            "set up {} disks on {:?}, goal is {:?}",
            config.disk_count,
            stacks[START_STACK].name(),
            stacks[config.goal].name()
        );

        Ok(Self {
            stacks,
            disk_count: config.disk_count,
            goal: config.goal,
            move_count: 0,
        })
    }

    pub fn stacks(&self) -> &[LinkedStack<Disk>] {
        &self.stacks
    }

    pub fn stack(&self, index: usize) -> Result<&LinkedStack<Disk>, MoveError> {
        self.stacks
            .get(index)
            .ok_or(MoveError::UnknownStack { index })
    }

    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    pub fn goal(&self) -> usize {
        self.goal
    }

    /// The stack neither the start nor the goal; the solver routes through it.
    pub fn spare(&self) -> usize {
        (0..STACK_COUNT)
            .find(|&index| index != START_STACK && index != self.goal)
            .unwrap_or(1)
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn optimal_move_count(&self) -> u128 {
        optimal_move_count(self.disk_count)
    }

    pub fn is_solved(&self) -> bool {
        self.stacks[self.goal].size() == self.disk_count as usize
    }

    pub fn key(&self, index: usize) -> Option<char> {
        self.stacks
            .get(index)
            .and_then(|stack| selection_key(stack.name()))
    }

    /// Case-insensitive lookup of a stack by its selection key.
    pub fn index_for_key(&self, key: char) -> Option<usize> {
        let key = key.to_ascii_uppercase();
        (0..STACK_COUNT).find(|&index| self.key(index) == Some(key))
    }

    /// The choices shown when prompting, e.g. `L for Left / M for Middle / R for Right`.
    pub fn selection_options(&self) -> String {
        self.stacks
            .iter()
            .filter_map(|stack| selection_key(stack.name()).map(|key| (key, stack.name())))
            .map(|(key, name)| format!("{} for {}", key, name))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Smaller onto larger, or onto an empty stack.
    pub fn check_move(&self, from: usize, to: usize) -> Result<Disk, MoveError> {
        let source = self.stack(from)?;
        let target = self.stack(to)?;
        if from == to {
            return Err(MoveError::SameStack);
        }

        let disk = match source.peek() {
            Ok(disk) => *disk,
            Err(_) => {
                return Err(MoveError::EmptySource {
                    name: source.name().to_string(),
                })
            }
        };
        if let Ok(&top) = target.peek() {
            if top <= disk {
                return Err(MoveError::LargerOntoSmaller {
                    disk,
                    target: top,
                    name: target.name().to_string(),
                });
            }
        }
        if !target.has_space() {
            return Err(MoveError::DestinationFull {
                name: target.name().to_string(),
            });
        }

        Ok(disk)
    }

    pub fn is_legal(&self, from: usize, to: usize) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Moves the top disk of `from` onto `to`. Illegal moves change nothing.
    pub fn apply_move(&mut self, from: usize, to: usize) -> Result<Disk, MoveError> {
        self.check_move(from, to)?;
        let disk = self.stacks[from].pop()?;
        if let Err(error) = self.stacks[to].push(disk) {
            let name = self.stacks[to].name().to_string();
            if let Some(disk) = error.into_rejected_value() {
                self.stacks[from].push(disk)?;
            }
            return Err(MoveError::DestinationFull { name });
        }
        self.move_count += 1;
        debug!(
            "move {}: disk {} from {:?} to {:?}",
            self.move_count,
            disk,
            self.stacks[from].name(),
            self.stacks[to].name()
        );
        Ok(disk)
    }

    pub fn apply(&mut self, tower_move: TowerMove) -> Result<Disk, MoveError> {
        self.apply_move(tower_move.from, tower_move.to)
    }

    /// Disks per stack, bottom to top.
    pub fn layout(&self) -> Vec<Vec<Disk>> {
        self.stacks
            .iter()
            .map(|stack| stack.snapshot(SnapshotOrder::BottomToTop))
            .collect()
    }
}

impl fmt::Display for Towers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stack in self.stacks.iter() {
            writeln!(f, "{}", stack)?;
        }
        Ok(())
    }
}
