use std::convert::TryFrom;

use thiserror::Error;

use crate::stack::DEFAULT_LIMIT;

pub const STACK_COUNT: usize = 3;
pub const MIN_DISKS: u32 = 3;
/// Keeps the optimal move count `2^n - 1` representable.
pub const MAX_DISKS: u32 = 64;
/// Disks always start on the first stack.
pub const START_STACK: usize = 0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A game needs at least {min} disks, got {disks}")]
    TooFewDisks { disks: u32, min: u32 },
    #[error("A game supports at most {max} disks, got {disks}")]
    TooManyDisks { disks: u32, max: u32 },
    #[error("{disks} disks do not fit on a stack limited to {limit} items")]
    ExceedsStackLimit { disks: u32, limit: usize },
    #[error("Stack names must not be empty")]
    EmptyStackName,
    #[error("Stack {name:?} must start with a letter so it can be selected")]
    UnselectableName { name: String },
    #[error("Stacks {first:?} and {second:?} share the selection key {key}")]
    DuplicateKey {
        key: char,
        first: String,
        second: String,
    },
    #[error("Invalid goal stack {goal}, pick 1 or 2")]
    InvalidGoal { goal: usize },
}

/// Everything needed to set up one game session.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub disk_count: u32,
    pub stack_limit: usize,
    pub stack_names: [String; STACK_COUNT],
    pub goal: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disk_count: MIN_DISKS,
            stack_limit: DEFAULT_LIMIT,
            stack_names: [
                "Left".to_string(),
                "Middle".to_string(),
                "Right".to_string(),
            ],
            goal: 2,
        }
    }
}

impl GameConfig {
    pub fn with_disks(disk_count: u32) -> Self {
        Self {
            disk_count,
            ..Self::default()
        }
    }

    /// The most disks this configuration can hold.
    pub fn max_disks(&self) -> u32 {
        let limit = u32::try_from(self.stack_limit).unwrap_or(u32::MAX);
        MAX_DISKS.min(limit)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disk_count < MIN_DISKS {
            return Err(ConfigError::TooFewDisks {
                disks: self.disk_count,
                min: MIN_DISKS,
            });
        }
        if self.disk_count > MAX_DISKS {
            return Err(ConfigError::TooManyDisks {
                disks: self.disk_count,
                max: MAX_DISKS,
            });
        }
        if self.disk_count > self.max_disks() {
            return Err(ConfigError::ExceedsStackLimit {
                disks: self.disk_count,
                limit: self.stack_limit,
            });
        }
        if self.goal == START_STACK || self.goal >= STACK_COUNT {
            return Err(ConfigError::InvalidGoal { goal: self.goal });
        }

        let mut keys: Vec<(char, &String)> = Vec::with_capacity(STACK_COUNT);
        for name in self.stack_names.iter() {
            let key = selection_key(name).ok_or(ConfigError::EmptyStackName)?;
            if !key.is_ascii_alphabetic() {
                return Err(ConfigError::UnselectableName { name: name.clone() });
            }
            if let Some((_, first)) = keys.iter().find(|(existing, _)| *existing == key) {
                return Err(ConfigError::DuplicateKey {
                    key,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
            keys.push((key, name));
        }

        Ok(())
    }
}

/// The single uppercase letter a player types to pick a stack.
pub fn selection_key(name: &str) -> Option<char> {
    name.trim().chars().next().map(|c| c.to_ascii_uppercase())
}
