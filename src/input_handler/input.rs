//! Parsing of the player's console input.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([A-Za-z])$").expect("KEY_RE regex should be valid"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i:q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("Enter a number greater than or equal to {min}")]
    TooFewDisks { min: u32 },
    #[error("Enter a number less than or equal to {max}")]
    TooManyDisks { max: u32 },
    #[error("No disk count fits between {min} and {max}")]
    EmptyRange { min: u32, max: u32 },
    #[error("Game exited")]
    UserExit,
    #[error("No moves left to play")]
    Exhausted,
}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        InputError::IOError {
            error: error.to_string(),
        }
    }
}

/// What the player typed at a stack prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum StackInput {
    Key(char),
    Quit,
}

impl FromStr for StackInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if QUIT_RE.is_match(trimmed) {
            return Ok(StackInput::Quit);
        }

        if let Some(caps) = KEY_RE.captures(trimmed) {
            if let Some(key) = caps[1].chars().next() {
                return Ok(StackInput::Key(key.to_ascii_uppercase()));
            }
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Parses a disk count and checks it against `min..=max`.
pub fn parse_disk_count(input: &str, min: u32, max: u32) -> Result<u32, InputError> {
    if min > max {
        return Err(InputError::EmptyRange { min, max });
    }

    let trimmed = input.trim();
    let count: u32 = trimmed.parse().map_err(|_| InputError::InvalidInput {
        input: trimmed.to_string(),
    })?;

    if count < min {
        return Err(InputError::TooFewDisks { min });
    }
    if count > max {
        return Err(InputError::TooManyDisks { max });
    }

    Ok(count)
}
