use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError<T: Debug> {
    #[error("Cannot push onto stack {name:?}, it is already holding its limit of {limit} items")]
    Full { name: String, limit: usize, value: T },
    #[error("Stack {name:?} is empty")]
    Empty { name: String },
}

impl<T: Debug> StackError<T> {
    /// Hands back the value a rejected push was carrying.
    pub fn into_rejected_value(self) -> Option<T> {
        match self {
            StackError::Full { value, .. } => Some(value),
            StackError::Empty { .. } => None,
        }
    }
}
