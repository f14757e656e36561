//! A capacity-bounded LIFO stack built from individually owned link cells.

pub mod error;

#[cfg(test)]
mod tests;

use std::fmt::{self, Debug, Display};

pub use error::StackError;

pub const DEFAULT_LIMIT: usize = 1000;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Order in which `snapshot` lists the values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotOrder {
    TopToBottom,
    BottomToTop,
}

/// A named stack that owns a singly-linked chain of cells, top first.
pub struct LinkedStack<T> {
    name: String,
    head: Link<T>,
    size: usize,
    limit: usize,
}

impl<T: Debug> LinkedStack<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_limit(name, DEFAULT_LIMIT)
    }

    pub fn with_limit(name: impl Into<String>, limit: usize) -> Self {
        Self {
            name: name.into(),
            head: None,
            size: 0,
            limit,
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), StackError<T>> {
        if !self.has_space() {
            return Err(StackError::Full {
                name: self.name.clone(),
                limit: self.limit,
                value,
            });
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.size += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError<T>> {
        match self.head.take() {
            Some(node) => {
                let Node { value, next } = *node;
                self.head = next;
                self.size -= 1;
                Ok(value)
            }
            None => Err(self.empty_error()),
        }
    }

    pub fn peek(&self) -> Result<&T, StackError<T>> {
        match &self.head {
            Some(node) => Ok(&node.value),
            None => Err(self.empty_error()),
        }
    }

    fn empty_error(&self) -> StackError<T> {
        StackError::Empty {
            name: self.name.clone(),
        }
    }
}

impl<T> LinkedStack<T> {
    pub fn has_space(&self) -> bool {
        self.size < self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Walks the chain from the top cell down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn snapshot(&self, order: SnapshotOrder) -> Vec<T>
    where
        T: Clone,
    {
        let mut values: Vec<T> = self.iter().cloned().collect();
        if order == SnapshotOrder::BottomToTop {
            values.reverse();
        }
        values
    }
}

impl<T> Drop for LinkedStack<T> {
    // Unlink iteratively; the default recursive drop can overflow on long chains.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T: Display> Display for LinkedStack<T> {
    /// Lists the values bottom to top, e.g. `Left Stack: [3, 2, 1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.iter().map(|value| value.to_string()).collect();
        let bottom_up: Vec<&str> = values.iter().rev().map(String::as_str).collect();
        write!(f, "{} Stack: [{}]", self.name, bottom_up.join(", "))
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("limit", &self.limit)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
