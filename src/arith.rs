use crate::error::{Error, Result};
use std::fmt;

/// Sum of two numbers.
pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// Product of two numbers.
pub fn multiply(x: i64, y: i64) -> i64 {
    x * y
}

/// Like [`add`], but reports overflow as [`Error::Overflow`].
pub fn checked_add(x: i64, y: i64) -> Result<i64> {
    x.checked_add(y)
        .ok_or_else(|| Error::overflow(Operation::Add, x, y))
}

/// Like [`multiply`], but reports overflow as [`Error::Overflow`].
pub fn checked_multiply(x: i64, y: i64) -> Result<i64> {
    x.checked_mul(y)
        .ok_or_else(|| Error::overflow(Operation::Multiply, x, y))
}

/// Which of the two functions a [`crate::program::Program`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    pub fn apply(self, x: i64, y: i64) -> i64 {
        match self {
            Self::Add => add(x, y),
            Self::Multiply => multiply(x, y),
        }
    }

    /// Checked counterpart of [`Operation::apply`].
    pub fn checked_apply(self, x: i64, y: i64) -> Result<i64> {
        match self {
            Self::Add => checked_add(x, y),
            Self::Multiply => checked_multiply(x, y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Multiply => write!(f, "multiply"),
        }
    }
}
