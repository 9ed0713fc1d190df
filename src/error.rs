use thiserror::Error;

use crate::arith::Operation;

#[derive(Debug, Error)]
pub enum Error {
    /// Raised only by the `checked_*` functions in [`crate::arith`].
    #[error("Integer overflow: {op}({x}, {y})")]
    Overflow { op: Operation, x: i64, y: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn overflow(op: Operation, x: i64, y: i64) -> Self {
        Self::Overflow { op, x, y }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
