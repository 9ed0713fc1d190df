pub mod arith;
pub mod error;
pub mod program;
