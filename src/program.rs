use crate::arith::Operation;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// A single operation applied to two fixed operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub op: Operation,
    pub x: i64,
    pub y: i64,
}

impl Default for Program {
    fn default() -> Self {
        // add(3, 5) stays off the active path
        Self {
            op: Operation::Multiply,
            x: 5,
            y: 9,
        }
    }
}

impl Program {
    /// Apply the operation to both operands.
    pub fn evaluate(&self) -> i64 {
        let result = self.op.apply(self.x, self.y);
        debug!(op = %self.op, x = self.x, y = self.y, result, "evaluated");
        result
    }

    /// Write the result as a decimal line.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.evaluate())?;
        out.flush()?;
        Ok(())
    }
}

/// Evaluate the default program and print it to stdout.
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Program::default().write_to(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_is_multiply_five_nine() {
        let program = Program::default();
        assert_eq!(program.op, Operation::Multiply);
        assert_eq!((program.x, program.y), (5, 9));
        assert_eq!(program.evaluate(), 45);
    }

    #[test]
    fn write_to_emits_single_line() {
        let mut buf = Vec::new();
        Program::default().write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "45\n");
    }

    #[test]
    fn write_to_handles_other_programs() {
        let program = Program {
            op: Operation::Add,
            x: 3,
            y: 5,
        };
        let mut buf = Vec::new();
        program.write_to(&mut buf).unwrap();
        assert_eq!(buf, b"8\n");
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let err = Program::default().write_to(&mut BrokenPipe).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
