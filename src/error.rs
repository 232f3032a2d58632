use std::fmt;
use std::io;

/// Errors raised at the input and session boundary.
/// The ALU engine and the step sequencer themselves never fail.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    UnknownOperation(String),
    InvalidOperand { input: String, reason: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::UnknownOperation(op) => write!(f, "Unknown operation: '{}'", op),
            Error::InvalidOperand { input, reason } => {
                write!(f, "Invalid operand '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
