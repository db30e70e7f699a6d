use std::fmt;

use crate::types::MAX_ARITY;

/// Error type for checker and circuit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The two functions under comparison have different numbers of inputs.
    ArityMismatch { lhs: u32, rhs: u32 },
    /// The domain `{0,1}^arity` is too large to enumerate.
    ArityTooLarge(u32),
    /// A gate refers to a wire outside of the circuit.
    WireOutOfRange { wire: usize, width: usize },
    /// A gate uses the same wire twice (e.g. as control and target).
    DuplicateWire(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArityMismatch { lhs, rhs } => {
                write!(f, "arity mismatch: {} vs {} inputs", lhs, rhs)
            }
            Error::ArityTooLarge(arity) => {
                write!(f, "arity {} exceeds the maximum of {}", arity, MAX_ARITY)
            }
            Error::WireOutOfRange { wire, width } => {
                write!(f, "wire {} is out of range for a circuit of width {}", wire, width)
            }
            Error::DuplicateWire(wire) => write!(f, "wire {} is used more than once by a gate", wire),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
