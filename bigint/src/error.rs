//! Error types.

use core::fmt;

/// Integer errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A hex string contained a character which is not a hexadecimal digit.
    InvalidArgument,

    /// Division or remainder by zero.
    DivisionByZero,

    /// Operand outside the domain of a number-theoretic function.
    Domain(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("string contains non-hexadecimal characters"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Domain(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
