//! Error type

use core::fmt::{self, Display};

/// Curve point and ECDSA errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error;

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("crypto error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<bigint::Error> for Error {
    fn from(_: bigint::Error) -> Error {
        Error
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
