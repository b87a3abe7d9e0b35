#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod arbitrary;
mod digits;
mod error;
mod fixed;
mod integer;

pub use crate::{
    arbitrary::BigInt,
    digits::Digits,
    error::{Error, Result},
    fixed::{FixedInt, I128, I256, I512, I1024, I2048},
    integer::Integer,
};
