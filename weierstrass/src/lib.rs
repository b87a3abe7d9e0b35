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

pub mod curves;
pub mod ecdsa;

mod affine;
mod error;
mod field;
mod jacobian;
mod ladder;

pub use crate::{
    affine::AffinePoint,
    curves::{
        Secp192k1, Secp192r1, Secp224k1, Secp224r1, Secp256k1, Secp256r1, Secp384r1, Secp521r1,
    },
    ecdsa::{KeyPair, Signature},
    error::{Error, Result},
    field::Modulus,
    jacobian::JacobianPoint,
};
pub use bigint::{self, BigInt};
pub use digest;
pub use rand_core;

use core::fmt::Debug;
use digest::Digest;

/// Named short Weierstrass curve `y² = x³ + ax + b` over a prime field.
///
/// The parameters are big-endian byte strings; [`CurveParams::domain`] parses
/// them once and caches the result for the life of the process.
pub trait CurveParams:
    Copy + Clone + Debug + Default + Eq + Ord + Send + Sync + 'static
{
    /// Standard name of the curve, e.g. `"secp256k1"`.
    const NAME: &'static str;

    /// Field modulus `p`.
    const P: &'static [u8];

    /// Curve coefficient `a`.
    const A: &'static [u8];

    /// Curve coefficient `b`.
    const B: &'static [u8];

    /// Order `n` of the base point.
    const N: &'static [u8];

    /// Cofactor `h`.
    const H: &'static [u8];

    /// Base point x-coordinate.
    const GX: &'static [u8];

    /// Base point y-coordinate.
    const GY: &'static [u8];

    /// Hash function used to digest messages for ECDSA.
    type Digest: Digest;

    /// Parsed domain parameters.
    fn domain() -> &'static Domain;
}

/// Domain parameters of a curve, parsed into integers, along with the
/// Barrett constants for reducing modulo `p` and `n`.
#[derive(Clone, Debug)]
pub struct Domain {
    /// Curve coefficient `a`.
    pub a: BigInt,

    /// Curve coefficient `b`.
    pub b: BigInt,

    /// Cofactor `h`.
    pub h: BigInt,

    /// Base point x-coordinate.
    pub gx: BigInt,

    /// Base point y-coordinate.
    pub gy: BigInt,

    field: Modulus,
    order: Modulus,
}

impl Domain {
    /// Parse the parameters of `C`.
    pub fn new<C: CurveParams>() -> Self {
        Self {
            a: BigInt::from_be_slice(C::A),
            b: BigInt::from_be_slice(C::B),
            h: BigInt::from_be_slice(C::H),
            gx: BigInt::from_be_slice(C::GX),
            gy: BigInt::from_be_slice(C::GY),
            field: Modulus::new(BigInt::from_be_slice(C::P)),
            order: Modulus::new(BigInt::from_be_slice(C::N)),
        }
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigInt {
        self.field.value()
    }

    /// Base point order `n`.
    pub fn n(&self) -> &BigInt {
        self.order.value()
    }

    /// Arithmetic modulo `p`.
    pub fn field(&self) -> &Modulus {
        &self.field
    }

    /// Arithmetic modulo `n`.
    pub fn order(&self) -> &Modulus {
        &self.order
    }

    /// Length in bytes of a serialized scalar, i.e. of `n`.
    pub fn scalar_len(&self) -> usize {
        self.order.bits().div_ceil(8)
    }
}
