//! Arbitrary-width sign-magnitude integers.

use crate::{
    Error, FixedInt, Integer, Result,
    digits::{self, Digits, WORD_BITS},
    integer::apply_division_signs,
};
use alloc::vec::Vec;
use core::{cmp::Ordering, fmt, str::FromStr};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Signed integer of unbounded width, stored as a sign flag plus a
/// little-endian magnitude.
///
/// The magnitude is always fitted: it carries no superfluous
/// most-significant zero bytes, zero is a single `0x00` byte, and zero is
/// never negative. Results grow as needed and never wrap.
///
/// # Shifts
///
/// `<<` and `>>` take either a `u32` or a `BigInt` whose low 32 bits are the
/// count; higher bits of a `BigInt` count are ignored. A left shift allocates
/// the full result up front, so `x << n` needs about `n / 8` bytes: shifting
/// by a count near `u32::MAX` allocates roughly 512 MiB. Callers shifting by
/// untrusted counts must bound them first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u8>,
}

impl BigInt {
    /// Zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            magnitude: alloc::vec![0],
        }
    }

    /// One.
    pub fn one() -> Self {
        Self {
            negative: false,
            magnitude: alloc::vec![1],
        }
    }

    fn from_parts(negative: bool, mut magnitude: Vec<u8>) -> Self {
        magnitude.fit();
        let negative = negative && !digits::is_zero(&magnitude);
        Self {
            negative,
            magnitude,
        }
    }

    /// Parse a big-endian hex string without sign or prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::from_parts(false, digits::from_hex(s)?))
    }

    /// Load a non-negative magnitude from little-endian bytes.
    pub fn from_le_slice(bytes: &[u8]) -> Self {
        Self::from_parts(false, digits::from_le_slice(bytes))
    }

    /// Load a non-negative magnitude from big-endian bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self::from_parts(false, digits::from_be_slice(bytes))
    }

    /// Borrow the fitted little-endian magnitude.
    pub fn as_le_bytes(&self) -> &[u8] {
        &self.magnitude
    }

    /// Big-endian magnitude without leading zero bytes (zero is `[0]`).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.magnitude.iter().rev().copied().collect()
    }

    /// Big-endian magnitude left-padded with zeros to exactly `len` bytes,
    /// or `None` if it does not fit.
    pub fn to_be_bytes_padded(&self, len: usize) -> Option<Vec<u8>> {
        if self.bits().div_ceil(WORD_BITS) > len {
            return None;
        }

        let mut out = alloc::vec![0u8; len];
        for (dst, src) in out.iter_mut().rev().zip(&self.magnitude) {
            *dst = *src;
        }
        Some(out)
    }

    /// `-1` for negative values, `1` otherwise.
    pub fn sign(&self) -> i32 {
        if self.negative { -1 } else { 1 }
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.magnitude)
    }

    /// Is this value strictly negative?
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Index of the highest set bit of the magnitude, plus one.
    pub fn bits(&self) -> usize {
        digits::bits(&self.magnitude)
    }

    /// Truncated division, with the remainder sign per [`Integer::div_rem`].
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        let (q, r) = digits::div_rem(&self.magnitude, &rhs.magnitude)?;
        Ok(apply_division_signs(
            Self::from_parts(false, q),
            Self::from_parts(false, r),
            rhs,
            self.negative,
            rhs.negative,
            self.is_zero(),
        ))
    }

    /// Wrap into a fixed-width two's complement integer.
    pub fn to_fixed<const N: usize>(&self) -> FixedInt<N> {
        let magnitude = FixedInt::from_le_slice(&self.magnitude);
        if self.negative { -magnitude } else { magnitude }
    }

    /// Low 32 bits of the magnitude, used when this value is a shift count.
    pub(crate) fn shift_amount(&self) -> u32 {
        let mut le = [0u8; 4];
        for (dst, src) in le.iter_mut().zip(&self.magnitude) {
            *dst = *src;
        }
        u32::from_le_bytes(le)
    }

    /// Add a signed magnitude to `self`.
    fn add_signed(&self, negative: bool, magnitude: &[u8]) -> Self {
        if self.negative == negative {
            return Self::from_parts(negative, digits::add(&self.magnitude, magnitude));
        }

        match digits::cmp(&self.magnitude, magnitude) {
            Ordering::Less => Self::from_parts(negative, digits::sub(magnitude, &self.magnitude)),
            _ => Self::from_parts(self.negative, digits::sub(&self.magnitude, magnitude)),
        }
    }

    fn sum(&self, rhs: &Self) -> Self {
        self.add_signed(rhs.negative, &rhs.magnitude)
    }

    fn difference(&self, rhs: &Self) -> Self {
        self.add_signed(!rhs.negative, &rhs.magnitude)
    }

    fn product(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        Self::from_parts(
            self.negative != rhs.negative,
            digits::mul(&self.magnitude, &rhs.magnitude),
        )
    }

    fn quotient(&self, rhs: &Self) -> Self {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(err) => panic!("{}", err),
        }
    }

    fn remainder(&self, rhs: &Self) -> Self {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(err) => panic!("{}", err),
        }
    }

    fn and_bits(&self, rhs: &Self) -> Self {
        Self::from_parts(
            self.negative & rhs.negative,
            digits::bitwise(&self.magnitude, &rhs.magnitude, |a, b| a & b),
        )
    }

    fn or_bits(&self, rhs: &Self) -> Self {
        Self::from_parts(
            self.negative | rhs.negative,
            digits::bitwise(&self.magnitude, &rhs.magnitude, |a, b| a | b),
        )
    }

    fn xor_bits(&self, rhs: &Self) -> Self {
        Self::from_parts(
            self.negative ^ rhs.negative,
            digits::bitwise(&self.magnitude, &rhs.magnitude, |a, b| a ^ b),
        )
    }

    /// Allocates `bits() + shift` bits for the result.
    fn shl_bits(&self, shift: u32) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self::from_parts(self.negative, digits::shl(&self.magnitude, shift as usize))
    }

    fn shr_bits(&self, shift: u32) -> Self {
        if shift as usize >= self.bits() {
            return Self::zero();
        }
        Self::from_parts(self.negative, digits::shr(&self.magnitude, shift as usize))
    }

    /// Invert every byte of the magnitude, keeping the sign.
    fn complement(&self) -> Self {
        Self::from_parts(
            self.negative,
            digits::bitwise(&self.magnitude, &[], |a, _| !a),
        )
    }

    fn negate(&self) -> Self {
        Self::from_parts(!self.negative, self.magnitude.clone())
    }
}

int_ops!(BigInt);

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => digits::cmp(&self.magnitude, &other.magnitude),
            (true, true) => digits::cmp(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Integer for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn one() -> Self {
        BigInt::one()
    }

    fn sign(&self) -> i32 {
        BigInt::sign(self)
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }

    fn bits(&self) -> usize {
        BigInt::bits(self)
    }

    fn bit(&self, index: usize) -> bool {
        digits::bit(&self.magnitude, index)
    }

    fn trailing_zeros(&self) -> usize {
        digits::trailing_zeros(&self.magnitude)
    }

    fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        BigInt::div_rem(self, rhs)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from_parts(value < 0, digits::from_le_slice(&value.unsigned_abs().to_le_bytes()))
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from_le_slice(&value.to_le_bytes())
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl<const N: usize> From<FixedInt<N>> for BigInt {
    fn from(value: FixedInt<N>) -> Self {
        Self::from_parts(
            value.is_negative(),
            digits::from_le_slice(value.abs().as_le_bytes()),
        )
    }
}

impl<const N: usize> From<&FixedInt<N>> for BigInt {
    fn from(value: &FixedInt<N>) -> Self {
        Self::from(*value)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix('-') {
            Some(hex) => Ok(Self::from_hex(hex)?.negate()),
            None => Self::from_hex(s),
        }
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        digits::fmt_hex(&self.magnitude, self.negative, false, f)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        digits::fmt_hex(&self.magnitude, self.negative, true, f)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({:x})", self)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.magnitude.push(0);
        self.negative = false;
    }
}
