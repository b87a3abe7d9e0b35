//! Operations shared by every integer representation.

use crate::{Error, Result};
use core::{
    fmt::{Debug, Display},
    ops::{Add, Mul, Neg, Shl, Shr, Sub},
};

/// Signed integer arithmetic common to [`FixedInt`](crate::FixedInt) and
/// [`BigInt`](crate::BigInt).
///
/// Implementors supply the representation-specific primitives; the
/// number-theoretic routines are provided on top of them.
pub trait Integer:
    Sized
    + Clone
    + Ord
    + Debug
    + Display
    + From<u64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// `-1` for negative values, `1` otherwise (including zero).
    fn sign(&self) -> i32;

    /// Is this value zero?
    fn is_zero(&self) -> bool;

    /// Position of the highest set bit plus one.
    fn bits(&self) -> usize;

    /// Test bit `index` of the stored digits.
    fn bit(&self, index: usize) -> bool;

    /// Number of trailing zero bits of the stored digits.
    fn trailing_zeros(&self) -> usize;

    /// Division returning `(quotient, remainder)`.
    ///
    /// With `q` and `r` the quotient and remainder of `|x| / |y|`:
    ///
    /// | `x` | `y` | result         |
    /// |-----|-----|----------------|
    /// | `-` | `-` | `(q, -r)`      |
    /// | `-` | `+` | `(-q, y - r)`  |
    /// | `+` | `-` | `(-q, y + r)`  |
    /// | `+` | `+` | `(q, r)`       |
    ///
    /// The table holds for a zero `r` as well, so `-4 % 2 == 2` and
    /// `4 % -2 == -2`. A zero dividend gives `(0, 0)`. Fails with
    /// [`Error::DivisionByZero`] if `rhs` is zero.
    fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)>;

    /// Is this value strictly negative?
    fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    /// Is this value odd?
    fn is_odd(&self) -> bool {
        self.bit(0)
    }

    /// Absolute value.
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Integer square root, rounded down.
    fn sqrt(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(Error::Domain("cannot take square root of a negative number"));
        }

        if *self < Self::from(2u64) {
            return Ok(self.clone());
        }

        let small = (self.clone() >> 2).sqrt()? << 1;
        let large = small.clone() + Self::one();

        // `large * large > self` without forming the square
        let (quotient, _) = self.div_rem(&large)?;
        Ok(if large > quotient { small } else { large })
    }

    /// Raise to a non-negative power by square-and-multiply.
    fn pow(&self, exponent: &Self) -> Result<Self> {
        if exponent.is_negative() {
            return Err(Error::Domain("cannot raise to a negative power"));
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();

        while !exponent.is_zero() {
            if exponent.is_odd() {
                result = result * base.clone();
            }
            exponent = exponent >> 1;
            if !exponent.is_zero() {
                base = base.clone() * base;
            }
        }

        Ok(result)
    }

    /// Greatest common divisor of the absolute values.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();

        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        let shift = a.trailing_zeros().min(b.trailing_zeros());
        let tz = a.trailing_zeros() as u32;
        a = a >> tz;

        loop {
            let tz = b.trailing_zeros() as u32;
            b = b >> tz;
            if a > b {
                core::mem::swap(&mut a, &mut b);
            }
            b = b - a.clone();
            if b.is_zero() {
                break;
            }
        }

        a << shift as u32
    }

    /// Least common multiple; zero if either operand is zero.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let product = (self.clone() * other.clone()).abs();
        match product.div_rem(&self.gcd(other)) {
            Ok((quotient, _)) => quotient,
            Err(_) => Self::zero(),
        }
    }

    /// Integer logarithm: how many times `base` divides into `self` before
    /// the quotient drops below `base`.
    fn log(&self, base: &Self) -> Result<Self> {
        if *base <= Self::one() {
            return Err(Error::Domain("logarithm base must be greater than one"));
        }
        if *self <= Self::zero() {
            return Err(Error::Domain("cannot take logarithm of a non-positive number"));
        }

        let mut count = Self::zero();
        let mut x = self.clone();
        while x >= *base {
            x = x.div_rem(base)?.0;
            count = count + Self::one();
        }

        Ok(count)
    }

    /// Integer base-2 logarithm.
    fn log2(&self) -> Result<Self> {
        if *self <= Self::zero() {
            return Err(Error::Domain("cannot take logarithm of a non-positive number"));
        }

        Ok(Self::from((self.bits() - 1) as u64))
    }
}

/// Fix up the signs of an unsigned `(quotient, remainder)` pair computed
/// from the absolute values of the operands, per [`Integer::div_rem`].
///
/// The table applies to a zero remainder too; only a zero dividend yields
/// `(0, 0)` unconditionally.
pub(crate) fn apply_division_signs<T: Integer>(
    quotient: T,
    remainder: T,
    divisor: &T,
    dividend_negative: bool,
    divisor_negative: bool,
    dividend_zero: bool,
) -> (T, T) {
    if dividend_zero {
        return (T::zero(), T::zero());
    }

    match (dividend_negative, divisor_negative) {
        (true, true) => (quotient, -remainder),
        (true, false) => (-quotient, divisor.clone() - remainder),
        (false, true) => (-quotient, divisor.clone() + remainder),
        (false, false) => (quotient, remainder),
    }
}
