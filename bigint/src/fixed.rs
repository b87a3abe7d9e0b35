//! Fixed-width two's complement integers.

use crate::{
    Error, Integer, Result,
    digits::{self, WORD_BITS},
    integer::apply_division_signs,
};
use core::{cmp::Ordering, fmt, str::FromStr};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Signed two's complement integer stored as `N` little-endian bytes.
///
/// All arithmetic wraps modulo `2^BITS` without reporting overflow, like
/// the wrapping operations on primitive integers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedInt<const N: usize> {
    bytes: [u8; N],
}

/// 128-bit signed integer.
pub type I128 = FixedInt<16>;

/// 256-bit signed integer.
pub type I256 = FixedInt<32>;

/// 512-bit signed integer.
pub type I512 = FixedInt<64>;

/// 1024-bit signed integer.
pub type I1024 = FixedInt<128>;

/// 2048-bit signed integer.
pub type I2048 = FixedInt<256>;

impl<const N: usize> FixedInt<N> {
    /// Width in bits.
    pub const BITS: usize = N * WORD_BITS;

    /// Zero.
    pub const ZERO: Self = Self { bytes: [0; N] };

    /// One.
    pub const ONE: Self = {
        let mut bytes = [0; N];
        bytes[0] = 1;
        Self { bytes }
    };

    /// Smallest representable value, `-2^(BITS-1)`.
    pub const MIN: Self = {
        let mut bytes = [0; N];
        bytes[N - 1] = 0x80;
        Self { bytes }
    };

    /// Largest representable value, `2^(BITS-1) - 1`.
    pub const MAX: Self = {
        let mut bytes = [0xff; N];
        bytes[N - 1] = 0x7f;
        Self { bytes }
    };

    /// Parse a big-endian hex string without sign or prefix.
    ///
    /// Digits beyond the width are dropped from the most significant end.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self {
            bytes: digits::from_hex(s)?,
        })
    }

    /// Load raw two's complement bytes in little-endian order, truncating or
    /// zero-extending to the width.
    pub fn from_le_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: digits::from_le_slice(bytes),
        }
    }

    /// Load raw two's complement bytes in big-endian order, truncating or
    /// zero-extending to the width.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: digits::from_be_slice(bytes),
        }
    }

    /// Borrow the raw little-endian bytes.
    pub const fn as_le_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Mutably borrow the raw little-endian bytes.
    pub fn as_le_bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }

    /// Serialize as big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; N] {
        let mut out = self.bytes;
        out.reverse();
        out
    }

    /// `-1` if the top bit is set, `1` otherwise.
    pub const fn sign(&self) -> i32 {
        if self.is_negative() { -1 } else { 1 }
    }

    /// Is the top bit set?
    pub const fn is_negative(&self) -> bool {
        self.bytes[N - 1] & 0x80 != 0
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.bytes)
    }

    /// Absolute value. `MIN.abs()` wraps back to `MIN`.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            *self
        }
    }

    /// Index of the highest set bit of the raw pattern, plus one.
    pub fn bits(&self) -> usize {
        digits::bits(&self.bytes)
    }

    /// Convert to another width, sign-extending or truncating.
    pub fn resize<const M: usize>(&self) -> FixedInt<M> {
        let fill = if self.is_negative() { 0xff } else { 0 };
        let mut bytes = [fill; M];
        let len = M.min(N);
        bytes[..len].copy_from_slice(&self.bytes[..len]);
        FixedInt { bytes }
    }

    /// Truncated division and remainder.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        let (n, d) = (self.abs(), rhs.abs());
        let (q, r) = digits::div_rem(&n.bytes, &d.bytes)?;
        Ok(apply_division_signs(
            Self { bytes: q },
            Self { bytes: r },
            rhs,
            self.is_negative(),
            rhs.is_negative(),
            self.is_zero(),
        ))
    }

    /// Low 32 bits, used when this value is a shift count.
    pub(crate) fn shift_amount(&self) -> u32 {
        let mut le = [0u8; 4];
        for (dst, src) in le.iter_mut().zip(&self.bytes) {
            *dst = *src;
        }
        u32::from_le_bytes(le)
    }

    fn sum(&self, rhs: &Self) -> Self {
        Self {
            bytes: digits::add(&self.bytes, &rhs.bytes),
        }
    }

    fn difference(&self, rhs: &Self) -> Self {
        Self {
            bytes: digits::sub(&self.bytes, &rhs.bytes),
        }
    }

    fn product(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }

        let magnitude = Self {
            bytes: digits::mul(&self.abs().bytes, &rhs.abs().bytes),
        };

        if self.is_negative() != rhs.is_negative() {
            magnitude.negate()
        } else {
            magnitude
        }
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
        Self {
            bytes: digits::bitwise(&self.bytes, &rhs.bytes, |a, b| a & b),
        }
    }

    fn or_bits(&self, rhs: &Self) -> Self {
        Self {
            bytes: digits::bitwise(&self.bytes, &rhs.bytes, |a, b| a | b),
        }
    }

    fn xor_bits(&self, rhs: &Self) -> Self {
        Self {
            bytes: digits::bitwise(&self.bytes, &rhs.bytes, |a, b| a ^ b),
        }
    }

    fn shl_bits(&self, shift: u32) -> Self {
        match usize::try_from(shift) {
            Ok(shift) if shift < Self::BITS => Self {
                bytes: digits::shl(&self.bytes, shift),
            },
            _ => Self::ZERO,
        }
    }

    /// Logical shift: the vacated high bits are zero-filled.
    fn shr_bits(&self, shift: u32) -> Self {
        match usize::try_from(shift) {
            Ok(shift) if shift < Self::BITS => Self {
                bytes: digits::shr(&self.bytes, shift),
            },
            _ => Self::ZERO,
        }
    }

    fn complement(&self) -> Self {
        Self {
            bytes: digits::bitwise(&self.bytes, &[], |a, _| !a),
        }
    }

    fn negate(&self) -> Self {
        self.complement().sum(&Self::ONE)
    }
}

int_ops!(FixedInt<N>, const N);

impl<const N: usize> Default for FixedInt<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Ord for FixedInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => digits::cmp(&self.bytes, &other.bytes),
        }
    }
}

impl<const N: usize> PartialOrd for FixedInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Integer for FixedInt<N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn sign(&self) -> i32 {
        FixedInt::sign(self)
    }

    fn is_zero(&self) -> bool {
        FixedInt::is_zero(self)
    }

    fn bits(&self) -> usize {
        FixedInt::bits(self)
    }

    fn bit(&self, index: usize) -> bool {
        digits::bit(&self.bytes, index)
    }

    fn trailing_zeros(&self) -> usize {
        digits::trailing_zeros(&self.bytes)
    }

    fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        FixedInt::div_rem(self, rhs)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> From<$t> for FixedInt<N> {
                fn from(value: $t) -> Self {
                    let mut bytes = [if value < 0 { 0xff } else { 0 }; N];
                    let le = value.to_le_bytes();
                    let len = N.min(le.len());
                    bytes[..len].copy_from_slice(&le[..len]);
                    Self { bytes }
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> From<$t> for FixedInt<N> {
                fn from(value: $t) -> Self {
                    Self::from_le_slice(&value.to_le_bytes())
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl<const N: usize> FromStr for FixedInt<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix('-') {
            Some(hex) => Ok(Self::from_hex(hex)?.negate()),
            None => Self::from_hex(s),
        }
    }
}

impl<const N: usize> fmt::LowerHex for FixedInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        digits::fmt_hex(&self.abs().bytes, self.is_negative(), false, f)
    }
}

impl<const N: usize> fmt::UpperHex for FixedInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        digits::fmt_hex(&self.abs().bytes, self.is_negative(), true, f)
    }
}

impl<const N: usize> fmt::Display for FixedInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const N: usize> fmt::Debug for FixedInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}({:x})", Self::BITS, self)
    }
}

#[cfg(feature = "zeroize")]
impl<const N: usize> Zeroize for FixedInt<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(I128::BITS, 128);
        assert!(I128::MIN < I128::ZERO);
        assert!(I128::ZERO < I128::MAX);
        assert_eq!(I128::MIN.abs(), I128::MIN);
        assert_eq!(I128::MAX + I128::ONE, I128::MIN);
        assert_eq!(I128::MIN ^ !I128::ZERO, I128::MAX);
    }

    #[test]
    fn sign_extension() {
        let minus_one = I256::from(-1i8);
        assert_eq!(minus_one.as_le_bytes(), &[0xff; 32]);
        assert_eq!(minus_one, -I256::ONE);
        assert_eq!(I256::from(u128::MAX).as_le_bytes()[16..], [0; 16]);
    }

    #[test]
    fn resize_round_trip() {
        let x = I128::from(-12345i64);
        let wide: I512 = x.resize();
        assert_eq!(wide, I512::from(-12345i64));
        assert_eq!(wide.resize::<16>(), x);
    }

    #[test]
    fn shifts_are_logical() {
        let minus_one = I128::from(-1i8);
        assert_eq!(minus_one >> 120u32, I128::from(0xffu8));
        assert_eq!(minus_one << 128u32, I128::ZERO);
        assert_eq!(I128::ONE << I128::from(127u8), I128::MIN);
    }

    #[test]
    fn formatting() {
        let x = I128::from(-0x1234i32);
        assert_eq!(alloc::format!("{}", x), "-1234");
        assert_eq!(alloc::format!("{:X}", I128::from(0xabcdu32)), "ABCD");
        assert_eq!(alloc::format!("{:?}", I128::ZERO), "I128(0)");
        assert_eq!("-1234".parse::<I128>(), Ok(x));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn divide_by_zero_panics() {
        let _ = I128::ONE / I128::ZERO;
    }
}
