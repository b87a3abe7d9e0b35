//! Little-endian byte digits and the unsigned magnitude algorithms shared by
//! [`FixedInt`](crate::FixedInt) and [`BigInt`](crate::BigInt).
//!
//! Every routine here works on raw `&[u8]` magnitudes and writes its result
//! into a fresh [`Digits`] buffer. The buffer type decides what happens to
//! digits which do not fit: a `[u8; N]` silently drops them (wraparound),
//! while a `Vec<u8>` grows to hold them and is then trimmed back to its
//! fitted form.

use crate::{Error, Result};
use alloc::vec::Vec;
use core::{cmp::Ordering, fmt};

/// Digit type.
pub(crate) type Word = u8;

/// Double-width digit used to hold carries and partial products.
type DoubleWord = u16;

/// Width of a [`Word`] in bits.
pub(crate) const WORD_BITS: usize = Word::BITS as usize;

/// Storage for the little-endian digits of an integer magnitude.
pub trait Digits: Clone + AsRef<[u8]> + AsMut<[u8]> {
    /// Allocate a zero-filled buffer with room for `len` digits.
    ///
    /// Fixed-capacity storage ignores `len`.
    fn zeroed(len: usize) -> Self;

    /// Trim superfluous most-significant zero digits, keeping at least one.
    fn fit(&mut self);
}

impl<const N: usize> Digits for [u8; N] {
    #[inline]
    fn zeroed(_len: usize) -> Self {
        [0; N]
    }

    #[inline]
    fn fit(&mut self) {}
}

impl Digits for Vec<u8> {
    fn zeroed(len: usize) -> Self {
        alloc::vec![0; len.max(1)]
    }

    fn fit(&mut self) {
        let len = self.iter().rposition(|&w| w != 0).map_or(1, |i| i + 1);
        self.truncate(len);
        if self.is_empty() {
            self.push(0);
        }
    }
}

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let ret = (a as DoubleWord) + (b as DoubleWord) + (carry as DoubleWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let ret = (a as DoubleWord).wrapping_sub((b as DoubleWord) + (borrow as DoubleWord));
    (ret as Word, ((ret >> WORD_BITS) & 1) as Word)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let ret = (a as DoubleWord) + ((b as DoubleWord) * (c as DoubleWord)) + (carry as DoubleWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Digit `i` of `a`, reading zero past the end.
#[inline]
fn digit(a: &[u8], i: usize) -> Word {
    a.get(i).copied().unwrap_or(0)
}

pub(crate) fn is_zero(a: &[u8]) -> bool {
    a.iter().all(|&w| w == 0)
}

/// Compare two magnitudes of possibly different lengths.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    for i in (0..a.len().max(b.len())).rev() {
        match digit(a, i).cmp(&digit(b, i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Index of the highest set bit plus one; zero for a zero magnitude.
pub(crate) fn bits(a: &[u8]) -> usize {
    match a.iter().rposition(|&w| w != 0) {
        Some(i) => i * WORD_BITS + (WORD_BITS - a[i].leading_zeros() as usize),
        None => 0,
    }
}

/// Number of trailing zero bits; zero for a zero magnitude.
pub(crate) fn trailing_zeros(a: &[u8]) -> usize {
    a.iter()
        .position(|&w| w != 0)
        .map_or(0, |i| i * WORD_BITS + a[i].trailing_zeros() as usize)
}

pub(crate) fn bit(a: &[u8], index: usize) -> bool {
    (digit(a, index / WORD_BITS) >> (index % WORD_BITS)) & 1 == 1
}

pub(crate) fn add<D: Digits>(a: &[u8], b: &[u8]) -> D {
    let mut out = D::zeroed(a.len().max(b.len()) + 1);
    let mut carry = 0;
    for (i, w) in out.as_mut().iter_mut().enumerate() {
        (*w, carry) = adc(digit(a, i), digit(b, i), carry);
    }
    out.fit();
    out
}

/// `a - b`; wraps in the width of the output when `a < b`.
pub(crate) fn sub<D: Digits>(a: &[u8], b: &[u8]) -> D {
    let mut out = D::zeroed(a.len().max(b.len()));
    let mut borrow = 0;
    for (i, w) in out.as_mut().iter_mut().enumerate() {
        (*w, borrow) = sbb(digit(a, i), digit(b, i), borrow);
    }
    out.fit();
    out
}

/// Schoolbook multiplication, truncated to the width of the output.
pub(crate) fn mul<D: Digits>(a: &[u8], b: &[u8]) -> D {
    let mut out = D::zeroed(a.len() + b.len());
    let w = out.as_mut();
    let width = w.len();

    for (i, &ai) in a.iter().enumerate().take(width) {
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate().take(width - i) {
            (w[i + j], carry) = mac(w[i + j], ai, bj, carry);
        }
        if i + b.len() < width {
            w[i + b.len()] = carry;
        }
    }

    out.fit();
    out
}

pub(crate) fn shl<D: Digits>(a: &[u8], shift: usize) -> D {
    let (offset, bit_shift) = (shift / WORD_BITS, shift % WORD_BITS);
    let mut out = D::zeroed(a.len() + offset + 1);

    for (i, w) in out.as_mut().iter_mut().enumerate().skip(offset) {
        let src = i - offset;
        let lo = digit(a, src) << bit_shift;
        let hi = match bit_shift {
            0 => 0,
            _ if src == 0 => 0,
            _ => digit(a, src - 1) >> (WORD_BITS - bit_shift),
        };
        *w = lo | hi;
    }

    out.fit();
    out
}

pub(crate) fn shr<D: Digits>(a: &[u8], shift: usize) -> D {
    let (offset, bit_shift) = (shift / WORD_BITS, shift % WORD_BITS);
    let mut out = D::zeroed(a.len().saturating_sub(offset));

    for (i, w) in out.as_mut().iter_mut().enumerate() {
        let src = i.saturating_add(offset);
        let lo = digit(a, src) >> bit_shift;
        let hi = match bit_shift {
            0 => 0,
            _ => digit(a, src.saturating_add(1)) << (WORD_BITS - bit_shift),
        };
        *w = lo | hi;
    }

    out.fit();
    out
}

/// Apply `op` digit-wise to `a` and `b`, zero-extending the shorter one.
pub(crate) fn bitwise<D: Digits>(a: &[u8], b: &[u8], op: impl Fn(Word, Word) -> Word) -> D {
    let mut out = D::zeroed(a.len().max(b.len()));
    for (i, w) in out.as_mut().iter_mut().enumerate() {
        *w = op(digit(a, i), digit(b, i));
    }
    out.fit();
    out
}

fn shl1_assign(a: &mut [u8]) {
    let mut carry = 0;
    for w in a.iter_mut() {
        let next = *w >> (WORD_BITS - 1);
        *w = (*w << 1) | carry;
        carry = next;
    }
}

fn sub_assign(a: &mut [u8], b: &[u8]) {
    let mut borrow = 0;
    for (i, w) in a.iter_mut().enumerate() {
        (*w, borrow) = sbb(*w, digit(b, i), borrow);
    }
}

/// Bit-at-a-time long division of magnitudes, returning `(quotient, remainder)`.
///
/// The remainder buffer is one digit wider than the operands so that the
/// intermediate `2r + 1` never overflows.
pub(crate) fn div_rem<D: Digits>(n: &[u8], d: &[u8]) -> Result<(D, D)> {
    if is_zero(d) {
        return Err(Error::DivisionByZero);
    }

    let width = n.len().max(d.len());
    let mut q = D::zeroed(width);
    let mut r = D::zeroed(width + 1);

    for i in (0..bits(n)).rev() {
        shl1_assign(r.as_mut());
        r.as_mut()[0] |= bit(n, i) as Word;

        if cmp(r.as_ref(), d) != Ordering::Less {
            sub_assign(r.as_mut(), d);
            q.as_mut()[i / WORD_BITS] |= 1 << (i % WORD_BITS);
        }
    }

    q.fit();
    r.fit();
    Ok((q, r))
}

const fn hex_value(c: u8) -> Option<Word> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a big-endian hex string. Every character is validated, including
/// those that fall beyond the capacity of the output and are dropped.
pub(crate) fn from_hex<D: Digits>(s: &str) -> Result<D> {
    let mut out = D::zeroed(s.len().div_ceil(2));
    let w = out.as_mut();

    for (k, &c) in s.as_bytes().iter().rev().enumerate() {
        let nibble = hex_value(c).ok_or(Error::InvalidArgument)?;
        if let Some(byte) = w.get_mut(k / 2) {
            *byte |= nibble << (4 * (k % 2));
        }
    }

    out.fit();
    Ok(out)
}

pub(crate) fn from_le_slice<D: Digits>(bytes: &[u8]) -> D {
    let mut out = D::zeroed(bytes.len());
    for (w, &b) in out.as_mut().iter_mut().zip(bytes) {
        *w = b;
    }
    out.fit();
    out
}

pub(crate) fn from_be_slice<D: Digits>(bytes: &[u8]) -> D {
    let mut out = D::zeroed(bytes.len());
    for (w, &b) in out.as_mut().iter_mut().zip(bytes.iter().rev()) {
        *w = b;
    }
    out.fit();
    out
}

/// Write an optional `-` and then the magnitude in hex, most-significant
/// non-zero digit first.
pub(crate) fn fmt_hex(
    magnitude: &[u8],
    negative: bool,
    upper: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if negative {
        f.write_str("-")?;
    }

    let Some(top) = magnitude.iter().rposition(|&w| w != 0) else {
        return f.write_str("0");
    };

    if upper {
        write!(f, "{:X}", magnitude[top])?;
        for w in magnitude[..top].iter().rev() {
            write!(f, "{:02X}", w)?;
        }
    } else {
        write!(f, "{:x}", magnitude[top])?;
        for w in magnitude[..top].iter().rev() {
            write!(f, "{:02x}", w)?;
        }
    }

    Ok(())
}
