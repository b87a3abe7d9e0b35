//! Montgomery ladder scalar multiplication.

use bigint::{BigInt, Integer};

/// Group operations the ladder needs from a point representation.
pub(crate) trait LadderPoint: Clone {
    fn identity() -> Self;
    fn add(&self, other: &Self) -> Self;
    fn double(&self) -> Self;
}

/// Swap `a` and `b` when `choice` is set.
#[inline]
fn conditional_swap<P>(a: &mut P, b: &mut P, choice: bool) {
    if choice {
        core::mem::swap(a, b);
    }
}

/// Compute `scalar * point` for a non-negative `scalar`.
///
/// Every bit performs one addition and one doubling, in the same order,
/// regardless of its value.
pub(crate) fn mul<P: LadderPoint>(point: &P, scalar: &BigInt) -> P {
    let mut r0 = P::identity();
    let mut r1 = point.clone();

    for i in (0..scalar.bits()).rev() {
        let bit = scalar.bit(i);
        conditional_swap(&mut r0, &mut r1, bit);
        r1 = r0.add(&r1);
        r0 = r0.double();
        conditional_swap(&mut r0, &mut r1, bit);
    }

    r0
}
