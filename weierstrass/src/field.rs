//! Modular arithmetic with Barrett reduction.

use bigint::BigInt;

/// Positive modulus `m` with precomputed Barrett constants.
///
/// Every operation returns a value in `[0, m)`, whatever the sign or size of
/// its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus {
    value: BigInt,

    /// Bit length of `value`.
    k: u32,

    /// `floor(2^(2k) / value)`
    r: BigInt,

    /// `value²`; inputs at least this large fall back to long division.
    square: BigInt,
}

impl Modulus {
    /// Precompute the reduction constants for `value`.
    ///
    /// # Panics
    ///
    /// If `value` is not greater than one.
    pub fn new(value: BigInt) -> Self {
        assert!(value > BigInt::one(), "modulus must be greater than one");

        let k = value.bits() as u32;
        let r = (BigInt::one() << (2 * k)) / &value;
        let square = &value * &value;

        Self {
            value,
            k,
            r,
            square,
        }
    }

    /// The modulus itself.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.k as usize
    }

    /// Reduce `x` into `[0, m)`.
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        if x.is_negative() {
            let t = self.reduce_magnitude(&x.abs());
            return if t.is_zero() { t } else { &self.value - t };
        }

        self.reduce_magnitude(x)
    }

    fn reduce_magnitude(&self, x: &BigInt) -> BigInt {
        if *x < self.value {
            return x.clone();
        }

        if *x >= self.square {
            return x % &self.value;
        }

        let q = (x * &self.r) >> (2 * self.k);
        let mut t = x - q * &self.value;
        while t >= self.value {
            t -= &self.value;
        }
        t
    }

    /// `a + b mod m`
    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a + b))
    }

    /// `a - b mod m`
    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a - b))
    }

    /// `a * b mod m`
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a * b))
    }

    /// `a² mod m`
    pub fn square(&self, a: &BigInt) -> BigInt {
        self.mul(a, a)
    }

    /// Multiplicative inverse of `a` by the extended Euclidean algorithm.
    ///
    /// Returns zero when `a` has no inverse, including when `a ≡ 0`.
    pub fn inverse(&self, a: &BigInt) -> BigInt {
        let mut r0 = self.value.clone();
        let mut r1 = self.reduce(a);
        let mut t0 = BigInt::zero();
        let mut t1 = BigInt::one();

        while !r1.is_zero() {
            let q = &r0 / &r1;

            let r2 = &r0 - &q * &r1;
            r0 = core::mem::replace(&mut r1, r2);

            let t2 = &t0 - &q * &t1;
            t0 = core::mem::replace(&mut t1, t2);
        }

        if r0 != BigInt::one() {
            return BigInt::zero();
        }

        self.reduce(&t0)
    }
}
