//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! ## Signing/Verification Example
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # {
//! use weierstrass::{Secp256k1, ecdsa::{self, KeyPair}};
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! let key_pair = KeyPair::<Secp256k1>::generate(&mut OsRng);
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//!
//! let signature = key_pair.sign(&mut OsRng, message);
//! assert!(ecdsa::verify(key_pair.public_key(), &signature, message));
//! # }
//! ```
//!
//! # ⚠️ Warning: Hazmat!
//!
//! [`sign_prehashed`] takes the ephemeral scalar `k` from the caller. Reusing
//! `k` across two messages, or choosing it predictably, reveals the private
//! key. Use [`sign`] unless reproducing known-answer vectors.

use crate::{AffinePoint, CurveParams, Error, JacobianPoint, Result};
use alloc::vec::Vec;
use bigint::BigInt;
use core::{fmt, marker::PhantomData};
use digest::Digest;
use log::{debug, trace};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// Private scalar `d` in `[1, n - 1]` together with its public point `Q = d·G`.
///
/// The private scalar is zeroized on drop.
pub struct KeyPair<C: CurveParams> {
    private_key: BigInt,
    public_key: AffinePoint<C>,
}

impl<C> KeyPair<C>
where
    C: CurveParams,
{
    /// Generate a random key pair.
    ///
    /// Draws as many bytes as `n` is long and maps them into `[1, n - 1]`.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        let domain = C::domain();

        let mut bytes = alloc::vec![0u8; domain.scalar_len()];
        rng.fill_bytes(&mut bytes);
        let mut random = BigInt::from_be_slice(&bytes);
        bytes.zeroize();

        let upper = domain.n() - BigInt::one();
        let private_key = &random % &upper + BigInt::one();
        random.zeroize();

        Self::from_scalar(private_key)
    }

    /// Generate a random key pair with the operating system's RNG.
    #[cfg(feature = "getrandom")]
    pub fn random() -> Self {
        Self::generate(&mut OsRng)
    }

    /// Derive the key pair for an existing private scalar.
    ///
    /// Fails if `private_key` is outside `[1, n - 1]`.
    pub fn from_private_key(private_key: BigInt) -> Result<Self> {
        if !in_scalar_range::<C>(&private_key) {
            return Err(Error);
        }

        Ok(Self::from_scalar(private_key))
    }

    fn from_scalar(private_key: BigInt) -> Self {
        let public_key = JacobianPoint::<C>::generator().mul(&private_key).to_affine();
        Self {
            private_key,
            public_key,
        }
    }

    /// Private scalar `d`.
    pub fn private_key(&self) -> &BigInt {
        &self.private_key
    }

    /// Public point `Q`.
    pub fn public_key(&self) -> &AffinePoint<C> {
        &self.public_key
    }

    /// Sign `message` with this key pair.
    pub fn sign(&self, rng: &mut impl CryptoRngCore, message: &[u8]) -> Signature<C> {
        sign_in_range(rng, &self.private_key, message)
    }
}

impl<C> Clone for KeyPair<C>
where
    C: CurveParams,
{
    fn clone(&self) -> Self {
        Self {
            private_key: self.private_key.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

impl<C> fmt::Debug for KeyPair<C>
where
    C: CurveParams,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl<C> Drop for KeyPair<C>
where
    C: CurveParams,
{
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl<C> ZeroizeOnDrop for KeyPair<C> where C: CurveParams {}

/// ECDSA signature `(r, s)`.
pub struct Signature<C: CurveParams> {
    r: BigInt,
    s: BigInt,
    curve: PhantomData<C>,
}

impl<C> Signature<C>
where
    C: CurveParams,
{
    /// Assemble a signature from its components without range checks;
    /// [`verify`] rejects components outside `[1, n - 1]`.
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self {
            r,
            s,
            curve: PhantomData,
        }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Parse the fixed-width big-endian encoding `r || s`, each component
    /// as long as `n`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = C::domain().scalar_len();
        if bytes.len() != 2 * len {
            return Err(Error);
        }

        let (r, s) = bytes.split_at(len);
        Ok(Self::new(BigInt::from_be_slice(r), BigInt::from_be_slice(s)))
    }

    /// Serialize as fixed-width big-endian `r || s`.
    ///
    /// Fails if either component is negative or wider than `n`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let len = C::domain().scalar_len();
        if self.r.is_negative() || self.s.is_negative() {
            return Err(Error);
        }

        let mut bytes = self.r.to_be_bytes_padded(len).ok_or(Error)?;
        bytes.extend(self.s.to_be_bytes_padded(len).ok_or(Error)?);
        Ok(bytes)
    }
}

impl<C> Clone for Signature<C>
where
    C: CurveParams,
{
    fn clone(&self) -> Self {
        Self::new(self.r.clone(), self.s.clone())
    }
}

impl<C> PartialEq for Signature<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.s == other.s
    }
}

impl<C> Eq for Signature<C> where C: CurveParams {}

impl<C> fmt::Debug for Signature<C>
where
    C: CurveParams,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("curve", &C::NAME)
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

/// Generate a random key pair.
pub fn generate_key_pair<C: CurveParams>(rng: &mut impl CryptoRngCore) -> KeyPair<C> {
    KeyPair::generate(rng)
}

/// Digest `message` with the curve's hash and read the output as a
/// big-endian integer. The digest is not truncated to the bit length of `n`.
pub fn hash_message<C: CurveParams>(message: &[u8]) -> BigInt {
    BigInt::from_be_slice(&C::Digest::digest(message))
}

/// Sign `message` with the private scalar `d`.
///
/// Draws a fresh ephemeral key pair for every attempt and retries until both
/// `r` and `s` are non-zero. Fails if `d` lies outside `[1, n - 1]`.
pub fn sign<C: CurveParams>(
    rng: &mut impl CryptoRngCore,
    private_key: &BigInt,
    message: &[u8],
) -> Result<Signature<C>> {
    if !in_scalar_range::<C>(private_key) {
        return Err(Error);
    }

    Ok(sign_in_range(rng, private_key, message))
}

/// `d` must already be in `[1, n - 1]`; only zero `r` or `s` are retried.
fn sign_in_range<C: CurveParams>(
    rng: &mut impl CryptoRngCore,
    private_key: &BigInt,
    message: &[u8],
) -> Signature<C> {
    let e = hash_message::<C>(message);

    loop {
        let ephemeral = KeyPair::<C>::generate(rng);
        match sign_with_ephemeral(private_key, &ephemeral, &e) {
            Ok(signature) => return signature,
            Err(_) => trace!("{}: degenerate ephemeral scalar, retrying", C::NAME),
        }
    }
}

/// Sign the prehashed message `e` with private scalar `d` and the
/// caller-chosen ephemeral scalar `k`.
///
/// Fails if `d` or `k` lies outside `[1, n - 1]`, or if `k` yields `r = 0`
/// or `s = 0`.
pub fn sign_prehashed<C: CurveParams>(
    private_key: &BigInt,
    ephemeral_scalar: &BigInt,
    e: &BigInt,
) -> Result<Signature<C>> {
    let ephemeral = KeyPair::<C>::from_private_key(ephemeral_scalar.clone())?;
    sign_with_ephemeral(private_key, &ephemeral, e)
}

fn sign_with_ephemeral<C: CurveParams>(
    private_key: &BigInt,
    ephemeral: &KeyPair<C>,
    e: &BigInt,
) -> Result<Signature<C>> {
    if !in_scalar_range::<C>(private_key) {
        return Err(Error);
    }

    let order = C::domain().order();

    let r = order.reduce(ephemeral.public_key().x());
    if r.is_zero() {
        return Err(Error);
    }

    let k_inv = order.inverse(ephemeral.private_key());
    let s = order.mul(&k_inv, &(e + order.mul(&r, private_key)));
    if s.is_zero() {
        return Err(Error);
    }

    Ok(Signature::new(r, s))
}

/// Verify `signature` over `message` against the public point `Q`.
pub fn verify<C: CurveParams>(
    public_key: &AffinePoint<C>,
    signature: &Signature<C>,
    message: &[u8],
) -> bool {
    verify_prehashed(public_key, signature, &hash_message::<C>(message))
}

/// Verify `signature` over the prehashed message `e` against the public
/// point `Q`.
pub fn verify_prehashed<C: CurveParams>(
    public_key: &AffinePoint<C>,
    signature: &Signature<C>,
    e: &BigInt,
) -> bool {
    if !in_scalar_range::<C>(signature.r()) || !in_scalar_range::<C>(signature.s()) {
        debug!("{}: signature component out of range", C::NAME);
        return false;
    }

    let order = C::domain().order();
    let s_inv = order.inverse(signature.s());
    let u1 = order.mul(e, &s_inv);
    let u2 = order.mul(signature.r(), &s_inv);

    let point = JacobianPoint::<C>::generator()
        .mul(&u1)
        .add(&JacobianPoint::from(public_key).mul(&u2))
        .to_affine();

    if point.is_identity() {
        debug!("{}: verification produced the point at infinity", C::NAME);
        return false;
    }

    let valid = order.reduce(point.x()) == *signature.r();
    if !valid {
        debug!("{}: signature mismatch", C::NAME);
    }
    valid
}

fn in_scalar_range<C: CurveParams>(x: &BigInt) -> bool {
    !x.is_negative() && !x.is_zero() && x < C::domain().n()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Secp192r1, Secp256k1};
    use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};

    #[test]
    fn from_private_key_range() {
        let n = Secp256k1::domain().n().clone();
        assert!(KeyPair::<Secp256k1>::from_private_key(BigInt::zero()).is_err());
        assert!(KeyPair::<Secp256k1>::from_private_key(n.clone()).is_err());
        assert!(KeyPair::<Secp256k1>::from_private_key(BigInt::from(-1i64)).is_err());
        assert!(KeyPair::<Secp256k1>::from_private_key(n - BigInt::one()).is_ok());
    }

    #[test]
    fn generated_key_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..8 {
            let key_pair = KeyPair::<Secp192r1>::generate(&mut rng);
            assert!(in_scalar_range::<Secp192r1>(key_pair.private_key()));
            assert!(key_pair.public_key().is_on_curve());
        }
    }

    #[test]
    fn sign_fails_fast_for_order() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let n = Secp192r1::domain().n().clone();
        assert!(sign::<Secp192r1>(&mut rng, &n, b"msg").is_err());
    }

    #[test]
    fn sign_prehashed_rejects_zero_nonce() {
        let d = BigInt::from(5u64);
        let e = BigInt::from(1u64);
        assert!(sign_prehashed::<Secp256k1>(&d, &BigInt::zero(), &e).is_err());
    }

    #[test]
    fn signature_byte_length() {
        let signature = Signature::<Secp256k1>::new(BigInt::one(), BigInt::from(2u64));
        let bytes = signature.to_bytes().unwrap();
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[63], 2);
        assert!(Signature::<Secp256k1>::from_bytes(&bytes[1..]).is_err());
    }
}
