//! Jacobian projective curve points.

use crate::{AffinePoint, CurveParams, ladder};
use bigint::BigInt;
use core::{fmt, marker::PhantomData};

/// Point in Jacobian coordinates `(X, Y, Z)`, representing the affine point
/// `(X / Z², Y / Z³)`.
///
/// Any point with `Z = 0` is the point at infinity; [`JacobianPoint::identity`]
/// returns the canonical `(1, 1, 0)`. Addition and doubling need no field
/// inversions; only [`JacobianPoint::to_affine`] performs one.
pub struct JacobianPoint<C: CurveParams> {
    x: BigInt,
    y: BigInt,
    z: BigInt,
    curve: PhantomData<C>,
}

impl<C> JacobianPoint<C>
where
    C: CurveParams,
{
    /// Point at infinity.
    pub fn identity() -> Self {
        Self::from_coordinates(BigInt::one(), BigInt::one(), BigInt::zero())
    }

    /// Base point.
    pub fn generator() -> Self {
        Self::from(&AffinePoint::generator())
    }

    fn from_coordinates(x: BigInt, y: BigInt, z: BigInt) -> Self {
        Self {
            x,
            y,
            z,
            curve: PhantomData,
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates with a single field inversion.
    pub fn to_affine(&self) -> AffinePoint<C> {
        if self.is_identity() {
            return AffinePoint::identity();
        }

        let field = C::domain().field();
        let z_inv = field.inverse(&self.z);
        let z_inv2 = field.square(&z_inv);
        let z_inv3 = field.mul(&z_inv2, &z_inv);

        AffinePoint::from_coordinates(field.mul(&self.x, &z_inv2), field.mul(&self.y, &z_inv3))
    }

    /// Group addition.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let field = C::domain().field();

        let z1z1 = field.square(&self.z);
        let z2z2 = field.square(&other.z);
        let u1 = field.mul(&self.x, &z2z2);
        let u2 = field.mul(&other.x, &z1z1);
        let s1 = field.mul(&field.mul(&self.y, &z2z2), &other.z);
        let s2 = field.mul(&field.mul(&other.y, &z1z1), &self.z);

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::identity()
            };
        }

        let h = field.sub(&u2, &u1);
        let r = field.sub(&s2, &s1);
        let h2 = field.square(&h);
        let h3 = field.mul(&h2, &h);
        let u1h2 = field.mul(&u1, &h2);

        let x3 = field.sub(&field.sub(&field.square(&r), &h3), &(&u1h2 << 1u32));
        let y3 = field.sub(
            &field.mul(&r, &field.sub(&u1h2, &x3)),
            &field.mul(&s1, &h3),
        );
        let z3 = field.mul(&field.mul(&h, &self.z), &other.z);

        Self::from_coordinates(x3, y3, z3)
    }

    /// Point doubling.
    pub fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }

        let domain = C::domain();
        let field = domain.field();

        let y2 = field.square(&self.y);
        let s = field.reduce(&(field.mul(&self.x, &y2) << 2u32));
        let z2 = field.square(&self.z);
        let z4 = field.square(&z2);
        let m = field.add(
            &(field.square(&self.x) * BigInt::from(3u64)),
            &field.mul(&domain.a, &z4),
        );

        let x3 = field.sub(&field.square(&m), &(&s << 1u32));
        let y4 = field.square(&y2);
        let y3 = field.sub(&field.mul(&m, &field.sub(&s, &x3)), &(y4 << 3u32));
        let z3 = field.reduce(&(field.mul(&self.y, &self.z) << 1u32));

        Self::from_coordinates(x3, y3, z3)
    }

    /// Scalar multiplication by a Montgomery ladder.
    ///
    /// The scalar is first reduced modulo the group order, so negative
    /// scalars multiply by their additive inverse.
    pub fn mul(&self, scalar: &BigInt) -> Self {
        let scalar = C::domain().order().reduce(scalar);
        ladder::mul(self, &scalar)
    }
}

impl<C> ladder::LadderPoint for JacobianPoint<C>
where
    C: CurveParams,
{
    fn identity() -> Self {
        Self::identity()
    }

    fn add(&self, other: &Self) -> Self {
        Self::add(self, other)
    }

    fn double(&self) -> Self {
        Self::double(self)
    }
}

impl<C> Clone for JacobianPoint<C>
where
    C: CurveParams,
{
    fn clone(&self) -> Self {
        Self::from_coordinates(self.x.clone(), self.y.clone(), self.z.clone())
    }
}

impl<C> Default for JacobianPoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<C> PartialEq for JacobianPoint<C>
where
    C: CurveParams,
{
    /// Compares the represented points, not the coordinates.
    fn eq(&self, other: &Self) -> bool {
        self.to_affine() == other.to_affine()
    }
}

impl<C> Eq for JacobianPoint<C> where C: CurveParams {}

impl<C> fmt::Debug for JacobianPoint<C>
where
    C: CurveParams,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JacobianPoint")
            .field("curve", &C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<C> From<&AffinePoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    fn from(point: &AffinePoint<C>) -> Self {
        if point.is_identity() {
            return Self::identity();
        }

        Self::from_coordinates(point.x().clone(), point.y().clone(), BigInt::one())
    }
}

impl<C> From<AffinePoint<C>> for JacobianPoint<C>
where
    C: CurveParams,
{
    fn from(point: AffinePoint<C>) -> Self {
        Self::from(&point)
    }
}
