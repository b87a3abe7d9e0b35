//! Affine curve points.

use crate::{CurveParams, JacobianPoint, ladder};
use bigint::BigInt;
use core::{fmt, marker::PhantomData};

#[cfg(test)]
use crate::Domain;

/// Point on the curve in affine coordinates `(x, y)`.
///
/// The point at infinity is encoded as `(0, 0)`, which never lies on a curve
/// with `b ≠ 0`.
pub struct AffinePoint<C: CurveParams> {
    x: BigInt,
    y: BigInt,
    curve: PhantomData<C>,
}

impl<C> AffinePoint<C>
where
    C: CurveParams,
{
    /// Point at infinity.
    pub fn identity() -> Self {
        Self::from_coordinates(BigInt::zero(), BigInt::zero())
    }

    /// Base point.
    pub fn generator() -> Self {
        let domain = C::domain();
        Self::from_coordinates(domain.gx.clone(), domain.gy.clone())
    }

    /// Build a point from coordinates. No check is made that the point lies
    /// on the curve.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self::from_coordinates(x, y)
    }

    pub(crate) fn from_coordinates(x: BigInt, y: BigInt) -> Self {
        Self {
            x,
            y,
            curve: PhantomData,
        }
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Does this point satisfy `y² = x³ + ax + b` with both coordinates in
    /// `[0, p)`?
    #[cfg(test)]
    pub(crate) fn is_on_curve(&self) -> bool {
        let Domain { a, b, .. } = C::domain();
        let field = C::domain().field();

        let in_range = |v: &BigInt| !v.is_negative() && v < field.value();
        if !in_range(&self.x) || !in_range(&self.y) {
            return false;
        }

        let rhs = field.add(&field.mul(&field.add(&field.square(&self.x), a), &self.x), b);
        field.square(&self.y) == rhs
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

        if self.x == other.x {
            return if self.y == other.y {
                self.double()
            } else {
                Self::identity()
            };
        }

        let numerator = field.sub(&other.y, &self.y);
        let denominator = field.sub(&other.x, &self.x);
        let lambda = field.mul(&numerator, &field.inverse(&denominator));

        let x = field.sub(&field.sub(&field.square(&lambda), &self.x), &other.x);
        let y = field.sub(&field.mul(&lambda, &field.sub(&self.x, &x)), &self.y);
        Self::from_coordinates(x, y)
    }

    /// Point doubling.
    pub fn double(&self) -> Self {
        if self.y.is_zero() {
            return Self::identity();
        }

        let domain = C::domain();
        let field = domain.field();

        let x2 = field.square(&self.x);
        let numerator = field.add(&(x2 * BigInt::from(3u64)), &domain.a);
        let denominator = field.reduce(&(&self.y << 1u32));
        let lambda = field.mul(&numerator, &field.inverse(&denominator));

        let x = field.sub(&field.square(&lambda), &(&self.x << 1u32));
        let y = field.sub(&field.mul(&lambda, &field.sub(&self.x, &x)), &self.y);
        Self::from_coordinates(x, y)
    }

    /// Scalar multiplication by a Montgomery ladder over affine points.
    ///
    /// The scalar is first reduced modulo the group order, so negative
    /// scalars multiply by their additive inverse.
    pub fn mul(&self, scalar: &BigInt) -> Self {
        let scalar = C::domain().order().reduce(scalar);
        ladder::mul(self, &scalar)
    }

    /// Convert to Jacobian coordinates.
    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        JacobianPoint::from(self)
    }
}

impl<C> ladder::LadderPoint for AffinePoint<C>
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

impl<C> Clone for AffinePoint<C>
where
    C: CurveParams,
{
    fn clone(&self) -> Self {
        Self::from_coordinates(self.x.clone(), self.y.clone())
    }
}

impl<C> Default for AffinePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<C> PartialEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<C> Eq for AffinePoint<C> where C: CurveParams {}

impl<C> fmt::Debug for AffinePoint<C>
where
    C: CurveParams,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffinePoint")
            .field("curve", &C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<C> From<&JacobianPoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(point: &JacobianPoint<C>) -> Self {
        point.to_affine()
    }
}

impl<C> From<JacobianPoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(point: JacobianPoint<C>) -> Self {
        point.to_affine()
    }
}
