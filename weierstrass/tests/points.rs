//! Curve point arithmetic tests.

use hex_literal::hex;
use proptest::prelude::*;
use weierstrass::{
    AffinePoint, BigInt, CurveParams, JacobianPoint, Secp192k1, Secp192r1, Secp224k1, Secp224r1,
    Secp256k1, Secp256r1, Secp384r1, Secp521r1,
};

fn point<C: CurveParams>(x: &[u8], y: &[u8]) -> AffinePoint<C> {
    AffinePoint::new(BigInt::from_be_slice(x), BigInt::from_be_slice(y))
}

/// Check `y² = x³ + ax + b` over the curve's field.
fn on_curve<C: CurveParams>(point: &AffinePoint<C>) -> bool {
    let domain = C::domain();
    let field = domain.field();
    let x3 = field.mul(&field.square(point.x()), point.x());
    let rhs = field.add(&field.add(&x3, &field.mul(&domain.a, point.x())), &domain.b);
    point.x() < domain.p() && point.y() < domain.p() && field.square(point.y()) == rhs
}

#[test]
fn secp256k1_small_multiples() {
    let g = AffinePoint::<Secp256k1>::generator();
    let two_g = point::<Secp256k1>(
        &hex!("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
        &hex!("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
    );
    let three_g = point::<Secp256k1>(
        &hex!("F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"),
        &hex!("388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672"),
    );

    assert_eq!(g.double(), two_g);
    assert_eq!(g.add(&two_g), three_g);
    assert_eq!(g.mul(&BigInt::from(3u64)), three_g);

    let jg = JacobianPoint::<Secp256k1>::generator();
    assert_eq!(jg.double().to_affine(), two_g);
    assert_eq!(jg.mul(&BigInt::from(3u64)).to_affine(), three_g);
}

#[test]
fn p256_double_generator() {
    let two_g = point::<Secp256r1>(
        &hex!("7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978"),
        &hex!("07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1"),
    );

    assert_eq!(AffinePoint::<Secp256r1>::generator().double(), two_g);
    assert_eq!(
        JacobianPoint::<Secp256r1>::generator()
            .mul(&BigInt::from(2u64))
            .to_affine(),
        two_g
    );
}

fn check_generator<C: CurveParams>() {
    let g = AffinePoint::<C>::generator();
    assert!(on_curve(&g), "{}", C::NAME);

    let n_minus_one = C::domain().n() - BigInt::one();
    let negated = JacobianPoint::<C>::generator().mul(&n_minus_one);
    assert!(negated.add(&JacobianPoint::generator()).is_identity(), "{}", C::NAME);

    let negated = negated.to_affine();
    assert_eq!(negated.x(), g.x(), "{}", C::NAME);
    assert_eq!(negated.y(), &(C::domain().p() - g.y()), "{}", C::NAME);
}

#[test]
fn generators_have_stated_order() {
    check_generator::<Secp192k1>();
    check_generator::<Secp192r1>();
    check_generator::<Secp224k1>();
    check_generator::<Secp224r1>();
    check_generator::<Secp256k1>();
    check_generator::<Secp256r1>();
    check_generator::<Secp384r1>();
    check_generator::<Secp521r1>();
}

#[test]
fn identity_behaviour() {
    let o = JacobianPoint::<Secp224k1>::identity();
    let g = JacobianPoint::<Secp224k1>::generator();

    assert!(o.double().is_identity());
    assert_eq!(o.add(&g), g);
    assert_eq!(g.add(&o), g);
    assert!(g.mul(&BigInt::zero()).is_identity());
    assert!(AffinePoint::<Secp224k1>::identity().to_jacobian().is_identity());
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigInt {
        BigInt::from_be_slice(&bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn affine_and_jacobian_agree(k in scalar()) {
        let affine = AffinePoint::<Secp256r1>::generator().mul(&k);
        let jacobian = JacobianPoint::<Secp256r1>::generator().mul(&k).to_affine();
        prop_assert_eq!(affine, jacobian);
    }

    #[test]
    fn scalar_mul_distributes(a in scalar(), b in scalar()) {
        let g = JacobianPoint::<Secp256k1>::generator();
        let lhs = g.mul(&a).add(&g.mul(&b));
        let rhs = g.mul(&(&a + &b));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn results_stay_on_curve(k in scalar()) {
        let p = JacobianPoint::<Secp384r1>::generator().mul(&k).to_affine();
        prop_assert!(p.is_identity() || on_curve(&p));
    }
}
