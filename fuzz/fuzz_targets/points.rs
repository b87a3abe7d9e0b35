#![no_main]
// Targets: every named curve
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use weierstrass::{
    AffinePoint, BigInt, CurveParams, JacobianPoint, Secp192k1, Secp192r1, Secp224k1, Secp224r1,
    Secp256k1, Secp256r1, Secp384r1, Secp521r1, ecdsa,
};

fn on_curve<C: CurveParams>(point: &AffinePoint<C>) -> bool {
    let domain = C::domain();
    let field = domain.field();
    let x3 = field.mul(&field.square(point.x()), point.x());
    let rhs = field.add(&field.add(&x3, &field.mul(&domain.a, point.x())), &domain.b);
    field.square(point.y()) == rhs
}

fn test_group<C: CurveParams>(data: &[u8], rng: &mut ChaChaRng) {
    let len = C::domain().scalar_len();
    let s = BigInt::from_be_slice(&data[32..32 + len]);
    let t = BigInt::from_be_slice(&data[32 + len..32 + 2 * len]);

    let g = JacobianPoint::<C>::generator();
    let p = g.mul(&s);
    let q = g.mul(&t);

    // Addition and doubling are consistent
    assert_eq!(p.double(), p.add(&p));

    // Scalar multiplication distributes
    assert_eq!(p.add(&q), g.mul(&(&s + &t)));

    // Negation cancels
    assert!(p.add(&g.mul(&-s.clone())).is_identity());

    // Affine and Jacobian arithmetic agree
    let affine = AffinePoint::<C>::generator().mul(&s);
    assert_eq!(affine, p.to_affine());
    assert!(affine.is_identity() || on_curve(&affine));

    // Adding arbitrary coordinates to the identity leaves them untouched
    let point = AffinePoint::<C>::new(s.clone(), t.clone());
    assert_eq!(AffinePoint::<C>::identity().add(&point), point);

    let key_pair = ecdsa::generate_key_pair::<C>(rng);
    let signature = key_pair.sign(rng, data);
    assert!(ecdsa::verify(key_pair.public_key(), &signature, data));
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 + 2 * 66 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    match data[0] % 8 {
        0 => test_group::<Secp192k1>(data, &mut rng),
        1 => test_group::<Secp192r1>(data, &mut rng),
        2 => test_group::<Secp224k1>(data, &mut rng),
        3 => test_group::<Secp224r1>(data, &mut rng),
        4 => test_group::<Secp256k1>(data, &mut rng),
        5 => test_group::<Secp256r1>(data, &mut rng),
        6 => test_group::<Secp384r1>(data, &mut rng),
        _ => test_group::<Secp521r1>(data, &mut rng),
    }
});
