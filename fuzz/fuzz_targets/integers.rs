#![no_main]
use bigint::{BigInt, I256, Integer};
use libfuzzer_sys::fuzz_target;

fn test_ring<T: Integer + Copy>(a: T, b: T, c: T) {
    // Associativity
    assert_eq!(a + (b + c), (a + b) + c);
    assert_eq!(a * (b * c), (a * b) * c);

    // Commutativity
    assert_eq!(a + b, b + a);
    assert_eq!(a * b, b * a);

    // Identity
    assert_eq!(a + T::zero(), a);
    assert_eq!(a * T::one(), a);
    assert_eq!(a - a, T::zero());
    assert_eq!(a + (-a), T::zero());

    // Distributivity
    assert_eq!(a * (b + c), a * b + a * c);
}

fn test_division<T: Integer>(a: &T, b: &T) {
    if b.is_zero() {
        assert!(a.div_rem(b).is_err());
        return;
    }

    let (q, r) = a.div_rem(b).unwrap();
    if r.is_zero() {
        assert_eq!(q * b.clone(), a.clone());
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let a = I256::from_le_slice(&data[0..32]);
    let b = I256::from_le_slice(&data[32..64]);
    let c = I256::from_le_slice(&data[64..96]);
    test_ring(a, b, c);
    test_division(&a, &b);

    // The arbitrary-width result wraps to the fixed-width one
    let (ba, bb) = (BigInt::from(a), BigInt::from(b));
    assert_eq!((&ba + &bb).to_fixed::<32>(), a + b);
    assert_eq!((&ba * &bb).to_fixed::<32>(), a * b);
    assert_eq!((&ba - &bb).to_fixed::<32>(), a - b);
    test_division(&ba, &bb);
    if !bb.is_zero() {
        let (_, r) = ba.div_rem(&bb).unwrap();
        assert!(r.abs() <= bb.abs());
    }

    if let Ok(root) = ba.abs().sqrt() {
        assert!(&root * &root <= ba.abs());
        let next = &root + BigInt::one();
        assert!(&next * &next > ba.abs());
    }

    let g = ba.gcd(&bb);
    if !g.is_zero() {
        assert!((ba.abs() % &g).is_zero());
        assert!((bb.abs() % &g).is_zero());
    }
});
