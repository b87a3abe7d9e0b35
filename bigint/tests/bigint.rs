//! Arbitrary-width integer known-answer tests.

use bigint::{BigInt, Error, I128, Integer};
use hex_literal::hex;

fn int(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn add() {
    assert_eq!(
        int("67a7389d60ef539e65bed3893a34e08e") + int("360eb0c3d1d8fba1ad0c732103394c66"),
        int("9db5e96132c84f4012cb46aa3d6e2cf4")
    );
}

#[test]
fn sub() {
    assert_eq!(
        int("968879be89ebc6c8dd2bced6b0070dce") - int("2ae8d0de2051b2a24b6171455d88d8be"),
        int("6b9fa8e0699a142691ca5d91527e3510")
    );
    assert_eq!(
        int("2ae8d0de2051b2a24b6171455d88d8be") - int("968879be89ebc6c8dd2bced6b0070dce"),
        int("-6b9fa8e0699a142691ca5d91527e3510")
    );
}

#[test]
fn mul() {
    let r = int("a16d9c3c7140048040b46e4a7029de9");
    assert_eq!(int("3548f387df1a1925") * int("3078efc52b86a075"), r);
    assert_eq!(int("-3548f387df1a1925") * int("3078efc52b86a075"), -r.clone());
    assert_eq!(int("-3548f387df1a1925") * int("-3078efc52b86a075"), r);
}

#[test]
fn div() {
    let x = int("71dec9787c38aaf1f9738021bdbca89c");
    let y = int("4d049d247ccf9b29e9aa33b200e37c37");
    assert_eq!(&x / &y, BigInt::one());
    assert_eq!(-&x / &y, -BigInt::one());
    assert_eq!(-&x / -&y, BigInt::one());
    assert_eq!(x.div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
}

#[test]
fn rem() {
    let x = int("68e0649a92bb1aadbf485bad2637a75e");
    let y = int("15859e93105512c3a27e07c499bd723d");
    assert_eq!(&x % &y, int("12c9ea4e5166cf9f35503c9abf41de6a"));
    assert_eq!(-&x % &y, int("2bbb444beee43246d2dcb29da7b93d3"));
    assert_eq!(&x % -&y, int("-2bbb444beee43246d2dcb29da7b93d3"));
    assert_eq!(-&x % -&y, int("-12c9ea4e5166cf9f35503c9abf41de6a"));
}

#[test]
fn exact_division_remainder_follows_sign_table() {
    let (x, y) = (BigInt::from(4), BigInt::from(2));
    assert_eq!(x.div_rem(&-&y), Ok((BigInt::from(-2), BigInt::from(-2))));
    assert_eq!((-&x).div_rem(&y), Ok((BigInt::from(-2), BigInt::from(2))));
    assert_eq!((-&x).div_rem(&-&y), Ok((BigInt::from(2), BigInt::zero())));
    assert_eq!(x.div_rem(&y), Ok((BigInt::from(2), BigInt::zero())));
    assert_eq!(BigInt::zero().div_rem(&-&y), Ok((BigInt::zero(), BigInt::zero())));
}

#[test]
fn bitwise() {
    assert_eq!(
        int("23c857d06582543dab9c450ba9c5a5b1") & int("16267c48064d57baa758cecc58754863"),
        int("200544004005438a318440808450021")
    );
    assert_eq!(
        int("fdf573c6bc2365ae3df2cf210ea9348a") | int("e8fb0cd1235e3e90ccd642a12098508e"),
        int("fdff7fd7bf7f7fbefdf6cfa12eb9748e")
    );
    assert_eq!(
        int("259a93dcfba2f0dc9e45540f406707df") ^ int("2359a6461ae95b41e6ebeb916e7cf734"),
        int("6c3359ae14bab9d78aebf9e2e1bf0eb")
    );
    assert_eq!(
        !int("9e7039ad4f0c8a2e47a8c7783a577575"),
        int("618fc652b0f375d1b8573887c5a88a8a")
    );
}

#[test]
fn bitwise_signs() {
    let (a, b) = (int("-f0"), int("3c"));
    assert_eq!(&a & &b, int("30"));
    assert_eq!(&a | &b, int("-fc"));
    assert_eq!(&a ^ &b, int("-cc"));
    assert_eq!(!a, int("-0f"));
}

#[test]
fn shifts() {
    assert_eq!(
        int("daf9207716e646a7ea3e194de83e7ed8") << 25u32,
        int("1b5f240ee2dcc8d4fd47c329bd07cfdb0000000")
    );
    assert_eq!(
        int("119a190df0acd55f2c8326ca77388bcb") >> 84u32,
        int("119a190df0a")
    );
    assert_eq!(int("-ff") >> 4u32, int("-f"));
    assert_eq!(int("-ff") >> 8u32, BigInt::zero());
    assert_eq!(BigInt::one() << int("40"), int("10000000000000000"));
}

#[test]
fn shift_count_uses_low_32_bits() {
    // 2^32 + 8: only the low 32 bits select the shift
    let count = int("100000008");
    assert_eq!(BigInt::one() << &count, BigInt::from(256));
    assert_eq!(BigInt::from(256) >> count, BigInt::one());
    assert_eq!((BigInt::one() << int("3e8")).bits(), 1001);
}

#[test]
fn comparisons() {
    let v0 = int("44087a040e35fbf8a67235f140cc8526");
    let v1 = int("508a9f770f33f45ebe236ae7aad0c41c");
    assert!(v0 < v1);
    assert!(v0 > -&v1);
    assert!(-&v0 > -&v1);
    assert!(v0 <= v0);
    assert!(v1 >= v0);

    assert_eq!(
        int("ccd4755e518c8719aad33a4d28dad995"),
        int("ccd4755e518c8719aad33a4d28dad995")
    );
    assert_ne!(
        int("77662b707b5595f0bf7a9f94bea98102"),
        int("728f6146a5f928f6573536c3bfad9e7d")
    );
    assert_eq!(int("-0"), BigInt::zero());
}

#[test]
fn number_theory() {
    assert_eq!(
        int("254a3f6bd8a408eda2332f0b2030af54").sqrt(),
        Ok(int("61b474697b361ca6"))
    );
    assert_eq!(
        int("ea0336de").pow(&int("04")),
        Ok(int("b2bf04fcdfee4f84107c7bda685b8410"))
    );
    assert_eq!(
        int("0b12842e1adf664fbbdd24bf638ae80e").log(&int("64")),
        Ok(int("12"))
    );
    assert_eq!(
        int("2ac68abd5d4fbd4dcf8bd324c75c25cd").log2(),
        Ok(int("7d"))
    );
    assert_eq!(
        int("7c88ae7dacceb8adebe7c98eeabb7b84").gcd(&int("3ff232dcdd2d081cffccd25eb13ac9b2")),
        int("02")
    );
    assert_eq!(
        int("3b54bd67f818bbf4").lcm(&int("04a32b51f17de60a")),
        int("8991fa3955d9a079c7d81731fc47c4")
    );
}

#[test]
fn wide_pow_does_not_wrap() {
    let two = BigInt::from(2);
    let x = two.pow(&BigInt::from(521)).unwrap() - BigInt::one();
    assert_eq!(x.bits(), 521);
    assert_eq!(
        x.sqrt().unwrap().bits(),
        261,
        "floor(sqrt(2^521 - 1)) has 261 bits"
    );
}

#[test]
fn agrees_with_fixed_width() {
    for (a, b) in [
        ("71dec9787c38aaf1f9738021bdbca89c", "-4d049d247ccf"),
        ("-68e0649a92bb1aadbf485bad2637a75e", "15859e93105512c3"),
        ("-3548f387df1a1925", "-3078efc52b86a075"),
    ] {
        let (fa, fb): (I128, I128) = (a.parse().unwrap(), b.parse().unwrap());
        let (ba, bb) = (int(a), int(b));

        assert_eq!(BigInt::from(fa / fb), &ba / &bb);
        assert_eq!(BigInt::from(fa % fb), &ba % &bb);
        assert_eq!((&ba * &bb).to_fixed::<16>(), fa * fb);
        assert_eq!((&ba + &bb).to_fixed::<16>(), fa + fb);
    }
}

#[test]
fn byte_access() {
    let x = BigInt::from_be_slice(&hex!("0000C6047F9441ED7D6D3045406E95C07CD8"));
    assert_eq!(x.to_be_bytes(), hex!("C6047F9441ED7D6D3045406E95C07CD8"));
    assert_eq!(x.as_le_bytes().len(), 16);
    assert_eq!(
        x.to_be_bytes_padded(18).unwrap(),
        hex!("0000C6047F9441ED7D6D3045406E95C07CD8")
    );
    assert_eq!(BigInt::from_le_slice(&[0x01, 0x02, 0x00]), BigInt::from(0x0201));
}

#[test]
fn formatting() {
    assert_eq!(format!("{}", int("-00ABC")), "-abc");
    assert_eq!(format!("{:X}", int("abc")), "ABC");
    assert_eq!(format!("{:?}", BigInt::zero()), "BigInt(0)");
    assert_eq!(BigInt::from_hex("12 34"), Err(Error::InvalidArgument));
}
