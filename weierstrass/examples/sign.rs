//! Sign and verify a message on every supported curve.
//!
//! ```text
//! cargo run --example sign -- "message to sign"
//! ```

use std::env;
use weierstrass::{
    CurveParams, Secp192k1, Secp192r1, Secp224k1, Secp224r1, Secp256k1, Secp256r1, Secp384r1,
    Secp521r1,
    ecdsa::{self, KeyPair},
    rand_core::OsRng,
};

fn demo<C: CurveParams>(message: &[u8]) {
    let key_pair = KeyPair::<C>::random();
    let signature = key_pair.sign(&mut OsRng, message);
    let valid = ecdsa::verify(key_pair.public_key(), &signature, message);

    println!("{}", C::NAME);
    println!("  Qx = {:x}", key_pair.public_key().x());
    println!("  Qy = {:x}", key_pair.public_key().y());
    println!("  r  = {:x}", signature.r());
    println!("  s  = {:x}", signature.s());
    println!("  valid: {valid}");
}

fn main() {
    let message = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("hello, world"));

    demo::<Secp192k1>(message.as_bytes());
    demo::<Secp192r1>(message.as_bytes());
    demo::<Secp224k1>(message.as_bytes());
    demo::<Secp224r1>(message.as_bytes());
    demo::<Secp256k1>(message.as_bytes());
    demo::<Secp256r1>(message.as_bytes());
    demo::<Secp384r1>(message.as_bytes());
    demo::<Secp521r1>(message.as_bytes());
}
