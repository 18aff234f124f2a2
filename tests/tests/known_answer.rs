//! Known-answer test from the GOST R 34.10-2012 example (RFC 7091, 7.1)
//!
//! The fixture curve is the 256-bit test curve of the standard. Fixtures are
//! big-endian hex; the engine works in little-endian.

use gostec::algorithms::ec::weierstrass::{from_le_bytes, PrimeCurve};
use gostec::prelude::*;
use gostec_tests::{init_tracing, le_bytes, ReplayRng};

const P: &str = "8000000000000000000000000000000000000000000000000000000000000431";
const A: &str = "0000000000000000000000000000000000000000000000000000000000000007";
const B: &str = "5fbff498aa938ce739b8e022fbafef40563f6e6a3472fc2a514c0ce9dae23b7e";
const ORDER: &str = "8000000000000000000000000000000150fe8a1892976154c59cfc193accf5b3";
const GX: &str = "0000000000000000000000000000000000000000000000000000000000000002";
const GY: &str = "08e2a8a0e65147d4bd6316030e16d19c85c97f0a9ca267122b96abbcea7e8fc8";
const D: &str = "7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28";
const QX: &str = "7f2b49e270db6d90d8595bec458b50c58585ba1d4e9b788f6689dbd8e56fd80b";
const QY: &str = "26f1b489d6701dd185c8413a977b3cbbaf64d1c593d26627dffb101a87ff77da";
const E: &str = "2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5";
const K: &str = "77105c9b20bcd3122823c8cf6fcc7b956de33814e95b7fe64fed924594dceab3";
const R: &str = "41aa28d2f1ab148280cd9ed56feda41974053554a42767b83ad043fd39dc0493";
const S: &str = "01456c64ba4642a1653c235a98a60249bcd6d3f746b631df928014f6c5bf9c40";

fn example_curve() -> EcCurve {
    EcCurve {
        prime: le_bytes(P),
        a: le_bytes(A),
        b: le_bytes(B),
        g: EcPoint::new(le_bytes(GX), le_bytes(GY)),
        order: le_bytes(ORDER),
        cofactor: None,
    }
}

fn example_parameters() -> EcParameters {
    EcParameters {
        curve: example_curve(),
        q: EcPoint::new(le_bytes(QX), le_bytes(QY)),
        d: Some(SecretVec::new(le_bytes(D))),
    }
}

fn expected_signature() -> Vec<u8> {
    let mut signature = le_bytes(S);
    signature.extend_from_slice(&le_bytes(R));
    signature
}

#[test]
fn test_public_key_derivation() {
    let curve = PrimeCurve::from_ec_curve(&example_curve()).unwrap();
    assert!(curve.generator_on_curve());

    let q = curve
        .mul_generator(&from_le_bytes(&le_bytes(D)))
        .to_ec_point(KeySize::Bits256)
        .unwrap();
    assert_eq!(q, example_parameters().q);
}

#[test]
fn test_example_signature() {
    init_tracing();

    // The nonce draw reads exactly k
    let mut signer = GostEcdsa::with_rng(KeySize::Bits256, ReplayRng::new(le_bytes(K)));
    signer.import_parameters(&example_parameters()).unwrap();

    let signature = signer.sign_hash(&le_bytes(E)).unwrap();
    assert_eq!(hex::encode(&signature), hex::encode(expected_signature()));
}

#[test]
fn test_example_verification() {
    let public = EcParameters {
        d: None,
        ..example_parameters()
    };
    let verifier = GostEcdsa::from_parameters(&public).unwrap();
    assert_eq!(verifier.key_size(), KeySize::Bits256);

    let hash = le_bytes(E);
    let signature = expected_signature();
    assert!(verifier.verify_hash(&hash, &signature).unwrap());

    let mut wrong_hash = hash.clone();
    wrong_hash[31] ^= 0x40;
    assert!(!verifier.verify_hash(&wrong_hash, &signature).unwrap());

    let mut wrong_s = signature.clone();
    wrong_s[0] ^= 0x01;
    assert!(!verifier.verify_hash(&hash, &wrong_s).unwrap());

    let mut wrong_r = signature;
    wrong_r[32] ^= 0x01;
    assert!(!verifier.verify_hash(&hash, &wrong_r).unwrap());
}

#[test]
fn test_example_parameters_in_xml() {
    let mut signer = GostEcdsa::from_parameters(&example_parameters()).unwrap();
    let document = signer.to_xml_string().unwrap();

    assert!(document.contains(
        "<P>57896044618658097711785492504343953926634992332820282019728792003956564821041</P>"
    ));
    assert!(document.contains(r#"<A xsi:type="PrimeFieldElemType" Value="7"/>"#));
    assert!(document.contains(r#"<X xsi:type="PrimeFieldElemType" Value="2"/>"#));
    assert!(document.contains(
        "<Order>57896044618658097711785492504343953927082934583725450622380973592137631069619</Order>"
    ));
    assert!(!document.contains("Cofactor"));
}
