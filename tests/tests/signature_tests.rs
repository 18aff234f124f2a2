//! Integration tests for GOST R 34.10-2012 signatures

use gostec::params::traditional::gost::ALL_CURVES;
use gostec::prelude::*;
use gostec_tests::{init_tracing, random_hash, seeded_engine};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_round_trip_on_every_catalog_curve() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(0x6057);

    for (i, params) in ALL_CURVES.iter().enumerate() {
        let key_size = KeySize::from_bits(params.key_size).unwrap();
        let mut signer = seeded_engine(key_size, i as u64);
        let curve = curves::named_curve(key_size, Some(params.name)).unwrap();
        signer.generate_key(&curve).unwrap();

        for _ in 0..4 {
            let hash = random_hash(&mut rng, key_size.bytes());
            let signature = signer.sign_hash(&hash).unwrap();
            assert_eq!(signature.len(), key_size.signature_len());
            assert!(signer.verify_hash(&hash, &signature).unwrap(), "{}", params.name);
        }
    }
}

#[test]
fn test_signatures_are_randomized() {
    let mut signer = seeded_engine(KeySize::Bits256, 1);
    let hash = [0x24u8; 32];

    let first = signer.sign_hash(&hash).unwrap();
    let second = signer.sign_hash(&hash).unwrap();
    assert_ne!(first, second);
    assert!(signer.verify_hash(&hash, &first).unwrap());
    assert!(signer.verify_hash(&hash, &second).unwrap());
}

#[test]
fn test_verification_with_exported_public_key() {
    let mut signer = seeded_engine(KeySize::Bits512, 2);
    let hash = [0xc3u8; 64];
    let signature = signer.sign_hash(&hash).unwrap();

    let public = signer.export_parameters(false).unwrap();
    assert!(public.d.is_none());
    let verifier = GostEcdsa::from_parameters(&public).unwrap();
    assert!(verifier.verify_hash(&hash, &signature).unwrap());

    // A different key on the same curve rejects it
    let mut other = seeded_engine(KeySize::Bits512, 3);
    other.export_parameters(false).unwrap();
    assert!(!other.verify_hash(&hash, &signature).unwrap());
}

#[test]
fn test_signature_from_other_curve_is_rejected() {
    let hash = [0x01u8; 64];

    let mut signer = seeded_engine(KeySize::Bits512, 4);
    signer
        .generate_key(&curves::curve_by_name("tc26-gost-3410-12-512-paramSetB").unwrap())
        .unwrap();
    let signature = signer.sign_hash(&hash).unwrap();

    let mut verifier = seeded_engine(KeySize::Bits512, 5);
    verifier
        .generate_key(&curves::curve_by_name("tc26-gost-3410-12-512-paramSetC").unwrap())
        .unwrap();
    assert!(!verifier.verify_hash(&hash, &signature).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_any_hash_round_trips(hash in proptest::collection::vec(any::<u8>(), 32), seed in any::<u64>()) {
        let mut signer = seeded_engine(KeySize::Bits256, seed);
        let signature = signer.sign_hash(&hash).unwrap();
        prop_assert!(signer.verify_hash(&hash, &signature).unwrap());
    }
}
