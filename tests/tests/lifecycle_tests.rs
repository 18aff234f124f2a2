//! Engine lifecycle: lazy keys, size checks, disposal

use gostec::prelude::*;
use gostec_tests::{init_tracing, seeded_engine};

#[test]
fn test_fresh_engine_verifies_nothing() {
    init_tracing();
    for key_size in [KeySize::Bits256, KeySize::Bits512] {
        let verifier = seeded_engine(key_size, 60);
        let hash = vec![0u8; key_size.bytes()];
        let signature = vec![1u8; key_size.signature_len()];
        assert_eq!(verifier.verify_hash(&hash, &signature), Ok(false));
        assert!(!verifier.is_parameterized());
    }
}

#[test]
fn test_first_sign_generates_default_key() {
    let mut signer = seeded_engine(KeySize::Bits512, 61);
    assert_eq!(signer.curve_name(), None);
    signer.sign_hash(&[5u8; 64]).unwrap();
    assert_eq!(signer.curve_name(), Some("tc26-gost-3410-12-512-paramSetA"));
}

#[test]
fn test_size_errors() {
    assert_eq!(GostEcdsa::new(384).unwrap_err(), Error::InvalidKeySize { bits: 384 });

    let mut signer = seeded_engine(KeySize::Bits512, 62);
    assert!(matches!(
        signer.sign_hash(&[0u8; 63]),
        Err(Error::InvalidLength { expected: 64, actual: 63, .. })
    ));

    let signature = signer.sign_hash(&[0u8; 64]).unwrap();
    assert!(matches!(
        signer.verify_hash(&[0u8; 64], &signature[..64]),
        Err(Error::InvalidLength { expected: 128, actual: 64, .. })
    ));
    assert!(matches!(
        signer.verify_hash(&[0u8; 32], &signature),
        Err(Error::InvalidLength { expected: 64, actual: 32, .. })
    ));
}

#[test]
fn test_import_replaces_generated_key() {
    let mut first = seeded_engine(KeySize::Bits256, 63);
    let mut second = seeded_engine(KeySize::Bits256, 64);
    let exported = first.export_parameters(true).unwrap();
    second.export_parameters(true).unwrap();

    second.import_parameters(&exported).unwrap();
    assert_eq!(second.export_parameters(true).unwrap(), exported);

    let hash = [0x77u8; 32];
    let signature = second.sign_hash(&hash).unwrap();
    assert!(first.verify_hash(&hash, &signature).unwrap());
}

#[test]
fn test_dispose_is_final_and_idempotent() {
    let mut signer = seeded_engine(KeySize::Bits256, 65);
    let exported = signer.export_parameters(true).unwrap();

    signer.dispose();
    signer.dispose();
    assert!(signer.is_disposed());

    assert!(matches!(signer.sign_hash(&[0u8; 32]), Err(Error::Disposed { .. })));
    assert!(matches!(signer.export_parameters(true), Err(Error::Disposed { .. })));
    assert!(matches!(signer.import_parameters(&exported), Err(Error::Disposed { .. })));
    assert!(matches!(signer.from_xml_string(""), Err(Error::Disposed { .. })));

    // exported copies are independent of the engine's erased buffers
    assert!(!exported.d.as_ref().unwrap().is_zeroed());
    assert!(!exported.curve.is_erased());
}

#[test]
fn test_drop_after_dispose() {
    let mut signer = seeded_engine(KeySize::Bits512, 66);
    signer.sign_hash(&[1u8; 64]).unwrap();
    signer.dispose();
    drop(signer);
}
