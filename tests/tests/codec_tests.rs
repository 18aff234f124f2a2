//! Integration tests for the XML domain-parameter codec

use gostec::params::traditional::gost::ALL_CURVES;
use gostec::prelude::*;
use gostec::sign::xml;
use gostec_tests::{init_tracing, seeded_engine};

#[test]
fn test_generated_keys_round_trip() {
    init_tracing();

    for (i, params) in ALL_CURVES.iter().enumerate() {
        let key_size = KeySize::from_bits(params.key_size).unwrap();
        let mut signer = seeded_engine(key_size, 40 + i as u64);
        signer
            .generate_key(&curves::curve_by_name(params.oid).unwrap())
            .unwrap();

        let document = signer.to_xml_string().unwrap();
        let mut receiver = seeded_engine(key_size, 0);
        receiver.from_xml_string(&document).unwrap();

        assert_eq!(
            receiver.export_parameters(false).unwrap(),
            signer.export_parameters(false).unwrap(),
            "{}",
            params.name
        );
        assert_eq!(receiver.curve_name(), Some(params.name));
    }
}

#[test]
fn test_codec_functions_match_engine() {
    let mut signer = seeded_engine(KeySize::Bits256, 50);
    let exported = signer.export_parameters(true).unwrap();

    let document = xml::to_xml(&exported).unwrap();
    assert_eq!(document, signer.to_xml_string().unwrap());

    let decoded = xml::from_xml(&document, KeySize::Bits256).unwrap();
    assert_eq!(decoded.curve, exported.curve);
    assert_eq!(decoded.q, exported.q);
    assert!(decoded.d.is_none());
}

#[test]
fn test_high_bit_buffers_encode_as_unsigned() {
    // 0x80 top byte reads as negative in two's complement
    let x = hex::decode("0000000000000000000000000000000000000000000000000000000000000080").unwrap();
    assert_eq!(
        xml::to_decimal(&x),
        "57896044618658097711785492504343953926634992332820282019728792003956564819968"
    );

    let mut parameters = EcParameters {
        curve: curves::default_curve(KeySize::Bits256),
        q: EcPoint::new(x.clone(), vec![0xffu8; 32]),
        d: None,
    };
    parameters.curve.a = x;
    let document = xml::to_xml(&parameters).unwrap();
    assert!(!document.contains("\"-"));
    assert_eq!(xml::from_xml(&document, KeySize::Bits256).unwrap(), parameters);
}

#[test]
fn test_malformed_documents_are_format_errors() {
    let mut receiver = seeded_engine(KeySize::Bits256, 51);

    assert!(matches!(
        receiver.from_xml_string(""),
        Err(Error::InvalidArgument { .. })
    ));

    for document in [
        "<ECDSAKeyValue/>",
        "<ECDSAKeyValue xmlns=\"http://www.w3.org/2001/04/xmldsig-more#\"></ECDSAKeyValue>",
        "<ECDSAKeyValue xmlns=\"http://www.w3.org/2001/04/xmldsig-more#\"><DomainParameters>",
    ] {
        assert!(
            matches!(receiver.from_xml_string(document), Err(Error::Format { .. })),
            "{:?}",
            document
        );
    }
    assert!(!receiver.is_parameterized());
}

#[test]
fn test_wider_document_truncates_to_engine_width() {
    let mut signer = seeded_engine(KeySize::Bits512, 60);
    let source = signer.export_parameters(false).unwrap();
    let document = signer.to_xml_string().unwrap();

    // every number keeps only its low 32 bytes
    let mut narrow = seeded_engine(KeySize::Bits256, 61);
    narrow.from_xml_string(&document).unwrap();
    assert_eq!(narrow.key_size(), KeySize::Bits256);

    let imported = narrow.export_parameters(false).unwrap();
    assert_eq!(imported.curve.prime, source.curve.prime[..32]);
    assert_eq!(imported.q.x, source.q.x[..32]);
    assert_eq!(imported.q.y, source.q.y[..32]);
    assert_eq!(narrow.curve_name(), None);
}
