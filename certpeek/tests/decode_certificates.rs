use certpeek::{decode, decode_pem, CertificateInfo, DistinguishedName, UtcDate};
use certpeek_test_data::{EC_P256_GENERALIZED_TIME, ED25519_LEAF, RSA_ROOT_CA, RSA_ROOT_CA_DER, V1_LEGACY, V1_LEGACY_DER};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn name(attributes: &[(&str, &str)]) -> DistinguishedName {
    attributes.iter().copied().collect()
}

fn date(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> UtcDate {
    UtcDate::new(year, month, day, hour, minute, second).unwrap()
}

#[test]
fn rsa_root_ca() {
    let info = decode(RSA_ROOT_CA_DER).unwrap();

    let expected_name = name(&[
        ("C", "NL"),
        ("ST", "Noord-Holland"),
        ("L", "Amsterdam"),
        ("O", "Certpeek Test"),
        ("OU", "Decoding"),
        ("CN", "Certpeek Test Root CA"),
    ]);

    assert_eq!(info.version(), 3);
    assert_eq!(info.serial_number(), "008F3A6C01D2E4B5");
    assert_eq!(info.signature_algorithm(), "SHA256-RSA");
    assert_eq!(info.issuer(), &expected_name);
    assert_eq!(info.subject(), &expected_name);
    assert!(info.is_self_issued());
    assert_eq!(info.validity().not_before(), date(2011, 2, 12, 14, 44, 6));
    assert_eq!(info.validity().not_after(), date(2021, 2, 12, 14, 44, 6));
    assert_eq!(info.validity().not_before().unix_timestamp(), 1_297_521_846);
    assert_eq!(info.public_key_algorithm(), "RSA");
}

#[test]
fn pem_and_der_agree() {
    let from_pem = decode_pem(RSA_ROOT_CA).unwrap();
    let from_der = decode(RSA_ROOT_CA_DER).unwrap();
    assert_eq!(from_pem, from_der);

    assert_eq!(CertificateInfo::from_pem_str(RSA_ROOT_CA).unwrap(), from_der);
    assert_eq!(CertificateInfo::from_der(RSA_ROOT_CA_DER).unwrap(), from_der);
}

#[test]
fn decoding_is_idempotent() {
    assert_eq!(decode(RSA_ROOT_CA_DER).unwrap(), decode(RSA_ROOT_CA_DER).unwrap());
    assert_eq!(
        decode_pem(ED25519_LEAF).unwrap(),
        decode_pem(ED25519_LEAF).unwrap()
    );
}

#[test]
fn ec_certificate_with_generalized_time() {
    let info = decode_pem(EC_P256_GENERALIZED_TIME).unwrap();

    assert_eq!(info.version(), 3);
    assert_eq!(info.serial_number(), "1234");
    assert_eq!(info.signature_algorithm(), "ECDSA-SHA384");
    assert_eq!(info.public_key_algorithm(), "EC");
    assert_eq!(info.validity().not_before(), date(2024, 6, 1, 0, 0, 0));
    assert_eq!(info.validity().not_after(), date(2055, 6, 1, 12, 30, 45));

    // the second OU overwrites the first one
    assert_eq!(
        info.subject().to_string(),
        "O=Certpeek Test,OU=Security,CN=ec.certpeek.test"
    );
}

#[test]
fn ed25519_leaf() {
    let info = decode_pem(ED25519_LEAF).unwrap();

    assert_eq!(info.serial_number(), "7F");
    assert_eq!(info.signature_algorithm(), "SHA512-RSA");
    assert_eq!(info.public_key_algorithm(), "Ed25519");
    assert_eq!(info.issuer(), decode(RSA_ROOT_CA_DER).unwrap().subject());
    assert!(!info.is_self_issued());
    assert_eq!(
        info.subject().iter().collect::<Vec<_>>(),
        vec![
            ("DC", "certpeek"),
            ("SN", "A-1234"),
            ("emailAddress", "ed@certpeek.test"),
            ("CN", "ed25519.certpeek.test"),
        ]
    );
    assert_eq!(info.validity().not_before(), date(1999, 12, 31, 23, 59, 59));
    assert_eq!(info.validity().not_after(), date(2049, 12, 31, 23, 59, 59));
}

#[test]
fn v1_certificate_without_version_field() {
    let info = decode(V1_LEGACY_DER).unwrap();

    assert_eq!(info.version(), 1);
    assert_eq!(info.serial_number(), "01");
    assert_eq!(info.signature_algorithm(), "SHA1-RSA");
    assert_eq!(info.public_key_algorithm(), "DSA");
    assert_eq!(info.issuer().to_string(), "C=US,CN=Certpeek V1 CA");
    assert_eq!(info.subject().to_string(), "O=Legacy Org,CN=v1.certpeek.test");

    // both ends of the two digit year window
    assert_eq!(info.validity().not_before(), date(1950, 1, 1, 0, 0, 0));
    assert_eq!(info.validity().not_after(), date(2049, 12, 31, 23, 59, 59));

    assert_eq!(decode_pem(V1_LEGACY).unwrap(), info);
}

#[test]
fn malformed_issuer_rdn_keeps_leading_attributes() {
    let mut der = RSA_ROOT_CA_DER.to_vec();
    // third issuer RDN (localityName), SET turned into a SEQUENCE
    assert_eq!(der[78], 0x31);
    der[78] = 0x30;

    let info = decode(&der).unwrap();
    let original = decode(RSA_ROOT_CA_DER).unwrap();

    assert_eq!(info.issuer().to_string(), "C=NL,ST=Noord-Holland");
    assert_eq!(info.subject(), original.subject());
    assert_eq!(info.validity(), original.validity());
    assert_eq!(info.public_key_algorithm(), "RSA");
}

#[test]
fn trailing_data_is_ignored() {
    let mut der = RSA_ROOT_CA_DER.to_vec();
    der.extend_from_slice(&[0x05, 0x00, 0xFF]);

    assert_eq!(decode(&der).unwrap(), decode(RSA_ROOT_CA_DER).unwrap());
}

#[rstest]
#[case(RSA_ROOT_CA)]
#[case(EC_P256_GENERALIZED_TIME)]
#[case(ED25519_LEAF)]
#[case(V1_LEGACY)]
fn every_fixture_decodes(#[case] pem: &str) {
    let info = decode_pem(pem).unwrap();
    assert!(!info.subject().is_empty());
    assert!(info.validity().not_before() < info.validity().not_after());
}

#[cfg(feature = "serde")]
#[test]
fn json_summary() {
    let info = decode_pem(EC_P256_GENERALIZED_TIME).unwrap();
    let json = serde_json::to_string_pretty(&info).unwrap();

    expect_test::expect![[r#"
        {
          "version": 3,
          "serial_number": "1234",
          "signature_algorithm": "ECDSA-SHA384",
          "issuer": {
            "O": "Certpeek Test",
            "OU": "Security",
            "CN": "ec.certpeek.test"
          },
          "subject": {
            "O": "Certpeek Test",
            "OU": "Security",
            "CN": "ec.certpeek.test"
          },
          "validity": {
            "not_before": "2024-06-01T00:00:00Z",
            "not_after": "2055-06-01T12:30:45Z"
          },
          "public_key_algorithm": "EC"
        }"#]]
    .assert_eq(&json);
}
