//! Test data shared between the certpeek crates.
//!
//! Expected values quoted next to each fixture come from `openssl x509 -noout -text`.

// python cryptography: self-signed RSA 2048, sha256WithRSAEncryption, basicConstraints CA
// serial 0x8F3A6C01D2E4B5 (DER INTEGER 00 8F 3A 6C 01 D2 E4 B5)
// C=NL, ST=Noord-Holland, L=Amsterdam, O=Certpeek Test, OU=Decoding, CN=Certpeek Test Root CA
// Feb 12 14:44:06 2011 GMT -> Feb 12 14:44:06 2021 GMT
pub const RSA_ROOT_CA: &str = include_str!("../test_assets/rsa_root_ca.crt");
pub const RSA_ROOT_CA_DER: &[u8] = include_bytes!("../test_assets/rsa_root_ca.der");

// self-signed P-256, ecdsa-with-SHA384, serial 0x1234, OU appears twice
// O=Certpeek Test, OU=Platform, OU=Security, CN=ec.certpeek.test
// Jun 1 00:00:00 2024 GMT (UTCTime) -> Jun 1 12:30:45 2055 GMT (GeneralizedTime)
pub const EC_P256_GENERALIZED_TIME: &str = include_str!("../test_assets/ec_p256_generalized.crt");

// Ed25519 key issued by RSA_ROOT_CA, sha512WithRSAEncryption, serial 0x7F
// DC=test, DC=certpeek, serialNumber=A-1234, emailAddress=ed@certpeek.test, CN=ed25519.certpeek.test
// Dec 31 23:59:59 1999 GMT -> Dec 31 23:59:59 2049 GMT
pub const ED25519_LEAF: &str = include_str!("../test_assets/ed25519_leaf.crt");

// hand assembled v1 certificate (no [0] version), sha1WithRSAEncryption, serial 1, DSA key
// issuer C=US, CN=Certpeek V1 CA (PrintableString)
// subject O=Legacy Org (TeletexString), CN=v1.certpeek.test (IA5String)
// Jan 1 00:00:00 1950 GMT -> Dec 31 23:59:59 2049 GMT
// the key and signature bits are filler
pub const V1_LEGACY: &str = include_str!("../test_assets/v1_legacy.crt");
pub const V1_LEGACY_DER: &[u8] = include_bytes!("../test_assets/v1_legacy.der");
