//! Object identifiers recognized when summarizing a certificate, and their display labels.
//!
//! Identifiers missing from these tables are shown in dotted decimal form.

// ISO/IEC/ITU-T attribute types
pub const AT_SURNAME: &str = "2.5.4.4";
pub const AT_SERIAL_NUMBER: &str = "2.5.4.5";
pub const AT_COMMON_NAME: &str = "2.5.4.3";
pub const AT_COUNTRY_NAME: &str = "2.5.4.6";
pub const AT_LOCALITY_NAME: &str = "2.5.4.7";
pub const AT_STATE_OR_PROVINCE_NAME: &str = "2.5.4.8";
pub const AT_STREET_NAME: &str = "2.5.4.9";
pub const AT_ORGANIZATION_NAME: &str = "2.5.4.10";
pub const AT_ORGANIZATIONAL_UNIT_NAME: &str = "2.5.4.11";
pub const AT_GIVEN_NAME: &str = "2.5.4.42";
pub const EMAIL_ADDRESS: &str = "1.2.840.113549.1.9.1";
pub const DOMAIN_COMPONENT: &str = "0.9.2342.19200300.100.1.25";

// PKCS #1
pub const RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const MD5_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.4";
pub const SHA1_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.5";
pub const RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
pub const SHA256_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.11";
pub const SHA384_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.12";
pub const SHA512_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.13";
pub const SHA224_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.14";

// ANSI-X962
pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
pub const ECDSA_WITH_SHA256: &str = "1.2.840.10045.4.3.2";
pub const ECDSA_WITH_SHA384: &str = "1.2.840.10045.4.3.3";
pub const ECDSA_WITH_SHA512: &str = "1.2.840.10045.4.3.4";

// ANSI-X957
pub const DSA: &str = "1.2.840.10040.4.1";

// RFC 8410
pub const X25519: &str = "1.3.101.110";
pub const X448: &str = "1.3.101.111";
pub const ED25519: &str = "1.3.101.112";
pub const ED448: &str = "1.3.101.113";

static SIGNATURE_ALGORITHMS: &[(&str, &str)] = &[
    (MD5_WITH_RSA_ENCRYPTION, "MD5-RSA"),
    (SHA1_WITH_RSA_ENCRYPTION, "SHA1-RSA"),
    (SHA224_WITH_RSA_ENCRYPTION, "SHA224-RSA"),
    (SHA256_WITH_RSA_ENCRYPTION, "SHA256-RSA"),
    (SHA384_WITH_RSA_ENCRYPTION, "SHA384-RSA"),
    (SHA512_WITH_RSA_ENCRYPTION, "SHA512-RSA"),
    (RSASSA_PSS, "RSASSA-PSS"),
    (ECDSA_WITH_SHA256, "ECDSA-SHA256"),
    (ECDSA_WITH_SHA384, "ECDSA-SHA384"),
    (ECDSA_WITH_SHA512, "ECDSA-SHA512"),
    (ED25519, "Ed25519"),
];

static PUBLIC_KEY_ALGORITHMS: &[(&str, &str)] = &[
    (RSA_ENCRYPTION, "RSA"),
    (EC_PUBLIC_KEY, "EC"),
    (DSA, "DSA"),
    (X25519, "X25519"),
    (X448, "X448"),
    (ED25519, "Ed25519"),
    (ED448, "Ed448"),
];

static ATTRIBUTE_TYPES: &[(&str, &str)] = &[
    (AT_COMMON_NAME, "CN"),
    (AT_SURNAME, "SURNAME"),
    (AT_SERIAL_NUMBER, "SN"),
    (AT_COUNTRY_NAME, "C"),
    (AT_LOCALITY_NAME, "L"),
    (AT_STATE_OR_PROVINCE_NAME, "ST"),
    (AT_STREET_NAME, "STREET"),
    (AT_ORGANIZATION_NAME, "O"),
    (AT_ORGANIZATIONAL_UNIT_NAME, "OU"),
    (AT_GIVEN_NAME, "GN"),
    (EMAIL_ADDRESS, "emailAddress"),
    (DOMAIN_COMPONENT, "DC"),
];

fn lookup(table: &'static [(&'static str, &'static str)], oid: &str) -> Option<&'static str> {
    table.iter().find(|(known, _)| *known == oid).map(|(_, label)| *label)
}

/// Label of a signature algorithm, e.g. `SHA256-RSA`
pub fn signature_algorithm_label(oid: &str) -> Option<&'static str> {
    lookup(SIGNATURE_ALGORITHMS, oid)
}

/// Label of a subject public key algorithm, e.g. `EC`
pub fn public_key_algorithm_label(oid: &str) -> Option<&'static str> {
    lookup(PUBLIC_KEY_ALGORITHMS, oid)
}

/// Short name of a `Name` attribute type, e.g. `CN`
pub fn attribute_short_name(oid: &str) -> Option<&'static str> {
    lookup(ATTRIBUTE_TYPES, oid)
}

/// Maps `oid` through `label_of`, falling back to the dotted form
pub(crate) fn label_or_dotted(oid: String, label_of: fn(&str) -> Option<&'static str>) -> String {
    match label_of(&oid) {
        Some(label) => label.to_owned(),
        None => oid,
    }
}
