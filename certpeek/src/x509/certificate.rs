use crate::error::{DecodeError, DerResultExt};
use crate::oids;
use crate::pem::extract_certificate_der;
use crate::x509::name::{parse_name, DistinguishedName};
use crate::x509::validity::{read_validity, ValidityPeriod};
use certpeek_der::integer::decode_unsigned;
use certpeek_der::{decode_oid, Asn1DerError, DerCursor, Tag};
use std::fmt;

/// Version reported when the `[0] EXPLICIT Version` field is absent
const DEFAULT_VERSION: u32 = 1;

/// Human-readable summary of an X.509 certificate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CertificateInfo {
    version: u32,
    serial_number: String,
    signature_algorithm: String,
    issuer: DistinguishedName,
    subject: DistinguishedName,
    validity: ValidityPeriod,
    public_key_algorithm: String,
}

impl CertificateInfo {
    pub fn from_der<T: ?Sized + AsRef<[u8]>>(der: &T) -> Result<Self, DecodeError> {
        decode(der.as_ref())
    }

    pub fn from_pem_str(pem_str: &str) -> Result<Self, DecodeError> {
        decode_pem(pem_str)
    }

    /// One-based version (1, 2 or 3 for conforming certificates)
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Serial number content octets as uppercase hexadecimal, leading zero octets included
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn signature_algorithm(&self) -> &str {
        &self.signature_algorithm
    }

    pub fn issuer(&self) -> &DistinguishedName {
        &self.issuer
    }

    pub fn subject(&self) -> &DistinguishedName {
        &self.subject
    }

    pub fn validity(&self) -> &ValidityPeriod {
        &self.validity
    }

    pub fn public_key_algorithm(&self) -> &str {
        &self.public_key_algorithm
    }

    pub fn is_self_issued(&self) -> bool {
        self.issuer == self.subject
    }
}

impl fmt::Display for CertificateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Serial Number: {}", self.serial_number)?;
        writeln!(f, "Signature Algorithm: {}", self.signature_algorithm)?;
        writeln!(f, "Issuer: {}", self.issuer)?;
        writeln!(f, "Not Before: {}", self.validity.not_before())?;
        writeln!(f, "Not After: {}", self.validity.not_after())?;
        writeln!(f, "Subject: {}", self.subject)?;
        write!(f, "Public Key Algorithm: {}", self.public_key_algorithm)
    }
}

/// Decodes a DER encoded certificate.
///
/// Only the `TBSCertificate` fields up to the subject public key algorithm are looked at;
/// extensions and the signature are neither parsed nor verified.
pub fn decode(der: &[u8]) -> Result<CertificateInfo, DecodeError> {
    let result = walk_certificate(der);
    if let Err(e) = &result {
        log::debug!("couldn't decode certificate ({} bytes): {}", der.len(), e);
    }
    result
}

/// Decodes the first `CERTIFICATE` block of a PEM document
pub fn decode_pem(pem_str: &str) -> Result<CertificateInfo, DecodeError> {
    let der = extract_certificate_der(pem_str)?;
    decode(&der)
}

fn walk_certificate(der: &[u8]) -> Result<CertificateInfo, DecodeError> {
    let mut cursor = DerCursor::new(der);

    log::trace!("certificate");
    let mut certificate = cursor
        .read_constructed(Tag::SEQUENCE)
        .context("certificate", cursor.position())?;

    log::trace!("tbs certificate at offset {}", certificate.position());
    let tbs_offset = certificate.position();
    let mut tbs = certificate
        .read_constructed(Tag::SEQUENCE)
        .context("tbs certificate", tbs_offset)?;

    let version = read_version(&mut tbs)?;
    let serial_number = read_serial_number(&mut tbs)?;

    let signature_algorithm = read_algorithm_identifier(&mut tbs, "signature algorithm")?;
    let signature_algorithm = oids::label_or_dotted(signature_algorithm, oids::signature_algorithm_label);

    let issuer = read_name(&mut tbs, "issuer")?;

    log::trace!("validity at offset {}", tbs.position());
    let validity = read_validity(&mut tbs)?;

    let subject = read_name(&mut tbs, "subject")?;

    let public_key_algorithm = read_subject_public_key_algorithm(&mut tbs)?;
    let public_key_algorithm = oids::label_or_dotted(public_key_algorithm, oids::public_key_algorithm_label);

    Ok(CertificateInfo {
        version,
        serial_number,
        signature_algorithm,
        issuer,
        subject,
        validity,
        public_key_algorithm,
    })
}

fn read_version(tbs: &mut DerCursor<'_>) -> Result<u32, DecodeError> {
    const ELEMENT: &str = "version";

    if tbs.peek_tag() != Some(Tag::CTX_0) {
        log::trace!("no version field, defaulting to v{}", DEFAULT_VERSION);
        return Ok(DEFAULT_VERSION);
    }

    let offset = tbs.position();
    log::trace!("version at offset {}", offset);
    let mut explicit = tbs.read_constructed(Tag::CTX_0).context(ELEMENT, offset)?;

    let offset = explicit.position();
    let value = explicit.read_value(Tag::INTEGER).context(ELEMENT, offset)?;
    let version = decode_unsigned(value).context(ELEMENT, offset)?;

    version
        .checked_add(1)
        .ok_or(Asn1DerError::InvalidInteger)
        .context(ELEMENT, offset)
}

fn read_serial_number(tbs: &mut DerCursor<'_>) -> Result<String, DecodeError> {
    let offset = tbs.position();
    log::trace!("serial number at offset {}", offset);
    let value = tbs.read_value(Tag::INTEGER).context("serial number", offset)?;
    Ok(hex::encode_upper(value))
}

/// Reads an `AlgorithmIdentifier` and returns its OID; parameters are skipped
fn read_algorithm_identifier(cursor: &mut DerCursor<'_>, element: &'static str) -> Result<String, DecodeError> {
    let offset = cursor.position();
    log::trace!("{} at offset {}", element, offset);
    let mut algorithm = cursor.read_constructed(Tag::SEQUENCE).context(element, offset)?;

    let offset = algorithm.position();
    let value = algorithm.read_value(Tag::OID).context(element, offset)?;
    decode_oid(value).context(element, offset)
}

fn read_name(tbs: &mut DerCursor<'_>, element: &'static str) -> Result<DistinguishedName, DecodeError> {
    let offset = tbs.position();
    log::trace!("{} at offset {}", element, offset);
    parse_name(tbs).context(element, offset)
}

fn read_subject_public_key_algorithm(tbs: &mut DerCursor<'_>) -> Result<String, DecodeError> {
    const ELEMENT: &str = "subject public key info";

    let offset = tbs.position();
    log::trace!("{} at offset {}", ELEMENT, offset);
    let mut spki = tbs.read_constructed(Tag::SEQUENCE).context(ELEMENT, offset)?;

    read_algorithm_identifier(&mut spki, ELEMENT)
}
