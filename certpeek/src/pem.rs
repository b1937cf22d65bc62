//! Certificate extraction from PEM text (RFC 7468)

use base64::engine::general_purpose;
use base64::Engine as _;
use thiserror::Error;

const CERTIFICATE_HEADER: &[u8] = b"-----BEGIN CERTIFICATE-----";
const CERTIFICATE_FOOTER: &[u8] = b"-----END CERTIFICATE-----";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PemError {
    /// `BEGIN CERTIFICATE` or `END CERTIFICATE` line not found
    #[error("pem markers not found")]
    MissingPemMarkers,

    /// couldn't decode base64
    #[error("couldn't decode base64: {source}")]
    Base64Decode { source: base64::DecodeError },
}

/// Extracts the DER bytes of the first `CERTIFICATE` block found in `input`.
///
/// Text outside of the block is ignored. Whitespace inside the block (line breaks included) is
/// stripped before decoding with the padded standard base64 alphabet.
pub fn extract_certificate_der<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>, PemError> {
    let body = certificate_body(input.as_ref()).ok_or(PemError::MissingPemMarkers)?;

    let compact: Vec<u8> = body.iter().copied().filter(|c| !c.is_ascii_whitespace()).collect();

    general_purpose::STANDARD
        .decode(compact)
        .map_err(|source| PemError::Base64Decode { source })
}

/// Bytes between the first certificate header and the first footer following it
fn certificate_body(input: &[u8]) -> Option<&[u8]> {
    let body_start = position_of(input, CERTIFICATE_HEADER)? + CERTIFICATE_HEADER.len();
    let rest = input.get(body_start..)?;
    let body_len = position_of(rest, CERTIFICATE_FOOTER)?;
    rest.get(..body_len)
}

fn position_of(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
