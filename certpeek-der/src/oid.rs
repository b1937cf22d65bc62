//! OBJECT IDENTIFIER value decoding

use crate::{Asn1DerError, Result};
use std::slice::Iter;

/// Decodes the value octets of an OBJECT IDENTIFIER into its arcs.
///
/// The first sub-identifier packs the first two arcs as `first * 40 + second`, where the first
/// arc is at most 2. Every sub-identifier is base-128 encoded with the high bit set on all but
/// its last octet.
pub fn decode_oid_arcs(value: &[u8]) -> Result<Vec<u64>> {
    let mut octets = value.iter();

    let first = read_sub_identifier(&mut octets)?.ok_or(Asn1DerError::TruncatedOid)?;
    let mut arcs = match first {
        0..=39 => vec![0, first],
        40..=79 => vec![1, first - 40],
        _ => vec![2, first - 80],
    };

    while let Some(arc) = read_sub_identifier(&mut octets)? {
        arcs.push(arc);
    }

    Ok(arcs)
}

/// Decodes the value octets of an OBJECT IDENTIFIER into its dotted decimal form
///
/// ```
/// let oid = certpeek_der::oid::decode_oid(&[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B]).unwrap();
/// assert_eq!(oid, "1.2.840.113549.1.1.11");
/// ```
pub fn decode_oid(value: &[u8]) -> Result<String> {
    let arcs = decode_oid_arcs(value)?;
    let dotted = arcs.iter().map(u64::to_string).collect::<Vec<_>>().join(".");
    Ok(dotted)
}

fn read_sub_identifier(octets: &mut Iter<'_, u8>) -> Result<Option<u64>> {
    let mut value = 0u64;
    let mut started = false;

    for &octet in octets.by_ref() {
        started = true;

        if value > u64::MAX >> 7 {
            return Err(Asn1DerError::OidArcOverflow);
        }
        value = (value << 7) | u64::from(octet & 0x7F);

        if octet & 0x80 == 0 {
            return Ok(Some(value));
        }
    }

    if started {
        Err(Asn1DerError::TruncatedOid)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B], "1.2.840.113549.1.1.11")]
    #[case(&[0x55, 0x04, 0x03], "2.5.4.3")]
    #[case(&[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01], "1.2.840.10045.2.1")]
    #[case(&[0x2B, 0x65, 0x70], "1.3.101.112")]
    #[case(&[0x09, 0x92, 0x26, 0x89, 0x93, 0xF2, 0x2C, 0x64, 0x01, 0x19], "0.9.2342.19200300.100.1.25")]
    #[case(&[0x27], "0.39")]
    #[case(&[0x4F], "1.39")]
    #[case(&[0x50], "2.0")]
    #[case(&[0x88, 0x37, 0x03], "2.999.3")]
    fn decode(#[case] value: &[u8], #[case] expected: &str) {
        assert_eq!(decode_oid(value).unwrap(), expected);
    }

    #[test]
    fn arcs() {
        assert_eq!(decode_oid_arcs(&[0x55, 0x04, 0x0B]).unwrap(), vec![2, 5, 4, 11]);
    }

    #[test]
    fn ends_mid_arc() {
        assert_eq!(decode_oid(&[0x2A, 0x86]), Err(Asn1DerError::TruncatedOid));
        assert_eq!(decode_oid(&[0x86]), Err(Asn1DerError::TruncatedOid));
    }

    #[test]
    fn empty_value() {
        assert_eq!(decode_oid(&[]), Err(Asn1DerError::TruncatedOid));
    }

    #[test]
    fn arc_overflow() {
        let mut value = vec![0x2A];
        value.extend_from_slice(&[0xFF; 10]);
        value.push(0x7F);
        assert_eq!(decode_oid(&value), Err(Asn1DerError::OidArcOverflow));
    }
}
