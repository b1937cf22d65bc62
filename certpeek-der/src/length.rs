use crate::{Asn1DerError, Result};

/// Maximum number of subsequent octets accepted in a long form length
pub const MAX_LENGTH_OCTETS: u8 = 4;

/// A DER length field
pub struct Length;

impl Length {
    /// Decodes the length field at the start of `input`.
    ///
    /// Returns the decoded length together with the number of octets the field occupies.
    pub fn deserialized(input: &[u8]) -> Result<(usize, usize)> {
        let first = *input.first().ok_or(Asn1DerError::UnexpectedEof)?;

        if first & 0x80 == 0 {
            return Ok((usize::from(first), 1));
        }

        let count = first & 0x7F;
        if count == 0 {
            return Err(Asn1DerError::IndefiniteLength);
        }
        if count > MAX_LENGTH_OCTETS {
            return Err(Asn1DerError::LengthTooLong { count });
        }

        let octets = input
            .get(1..=usize::from(count))
            .ok_or(Asn1DerError::UnexpectedEof)?;
        let len = octets.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
        let len = usize::try_from(len).map_err(|_| Asn1DerError::UnexpectedEof)?;

        Ok((len, 1 + usize::from(count)))
    }
}
