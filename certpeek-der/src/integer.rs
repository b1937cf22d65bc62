use crate::{Asn1DerError, Result};

/// Decodes the value octets of a non-negative INTEGER that fits into 32 bits
pub fn decode_unsigned(value: &[u8]) -> Result<u32> {
    let (first, _) = value.split_first().ok_or(Asn1DerError::InvalidInteger)?;
    if first & 0x80 != 0 {
        debug_log!("decode_unsigned: INVALID (negative)");
        return Err(Asn1DerError::InvalidInteger);
    }

    let significant = match value.iter().position(|b| *b != 0) {
        Some(idx) => &value[idx..],
        None => return Ok(0),
    };
    if significant.len() > 4 {
        debug_log!("decode_unsigned: INVALID ({} significant bytes)", significant.len());
        return Err(Asn1DerError::InvalidInteger);
    }

    Ok(significant.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b)))
}
