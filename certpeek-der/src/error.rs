use crate::tag::Tag;
use thiserror::Error;

/// Errors raised while walking DER encoded data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Asn1DerError {
    /// a header or value read would run past the end of the available data
    #[error("unexpected end of data")]
    UnexpectedEof,

    /// long form length uses more octets than supported
    #[error("length field uses {count} octets (at most 4 supported)")]
    LengthTooLong { count: u8 },

    /// indefinite length is not allowed in DER
    #[error("indefinite length is not allowed in DER")]
    IndefiniteLength,

    /// the tag found at a fixed grammar position is not the expected one
    #[error("expected {expected} but found {actual} at offset {offset}")]
    UnexpectedTag { expected: Tag, actual: Tag, offset: usize },

    /// object identifier value ends in the middle of an arc
    #[error("object identifier ends in the middle of an arc")]
    TruncatedOid,

    /// object identifier arc doesn't fit into 64 bits
    #[error("object identifier arc overflows 64 bits")]
    OidArcOverflow,

    /// time value is neither a UTCTime nor a GeneralizedTime of a supported shape
    #[error("unsupported time format ({tag}, {length} bytes)")]
    UnsupportedTimeFormat { tag: Tag, length: usize },

    /// time value has the right shape but doesn't describe a calendar instant
    #[error("invalid date")]
    InvalidDate,

    /// integer value is empty or too large
    #[error("invalid integer")]
    InvalidInteger,

    /// seek or bound target outside of the readable range
    #[error("offset {offset} is out of range")]
    OutOfRange { offset: usize },
}
