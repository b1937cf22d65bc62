//! A small, bounds-checked DER reader.
//!
//! Only the part of ASN.1 DER needed to walk X.509 certificates is supported: single octet
//! tags, definite lengths of at most four octets, OBJECT IDENTIFIER values, non-negative
//! INTEGER values and `UTCTime` / `GeneralizedTime` values.
//!
//! Everything operates on a fully buffered input; values are handed out as slices borrowed from
//! that input.

#[macro_use]
mod debug_log;

mod cursor;
mod error;
mod length;
mod tag;

pub mod date;
pub mod integer;
pub mod oid;

pub use cursor::{DerCursor, TlvHeader};
pub use date::{parse_time, UtcDate};
pub use error::Asn1DerError;
pub use length::{Length, MAX_LENGTH_OCTETS};
pub use oid::decode_oid;
pub use tag::Tag;

pub type Result<T> = std::result::Result<T, Asn1DerError>;
