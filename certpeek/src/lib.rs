//! Decode PEM or DER encoded X.509 certificates into a human-readable summary.
//!
//! ```
//! let info = certpeek::decode_pem(certpeek_test_data::RSA_ROOT_CA).unwrap();
//!
//! assert_eq!(info.version(), 3);
//! assert_eq!(info.signature_algorithm(), "SHA256-RSA");
//! assert_eq!(info.subject().common_name(), Some("Certpeek Test Root CA"));
//! assert_eq!(info.validity().not_before().to_string(), "2011-02-12T14:44:06Z");
//! ```
//!
//! Signatures are not verified and extensions are not parsed.

mod error;

pub mod oids;
pub mod pem;
pub mod x509;

pub use certpeek_der::{Asn1DerError, UtcDate};
pub use error::DecodeError;
pub use x509::{decode, decode_pem, CertificateInfo, DistinguishedName, ValidityPeriod};
