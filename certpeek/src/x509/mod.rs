//! X.509 certificate summaries

pub mod certificate;
pub mod name;
pub mod validity;

pub use certificate::{decode, decode_pem, CertificateInfo};
pub use name::DistinguishedName;
pub use validity::ValidityPeriod;
