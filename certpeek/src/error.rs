use crate::pem::PemError;
use certpeek_der::Asn1DerError;
use thiserror::Error;

/// Certificate decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// couldn't extract DER bytes from PEM text
    #[error(transparent)]
    Pem(#[from] PemError),

    /// asn1 deserialization error
    #[error("(asn1) couldn't deserialize {element} at offset {offset}: {source}")]
    Asn1Deserialization {
        element: &'static str,
        offset: usize,
        source: Asn1DerError,
    },
}

impl DecodeError {
    /// Structural error behind this failure, if any
    pub fn der_error(&self) -> Option<&Asn1DerError> {
        match self {
            DecodeError::Pem(_) => None,
            DecodeError::Asn1Deserialization { source, .. } => Some(source),
        }
    }

    /// Absolute offset in the DER input of the object that couldn't be decoded
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::Pem(_) => None,
            DecodeError::Asn1Deserialization { offset, .. } => Some(*offset),
        }
    }

    /// Certificate field being decoded when the failure happened
    pub fn element(&self) -> Option<&'static str> {
        match self {
            DecodeError::Pem(_) => None,
            DecodeError::Asn1Deserialization { element, .. } => Some(element),
        }
    }
}

pub(crate) trait DerResultExt<T> {
    /// Attaches the certificate field and the offset of the object being read
    fn context(self, element: &'static str, offset: usize) -> Result<T, DecodeError>;
}

impl<T> DerResultExt<T> for certpeek_der::Result<T> {
    fn context(self, element: &'static str, offset: usize) -> Result<T, DecodeError> {
        self.map_err(|source| DecodeError::Asn1Deserialization {
            element,
            offset,
            source,
        })
    }
}
