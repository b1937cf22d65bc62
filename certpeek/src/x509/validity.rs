use crate::error::{DecodeError, DerResultExt};
use certpeek_der::{parse_time, DerCursor, Tag, UtcDate};
use std::fmt;

const ELEMENT: &str = "validity";

/// `notBefore` / `notAfter` bounds of a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidityPeriod {
    not_before: UtcDate,
    not_after: UtcDate,
}

impl ValidityPeriod {
    pub fn new(not_before: UtcDate, not_after: UtcDate) -> Self {
        Self { not_before, not_after }
    }

    pub fn not_before(&self) -> UtcDate {
        self.not_before
    }

    pub fn not_after(&self) -> UtcDate {
        self.not_after
    }

    /// Whether `date` falls within the period, bounds included
    pub fn contains(&self, date: &UtcDate) -> bool {
        self.not_before <= *date && *date <= self.not_after
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.not_before, self.not_after)
    }
}

/// Reads the `Validity` SEQUENCE
pub(crate) fn read_validity(cursor: &mut DerCursor<'_>) -> Result<ValidityPeriod, DecodeError> {
    let offset = cursor.position();
    let mut validity = cursor.read_constructed(Tag::SEQUENCE).context(ELEMENT, offset)?;

    let not_before = read_time(&mut validity)?;
    let not_after = read_time(&mut validity)?;

    Ok(ValidityPeriod { not_before, not_after })
}

fn read_time(cursor: &mut DerCursor<'_>) -> Result<UtcDate, DecodeError> {
    let offset = cursor.position();
    let header = cursor.read_tlv().context(ELEMENT, offset)?;
    let value = cursor.read_raw(header.length).context(ELEMENT, offset)?;
    parse_time(header.tag, value).context(ELEMENT, offset)
}
