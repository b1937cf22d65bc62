//! `UTCTime` and `GeneralizedTime` decoding

use crate::{tag::Tag, Asn1DerError, Result};
use std::fmt;

/// A calendar instant in UTC with one second resolution.
///
/// Construction validates every field, so any `UtcDate` names an existing instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDate {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl UtcDate {
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Option<Self> {
        if (1..=12).contains(&month)
            && day >= 1
            && day <= days_in_month(year, month)
            && hour < 24
            && minute < 60
            && second < 60
        {
            Some(Self {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn ymd(year: u16, month: u8, day: u8) -> Option<Self> {
        Self::new(year, month, day, 0, 0, 0)
    }

    #[inline]
    pub fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Seconds elapsed since 1970-01-01T00:00:00Z (negative before)
    pub fn unix_timestamp(&self) -> i64 {
        let days = days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        days * 86_400 + i64::from(self.hour) * 3_600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }
}

impl fmt::Display for UtcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UtcDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// Days since the unix epoch of a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

trait DateDigitReader {
    fn read_digit(&self, idx: usize) -> Result<u8>;

    #[inline]
    fn read_and_merge_with_next(&self, idx: usize) -> Result<u8> {
        Ok(self.read_digit(idx)? * 10 + self.read_digit(idx + 1)?)
    }
}

impl DateDigitReader for [u8] {
    #[inline]
    fn read_digit(&self, idx: usize) -> Result<u8> {
        match self.get(idx) {
            Some(digit) if digit.is_ascii_digit() => Ok(digit - b'0'),
            _ => Err(Asn1DerError::InvalidDate),
        }
    }
}

/// Decodes the value octets of a `UTCTime` (tag 0x17) or `GeneralizedTime` (tag 0x18).
///
/// Accepted shapes:
/// - `UTCTime`, 13 bytes: `YYMMDDHHMMSSZ`
/// - `UTCTime`, 15 bytes: `YYMMDDHHMMSS` followed by three bytes, or `YYMMDDHHMM` followed by a
///   `+hhmm` / `-hhmm` offset (seconds are then zero). The offset is not applied.
/// - `GeneralizedTime`, 15 bytes or more: `YYYYMMDDHHMMSS` followed by anything
///
/// Two-digit years of 50 and above are in the 1900s, the others in the 2000s.
pub fn parse_time(tag: Tag, value: &[u8]) -> Result<UtcDate> {
    let unsupported = || Asn1DerError::UnsupportedTimeFormat {
        tag,
        length: value.len(),
    };

    match (tag, value.len()) {
        (Tag::UTC_TIME, 13) => parse_utc_time(value, true),
        (Tag::UTC_TIME, 15) => {
            let with_seconds = value.iter().take(12).all(u8::is_ascii_digit);
            if with_seconds || matches!(value.get(10), Some(b'+' | b'-')) {
                parse_utc_time(value, with_seconds)
            } else {
                Err(Asn1DerError::InvalidDate)
            }
        }
        (Tag::GENERALIZED_TIME, len) if len >= 15 => parse_generalized_time(value),
        _ => {
            debug_log!("parse_time: UNSUPPORTED ({}, {} bytes)", tag, value.len());
            Err(unsupported())
        }
    }
}

fn parse_utc_time(v: &[u8], with_seconds: bool) -> Result<UtcDate> {
    let year = {
        let yy = u16::from(v.read_and_merge_with_next(0)?);
        if yy >= 50 {
            1900 + yy
        } else {
            2000 + yy
        }
    };
    let month = v.read_and_merge_with_next(2)?;
    let day = v.read_and_merge_with_next(4)?;
    let hour = v.read_and_merge_with_next(6)?;
    let minute = v.read_and_merge_with_next(8)?;
    let second = if with_seconds {
        v.read_and_merge_with_next(10)?
    } else {
        0
    };

    UtcDate::new(year, month, day, hour, minute, second).ok_or(Asn1DerError::InvalidDate)
}

fn parse_generalized_time(v: &[u8]) -> Result<UtcDate> {
    let year = u16::from(v.read_and_merge_with_next(0)?) * 100 + u16::from(v.read_and_merge_with_next(2)?);
    let month = v.read_and_merge_with_next(4)?;
    let day = v.read_and_merge_with_next(6)?;
    let hour = v.read_and_merge_with_next(8)?;
    let minute = v.read_and_merge_with_next(10)?;
    let second = v.read_and_merge_with_next(12)?;

    UtcDate::new(year, month, day, hour, minute, second).ok_or(Asn1DerError::InvalidDate)
}

#[cfg(feature = "chrono_conversion")]
mod chrono_conversion {
    use super::*;
    use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

    impl TryFrom<UtcDate> for DateTime<Utc> {
        type Error = Asn1DerError;

        fn try_from(date: UtcDate) -> Result<Self> {
            let naive = NaiveDate::from_ymd_opt(i32::from(date.year), u32::from(date.month), u32::from(date.day))
                .and_then(|d| d.and_hms_opt(u32::from(date.hour), u32::from(date.minute), u32::from(date.second)))
                .ok_or(Asn1DerError::InvalidDate)?;
            Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        }
    }

    impl TryFrom<DateTime<Utc>> for UtcDate {
        type Error = Asn1DerError;

        fn try_from(dt: DateTime<Utc>) -> Result<Self> {
            let year = u16::try_from(dt.year()).map_err(|_| Asn1DerError::InvalidDate)?;
            UtcDate::new(
                year,
                dt.month() as u8,
                dt.day() as u8,
                dt.hour() as u8,
                dt.minute() as u8,
                dt.second() as u8,
            )
            .ok_or(Asn1DerError::InvalidDate)
        }
    }
}

#[cfg(feature = "time_conversion")]
mod time_conversion {
    use super::*;
    use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

    impl TryFrom<UtcDate> for OffsetDateTime {
        type Error = Asn1DerError;

        fn try_from(date: UtcDate) -> Result<Self> {
            let month = Month::try_from(date.month).map_err(|_| Asn1DerError::InvalidDate)?;
            let day = Date::from_calendar_date(i32::from(date.year), month, date.day)
                .map_err(|_| Asn1DerError::InvalidDate)?;
            let time = Time::from_hms(date.hour, date.minute, date.second).map_err(|_| Asn1DerError::InvalidDate)?;
            Ok(PrimitiveDateTime::new(day, time).assume_utc())
        }
    }

    impl TryFrom<OffsetDateTime> for UtcDate {
        type Error = Asn1DerError;

        fn try_from(dt: OffsetDateTime) -> Result<Self> {
            let dt = dt.to_offset(time::UtcOffset::UTC);
            let year = u16::try_from(dt.year()).map_err(|_| Asn1DerError::InvalidDate)?;
            UtcDate::new(year, dt.month().into(), dt.day(), dt.hour(), dt.minute(), dt.second())
                .ok_or(Asn1DerError::InvalidDate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b"500101000000Z", 1950, 1, 1, 0, 0, 0)]
    #[case(b"491231235959Z", 2049, 12, 31, 23, 59, 59)]
    #[case(b"110212144406Z", 2011, 2, 12, 14, 44, 6)]
    #[case(b"991231235959Z", 1999, 12, 31, 23, 59, 59)]
    #[case(b"000229120000Z", 2000, 2, 29, 12, 0, 0)]
    fn utc_time(
        #[case] value: &[u8],
        #[case] year: u16,
        #[case] month: u8,
        #[case] day: u8,
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] second: u8,
    ) {
        let date = parse_time(Tag::UTC_TIME, value).unwrap();
        assert_eq!(date, UtcDate::new(year, month, day, hour, minute, second).unwrap());
    }

    #[test]
    fn utc_time_with_offset_is_read_as_utc() {
        let date = parse_time(Tag::UTC_TIME, b"2406011230+0200").unwrap();
        assert_eq!(date, UtcDate::new(2024, 6, 1, 12, 30, 0).unwrap());

        let date = parse_time(Tag::UTC_TIME, b"240601123045-01").unwrap();
        assert_eq!(date, UtcDate::new(2024, 6, 1, 12, 30, 45).unwrap());
    }

    #[test]
    fn generalized_time() {
        let date = parse_time(Tag::GENERALIZED_TIME, b"20550601123045Z").unwrap();
        assert_eq!(date, UtcDate::new(2055, 6, 1, 12, 30, 45).unwrap());

        // fractional seconds are ignored
        let date = parse_time(Tag::GENERALIZED_TIME, b"19700101000001.123Z").unwrap();
        assert_eq!(date.unix_timestamp(), 1);
    }

    #[rstest]
    #[case(Tag::UTC_TIME, &b"5001010000Z"[..])]
    #[case(Tag::UTC_TIME, &b"500101000000+0000"[..])]
    #[case(Tag::GENERALIZED_TIME, &b"20550601123Z"[..])]
    #[case(Tag::PRINTABLE_STRING, &b"500101000000Z"[..])]
    fn unsupported_shape(#[case] tag: Tag, #[case] value: &[u8]) {
        assert_eq!(
            parse_time(tag, value),
            Err(Asn1DerError::UnsupportedTimeFormat {
                tag,
                length: value.len()
            })
        );
    }

    #[rstest]
    #[case(b"5O0101000000Z")]
    #[case(b"501301000000Z")]
    #[case(b"010229000000Z")]
    #[case(b"500101240000Z")]
    #[case(b"500101006000Z")]
    fn invalid_date(#[case] value: &[u8]) {
        assert_eq!(parse_time(Tag::UTC_TIME, value), Err(Asn1DerError::InvalidDate));
    }

    #[test]
    fn unix_timestamp() {
        assert_eq!(UtcDate::ymd(1970, 1, 1).unwrap().unix_timestamp(), 0);
        assert_eq!(
            UtcDate::new(2011, 2, 12, 14, 44, 6).unwrap().unix_timestamp(),
            1_297_521_846
        );
        assert_eq!(UtcDate::ymd(1950, 1, 1).unwrap().unix_timestamp(), -631_152_000);
    }

    #[test]
    fn display_is_iso_8601() {
        let date = UtcDate::new(2049, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(date.to_string(), "2049-12-31T23:59:59Z");
    }

    #[test]
    fn ordering_is_chronological() {
        let before = UtcDate::new(2011, 2, 12, 14, 44, 6).unwrap();
        let after = UtcDate::ymd(2011, 2, 13).unwrap();
        assert!(before < after);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_as_string() {
        let date = UtcDate::new(2011, 2, 12, 14, 44, 6).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2011-02-12T14:44:06Z\"");
    }
}
