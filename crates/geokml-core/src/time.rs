//! Range-checked timestamps for `<when>`, `<begin>` and friends.
//!
//! KML timestamps are RFC 3339 strings, which only admit four-digit years.
//! [`Timestamp`] checks the range when it is built so that encoding can never
//! fail later, halfway through writing a document.

use std::fmt;

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Utc};

use crate::error::ValueError;

/// A UTC instant that can be written as an RFC 3339 timestamp.
///
/// `Display` writes second precision with a trailing `Z`; any sub-second part
/// is dropped.
///
/// # Examples
///
/// ```
/// # use geokml_core::time::Timestamp;
/// let ts = Timestamp::from_ymd_hms(2010, 5, 28, 2, 2, 9).unwrap();
/// assert_eq!(ts.to_string(), "2010-05-28T02:02:09Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Smallest year representable in RFC 3339.
    pub const MIN_YEAR: i32 = 0;

    /// Largest year representable in RFC 3339.
    pub const MAX_YEAR: i32 = 9999;

    /// Wraps a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::TimestampOutOfRange`] if the year lies outside
    /// `0..=9999`.
    pub fn new(datetime: DateTime<Utc>) -> Result<Self, ValueError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&datetime.year()) {
            return Err(ValueError::TimestampOutOfRange(datetime.to_string()));
        }
        Ok(Self(datetime))
    }

    /// Builds a timestamp from calendar fields in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidDateTime`] for a non-existent date or time
    /// and [`ValueError::TimestampOutOfRange`] for a year outside `0..=9999`.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ValueError> {
        let datetime = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .ok_or_else(|| {
                ValueError::InvalidDateTime(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;
        Self::new(datetime)
    }

    /// Returns the wrapped instant
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = ValueError;

    fn try_from(datetime: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::new(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_timestamp_display() {
        let begin = Timestamp::from_ymd_hms(1876, 8, 1, 0, 0, 0).unwrap();
        assert_eq!(begin.to_string(), "1876-08-01T00:00:00Z");

        let end = Timestamp::from_ymd_hms(2015, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(end.to_string(), "2015-12-31T23:59:59Z");
    }

    #[test]
    fn test_timestamp_drops_subsecond_precision() {
        let base = Utc.with_ymd_and_hms(2010, 5, 28, 2, 2, 9).unwrap();
        let ts = Timestamp::new(base + Duration::milliseconds(750)).unwrap();
        assert_eq!(ts.to_string(), "2010-05-28T02:02:09Z");
    }

    #[test]
    fn test_timestamp_pads_small_years() {
        let ts = Timestamp::from_ymd_hms(800, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ts.to_string(), "0800-01-01T00:00:00Z");
    }

    #[test]
    fn test_timestamp_range_bounds() {
        assert!(Timestamp::from_ymd_hms(0, 1, 1, 0, 0, 0).is_ok());
        assert!(Timestamp::from_ymd_hms(9999, 12, 31, 23, 59, 59).is_ok());
        assert!(matches!(
            Timestamp::from_ymd_hms(10000, 1, 1, 0, 0, 0),
            Err(ValueError::TimestampOutOfRange(_))
        ));
        assert!(matches!(
            Timestamp::from_ymd_hms(-1, 12, 31, 0, 0, 0),
            Err(ValueError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn test_timestamp_invalid_calendar_date() {
        assert!(matches!(
            Timestamp::from_ymd_hms(2015, 2, 30, 0, 0, 0),
            Err(ValueError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn test_timestamp_try_from() {
        let datetime = Utc.with_ymd_and_hms(2001, 7, 13, 12, 0, 0).unwrap();
        let ts = Timestamp::try_from(datetime).unwrap();
        assert_eq!(ts.as_datetime(), datetime);
    }
}
