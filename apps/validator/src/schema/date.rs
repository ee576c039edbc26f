use std::fmt;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The only date layout the schema accepts.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date {input:?}: expected YYYY-MM-DD")]
pub struct DateParseError {
    pub input: String,
}

/// A calendar day as it appears in a resume document.
///
/// The unset state (the "zero date") is a valid value distinct from a parse
/// failure; optional fields such as an ongoing job's `endDate` decode to it
/// when absent. Ordering is calendar order, with the zero date below any set
/// date — validation rules never compare a zero date anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResumeDate(Option<NaiveDate>);

impl ResumeDate {
    /// Parses exactly `YYYY-MM-DD`, stripping surrounding quote characters
    /// first (the payload is JSON, so values may arrive still quoted).
    /// Anything else — short widths, date-times, out-of-range month/day —
    /// is an error carrying the offending text.
    pub fn parse(text: &str) -> Result<Self, DateParseError> {
        let s = text.trim_matches('"');
        if !has_layout_shape(s) {
            return Err(DateParseError {
                input: text.to_string(),
            });
        }
        let date = NaiveDate::parse_from_str(s, DATE_LAYOUT).map_err(|_| DateParseError {
            input: text.to_string(),
        })?;
        Ok(ResumeDate(Some(date)))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        ResumeDate(Some(date))
    }

    /// The unset sentinel.
    pub fn zero() -> Self {
        ResumeDate(None)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }
}

/// `YYYY-MM-DD` shape check. chrono's `%Y-%m-%d` tolerates short-width
/// fields, so the exact widths are pinned here before chrono validates the
/// calendar range.
fn has_layout_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

impl fmt::Display for ResumeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_LAYOUT)),
            None => Ok(()),
        }
    }
}

impl Serialize for ResumeDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResumeDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ResumeDate::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> ResumeDate {
        ResumeDate::from_naive(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(ResumeDate::parse("2023-01-01").unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn test_parse_strips_quotes() {
        assert_eq!(ResumeDate::parse("\"2023-01-01\"").unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn test_parse_format_round_trip() {
        let d = date(1999, 12, 31);
        assert_eq!(ResumeDate::parse(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn test_parse_equal_twice() {
        assert_eq!(
            ResumeDate::parse("2023-01-01").unwrap(),
            ResumeDate::parse("2023-01-01").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_invalid_month() {
        let err = ResumeDate::parse("2023-13-01").unwrap_err();
        assert!(err.input.contains("2023-13-01"));
    }

    #[test]
    fn test_parse_rejects_invalid_day() {
        assert!(ResumeDate::parse("2023-02-30").is_err());
    }

    #[test]
    fn test_parse_rejects_short_widths() {
        assert!(ResumeDate::parse("2023-1-1").is_err());
    }

    #[test]
    fn test_parse_rejects_datetime() {
        assert!(ResumeDate::parse("2023-01-01T00:00:00").is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ResumeDate::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_slashes() {
        assert!(ResumeDate::parse("2023/01/01").is_err());
    }

    #[test]
    fn test_zero_is_default() {
        assert!(ResumeDate::default().is_zero());
        assert_eq!(ResumeDate::default(), ResumeDate::zero());
    }

    #[test]
    fn test_zero_displays_empty() {
        assert_eq!(ResumeDate::zero().to_string(), "");
    }

    #[test]
    fn test_calendar_ordering() {
        assert!(date(2022, 12, 31) < date(2023, 1, 1));
        assert!(date(2023, 1, 2) > date(2023, 1, 1));
        assert!(date(2023, 1, 1) <= date(2023, 1, 1));
    }

    #[test]
    fn test_deserialize_in_json() {
        let d: ResumeDate = serde_json::from_str("\"2020-06-15\"").unwrap();
        assert_eq!(d, date(2020, 6, 15));
    }

    #[test]
    fn test_deserialize_rejects_malformed_json_value() {
        assert!(serde_json::from_str::<ResumeDate>("\"June 2020\"").is_err());
    }

    #[test]
    fn test_serialize_canonical() {
        assert_eq!(
            serde_json::to_string(&date(2020, 6, 15)).unwrap(),
            "\"2020-06-15\""
        );
    }
}
