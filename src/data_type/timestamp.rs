//! Date/time patterns recognized by the type detector.
//!
//! Patterns are tried in declaration order and the first one
//! that parses wins.
//! Parsed values are interpreted as UTC.
use chrono::{NaiveDate, NaiveDateTime};


/// A date/time pattern in `chrono` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Pattern carrying both date and time.
    DateTime(&'static str),
    /// Date-only pattern, read as midnight.
    Date(&'static str),
}


/// The ordered list of supported timestamp patterns.
pub const TIMESTAMP_PATTERNS: [Pattern; 7] = [
    Pattern::DateTime("%Y-%m-%d %H:%M:%S"),
    Pattern::Date("%Y-%m-%d"),
    Pattern::Date("%m/%d/%Y"),
    Pattern::Date("%d/%m/%Y"),
    Pattern::DateTime("%Y-%m-%dT%H:%M:%S"),
    Pattern::DateTime("%Y-%m-%dT%H:%M:%S%.3f"),
    Pattern::DateTime("%Y-%m-%dT%H:%M:%SZ"),
];


impl Pattern {
    /// Parses `value` with this pattern.
    #[inline]
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(fmt) => NaiveDateTime::parse_from_str(value, fmt).ok(),
            Self::Date(fmt) => NaiveDate::parse_from_str(value, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0)),
        }
    }
}


/// Parses `value` with the first matching pattern.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_PATTERNS.iter()
        .find_map(|pattern| pattern.parse(value))
}


/// Returns `true` if some pattern accepts `value`.
#[inline]
pub fn is_timestamp(value: &str) -> bool {
    parse_timestamp(value).is_some()
}


/// Seconds since the Unix epoch (UTC), with millisecond precision.
/// Returns `None` if no pattern accepts `value`.
pub fn epoch_seconds(value: &str) -> Option<f64> {
    parse_timestamp(value)
        .map(|datetime| datetime.and_utc().timestamp_millis() as f64 / 1_000f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_pattern() {
        let values = [
            "2024-03-01 12:30:00",
            "2024-03-01",
            "03/01/2024",
            "31/01/2024",
            "2024-03-01T12:30:00",
            "2024-03-01T12:30:00.250",
            "2024-03-01T12:30:00Z",
        ];
        for value in values {
            assert!(is_timestamp(value), "{value} should parse");
        }
    }

    #[test]
    fn epoch_of_known_dates() {
        assert_eq!(epoch_seconds("1970-01-02"), Some(86_400.0));
        assert_eq!(epoch_seconds("1970-01-01T00:00:01.500"), Some(1.5));
        assert_eq!(epoch_seconds("not a date"), None);
    }

    #[test]
    fn month_first_wins_over_day_first() {
        // 02/03 is read as February 3rd since `%m/%d/%Y` comes first.
        let datetime = parse_timestamp("02/03/2024").unwrap();
        assert_eq!(datetime.date(), NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
    }
}
