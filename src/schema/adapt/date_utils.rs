//! Module for handling date and timestamp parsing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::schema::adapt::types::DateFormatConfig;

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    config
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Parse a timestamp string into UTC
///
/// Offset-qualified RFC 3339 text is converted to UTC. Text without an offset
/// is read as UTC using the configured formats. A bare date is midnight UTC
/// when `date_as_midnight` is set.
#[must_use]
pub fn parse_timestamp_string(s: &str, config: &DateFormatConfig) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Some(naive) = config
        .timestamp_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
    {
        return Some(naive.and_utc());
    }

    if config.date_as_midnight {
        return parse_date_string(s, config)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
    }

    None
}

/// Year of a timestamp string, if it carries a time component and parses
///
/// The year is read in the text's own offset, not after conversion to UTC.
#[must_use]
pub fn timestamp_year(s: &str, config: &DateFormatConfig) -> Option<i64> {
    if !s.contains('T') {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Some(i64::from(timestamp.year()));
    }
    parse_timestamp_string(s, config).map(|timestamp| i64::from(timestamp.year()))
}

/// Canonical text form of a timestamp
///
/// Sub-second digits are written only when present, so the text parses back
/// to the same instant.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
