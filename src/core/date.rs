// LogSift - core/date.rs
//
// Parsing of the `YYYYMMDD` date shape shared by log file names and the
// range boundaries. Pure: returns a Result and leaves the error policy to
// the call site (the scanner swallows, boundary parsing propagates).

use crate::util::constants::{LOG_DATE_FORMAT, LOG_DATE_PATTERN, MIN_LOG_YEAR};
use crate::util::error::DateParseError;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled `LOG_DATE_PATTERN`.
fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(LOG_DATE_PATTERN).expect("LOG_DATE_PATTERN is a valid regex"))
}

/// Parse `s` as an eight-digit `YYYYMMDD` calendar date.
///
/// The shape check runs before `chrono` because `%Y%m%d` alone also accepts
/// shorter inputs such as `2024111` (read as 2024-11-1). Year 0 exists in
/// chrono's proleptic calendar but is rejected: the earliest year is 1.
pub fn parse_log_date(s: &str) -> Result<NaiveDate, DateParseError> {
    if !date_shape().is_match(s) {
        return Err(DateParseError::Malformed {
            input: s.to_string(),
        });
    }

    let date = NaiveDate::parse_from_str(s, LOG_DATE_FORMAT).map_err(|source| {
        DateParseError::InvalidDate {
            input: s.to_string(),
            source,
        }
    })?;

    if date.year() < MIN_LOG_YEAR {
        return Err(DateParseError::YearOutOfRange {
            input: s.to_string(),
            year: date.year(),
        });
    }

    Ok(date)
}
