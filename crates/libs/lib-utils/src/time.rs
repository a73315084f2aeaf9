//! # Time Utilities
//!
//! The remote functions serialize database timestamps with Python's `str()`,
//! which yields `2024-01-01 12:00:00.123456` (optionally with an offset),
//! while some fields arrive as RFC 3339. Both are accepted here.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse a timestamp string sent by the remote system into UTC.
///
/// Naive timestamps (no offset) are taken as UTC.
pub fn parse_remote_time(moment: &str) -> Result<DateTime<Utc>, Error> {
    let moment = moment.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(moment) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(moment, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(moment, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot parse timestamp '{0}'")]
    FailToDateParse(String),
}
// endregion: --- Error
