//! Day-boundary arithmetic over UTC instants.
//!
//! Stored documents carry millisecond timestamps; every day boundary used by
//! the reporting code is a UTC midnight.

use super::TaskRecordError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Milliseconds in one reporting day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Display format for day keys in reports.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Converts a stored millisecond timestamp into an instant.
///
/// # Errors
///
/// Returns [`TaskRecordError::InvalidTimestamp`] when `millis` cannot be
/// represented.
pub fn from_millis(field: &'static str, millis: i64) -> Result<DateTime<Utc>, TaskRecordError> {
    DateTime::from_timestamp_millis(millis).ok_or(TaskRecordError::InvalidTimestamp {
        field,
        value: millis,
    })
}

/// Truncates an instant to the UTC midnight starting its day.
#[must_use]
pub fn floor_to_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Number of whole days from `from` to `to`, rounded towards negative
/// infinity.
#[must_use]
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    to.signed_duration_since(from)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Returns the instant `days` whole days after `start`.
#[must_use]
pub fn add_days(start: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    start + TimeDelta::days(days)
}

/// Formats an instant as its `YYYY-MM-DD` UTC day.
#[must_use]
pub fn format_day(instant: DateTime<Utc>) -> String {
    instant.format(DAY_FORMAT).to_string()
}

/// Parses either an RFC 3339 instant or a bare `YYYY-MM-DD` day (taken as
/// UTC midnight).
///
/// # Errors
///
/// Returns the day parse error when neither form matches.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let trimmed = value.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}
