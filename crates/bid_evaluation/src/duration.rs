use chrono::NaiveDateTime;

use crate::error::BidError;

/// Timestamp format submitted by bid forms: date plus hour:minute, no
/// seconds, no timezone (HTML datetime-local).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days between two timestamps, floored toward negative infinity.
///
/// A negative result (end before start) is passed through unmodified;
/// the caller decides whether to reject it.
pub fn duration_days(start: &str, end: &str) -> Result<i64, BidError> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    Ok((end - start).num_seconds().div_euclid(SECONDS_PER_DAY))
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, BidError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| BidError::Format {
        value: value.to_string(),
    })
}
