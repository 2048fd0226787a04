//! Time utilities: parsing HH:MM and combining it with a calendar date.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Millisecond epoch timestamp for a local date + time of day.
pub fn timestamp_ms(date: NaiveDate, time: NaiveTime) -> i64 {
    let dt = date.and_time(time);
    match Local.from_local_datetime(&dt).single() {
        Some(local) => local.timestamp_millis(),
        // Ambiguous or skipped local time (DST edge): fall back to UTC.
        None => dt.and_utc().timestamp_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        assert!(parse_time("09:30").is_some());
        assert!(parse_time("9:30").is_some());
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("09:30:00").is_none());
    }
}
