use chrono::{NaiveDate, Utc};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Current instant as milliseconds since the epoch, the timestamp unit used
/// across the entry and summary tables.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
