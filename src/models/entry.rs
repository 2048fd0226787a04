use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// A single recorded instance of water consumption.
/// Immutable once created except for deletion.
#[derive(Debug, Clone, Serialize)]
pub struct WaterEntry {
    pub id: i64,
    pub amount_ml: i64,     // ⇔ water_entries.amount_ml (INTEGER, positive)
    pub timestamp: i64,     // ⇔ water_entries.timestamp (ms since epoch)
    pub date: NaiveDate,    // ⇔ water_entries.date (TEXT "YYYY-MM-DD")
    pub created_at: i64,    // ⇔ water_entries.created_at (ms since epoch)
}

impl WaterEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Timestamp converted to the local timezone, for display.
    pub fn local_time(&self) -> DateTime<Local> {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap().with_timezone(&Local))
    }
}
