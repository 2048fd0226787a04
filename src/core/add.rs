//! Record-intake transaction: entry insert plus summary upsert as one
//! atomic unit.

use crate::db::queries::{insert_entry, totals_for_date, upsert_summary};
use crate::errors::AppResult;
use crate::models::WaterEntry;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;

pub struct RecordLogic;

impl RecordLogic {
    /// Insert a new entry and bring the day's summary row up to date.
    ///
    /// The summary is recomputed with SUM/COUNT over all entries for the
    /// date rather than incremented, so a stale or missing row is repaired
    /// by the very next write. No observer can see the entry without the
    /// matching summary: both writes commit together.
    pub fn apply(
        conn: &mut Connection,
        amount_ml: i64,
        date: NaiveDate,
        timestamp: i64,
    ) -> AppResult<WaterEntry> {
        let now = Utc::now().timestamp_millis();

        let tx = conn.transaction()?;

        let id = insert_entry(&tx, amount_ml, &date, timestamp, now)?;

        let (total, count) = totals_for_date(&tx, &date)?;
        upsert_summary(&tx, &date, total, count, now)?;

        tx.commit()?;

        Ok(WaterEntry {
            id,
            amount_ml,
            timestamp,
            date,
            created_at: now,
        })
    }
}
