//! Remove-entry transaction, the mirror of `RecordLogic`.

use crate::db::queries::{delete_entry_by_id, get_entry, totals_for_date, upsert_summary};
use crate::errors::AppResult;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete an entry by id and bring the day's summary row up to date.
    ///
    /// Deleting an id that does not exist is a no-op: no summary row is
    /// touched and `Ok(None)` is returned. When the deleted entry was the
    /// last one for its date, the summary is upserted to a zeroed row
    /// rather than removed.
    pub fn apply(conn: &mut Connection, entry_id: i64) -> AppResult<Option<NaiveDate>> {
        let tx = conn.transaction()?;

        let Some(entry) = get_entry(&tx, entry_id)? else {
            tx.commit()?;
            return Ok(None);
        };

        delete_entry_by_id(&tx, entry_id)?;

        let (total, count) = totals_for_date(&tx, &entry.date)?;
        upsert_summary(&tx, &entry.date, total, count, Utc::now().timestamp_millis())?;

        tx.commit()?;
        Ok(Some(entry.date))
    }
}
