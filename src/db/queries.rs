//! Row mapping and plain queries over `water_entries` and `daily_summary`.
//! All functions take `&Connection` so they work both on a standalone
//! connection and inside a transaction.

use crate::errors::AppError;
use crate::models::{DailySummary, WaterEntry};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

pub fn map_entry_row(row: &Row) -> Result<WaterEntry> {
    let date_str: String = row.get("date")?;
    let date = parse_db_date(&date_str)?;

    Ok(WaterEntry {
        id: row.get("id")?,
        amount_ml: row.get("amount_ml")?,
        timestamp: row.get("timestamp")?,
        date,
        created_at: row.get("created_at")?,
    })
}

pub fn map_summary_row(row: &Row) -> Result<DailySummary> {
    let date_str: String = row.get("date")?;
    let date = parse_db_date(&date_str)?;

    Ok(DailySummary {
        date,
        total_ml: row.get("total_ml")?,
        entry_count: row.get("entry_count")?,
        last_updated: row.get("last_updated")?,
    })
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

/// Insert a single entry row. Returns the generated id.
pub fn insert_entry(
    conn: &Connection,
    amount_ml: i64,
    date: &NaiveDate,
    timestamp: i64,
    created_at: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO water_entries (amount_ml, timestamp, date, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            amount_ml,
            timestamp,
            date.format("%Y-%m-%d").to_string(),
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete an entry by id. Returns the number of rows removed (0 or 1).
pub fn delete_entry_by_id(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM water_entries WHERE id = ?1", [id])
}

/// Fetch a single entry by id.
pub fn get_entry(conn: &Connection, id: i64) -> Result<Option<WaterEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, amount_ml, timestamp, date, created_at
         FROM water_entries
         WHERE id = ?1",
    )?;

    match stmt.query_row([id], map_entry_row) {
        Ok(e) => Ok(Some(e)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// All entries for a date, most recent first.
pub fn entries_for_date(conn: &Connection, date: &NaiveDate) -> Result<Vec<WaterEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, amount_ml, timestamp, date, created_at
         FROM water_entries
         WHERE date = ?1
         ORDER BY timestamp DESC",
    )?;
    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_entry_row)?;

    rows.collect::<Result<Vec<_>, _>>()
}

/// Recompute total and count for a date over all entries currently present.
pub fn totals_for_date(conn: &Connection, date: &NaiveDate) -> Result<(i64, i64)> {
    let mut stmt = conn.prepare_cached(
        "SELECT COALESCE(SUM(amount_ml), 0), COUNT(*)
         FROM water_entries
         WHERE date = ?1",
    )?;
    let date_str = date.format("%Y-%m-%d").to_string();
    stmt.query_row([date_str], |r| Ok((r.get(0)?, r.get(1)?)))
}

/// Insert-or-replace the summary row for a date.
pub fn upsert_summary(
    conn: &Connection,
    date: &NaiveDate,
    total_ml: i64,
    entry_count: i64,
    last_updated: i64,
) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO daily_summary (date, total_ml, entry_count, last_updated)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            date.format("%Y-%m-%d").to_string(),
            total_ml,
            entry_count,
            last_updated,
        ],
    )?;
    Ok(())
}

/// Fetch the summary row for a date, if any.
pub fn summary_for_date(conn: &Connection, date: &NaiveDate) -> Result<Option<DailySummary>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, total_ml, entry_count, last_updated
         FROM daily_summary
         WHERE date = ?1",
    )?;
    let date_str = date.format("%Y-%m-%d").to_string();

    match stmt.query_row([date_str], map_summary_row) {
        Ok(s) => Ok(Some(s)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// All summary rows, most recent date first.
pub fn all_summaries(conn: &Connection) -> Result<Vec<DailySummary>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, total_ml, entry_count, last_updated
         FROM daily_summary
         ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], map_summary_row)?;

    rows.collect::<Result<Vec<_>, _>>()
}

/// Every entry in the database, newest first.
pub fn all_entries(conn: &Connection) -> Result<Vec<WaterEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, amount_ml, timestamp, date, created_at
         FROM water_entries
         ORDER BY date DESC, timestamp DESC",
    )?;
    let rows = stmt.query_map([], map_entry_row)?;

    rows.collect::<Result<Vec<_>, _>>()
}

pub fn count_entries(conn: &Connection) -> Result<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM water_entries")?;
    stmt.query_row([], |r| r.get(0))
}

pub fn load_log(conn: &Connection) -> Result<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, operation, message FROM log ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;

    rows.collect::<Result<Vec<_>, _>>()
}
