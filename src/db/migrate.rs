//! Schema creation and upgrades for the waterlog database.
//! Every step is idempotent, so `run_pending_migrations` can be called on
//! every startup as well as from `db --migrate`.

use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `water_entries` table with the current schema.
fn create_water_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS water_entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            amount_ml  INTEGER NOT NULL,
            timestamp  INTEGER NOT NULL,
            date       TEXT NOT NULL,
            created_at INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_water_entries_date ON water_entries(date);
        "#,
    )?;
    Ok(())
}

/// Create the `daily_summary` table. One row per calendar date; rows are only
/// ever written by the record/remove transactions, via INSERT OR REPLACE.
fn create_daily_summary_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_summary (
            date         TEXT PRIMARY KEY,
            total_ml     INTEGER NOT NULL DEFAULT 0,
            entry_count  INTEGER NOT NULL DEFAULT 0,
            last_updated INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Early pre-release databases lacked `created_at` on `water_entries`.
fn migrate_add_created_at(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "water_entries")? {
        return Ok(());
    }
    if has_column(conn, "water_entries", "created_at")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE water_entries ADD COLUMN created_at INTEGER NOT NULL DEFAULT 0;
        UPDATE water_entries SET created_at = timestamp WHERE created_at = 0;
        "#,
    )?;
    Ok(())
}

/// Rebuild every `daily_summary` row from the entries currently on disk.
/// Used by `db --migrate` as a repair step: the recompute-and-replace write
/// path is self-correcting per date, this covers the whole table at once.
pub fn rebuild_daily_summaries(conn: &Connection) -> Result<usize> {
    let now = chrono::Utc::now().timestamp_millis();
    let changed = conn.execute(
        r#"
        INSERT OR REPLACE INTO daily_summary (date, total_ml, entry_count, last_updated)
        SELECT date, COALESCE(SUM(amount_ml), 0), COUNT(*), ?1
        FROM water_entries
        GROUP BY date
        "#,
        [now],
    )?;
    Ok(changed)
}

/// Run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_water_entries_table(conn)?;
    create_daily_summary_table(conn)?;
    migrate_add_created_at(conn)?;
    Ok(())
}
