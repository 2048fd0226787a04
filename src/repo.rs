//! The unified read/write surface consumed by the CLI (and any other
//! presentation layer).
//!
//! A `WaterRepo` is built once from the loaded `Config` and passed by
//! reference to whoever needs it; there is no global shared instance.
//! It composes the SQLite connection, the YAML settings store and the
//! change-notification hubs for the live queries.

use crate::config::Config;
use crate::core::add::RecordLogic;
use crate::core::del::DeleteLogic;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{DailySummary, WaterEntry};
use crate::settings::SettingsStore;
use crate::watch::Watchable;
use chrono::NaiveDate;
use crossbeam_channel::Receiver;
use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::Mutex;

pub struct WaterRepo {
    conn: Mutex<Connection>,
    settings: SettingsStore,
    total_hubs: Mutex<HashMap<NaiveDate, Watchable<i64>>>,
    summary_hub: Watchable<Vec<DailySummary>>,
    goal_hub: Watchable<i64>,
}

impl WaterRepo {
    /// Open the database named in the config and make sure the schema is
    /// current. The settings store is lazy: the file is only created on the
    /// first goal update.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let conn = Connection::open(&cfg.database)?;
        init_db(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            settings: SettingsStore::new(&cfg.settings),
            total_hubs: Mutex::new(HashMap::new()),
            summary_hub: Watchable::new(),
            goal_hub: Watchable::new(),
        })
    }

    // ---------------------------------------------------------------
    // Intake mutations
    // ---------------------------------------------------------------

    /// Record an intake entry. The entry insert and the summary upsert for
    /// its date commit as one transaction. The post-commit values are
    /// published before the connection lock is released, so delivery order
    /// matches commit order and a subscriber's last-seen value is always
    /// the latest committed one.
    pub fn add_water_intake(
        &self,
        amount_ml: i64,
        date: NaiveDate,
        timestamp: i64,
    ) -> AppResult<WaterEntry> {
        if amount_ml <= 0 {
            return Err(AppError::InvalidAmount(amount_ml));
        }

        let mut conn = self.conn.lock().unwrap();
        let entry = RecordLogic::apply(&mut conn, amount_ml, date, timestamp)?;

        log_op(
            &conn,
            "add",
            &entry.id.to_string(),
            &format!("Recorded {} ml for {}", amount_ml, entry.date_str()),
        );

        let (total, _) = queries::totals_for_date(&conn, &date)?;
        let summaries = queries::all_summaries(&conn)?;
        self.publish_day(date, total, summaries);

        Ok(entry)
    }

    /// Delete an entry. Idempotent: a missing id is a no-op and nothing is
    /// published.
    pub fn delete_water_entry(&self, entry: &WaterEntry) -> AppResult<bool> {
        self.remove_entry_by_id(entry.id)
    }

    /// Returns whether a row was actually removed.
    pub fn remove_entry_by_id(&self, entry_id: i64) -> AppResult<bool> {
        let mut conn = self.conn.lock().unwrap();
        let Some(date) = DeleteLogic::apply(&mut conn, entry_id)? else {
            return Ok(false);
        };

        log_op(
            &conn,
            "del",
            &entry_id.to_string(),
            &format!("Deleted entry {} ({})", entry_id, date.format("%Y-%m-%d")),
        );

        let (total, _) = queries::totals_for_date(&conn, &date)?;
        let summaries = queries::all_summaries(&conn)?;
        self.publish_day(date, total, summaries);

        Ok(true)
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// One-shot total for a date, straight from the entry table.
    pub fn today_total(&self, date: NaiveDate) -> AppResult<i64> {
        let conn = self.conn.lock().unwrap();
        let (total, _) = queries::totals_for_date(&conn, &date)?;
        Ok(total)
    }

    /// Live total for a date: the current value plus a receiver that yields
    /// the new total after every write touching that date. Dropping the
    /// receiver unsubscribes.
    ///
    /// Snapshot and subscription happen under the connection lock: a racing
    /// write either lands in the snapshot or arrives through the channel,
    /// never neither.
    pub fn watch_today_total(&self, date: NaiveDate) -> AppResult<(i64, Receiver<i64>)> {
        let conn = self.conn.lock().unwrap();
        let (current, _) = queries::totals_for_date(&conn, &date)?;
        let rx = {
            let mut hubs = self.total_hubs.lock().unwrap();
            hubs.entry(date).or_default().subscribe()
        };
        Ok((current, rx))
    }

    pub fn all_daily_summaries(&self) -> AppResult<Vec<DailySummary>> {
        let conn = self.conn.lock().unwrap();
        Ok(queries::all_summaries(&conn)?)
    }

    /// Live history view: the current summary list (descending by date)
    /// plus a receiver fed the full recomputed list after every write.
    /// Snapshot and subscription are atomic with respect to writers.
    pub fn watch_daily_summaries(
        &self,
    ) -> AppResult<(Vec<DailySummary>, Receiver<Vec<DailySummary>>)> {
        let conn = self.conn.lock().unwrap();
        let current = queries::all_summaries(&conn)?;
        Ok((current, self.summary_hub.subscribe()))
    }

    pub fn summary_for_date(&self, date: NaiveDate) -> AppResult<Option<DailySummary>> {
        let conn = self.conn.lock().unwrap();
        Ok(queries::summary_for_date(&conn, &date)?)
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> AppResult<Vec<WaterEntry>> {
        let conn = self.conn.lock().unwrap();
        Ok(queries::entries_for_date(&conn, &date)?)
    }

    // ---------------------------------------------------------------
    // Daily goal
    // ---------------------------------------------------------------

    pub fn daily_goal(&self) -> AppResult<i64> {
        self.settings.daily_goal_ml()
    }

    pub fn watch_daily_goal(&self) -> AppResult<(i64, Receiver<i64>)> {
        // Goal updates also run under the connection lock, which makes the
        // snapshot-then-subscribe pair atomic with respect to them.
        let _conn = self.conn.lock().unwrap();
        let current = self.settings.daily_goal_ml()?;
        Ok((current, self.goal_hub.subscribe()))
    }

    pub fn update_daily_goal(&self, goal_ml: i64) -> AppResult<()> {
        let conn = self.conn.lock().unwrap();
        self.settings.set_daily_goal(goal_ml)?;
        log_op(
            &conn,
            "goal",
            &goal_ml.to_string(),
            &format!("Daily goal set to {} ml", goal_ml),
        );
        self.goal_hub.publish(&goal_ml);
        Ok(())
    }

    pub fn reset_daily_goal_to_default(&self) -> AppResult<()> {
        self.update_daily_goal(crate::settings::DEFAULT_DAILY_GOAL_ML)
    }

    // ---------------------------------------------------------------

    fn publish_day(&self, date: NaiveDate, total: i64, summaries: Vec<DailySummary>) {
        {
            let hubs = self.total_hubs.lock().unwrap();
            if let Some(hub) = hubs.get(&date) {
                hub.publish(&total);
            }
        }
        self.summary_hub.publish(&summaries);
    }
}

/// Write to the internal log table without failing the operation.
fn log_op(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
