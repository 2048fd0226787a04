use chrono::NaiveDate;
use serde::Serialize;

/// Precomputed aggregate for all entries on one calendar date.
/// Owned by the persistence layer: only the record/remove transactions in
/// `core` ever write this row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,   // ⇔ daily_summary.date (TEXT PK "YYYY-MM-DD")
    pub total_ml: i64,     // ⇔ daily_summary.total_ml
    pub entry_count: i64,  // ⇔ daily_summary.entry_count
    pub last_updated: i64, // ⇔ daily_summary.last_updated (ms since epoch)
}

impl DailySummary {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Percentage of a goal reached by this day's total, saturated at whole percents.
    pub fn percent_of_goal(&self, goal_ml: i64) -> Option<i64> {
        if goal_ml <= 0 {
            return None;
        }
        Some(self.total_ml * 100 / goal_ml)
    }
}
