use crate::models::{DailySummary, WaterEntry};
use csv::Writer;
use std::path::Path;

/// Write daily summaries as CSV to the given file.
pub fn write_summaries_csv(path: &Path, summaries: &[DailySummary]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "total_ml", "entry_count", "last_updated"])?;

    for s in summaries {
        wtr.write_record(&[
            s.date_str(),
            s.total_ml.to_string(),
            s.entry_count.to_string(),
            s.last_updated.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write raw entries as CSV to the given file.
pub fn write_entries_csv(path: &Path, entries: &[WaterEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "date", "amount_ml", "timestamp", "created_at"])?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.date_str(),
            e.amount_ml.to_string(),
            e.timestamp.to_string(),
            e.created_at.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
