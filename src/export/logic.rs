use crate::db::pool::DbPool;
use crate::db::queries::{all_entries, all_summaries};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export daily summaries (default) or raw entries.
    ///
    /// - `file`: path of the output file
    /// - `entries`: export individual entries instead of summaries
    /// - `force`: overwrite an existing output file
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        entries: bool,
        force: bool,
    ) -> AppResult<()> {
        let dest = expand_tilde(file);

        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if entries {
            let rows = all_entries(&pool.conn)?;
            match format {
                ExportFormat::Csv => csv::write_entries_csv(&dest, &rows)?,
                ExportFormat::Json => json::write_json(&dest, &rows)?,
            }
            notify_export_success("Entries", &dest);
        } else {
            let rows = all_summaries(&pool.conn)?;
            match format {
                ExportFormat::Csv => csv::write_summaries_csv(&dest, &rows)?,
                ExportFormat::Json => json::write_json(&dest, &rows)?,
            }
            notify_export_success("Summaries", &dest);
        }

        Ok(())
    }
}
