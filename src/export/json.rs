use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::path::Path;

/// Write any serializable record list as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
