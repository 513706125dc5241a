//! JSON file read/write for the record store.
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! failed write never truncates the existing record file.

use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use std::fs;
use std::path::Path;

pub fn read_records(path: &Path) -> AppResult<Vec<TimeRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Storage(format!("Failed to read {}: {e}", path.display())))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("Corrupt record file {}: {e}", path.display())))
}

pub fn write_records(path: &Path, records: &[TimeRecord]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Storage(format!("Failed to create data dir: {e}")))?;
        }
    }

    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Storage(format!("Failed to serialize records: {e}")))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .map_err(|e| AppError::Storage(format!("Failed to write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path)
        .map_err(|e| AppError::Storage(format!("Failed to replace {}: {e}", path.display())))?;
    Ok(())
}
