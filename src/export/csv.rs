use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write export rows as CSV with the canonical five-column header.
pub fn write_csv(path: &Path, rows: &[[String; 5]]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(super::header_row())
        .map_err(|e| AppError::Export(e.to_string()))?;
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
