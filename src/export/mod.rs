mod csv;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use crate::sync::{full_row, HEADER};
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Tabular view of the record set: the five sheet columns, one row per
/// record, newest clock-in first, `In Progress` for open cells.
pub fn export_rows(records: &[TimeRecord]) -> Vec<[String; 5]> {
    let mut sorted: Vec<&TimeRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.clock_in_time.cmp(&a.clock_in_time));
    sorted.into_iter().map(full_row).collect()
}

pub fn export(
    records: &[TimeRecord],
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let rows = export_rows(records);
    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows),
        ExportFormat::Xlsx => xlsx::write_xlsx(path, &rows),
    }
}

pub(crate) fn header_row() -> [String; 5] {
    HEADER.map(|h| h.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn rows_are_newest_first_with_in_progress_literals() {
        let mut closed = TimeRecord::open(1, "default", ts("2024-01-01T09:00:00Z"));
        closed.close(ts("2024-01-01T17:30:00Z"), "a note").unwrap();
        let open = TimeRecord::open(2, "default", ts("2024-01-02T09:00:00Z"));

        let rows = export_rows(&[closed, open]);
        assert_eq!(rows.len(), 2);
        // newest clock-in first
        assert_eq!(rows[0][0], "2024-01-02");
        assert_eq!(rows[0][2], "In Progress");
        assert_eq!(rows[0][3], "In Progress");
        assert_eq!(rows[1][3], "8.50");
        assert_eq!(rows[1][4], "a note");
    }
}
