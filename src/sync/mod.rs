//! Remote spreadsheet mirroring.
//!
//! Store mutations map onto three remote write shapes: append an open row on
//! clock-in, patch the clock-out/duration cells on clock-out, and append one
//! complete row for manual entries. The adapter is best-effort throughout:
//! a failed remote call is logged and swallowed, never surfaced as an error
//! to the local operation that triggered it. Local data stays the source of
//! truth even when every remote call fails.

pub mod sheets;

use crate::errors::AppResult;
use crate::models::TimeRecord;
use crate::utils::formatting::hours_cell;
use crate::utils::time::clock_str;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Canonical header written to row 1 (columns A-E).
pub const HEADER: [&str; 5] = ["Date", "Clock In", "Clock Out", "Duration (Hours)", "Notes"];

/// Cell value written where a clock-out or duration is not yet known.
pub const IN_PROGRESS: &str = "In Progress";

/// 1-based row index assigned by the remote append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef(pub u32);

/// Where a session stands with respect to the remote sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No acknowledged append yet.
    NotSynced,
    /// Open session appended; row ref known, clock-out patchable in place.
    AppendedOpen,
    /// Session closed and mirrored.
    Closed,
}

pub fn sync_state(record: &TimeRecord) -> SyncState {
    match (record.sheets_row_number, record.is_open()) {
        (None, _) => SyncState::NotSynced,
        (Some(_), true) => SyncState::AppendedOpen,
        (Some(_), false) => SyncState::Closed,
    }
}

/// Remote sheet operations. Production talks to the Google Sheets REST API
/// ([`sheets::GoogleSheetsClient`]); tests substitute a recording fake.
#[async_trait]
pub trait SheetClient: Send + Sync {
    /// Idempotent: checks row 1 and writes [`HEADER`] only when absent.
    async fn ensure_header_row(&self) -> AppResult<()>;

    /// Append one row after the existing data; returns the assigned row.
    async fn append_row(&self, row: [String; 5]) -> AppResult<RowRef>;

    /// Overwrite only columns C:D of `row` (clock-out and duration),
    /// leaving date, clock-in, and notes untouched.
    async fn patch_range(&self, row: RowRef, values: [String; 2]) -> AppResult<()>;

    /// Replace the whole sheet with header + `rows`, starting at row 1.
    async fn overwrite_all(&self, rows: Vec<[String; 5]>) -> AppResult<()>;
}

#[async_trait]
impl SheetClient for Box<dyn SheetClient> {
    async fn ensure_header_row(&self) -> AppResult<()> {
        (**self).ensure_header_row().await
    }
    async fn append_row(&self, row: [String; 5]) -> AppResult<RowRef> {
        (**self).append_row(row).await
    }
    async fn patch_range(&self, row: RowRef, values: [String; 2]) -> AppResult<()> {
        (**self).patch_range(row, values).await
    }
    async fn overwrite_all(&self, rows: Vec<[String; 5]>) -> AppResult<()> {
        (**self).overwrite_all(rows).await
    }
}

/// Row for a session that is still open: clock-out and duration left blank
/// so the later patch can fill them in.
pub fn open_row(record: &TimeRecord) -> [String; 5] {
    [
        record.date_str(),
        clock_str(&record.clock_in_time),
        String::new(),
        String::new(),
        record.notes.clone(),
    ]
}

/// Complete row for a record, with `In Progress` literals when still open.
pub fn full_row(record: &TimeRecord) -> [String; 5] {
    let (out, duration) = match record.clock_out_time {
        Some(ref end) => (
            clock_str(end),
            hours_cell(record.duration_hours(None).unwrap_or(0.0)),
        ),
        None => (IN_PROGRESS.to_string(), IN_PROGRESS.to_string()),
    };
    [
        record.date_str(),
        clock_str(&record.clock_in_time),
        out,
        duration,
        record.notes.clone(),
    ]
}

/// Drives the per-session state machine against a [`SheetClient`].
pub struct SyncEngine<C: SheetClient> {
    client: C,
}

impl<C: SheetClient> SyncEngine<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Session opened: ensure the header, append the open row, and hand back
    /// the row ref for the caller to persist on the record.
    /// `None` means the append did not succeed; the session stays NotSynced
    /// and its close will fall back to a full-row append.
    pub async fn session_opened(&self, record: &TimeRecord) -> Option<RowRef> {
        match self.try_append_open(record).await {
            Ok(row) => {
                debug!(record_id = record.id, row = row.0, "clock-in mirrored to sheet");
                Some(row)
            }
            Err(e) => {
                warn!(record_id = record.id, error = %e, "clock-in sync failed; continuing");
                None
            }
        }
    }

    async fn try_append_open(&self, record: &TimeRecord) -> AppResult<RowRef> {
        self.client.ensure_header_row().await?;
        self.client.append_row(open_row(record)).await
    }

    /// Session closed: patch C:D in place when the open append was
    /// acknowledged, otherwise append the completed record as a new row.
    /// The fallback trades a duplicate-looking row for never corrupting an
    /// unrelated row with a blind patch.
    pub async fn session_closed(&self, record: &TimeRecord) {
        let result = match record.sheets_row_number {
            Some(row) => {
                let end = match record.clock_out_time {
                    Some(ref end) => clock_str(end),
                    None => return, // still open; nothing to mirror
                };
                let duration = hours_cell(record.duration_hours(None).unwrap_or(0.0));
                self.client.patch_range(RowRef(row), [end, duration]).await
            }
            None => self.client.append_row(full_row(record)).await.map(|_| ()),
        };
        if let Err(e) = result {
            warn!(record_id = record.id, error = %e, "clock-out sync failed; continuing");
        }
    }

    /// Manual entry: always one full-row append, never a patch.
    pub async fn entry_added(&self, record: &TimeRecord) {
        match self.client.append_row(full_row(record)).await {
            Ok(row) => debug!(record_id = record.id, row = row.0, "entry mirrored to sheet"),
            Err(e) => warn!(record_id = record.id, error = %e, "entry sync failed; continuing"),
        }
    }

    /// Manual full sync: overwrite the sheet from row 1 with every record.
    /// A separate, non-composing operation: it does not touch per-record
    /// row refs, so the incremental path keeps working afterwards.
    pub async fn full_sync(&self, records: &[TimeRecord]) -> AppResult<usize> {
        let rows: Vec<[String; 5]> = records.iter().map(full_row).collect();
        let count = rows.len();
        self.client.overwrite_all(rows).await?;
        Ok(count)
    }
}
