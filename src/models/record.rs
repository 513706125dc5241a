use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One work session: a clock-in/clock-out pair or a manual time entry.
///
/// Field names match the wire/persistence format exactly (camelCase JSON):
/// a record file written by one frontend is readable by every other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    /// Millisecond-timestamp-derived id; unique and sortable by creation.
    pub id: i64,

    #[serde(default = "default_user")]
    pub user_id: String,

    /// Calendar day the session is attributed to.
    pub date: NaiveDate,

    pub clock_in_time: DateTime<Utc>,

    /// `None` = session still open.
    pub clock_out_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub notes: String,

    /// 1-based row index in the remote sheet, set only after a successful
    /// append. Enables patching the clock-out in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets_row_number: Option<u32>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_user() -> String {
    "default".to_string()
}

impl TimeRecord {
    /// New open session clocked in at `now`.
    pub fn open(id: i64, user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            date: now.date_naive(),
            clock_in_time: now,
            clock_out_time: None,
            notes: String::new(),
            sheets_row_number: None,
            created_at: now.to_rfc3339(),
            updated_at: None,
        }
    }

    /// Complete record created in one shot (manual entry).
    /// Rejects `clock_out <= clock_in` rather than clamping.
    pub fn manual(
        id: i64,
        user_id: &str,
        date: NaiveDate,
        clock_in: DateTime<Utc>,
        clock_out: DateTime<Utc>,
        notes: &str,
    ) -> AppResult<Self> {
        if clock_out <= clock_in {
            return Err(AppError::Validation(
                "Clock out time must be after clock in time".to_string(),
            ));
        }
        Ok(Self {
            id,
            user_id: user_id.to_string(),
            date,
            clock_in_time: clock_in,
            clock_out_time: Some(clock_out),
            notes: notes.to_string(),
            sheets_row_number: None,
            created_at: Utc::now().to_rfc3339(),
            updated_at: None,
        })
    }

    pub fn is_open(&self) -> bool {
        self.clock_out_time.is_none()
    }

    /// Close the session at `end`. Fails if already closed or out of order.
    pub fn close(&mut self, end: DateTime<Utc>, notes: &str) -> AppResult<()> {
        if !self.is_open() {
            return Err(AppError::Validation(
                "Session is already clocked out".to_string(),
            ));
        }
        if end <= self.clock_in_time {
            return Err(AppError::Validation(
                "Clock out time must be after clock in time".to_string(),
            ));
        }
        self.clock_out_time = Some(end);
        if !notes.is_empty() {
            self.notes = notes.to_string();
        }
        self.updated_at = Some(Utc::now().to_rfc3339());
        Ok(())
    }

    /// Session length in hours: plain timestamp subtraction, unrounded.
    /// Open sessions need `as_of` (current time); the result is never stored.
    pub fn duration_hours(&self, as_of: Option<DateTime<Utc>>) -> Option<f64> {
        let end = self.clock_out_time.or(as_of)?;
        Some((end - self.clock_in_time).num_milliseconds() as f64 / 3_600_000.0)
    }

    /// Whole-hours-and-minutes display form. Floors, never rounds.
    pub fn duration_parts(&self, as_of: Option<DateTime<Utc>>) -> Option<(i64, i64)> {
        let end = self.clock_out_time.or(as_of)?;
        let minutes = (end - self.clock_in_time).num_minutes();
        Some((minutes / 60, minutes % 60))
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
