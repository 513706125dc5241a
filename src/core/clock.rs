//! Clock-in/clock-out and manual-entry logic over the record store.
//!
//! Local mutations are fail-closed: validation and persistence happen here,
//! before any remote sync is attempted. Remote mirroring is layered on top
//! by the caller and never rolls these operations back.

use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use crate::store::JsonStore;
use crate::utils::time::at;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Open a new session for `user_id` at `now`.
/// Fails when the user already has an open session (single open session per
/// actor; the original stays untouched).
pub fn clock_in(
    store: &mut JsonStore,
    user_id: &str,
    now: DateTime<Utc>,
    notes: &str,
) -> AppResult<TimeRecord> {
    if store.active_session(user_id).is_some() {
        return Err(AppError::Validation(format!(
            "User '{user_id}' is already clocked in"
        )));
    }
    let mut record = TimeRecord::open(store.next_id(), user_id, now);
    record.notes = notes.to_string();
    store.add(record)
}

/// Close the open session for `user_id` at `now`, attaching `notes`.
/// Fails when there is no open session or `now` is not after the clock-in.
pub fn clock_out(
    store: &mut JsonStore,
    user_id: &str,
    now: DateTime<Utc>,
    notes: &str,
) -> AppResult<TimeRecord> {
    let id = store
        .active_session(user_id)
        .map(|r| r.id)
        .ok_or_else(|| AppError::Validation(format!("No active session for user '{user_id}'")))?;
    store.update(id, |r| r.close(now, notes))
}

/// Add an already-complete session in one shot.
pub fn manual_entry(
    store: &mut JsonStore,
    user_id: &str,
    date: NaiveDate,
    time_in: NaiveTime,
    time_out: NaiveTime,
    notes: &str,
) -> AppResult<TimeRecord> {
    let clock_in = at(date, time_in);
    let clock_out = at(date, time_out);
    let record = TimeRecord::manual(store.next_id(), user_id, date, clock_in, clock_out, notes)?;
    store.add(record)
}

/// Record the remote row assigned to a session so its clock-out can later be
/// patched in place. Persisted like any other mutation.
pub fn remember_row_ref(store: &mut JsonStore, id: i64, row: u32) -> AppResult<TimeRecord> {
    store.update(id, |r| {
        r.sheets_row_number = Some(row);
        Ok(())
    })
}
