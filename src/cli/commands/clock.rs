//! `in` and `out` subcommands.
//!
//! The local mutation is persisted first; the sheet mirror runs afterwards
//! and its failure only produces a log line, never an error exit.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::hours_minutes;
use chrono::Utc;

use super::{open_store, sync_engine, user_id};

pub async fn clock_in(cli: &Cli, cfg: &Config, notes: &Option<String>) -> AppResult<()> {
    let mut store = open_store(cli, cfg)?;
    let user = user_id(cli, cfg);

    let record = clock::clock_in(
        &mut store,
        &user,
        Utc::now(),
        notes.as_deref().unwrap_or(""),
    )?;
    success(format!(
        "Clocked in at {} ({})",
        record.clock_in_time.format("%H:%M:%S"),
        record.date_str()
    ));

    if let Some(engine) = sync_engine(cfg) {
        if let Some(row) = engine.session_opened(&record).await {
            // the session itself is already durable; losing the row ref only
            // means the close falls back to a full-row append
            match clock::remember_row_ref(&mut store, record.id, row.0) {
                Ok(_) => info(format!("Mirrored to sheet row {}", row.0)),
                Err(e) => warning(format!("Could not save sheet row {}: {e}", row.0)),
            }
        }
    }
    Ok(())
}

pub async fn clock_out(cli: &Cli, cfg: &Config, notes: &Option<String>) -> AppResult<()> {
    let mut store = open_store(cli, cfg)?;
    let user = user_id(cli, cfg);

    let record = clock::clock_out(
        &mut store,
        &user,
        Utc::now(),
        notes.as_deref().unwrap_or(""),
    )?;
    let hours = record.duration_hours(None).unwrap_or(0.0);
    success(format!(
        "Clocked out at {}, session length {}",
        record
            .clock_out_time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default(),
        hours_minutes(hours)
    ));

    if let Some(engine) = sync_engine(cfg) {
        engine.session_closed(&record).await;
    }
    Ok(())
}
