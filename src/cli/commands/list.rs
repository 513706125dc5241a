use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimeRecord;
use crate::sync::IN_PROGRESS;
use crate::utils::date;
use crate::utils::formatting::hours_cell;
use crate::utils::time::clock_str;

use super::open_store;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, today } = cmd {
        let store = open_store(cli, cfg)?;

        let filter = if *today {
            Some(date::today().format("%Y-%m-%d").to_string())
        } else {
            period.clone()
        };

        let mut records: Vec<&TimeRecord> = store
            .filter(|r| matches_period(r, filter.as_deref()))
            .collect();

        if records.is_empty() {
            println!("No sessions recorded.");
            return Ok(());
        }

        // chronological display, newest clock-in first
        records.sort_by(|a, b| b.clock_in_time.cmp(&a.clock_in_time));

        println!(
            "{:<15} {:<12} {:<10} {:<12} {:<10} {}",
            "ID", "DATE", "IN", "OUT", "HOURS", "NOTES"
        );
        for r in records {
            let (out, hours) = match r.clock_out_time {
                Some(ref end) => (
                    clock_str(end),
                    hours_cell(r.duration_hours(None).unwrap_or(0.0)),
                ),
                None => (IN_PROGRESS.to_string(), IN_PROGRESS.to_string()),
            };
            println!(
                "{:<15} {:<12} {:<10} {:<12} {:<10} {}",
                r.id,
                r.date_str(),
                clock_str(&r.clock_in_time),
                out,
                hours,
                r.notes
            );
        }
    }
    Ok(())
}

/// Period filter: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, or a `start:end` range of
/// any of those (inclusive; date-string ordering equals chronological).
fn matches_period(record: &TimeRecord, period: Option<&str>) -> bool {
    let Some(p) = period else {
        return true;
    };
    let date = record.date_str();
    if let Some((from, to)) = p.split_once(':') {
        return date.as_str() >= from && date.as_str() <= pad_range_end(to).as_str();
    }
    date.starts_with(p)
}

/// A short range end like `2024-09` should include the whole of September.
fn pad_range_end(end: &str) -> String {
    match end.len() {
        4 => format!("{end}-12-31"),
        7 => format!("{end}-31"),
        _ => end.to_string(),
    }
}
