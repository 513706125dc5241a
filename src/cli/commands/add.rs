use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_required_time;

use super::{open_store, sync_engine, user_id};

/// Add a complete session manually.
pub async fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        notes,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let time_in = parse_required_time(start)?;
        let time_out = parse_required_time(end)?;

        let mut store = open_store(cli, cfg)?;
        let user = user_id(cli, cfg);

        let record = clock::manual_entry(
            &mut store,
            &user,
            d,
            time_in,
            time_out,
            notes.as_deref().unwrap_or(""),
        )?;
        success(format!(
            "Added session {} {} to {} (id {})",
            record.date_str(),
            start,
            end,
            record.id
        ));

        // manual entries mirror as a single complete row
        if let Some(engine) = sync_engine(cfg) {
            engine.entry_added(&record).await;
        }
    }
    Ok(())
}
