use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sync::{sync_state, SyncState};
use crate::ui::messages::info;
use crate::utils::formatting::hours_minutes;
use chrono::Utc;

use super::{open_store, user_id};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = open_store(cli, cfg)?;
    let user = user_id(cli, cfg);

    match store.active_session(&user) {
        Some(session) => {
            let running = session.duration_hours(Some(Utc::now())).unwrap_or(0.0);
            info(format!(
                "Clocked in since {} ({}), running {}",
                session.clock_in_time.format("%H:%M:%S"),
                session.date_str(),
                hours_minutes(running)
            ));
            if cfg.sync.enabled {
                match sync_state(session) {
                    SyncState::AppendedOpen | SyncState::Closed => {
                        info("Session is mirrored to the sheet")
                    }
                    SyncState::NotSynced => info("Session is not on the sheet yet"),
                }
            }
        }
        None => info("Currently clocked out"),
    }
    Ok(())
}
