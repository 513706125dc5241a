use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

use super::{open_store, sync_engine};

/// Manual full sync: overwrite the remote sheet with every record.
/// Unlike the per-mutation mirroring this surfaces failures, since the user
/// asked for it explicitly.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let engine = sync_engine(cfg).ok_or_else(|| {
        AppError::Config(
            "Sheet sync is not configured (enable it and set the spreadsheet and token)"
                .to_string(),
        )
    })?;

    let store = open_store(cli, cfg)?;
    let count = engine.full_sync(store.list()).await?;
    success(format!("Synced {count} record(s) to the sheet"));
    Ok(())
}
