pub mod add;
pub mod backup;
pub mod clock;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod restore;
pub mod serve;
pub mod status;
pub mod summary;
pub mod sync;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::sync::sheets::GoogleSheetsClient;
use crate::sync::SyncEngine;

/// Open the record store honoring the global `--data` override.
pub(crate) fn open_store(cli: &Cli, cfg: &Config) -> AppResult<JsonStore> {
    let path = cli.data.clone().unwrap_or_else(|| cfg.data_file.clone());
    JsonStore::open(path)
}

pub(crate) fn user_id(cli: &Cli, cfg: &Config) -> String {
    cli.user.clone().unwrap_or_else(|| cfg.user_id.clone())
}

/// Sync engine when mirroring is enabled and authorized; `None` otherwise.
pub(crate) fn sync_engine(cfg: &Config) -> Option<SyncEngine<GoogleSheetsClient>> {
    match GoogleSheetsClient::from_config(&cfg.sync) {
        Ok(client) => client.map(SyncEngine::new),
        Err(e) => {
            crate::ui::messages::warning(format!("Sheet sync misconfigured: {e}"));
            None
        }
    }
}
