use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::open_store;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = open_store(cli, cfg)?;
        let dest = BackupLogic::backup(&store, file, *compress, *force)?;
        success(format!("Backup created: {}", dest.display()));
    }
    Ok(())
}
