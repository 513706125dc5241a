use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::open_store;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, replace } = cmd {
        let mut store = open_store(cli, cfg)?;
        let (restored, total) = BackupLogic::restore(&mut store, file, *replace)?;
        success(format!(
            "Restored {restored} record(s), store now holds {total}"
        ));
    }
    Ok(())
}
