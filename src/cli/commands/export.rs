use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages::success;
use std::path::Path;

use super::open_store;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cli, cfg)?;
        export::export(store.list(), format, Path::new(file), *force)?;
        success(format!(
            "{} export completed: {file}",
            format.as_str().to_uppercase()
        ));
    }
    Ok(())
}
