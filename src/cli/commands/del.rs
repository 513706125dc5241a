use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use super::open_store;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = open_store(cli, cfg)?;
        if store.remove(*id)? {
            success(format!("Deleted record {id}"));
        } else {
            warning(format!("No record with id {id}"));
        }
    }
    Ok(())
}
