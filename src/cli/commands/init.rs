use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data.clone(), cli.test)?;
    success("timeclock initialized");
    Ok(())
}
