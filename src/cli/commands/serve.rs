use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::{self, AppState};
use crate::sync::sheets::GoogleSheetsClient;
use crate::sync::SheetClient;
use crate::ui::messages::info;

use super::open_store;

pub async fn handle(cli: &Cli, cfg: &Config, port: u16) -> AppResult<()> {
    let store = open_store(cli, cfg)?;
    let client: Option<Box<dyn SheetClient>> = GoogleSheetsClient::from_config(&cfg.sync)?
        .map(|c| Box::new(c) as Box<dyn SheetClient>);

    info(format!("Serving http://localhost:{port}"));
    server::serve(AppState::new(store, client), port).await
}
