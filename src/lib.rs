//! timeclock library root.
//! Exposes the CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod server;
pub mod store;
pub mod sync;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::ClockIn { notes } => cli::commands::clock::clock_in(cli, cfg, notes).await,
        Commands::ClockOut { notes } => cli::commands::clock::clock_out(cli, cfg, notes).await,
        Commands::Add { .. } => cli::commands::add::handle(cli, &cli.command, cfg).await,
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, &cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, &cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(cli, &cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, &cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, &cli.command, cfg),
        Commands::Restore { .. } => cli::commands::restore::handle(cli, &cli.command, cfg),
        Commands::Sync => cli::commands::sync::handle(cli, cfg).await,
        Commands::Serve { port } => cli::commands::serve::handle(cli, cfg, *port).await,
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; apply the record-file override from the command line
    let mut cfg = Config::load();
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(&cli, &cfg))
}
