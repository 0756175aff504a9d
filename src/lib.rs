//! overwatcher library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use errors::AppResult;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Start => cli::commands::start::handle(cfg, clock),
        Commands::Stop => cli::commands::stop::handle(cfg, clock),
        Commands::Update { .. } => cli::commands::update::handle(&cli.command, cfg, clock),
        Commands::Query { .. } => cli::commands::query::handle(&cli.command, cfg, clock),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, clock),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, clock),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::init_tracing();

    // Test mode never looks at the user's config file.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db);
    }
    debug!(database = %cfg.database, workday = %cfg.workday_length, "configuration loaded");

    match &cli.now {
        Some(now) => dispatch(&cli, &cfg, &FixedClock::parse(now)?),
        None => dispatch(&cli, &cfg, &SystemClock),
    }
}
