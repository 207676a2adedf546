//! Ratchet CLI - a schema-migration runner

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{current, init, latest, ls, migrate, point_to};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Init(args) => init::execute(args),
        cli::Commands::Current => current::execute(&cli.global),
        cli::Commands::Latest => latest::execute(&cli.global),
        cli::Commands::Migrate(args) => migrate::execute(args, &cli.global),
        cli::Commands::PointTo(args) => point_to::execute(args, &cli.global),
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
    }
}

/// Initialize the log facade; --verbose raises the default filter
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
