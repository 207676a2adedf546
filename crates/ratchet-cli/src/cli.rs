//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Ratchet - a schema-migration runner
#[derive(Parser, Debug)]
#[command(name = "ratchet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database path
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new Ratchet project
    Init(InitArgs),

    /// Print the current schema version
    Current,

    /// Print the highest discovered migration version
    Latest,

    /// Apply migrations up or down to a target version
    Migrate(MigrateArgs),

    /// Set the stored schema version without running any scripts
    PointTo(PointToArgs),

    /// List discovered migrations
    Ls(LsArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,

    /// Database path written into the generated config
    #[arg(long, default_value = "ratchet.duckdb")]
    pub database_path: String,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Target schema version (default: latest)
    #[arg(short, long)]
    pub to: Option<i64>,

    /// Apply scripts one at a time instead of in a single transaction
    #[arg(long)]
    pub no_transaction: bool,
}

/// Arguments for the point-to command
#[derive(Args, Debug)]
pub struct PointToArgs {
    /// Version to record (negative values are clamped to 0)
    #[arg(allow_hyphen_values = true)]
    pub version: i64,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}
