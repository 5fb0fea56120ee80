//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// csl - resolve and apply schema migrations to JSON documents
#[derive(Parser, Debug)]
#[command(name = "csl")]
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
    #[arg(short, long, global = true, env = "CSL_CONFIG")]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered migrations
    Ls(LsArgs),

    /// Show the migration path between two versions
    Path(PathArgs),

    /// Migrate a JSON payload between two versions of a schema
    Migrate(MigrateArgs),

    /// Upgrade a versioned document to the current version of its schema
    Upgrade(UpgradeArgs),

    /// Check the registry for duplicate edges, self-loops, and cycles
    Check(CheckArgs),
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Only list migrations for this schema
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// Ls output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Tabular output
    Table,
    /// JSON output
    Json,
    /// Version graph per schema
    Tree,
}

/// Arguments for the path command
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Schema name (case-sensitive)
    #[arg(short, long)]
    pub schema: String,

    /// Starting version
    #[arg(long)]
    pub from: String,

    /// Target version
    #[arg(long)]
    pub to: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: PathOutput,
}

/// Path output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOutput {
    /// Human-readable steps
    Text,
    /// JSON plan
    Json,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Schema name (case-sensitive)
    #[arg(short, long)]
    pub schema: String,

    /// Version the input conforms to
    #[arg(long)]
    pub from: String,

    /// Version to migrate to
    #[arg(long)]
    pub to: String,

    /// Input JSON file (reads stdin when omitted or "-")
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write compact instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the upgrade command
#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Versioned document file (reads stdin when omitted or "-")
    #[arg(short, long)]
    pub input: Option<String>,

    /// Target version (default: the configured current version)
    #[arg(long)]
    pub to: Option<String>,

    /// Resolve and print the plan without migrating
    #[arg(long)]
    pub dry_run: bool,

    /// Write compact instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Exit non-zero when any error-level issue is found
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: CheckOutput,
}

/// Check output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutput {
    /// Human-readable issue list
    Text,
    /// JSON issue list
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
