//! Migrate command implementation

use anyhow::{Context, Result};
use csl_migrate::Document;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::{build_registry, load_config, print_json, read_input};

/// Execute the migrate command
pub async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let registry = build_registry(&config)?;

    let text = read_input(args.input.as_deref())?;
    let data: Document = serde_json::from_str(&text).context("Input is not valid JSON")?;

    let migrated = registry.migrate(&args.schema, data, &args.from, &args.to)?;
    print_json(&migrated, args.compact)
}
