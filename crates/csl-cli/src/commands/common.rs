//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use csl_core::{Config, SchemaName};
use csl_migrate::{declarations, MigrationEdge, MigrationRegistry};
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that destructors run before the process ends.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main exits without printing it.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the project config.
///
/// An explicit `--config` must exist. Without one, a missing `csl.yml` in
/// the project directory yields the default config.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    if let Some(path) = &global.config {
        return Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path));
    }

    let project_dir = Path::new(&global.project_dir);
    match Config::find_in_dir(project_dir) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            log::debug!(
                "No config found in {}, using defaults",
                project_dir.display()
            );
            Ok(Config::default())
        }
    }
}

/// Build the registry from the built-in declarations.
pub(crate) fn build_registry(config: &Config) -> Result<MigrationRegistry> {
    build_registry_from(config, declarations::builtin_edges())
}

/// Build a registry from `edges`, strictly when the config asks for it.
///
/// This is the registration phase: it completes before any command
/// resolves or applies a migration.
pub(crate) fn build_registry_from(
    config: &Config,
    edges: Vec<(SchemaName, MigrationEdge)>,
) -> Result<MigrationRegistry> {
    let mut registry = MigrationRegistry::new();
    for (schema, edge) in edges {
        if config.strict_registration {
            registry
                .try_register(schema, edge)
                .context("Migrations failed strict registration")?;
        } else {
            registry.register(schema, edge);
        }
    }
    log::debug!(
        "Registered {} migration(s) across {} schema(s)",
        registry.len(),
        registry.schemas().len()
    );
    Ok(registry)
}

/// Read input text from a file, or stdin when `input` is `None` or `-`.
pub(crate) fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path)),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Print a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
