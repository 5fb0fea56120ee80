//! Check command implementation

use anyhow::Result;
use csl_core::Config;
use csl_migrate::{IssueSeverity, MigrationRegistry};

use crate::cli::{CheckArgs, CheckOutput, GlobalArgs};
use crate::commands::common::{build_registry, load_config, print_json, ExitCode};

/// Execute the check command
pub async fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let registry = build_registry(&config)?;
    report(&registry, &config, args)
}

/// Print every issue found in `registry` and fail with `ExitCode(1)` under
/// `--strict` when any of them is an error.
pub(crate) fn report(
    registry: &MigrationRegistry,
    config: &Config,
    args: &CheckArgs,
) -> Result<()> {
    let mut issues = registry.check();
    issues.extend(registry.check_current_versions(&config.current_versions));

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == IssueSeverity::Error)
        .count();

    match args.output {
        CheckOutput::Json => print_json(&issues, false)?,
        CheckOutput::Text => {
            for issue in &issues {
                println!("[{}] {}", issue.severity(), issue);
            }
            println!(
                "Checked {} migration(s) across {} schema(s): {} error(s), {} warning(s)",
                registry.len(),
                registry.schemas().len(),
                error_count,
                issues.len() - error_count
            );
        }
    }

    if args.strict && error_count > 0 {
        return Err(ExitCode(1).into());
    }

    Ok(())
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
