//! Path command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, PathArgs, PathOutput};
use crate::commands::common::{build_registry, load_config, print_json};

/// Execute the path command
pub async fn execute(args: &PathArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let registry = build_registry(&config)?;

    let plan = registry.plan(&args.schema, &args.from, &args.to)?;

    match args.output {
        PathOutput::Json => print_json(&plan, false)?,
        PathOutput::Text => {
            if plan.is_identity() {
                println!(
                    "{} is already at {}; no migration needed.",
                    plan.schema, plan.to
                );
                return Ok(());
            }
            println!(
                "{}: {} ({} step(s))",
                plan.schema,
                plan.versions().join(" -> "),
                plan.steps.len()
            );
            for (i, step) in plan.steps.iter().enumerate() {
                println!("  {}. {} -> {}: {}", i + 1, step.from, step.to, step.description);
            }
        }
    }

    Ok(())
}
