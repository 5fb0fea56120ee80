//! Upgrade command implementation

use anyhow::{Context, Result};
use csl_core::{SchemaVersion, VersionedDocument};

use crate::cli::{GlobalArgs, UpgradeArgs};
use crate::commands::common::{build_registry, load_config, print_json, read_input};

/// Execute the upgrade command
pub async fn execute(args: &UpgradeArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let registry = build_registry(&config)?;

    let text = read_input(args.input.as_deref())?;
    let document =
        VersionedDocument::from_json(&text).context("Input is not a versioned document")?;

    let target = match &args.to {
        Some(to) => SchemaVersion::parse(to.as_str())?,
        None => config.current_version(&document.schema)?.clone(),
    };

    if args.dry_run {
        let plan = registry.plan(&document.schema, &document.version, &target)?;
        return print_json(&plan, args.compact);
    }

    if document.is_at(&target) {
        log::debug!("{} document already at {}", document.schema, target);
        return print_json(&document, args.compact);
    }

    let VersionedDocument {
        schema,
        version,
        data,
    } = document;
    let data = registry.migrate(&schema, data, &version, &target)?;

    print_json(
        &VersionedDocument {
            schema,
            version: target,
            data,
        },
        args.compact,
    )
}
