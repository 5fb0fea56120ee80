//! List command implementation

use anyhow::Result;
use csl_migrate::{MigrationRegistry, VersionGraph};
use serde::Serialize;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::{build_registry, load_config, print_json};

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let registry = build_registry(&config)?;

    let schemas: Vec<&str> = registry
        .schemas()
        .into_iter()
        .map(|s| s.as_str())
        .filter(|s| args.schema.as_deref().map_or(true, |wanted| wanted == *s))
        .collect();

    match args.output {
        LsOutput::Table => print_table(&collect_rows(&registry, &schemas)),
        LsOutput::Json => print_json(&collect_rows(&registry, &schemas), false)?,
        LsOutput::Tree => print_tree(&registry, &schemas),
    }

    Ok(())
}

/// One registered edge for display
#[derive(Debug, Serialize)]
struct EdgeRow {
    schema: String,
    from: String,
    to: String,
    description: String,
}

fn collect_rows(registry: &MigrationRegistry, schemas: &[&str]) -> Vec<EdgeRow> {
    schemas
        .iter()
        .flat_map(|schema| {
            registry.edges_for(schema).iter().map(move |edge| EdgeRow {
                schema: schema.to_string(),
                from: edge.from_version.to_string(),
                to: edge.to_version.to_string(),
                description: edge.description.clone(),
            })
        })
        .collect()
}

/// Print edges in table format
fn print_table(rows: &[EdgeRow]) {
    if rows.is_empty() {
        println!("No migrations registered.");
        return;
    }

    let schema_width = rows.iter().map(|r| r.schema.len()).max().unwrap_or(6).max(6);
    let from_width = rows.iter().map(|r| r.from.len()).max().unwrap_or(4).max(4);
    let to_width = rows.iter().map(|r| r.to.len()).max().unwrap_or(2).max(2);

    println!(
        "{:<schema_width$}  {:<from_width$}  {:<to_width$}  DESCRIPTION",
        "SCHEMA", "FROM", "TO",
    );
    println!(
        "{:-<schema_width$}  {:-<from_width$}  {:-<to_width$}  {}",
        "",
        "",
        "",
        "-".repeat(40),
    );

    for row in rows {
        println!(
            "{:<schema_width$}  {:<from_width$}  {:<to_width$}  {}",
            row.schema, row.from, row.to, row.description,
        );
    }

    println!();
    println!("Total: {} migration(s)", rows.len());
}

/// Print each schema's version graph
fn print_tree(registry: &MigrationRegistry, schemas: &[&str]) {
    for schema in schemas {
        let graph = VersionGraph::from_edges(registry.edges_for(schema));
        println!("{}", schema);
        for version in graph.versions() {
            let next = graph.successors(version);
            if next.is_empty() {
                println!("  {}", version);
            } else {
                let targets: Vec<&str> = next.iter().map(|v| v.as_str()).collect();
                println!("  {} -> {}", version, targets.join(", "));
            }
        }
    }
}
