//! CLI integration tests for the csl binary
//!
//! Runs `csl` against fixture documents and projects and checks its JSON
//! output and exit status.

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Path to the compiled csl binary (resolved at compile time)
fn csl_bin() -> String {
    env!("CARGO_BIN_EXE_csl").to_string()
}

fn project_dir() -> &'static str {
    "tests/fixtures/project"
}

fn run(args: &[&str]) -> Output {
    Command::new(csl_bin())
        .args(args)
        .env_remove("CSL_CONFIG")
        .output()
        .expect("Failed to run csl")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON ({e}): {stdout}"))
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "csl should succeed.\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

// ── csl migrate ─────────────────────────────────────────────────────────

#[test]
fn test_migrate_user_file() {
    let output = run(&[
        "migrate",
        "--schema",
        "User",
        "--from",
        "1.0.0",
        "--to",
        "2.0.0",
        "--input",
        "tests/fixtures/user_v1.json",
    ]);
    assert_success(&output);

    let user = stdout_json(&output);
    assert_eq!(user["display_name"], "John Doe");
    assert_eq!(user["id"], "123e4567-e89b-12d3-a456-426614174000");
    assert_eq!(user["created_at"], "2024-01-01T00:00:00Z");
    assert!(user["email"]
        .as_str()
        .unwrap()
        .ends_with("@migration-placeholder.syncropel.com"));
    assert!(user.get("name").is_none());
    assert!(user.get("age").is_none());
}

#[test]
fn test_migrate_from_stdin() {
    let mut child = Command::new(csl_bin())
        .args([
            "migrate", "--schema", "User", "--from", "1.0.0", "--to", "2.0.0", "--compact",
        ])
        .env_remove("CSL_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn csl");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"id": "u9", "name": "Zed"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_success(&output);

    let user = stdout_json(&output);
    assert_eq!(user["display_name"], "Zed");
    assert_eq!(user["email"], "user-u9@migration-placeholder.syncropel.com");
}

#[test]
fn test_migrate_same_version_is_identity() {
    let output = run(&[
        "migrate",
        "--schema",
        "Anything",
        "--from",
        "9.9.9",
        "--to",
        "9.9.9",
        "--input",
        "tests/fixtures/user_v1.json",
    ]);
    assert_success(&output);

    let original: Value =
        serde_json::from_str(&std::fs::read_to_string("tests/fixtures/user_v1.json").unwrap())
            .unwrap();
    assert_eq!(stdout_json(&output), original);
}

#[test]
fn test_migrate_no_path_fails() {
    let output = run(&[
        "migrate",
        "--schema",
        "User",
        "--from",
        "1.0.0",
        "--to",
        "3.0.0",
        "--input",
        "tests/fixtures/user_v1.json",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No migration path found for schema 'User' from version 1.0.0 to 3.0.0."),
        "stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

// ── csl upgrade ─────────────────────────────────────────────────────────

#[test]
fn test_upgrade_to_configured_version() {
    let output = run(&[
        "upgrade",
        "--project-dir",
        project_dir(),
        "--input",
        "tests/fixtures/user_document_v1.json",
    ]);
    assert_success(&output);

    let document = stdout_json(&output);
    assert_eq!(document["schema"], "User");
    assert_eq!(document["version"], "2.0.0");
    assert_eq!(document["data"]["display_name"], "John");
    assert!(document["data"].get("age").is_none());
}

#[test]
fn test_upgrade_without_config_needs_target() {
    let output = run(&["upgrade", "--input", "tests/fixtures/user_document_v1.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No current version configured for schema 'User'"));
}

#[test]
fn test_upgrade_dry_run_prints_plan() {
    let output = run(&[
        "upgrade",
        "--input",
        "tests/fixtures/user_document_v1.json",
        "--to",
        "2.0.0",
        "--dry-run",
    ]);
    assert_success(&output);

    let plan = stdout_json(&output);
    assert_eq!(plan["from"], "1.0.0");
    assert_eq!(plan["to"], "2.0.0");
    assert_eq!(plan["steps"].as_array().unwrap().len(), 1);
}

// ── csl path / ls / check ───────────────────────────────────────────────

#[test]
fn test_path_text_output() {
    let output = run(&["path", "--schema", "User", "--from", "1.0.0", "--to", "2.0.0"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User: 1.0.0 -> 2.0.0 (1 step(s))"), "stdout: {}", stdout);
}

#[test]
fn test_ls_json_lists_builtin_user_migration() {
    let output = run(&["ls", "--output", "json"]);
    assert_success(&output);

    let rows = stdout_json(&output);
    let rows = rows.as_array().unwrap();
    assert!(rows
        .iter()
        .any(|r| r["schema"] == "User" && r["from"] == "1.0.0" && r["to"] == "2.0.0"));
}

#[test]
fn test_ls_filters_by_schema() {
    let output = run(&["ls", "--schema", "Block", "--output", "json"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn test_check_builtin_registry_is_clean() {
    let output = run(&["check", "--strict", "--project-dir", "tests/fixtures/strict_project"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 error(s), 0 warning(s)"), "stdout: {}", stdout);
}

#[test]
fn test_explicit_missing_config_fails() {
    let output = run(&["ls", "--config", "tests/fixtures/does_not_exist.yml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config file not found"), "stderr: {}", stderr);
}
