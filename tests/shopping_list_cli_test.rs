// ABOUTME: Integration tests for the shopping-list binary
// ABOUTME: Tests help output, rendering from a snapshot file, flags, and error exit codes
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

mod common;

use std::fs;
use std::process::Command;

use common::WEEK_SNAPSHOT;
use tempfile::TempDir;

/// Helper to run the CLI and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_shopping-list"))
        .args(args)
        .env_remove("SHOPPING_LIST_FORMAT")
        .env_remove("SHOPPING_LIST_MULTIPLIER")
        .env_remove("SHOPPING_LIST_PRETTY")
        .env_remove("SHOPPING_LIST_EMPTY_LABEL")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn snapshot_file(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(&path, contents).unwrap();
    (dir, path.display().to_string())
}

#[test]
fn test_cli_help_lists_flags() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for flag in ["--format", "--pretty", "--multiply", "--verbose"] {
        assert!(stdout.contains(flag), "help should mention {flag}");
    }
}

#[test]
fn test_cli_renders_text() {
    let (_dir, path) = snapshot_file(WEEK_SNAPSHOT);
    let (exit_code, stdout, _stderr) = run_cli(&[&path, "--format", "text"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Shopping List - Week 1\nPrepared for Jane Doe\n"));
    assert!(stdout.contains("[ ] tomato\n    - Chili - 2 cups x2\n"));
}

#[test]
fn test_cli_multiply_flag() {
    let (_dir, path) = snapshot_file(WEEK_SNAPSHOT);
    let (exit_code, stdout, _stderr) = run_cli(&[&path, "-f", "text", "--multiply"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("    - Chili - 4 cups\n"));
}

#[test]
fn test_cli_defaults_to_json() {
    let (_dir, path) = snapshot_file(WEEK_SNAPSHOT);
    let (exit_code, stdout, _stderr) = run_cli(&[&path]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["rows"][0]["contributions"][0]["display"], "Chili - 2 cups x2");
}

#[test]
fn test_cli_reports_missing_field() {
    let (_dir, path) = snapshot_file(
        r#"{ "mealPlan": { "mealPlanEntries": { "nodes": [ { "meal": { "id": "m1", "nameEn": "Soup",
            "ingredients": { "nodes": [ { "name": "Salt", "productKeyword": "salt", "quantity": 1 } ] } } } ] } } }"#,
    );
    let (exit_code, stdout, stderr) = run_cli(&[&path]);

    assert_eq!(exit_code, 65);
    assert!(stdout.is_empty());
    assert!(stderr.contains("MISSING_REQUIRED_FIELD"));
}

#[test]
fn test_cli_missing_file_exit_code() {
    let (exit_code, _stdout, stderr) = run_cli(&["/nonexistent/plan.json"]);

    assert_eq!(exit_code, 74);
    assert!(stderr.contains("IO_ERROR"));
}

#[test]
fn test_cli_rejects_unknown_format() {
    let (_dir, path) = snapshot_file(WEEK_SNAPSHOT);
    let (exit_code, _stdout, stderr) = run_cli(&[&path, "--format", "xml"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("xml"));
}
