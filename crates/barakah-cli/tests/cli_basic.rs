//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "barakah-cli", "--quiet", "--"])
        .args(args)
        .env("BARAKAH_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn temp_data_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("barakah-cli-test-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_task_add_list_delete() {
    let dir = temp_data_dir("task");

    let (code, stdout, _) = run_cli(&dir, &["task", "add", "Test Task", "--category", "work"]);
    assert_eq!(code, 0, "task add failed");
    assert!(stdout.contains("Task added:"));

    let (code, stdout, _) = run_cli(&dir, &["task", "list"]);
    assert_eq!(code, 0, "task list failed");
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Test Task");
    assert_eq!(tasks[0]["category"], "Work");

    let id = tasks[0]["id"].as_str().unwrap();
    let (code, _, _) = run_cli(&dir, &["task", "delete", id]);
    assert_eq!(code, 0, "task delete failed");

    let (_, stdout, _) = run_cli(&dir, &["task", "list"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(tasks.as_array().unwrap().is_empty());
}

#[test]
fn test_task_toggle() {
    let dir = temp_data_dir("toggle");

    run_cli(&dir, &["task", "add", "Toggle Me"]);
    let (_, stdout, _) = run_cli(&dir, &["task", "list"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = tasks[0]["id"].as_str().unwrap().to_string();

    let (code, stdout, _) = run_cli(&dir, &["task", "toggle", &id]);
    assert_eq!(code, 0, "task toggle failed");
    let task: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(task["completed"], true);
}

#[test]
fn test_empty_title_is_rejected() {
    let dir = temp_data_dir("empty-title");
    let (code, _, stderr) = run_cli(&dir, &["task", "add", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("must not be empty"));
}

#[test]
fn test_daily_saying_falls_back_when_collection_empty() {
    let dir = temp_data_dir("saying");
    let (code, stdout, _) = run_cli(&dir, &["saying", "daily"]);
    assert_eq!(code, 0, "saying daily failed");
    let saying: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(saying["english"], "Actions are judged by intentions.");
}

#[test]
fn test_import_rejects_non_array_payload() {
    let dir = temp_data_dir("import");
    let payload = dir.join("bad.json");
    std::fs::write(&payload, r#"{"title": "X"}"#).unwrap();

    let (code, _, stderr) = run_cli(&dir, &["import", "learning", payload.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("array"));

    // State untouched: the learning plan is still empty.
    let (_, stdout, _) = run_cli(&dir, &["learning", "list"]);
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(items.as_array().unwrap().is_empty());
}

#[test]
fn test_import_learning_plan() {
    let dir = temp_data_dir("import-ok");
    let payload = dir.join("plan.json");
    std::fs::write(&payload, r#"[{"title": "X"}]"#).unwrap();

    let (code, stdout, _) = run_cli(&dir, &["import", "learning", payload.to_str().unwrap()]);
    assert_eq!(code, 0, "import failed");
    assert!(stdout.contains("Imported 1 items"));

    let (_, stdout, _) = run_cli(&dir, &["learning", "list"]);
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["completed"], false);
    assert!(!items[0]["id"].as_str().unwrap().is_empty());
}

#[test]
fn test_today_dashboard_json() {
    let dir = temp_data_dir("today");
    run_cli(&dir, &["task", "add", "Morning dhikr", "--segment", "fajr"]);

    let (code, stdout, _) = run_cli(&dir, &["today", "--json"]);
    assert_eq!(code, 0, "today failed");
    let dashboard: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(dashboard["activeSegment"].is_string());
    assert_eq!(dashboard["tasks"].as_array().unwrap().len(), 1);
}
