//! End-to-end tests for the nodelint binary.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

fn nodelint(dir: &Path, args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_nodelint"))
    .current_dir(dir)
    .args(args)
    .output()
    .expect("failed to run nodelint")
}

fn write_workflow(dir: &Path, file: &str, doc: &Value) {
  std::fs::write(dir.join(file), serde_json::to_string_pretty(doc).unwrap())
    .expect("failed to write workflow");
}

fn valid_workflow() -> Value {
  json!({
    "name": "x",
    "nodes": [
      {"id": "1", "name": "A", "type": "trigger.cron", "typeVersion": 1, "position": [0, 0]},
      {"id": "2", "name": "B", "type": "action.http", "typeVersion": 1, "position": [100, 0]}
    ],
    "connections": {"A": {"main": [[{"node": "B"}]]}}
  })
}

fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_valid_workflow_in_working_directory() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_workflow(dir.path(), "workflow.json", &valid_workflow());

  let output = nodelint(dir.path(), &[]);
  let out = stdout(&output);

  assert_eq!(output.status.code(), Some(0));
  assert!(out.contains("Validating workflow: workflow.json"));
  assert!(out.contains("Total nodes: 2"));
  assert!(out.contains("Connected nodes: 1"));
  assert!(out.contains("Trigger nodes: 1"));
  assert!(out.contains("ready for import"));
}

#[test]
fn test_explicit_path() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_workflow(dir.path(), "other.json", &valid_workflow());

  let output = nodelint(dir.path(), &["other.json"]);
  assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_quiet_prints_only_verdict() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_workflow(dir.path(), "workflow.json", &valid_workflow());

  let output = nodelint(dir.path(), &["--quiet"]);
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(stdout(&output), "Workflow is valid and ready for import\n");
}

#[test]
fn test_structural_failure_exit_code() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  let mut doc = valid_workflow();
  doc["nodes"][1]["id"] = json!("1");
  write_workflow(dir.path(), "workflow.json", &doc);

  let output = nodelint(dir.path(), &[]);
  assert_eq!(output.status.code(), Some(1));
  assert!(stdout(&output).contains("duplicate node id: 1"));
}

#[test]
fn test_missing_file_exit_code_differs_from_structural_failure() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");

  let output = nodelint(dir.path(), &[]);
  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("not found"));
}

#[test]
fn test_malformed_json_exit_code() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  std::fs::write(dir.path().join("workflow.json"), "{\"name\": ").unwrap();

  let output = nodelint(dir.path(), &[]);
  assert_eq!(output.status.code(), Some(4));
  assert!(stdout(&output).contains("invalid JSON"));
}

#[test]
fn test_json_format() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  let mut doc = valid_workflow();
  doc["connections"]["A"]["main"][0][0]["node"] = json!("C");
  write_workflow(dir.path(), "workflow.json", &doc);

  let output = nodelint(dir.path(), &["--format", "json"]);
  assert_eq!(output.status.code(), Some(1));

  let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
  assert_eq!(report["status"], "invalid");
  assert_eq!(report["kind"], "unknown_target_node");
  assert_eq!(report["message"], "connection from A to unknown node: C");
}

#[test]
fn test_json_format_summary() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_workflow(dir.path(), "workflow.json", &valid_workflow());

  let output = nodelint(dir.path(), &["--format", "json"]);
  assert_eq!(output.status.code(), Some(0));

  let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
  assert_eq!(report["status"], "valid");
  assert_eq!(report["summary"]["total_nodes"], 2);
  assert_eq!(report["summary"]["triggers"], json!(["A"]));
}
