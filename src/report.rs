//! Console output for validation results.

use serde::Serialize;

use nodelint_config::LoadError;
use nodelint_workflow::{ErrorKind, ValidationError, ValidationSummary};

/// Render a successful validation as human-readable lines.
pub fn summary_text(summary: &ValidationSummary) -> String {
  let lines = [
    format!("Workflow validation passed: {}", summary.name),
    "Summary:".to_string(),
    format!("  - Total nodes: {}", summary.total_nodes),
    format!("  - Connected nodes: {}", summary.connected_nodes),
    format!(
      "  - Trigger nodes: {}{}",
      summary.trigger_nodes,
      name_list(&summary.triggers)
    ),
    format!(
      "  - Orphaned nodes: {}{}",
      summary.orphans.len(),
      name_list(&summary.orphans)
    ),
    format!(
      "  - Isolated nodes: {}{}",
      summary.isolated.len(),
      name_list(&summary.isolated)
    ),
  ];
  lines.join("\n") + "\n"
}

fn name_list(names: &[String]) -> String {
  if names.is_empty() {
    String::new()
  } else {
    format!(" ({})", names.join(", "))
  }
}

/// Machine-readable result for `--format json`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JsonReport<'a> {
  Valid {
    summary: &'a ValidationSummary,
  },
  Invalid {
    kind: ErrorKind,
    message: String,
  },
  Unreadable {
    message: String,
  },
  Malformed {
    line: usize,
    column: usize,
    message: String,
  },
}

impl JsonReport<'_> {
  pub fn invalid(err: &ValidationError) -> Self {
    JsonReport::Invalid {
      kind: err.kind(),
      message: err.to_string(),
    }
  }

  pub fn load_failure(err: &LoadError) -> Self {
    match err {
      LoadError::MalformedInput { line, column, .. } => JsonReport::Malformed {
        line: *line,
        column: *column,
        message: err.to_string(),
      },
      LoadError::NotFound { .. } | LoadError::Read { .. } => JsonReport::Unreadable {
        message: err.to_string(),
      },
    }
  }
}
