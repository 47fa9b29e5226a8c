//! Reading a workflow document into a generic JSON tree.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a workflow document.
#[derive(Debug, Error)]
pub enum LoadError {
  /// The path does not exist.
  #[error("workflow file not found: {}", path.display())]
  NotFound { path: PathBuf },

  /// The path exists but could not be read (permissions, directory, ...).
  #[error("failed to read workflow file {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The content is not well-formed JSON.
  #[error("invalid JSON: {source}")]
  MalformedInput {
    line: usize,
    column: usize,
    #[source]
    source: serde_json::Error,
  },
}

impl LoadError {
  /// Whether the file itself could not be read, as opposed to its content
  /// being malformed.
  pub fn is_unreadable(&self) -> bool {
    matches!(self, LoadError::NotFound { .. } | LoadError::Read { .. })
  }
}

/// Read the file at `path` and parse it into a generic JSON tree.
pub fn load(path: impl AsRef<Path>) -> Result<Value, LoadError> {
  let path = path.as_ref();
  info!(path = %path.display(), "loading workflow");

  let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
    io::ErrorKind::NotFound => LoadError::NotFound {
      path: path.to_path_buf(),
    },
    _ => LoadError::Read {
      path: path.to_path_buf(),
      source,
    },
  })?;

  debug!(bytes = content.len(), "read workflow file");
  parse(&content)
}

/// Parse workflow text into a generic JSON tree.
///
/// No shape checks happen here; any syntactically valid JSON is accepted.
pub fn parse(text: &str) -> Result<Value, LoadError> {
  serde_json::from_str(text).map_err(|source| LoadError::MalformedInput {
    line: source.line(),
    column: source.column(),
    source,
  })
}
