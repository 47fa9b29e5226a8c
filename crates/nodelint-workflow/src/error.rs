use serde::Serialize;
use thiserror::Error;

/// A structural problem found in a workflow document.
///
/// Only the first problem found is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("field '{field}' must be {expected}")]
  InvalidField {
    field: &'static str,
    expected: &'static str,
  },

  #[error("node {index}: expected an object")]
  InvalidNode { index: usize },

  #[error("node {index}: missing required field '{field}'")]
  MissingNodeField { index: usize, field: &'static str },

  #[error("node {index}: field '{field}' must be {expected}")]
  InvalidNodeField {
    index: usize,
    field: &'static str,
    expected: &'static str,
  },

  #[error("duplicate node id: {0}")]
  DuplicateNodeId(String),

  #[error("duplicate node name: {0}")]
  DuplicateNodeName(String),

  #[error("node {0}: invalid position format, expected [x, y]")]
  InvalidPosition(String),

  #[error("connection references unknown node: {0}")]
  UnknownSourceNode(String),

  #[error("node {0}: missing 'main' connection array")]
  MissingMainConnections(String),

  #[error("invalid connection format in {0}")]
  MalformedConnection(String),

  #[error("connection from {from} to unknown node: {to}")]
  UnknownTargetNode { from: String, to: String },
}

/// The class of a [`ValidationError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  MissingField,
  InvalidField,
  InvalidNode,
  MissingNodeField,
  InvalidNodeField,
  DuplicateNodeId,
  DuplicateNodeName,
  InvalidPosition,
  UnknownSourceNode,
  MissingMainConnections,
  MalformedConnection,
  UnknownTargetNode,
}

impl ValidationError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ValidationError::MissingField(_) => ErrorKind::MissingField,
      ValidationError::InvalidField { .. } => ErrorKind::InvalidField,
      ValidationError::InvalidNode { .. } => ErrorKind::InvalidNode,
      ValidationError::MissingNodeField { .. } => ErrorKind::MissingNodeField,
      ValidationError::InvalidNodeField { .. } => ErrorKind::InvalidNodeField,
      ValidationError::DuplicateNodeId(_) => ErrorKind::DuplicateNodeId,
      ValidationError::DuplicateNodeName(_) => ErrorKind::DuplicateNodeName,
      ValidationError::InvalidPosition(_) => ErrorKind::InvalidPosition,
      ValidationError::UnknownSourceNode(_) => ErrorKind::UnknownSourceNode,
      ValidationError::MissingMainConnections(_) => ErrorKind::MissingMainConnections,
      ValidationError::MalformedConnection(_) => ErrorKind::MalformedConnection,
      ValidationError::UnknownTargetNode { .. } => ErrorKind::UnknownTargetNode,
    }
  }
}
