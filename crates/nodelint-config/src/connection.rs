use serde::{Deserialize, Serialize};

/// A directed edge to the node named by `node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
  pub node: String,
  /// Input kind on the target node. Defaults to `main`.
  #[serde(rename = "type", default = "default_connection_type")]
  pub connection_type: String,
  /// Input slot on the target node.
  #[serde(default)]
  pub index: u64,
}

fn default_connection_type() -> String {
  "main".to_string()
}

impl Connection {
  pub fn new(node: impl Into<String>) -> Self {
    Self {
      node: node.into(),
      connection_type: default_connection_type(),
      index: 0,
    }
  }
}

/// Outgoing connections of a single source node.
///
/// `main[slot]` is the fan-out of the source node's output slot `slot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSet {
  pub source: String,
  pub main: Vec<Vec<Connection>>,
}

impl ConnectionSet {
  /// Iterate every connection across all output slots, in document order.
  pub fn targets(&self) -> impl Iterator<Item = &Connection> {
    self.main.iter().flatten()
  }
}
