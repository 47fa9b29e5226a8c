use serde::{Deserialize, Serialize};

use crate::connection::ConnectionSet;
use crate::node::NodeDef;

/// A workflow document after its shape has been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
  pub name: String,
  pub nodes: Vec<NodeDef>,
  /// Outgoing connections keyed by source node name, in document order.
  pub connections: Vec<ConnectionSet>,
}

impl Document {
  /// Get a node by its display name.
  pub fn get_node(&self, name: &str) -> Option<&NodeDef> {
    self.nodes.iter().find(|n| n.name == name)
  }

  /// Nodes classified as triggers, in document order.
  pub fn triggers(&self) -> impl Iterator<Item = &NodeDef> {
    self.nodes.iter().filter(|n| n.is_trigger())
  }
}
