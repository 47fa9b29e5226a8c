use std::collections::HashMap;

use nodelint_config::Document;

/// Connection graph of a checked document, addressed by node name.
#[derive(Debug, Clone)]
pub struct Graph {
  /// Node names in document order.
  order: Vec<String>,
  /// Adjacency list: node name -> distinct downstream node names.
  adjacency: HashMap<String, Vec<String>>,
  /// Reverse adjacency: node name -> distinct upstream node names.
  reverse_adjacency: HashMap<String, Vec<String>>,
}

impl Graph {
  /// Build a graph from a document's nodes and connections.
  ///
  /// Fan-out to the same target from several output slots yields one edge.
  pub fn new(document: &Document) -> Self {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();

    let order: Vec<String> = document.nodes.iter().map(|n| n.name.clone()).collect();
    for name in &order {
      adjacency.entry(name.clone()).or_default();
      reverse_adjacency.entry(name.clone()).or_default();
    }

    for set in &document.connections {
      for connection in set.targets() {
        let downstream = adjacency.entry(set.source.clone()).or_default();
        if !downstream.contains(&connection.node) {
          downstream.push(connection.node.clone());
        }
        let upstream = reverse_adjacency.entry(connection.node.clone()).or_default();
        if !upstream.contains(&set.source) {
          upstream.push(set.source.clone());
        }
      }
    }

    Self {
      order,
      adjacency,
      reverse_adjacency,
    }
  }

  /// Get downstream nodes for a given node.
  pub fn downstream(&self, name: &str) -> &[String] {
    self
      .adjacency
      .get(name)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Get upstream nodes for a given node.
  pub fn upstream(&self, name: &str) -> &[String] {
    self
      .reverse_adjacency
      .get(name)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Nodes that are the target of at least one connection, in document order.
  pub fn connected(&self) -> Vec<&str> {
    self
      .order
      .iter()
      .filter(|name| !self.upstream(name).is_empty())
      .map(String::as_str)
      .collect()
  }

  /// Nodes with no incoming connection, in document order.
  pub fn entry_points(&self) -> Vec<&str> {
    self
      .order
      .iter()
      .filter(|name| self.upstream(name).is_empty())
      .map(String::as_str)
      .collect()
  }

  /// Nodes with neither incoming nor outgoing connections, in document order.
  pub fn isolated(&self) -> Vec<&str> {
    self
      .order
      .iter()
      .filter(|name| self.upstream(name).is_empty() && self.downstream(name).is_empty())
      .map(String::as_str)
      .collect()
  }
}
