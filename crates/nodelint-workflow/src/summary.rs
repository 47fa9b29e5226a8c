use serde::Serialize;

use nodelint_config::Document;

use crate::graph::Graph;

/// Aggregate statistics of a document that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
  pub name: String,
  pub total_nodes: usize,
  /// Distinct nodes that appear as a connection target.
  pub connected_nodes: usize,
  pub trigger_nodes: usize,
  pub triggers: Vec<String>,
  /// Non-trigger nodes that nothing connects into.
  pub orphans: Vec<String>,
  /// Nodes with no connection in either direction.
  pub isolated: Vec<String>,
}

impl ValidationSummary {
  pub fn new(document: &Document) -> Self {
    let graph = Graph::new(document);

    let triggers: Vec<String> = document.triggers().map(|n| n.name.clone()).collect();

    let orphans = graph
      .entry_points()
      .into_iter()
      .filter(|name| document.get_node(name).is_some_and(|n| !n.is_trigger()))
      .map(str::to_string)
      .collect();

    let isolated = graph.isolated().into_iter().map(str::to_string).collect();

    Self {
      name: document.name.clone(),
      total_nodes: document.nodes.len(),
      connected_nodes: graph.connected().len(),
      trigger_nodes: triggers.len(),
      triggers,
      orphans,
      isolated,
    }
  }
}
