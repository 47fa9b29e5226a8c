use serde::{Deserialize, Serialize};

/// Layout coordinates of a node on the editor canvas, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

/// One processing unit of a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
  pub id: String,
  /// Display name. Connections address nodes by this, not by `id`.
  pub name: String,
  /// Namespaced type identifier, e.g. `n8n-nodes-base.httpRequest`.
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(rename = "typeVersion")]
  pub type_version: f64,
  pub position: Position,
}

impl NodeDef {
  /// Whether this node starts the workflow.
  ///
  /// Classification is a case-insensitive substring match on the type
  /// identifier for `cron` or `trigger`.
  pub fn is_trigger(&self) -> bool {
    let node_type = self.node_type.to_lowercase();
    node_type.contains("cron") || node_type.contains("trigger")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn node(node_type: &str) -> NodeDef {
    NodeDef {
      id: "1".to_string(),
      name: "node".to_string(),
      node_type: node_type.to_string(),
      type_version: 1.0,
      position: Position(0.0, 0.0),
    }
  }

  #[test]
  fn test_trigger_classification() {
    assert!(node("n8n-nodes-base.cron").is_trigger());
    assert!(node("n8n-nodes-base.webhookTrigger").is_trigger());
    assert!(node("Vendor.CRON").is_trigger());
    assert!(node("n8n-nodes-base.manualTrigger").is_trigger());
    assert!(!node("n8n-nodes-base.httpRequest").is_trigger());
    assert!(!node("n8n-nodes-base.set").is_trigger());
  }

  #[test]
  fn test_node_serializes_with_wire_names() {
    let value = serde_json::to_value(node("action.http")).unwrap();
    assert_eq!(value["type"], "action.http");
    assert_eq!(value["typeVersion"], 1.0);
    assert_eq!(value["position"], serde_json::json!([0.0, 0.0]));
  }
}
