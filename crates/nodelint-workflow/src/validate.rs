use std::collections::HashSet;

use nodelint_config::{Connection, ConnectionSet, Document, NodeDef, Position};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::summary::ValidationSummary;

const REQUIRED_FIELDS: [&str; 3] = ["name", "nodes", "connections"];
const REQUIRED_NODE_FIELDS: [&str; 5] = ["id", "name", "type", "typeVersion", "position"];

/// Validate a loaded document and summarize it.
pub fn validate(doc: &Value) -> Result<ValidationSummary, ValidationError> {
  let document = check(doc)?;
  Ok(ValidationSummary::new(&document))
}

/// Check the structure of a generic JSON tree and project it into a
/// [`Document`].
///
/// Passes run in order (top-level shape, nodes, connections) and the first
/// problem found is returned.
pub fn check(doc: &Value) -> Result<Document, ValidationError> {
  let root = doc.as_object().ok_or(ValidationError::InvalidField {
    field: "document",
    expected: "an object",
  })?;

  for field in REQUIRED_FIELDS {
    if !root.contains_key(field) {
      return Err(ValidationError::MissingField(field));
    }
  }

  let name = root["name"].as_str().ok_or(ValidationError::InvalidField {
    field: "name",
    expected: "a string",
  })?;
  let nodes = root["nodes"].as_array().ok_or(ValidationError::InvalidField {
    field: "nodes",
    expected: "an array",
  })?;
  let connections = root["connections"]
    .as_object()
    .ok_or(ValidationError::InvalidField {
      field: "connections",
      expected: "an object",
    })?;

  debug!(count = nodes.len(), "validating nodes");
  let nodes = check_nodes(nodes)?;

  debug!(count = connections.len(), "validating connections");
  let node_names: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
  let connections = check_connections(connections, &node_names)?;

  Ok(Document {
    name: name.to_string(),
    nodes,
    connections,
  })
}

fn check_nodes(nodes: &[Value]) -> Result<Vec<NodeDef>, ValidationError> {
  let mut node_ids = HashSet::new();
  let mut node_names = HashSet::new();

  nodes
    .iter()
    .enumerate()
    .map(|(index, node)| check_node(index, node, &mut node_ids, &mut node_names))
    .collect()
}

fn check_node(
  index: usize,
  value: &Value,
  node_ids: &mut HashSet<String>,
  node_names: &mut HashSet<String>,
) -> Result<NodeDef, ValidationError> {
  let node = value
    .as_object()
    .ok_or(ValidationError::InvalidNode { index })?;

  for field in REQUIRED_NODE_FIELDS {
    if !node.contains_key(field) {
      return Err(ValidationError::MissingNodeField { index, field });
    }
  }

  let string_field = |field: &'static str| {
    node[field]
      .as_str()
      .ok_or(ValidationError::InvalidNodeField {
        index,
        field,
        expected: "a string",
      })
  };

  let id = string_field("id")?;
  let name = string_field("name")?;
  let node_type = string_field("type")?;
  let type_version = node["typeVersion"]
    .as_f64()
    .ok_or(ValidationError::InvalidNodeField {
      index,
      field: "typeVersion",
      expected: "a number",
    })?;

  if !node_ids.insert(id.to_string()) {
    return Err(ValidationError::DuplicateNodeId(id.to_string()));
  }
  if !node_names.insert(name.to_string()) {
    return Err(ValidationError::DuplicateNodeName(name.to_string()));
  }

  let position = parse_position(&node["position"])
    .ok_or_else(|| ValidationError::InvalidPosition(name.to_string()))?;

  debug!(index, node = name, "node ok");

  Ok(NodeDef {
    id: id.to_string(),
    name: name.to_string(),
    node_type: node_type.to_string(),
    type_version,
    position,
  })
}

fn parse_position(value: &Value) -> Option<Position> {
  match value.as_array()?.as_slice() {
    [x, y] => Some(Position(x.as_f64()?, y.as_f64()?)),
    _ => None,
  }
}

fn check_connections(
  connections: &Map<String, Value>,
  node_names: &HashSet<&str>,
) -> Result<Vec<ConnectionSet>, ValidationError> {
  let mut sets = Vec::with_capacity(connections.len());

  for (source, value) in connections {
    if !node_names.contains(source.as_str()) {
      return Err(ValidationError::UnknownSourceNode(source.clone()));
    }

    let main = value
      .get("main")
      .ok_or_else(|| ValidationError::MissingMainConnections(source.clone()))?;

    let malformed = || ValidationError::MalformedConnection(source.clone());

    let groups = main.as_array().ok_or_else(malformed)?;
    let mut slots = Vec::with_capacity(groups.len());
    for group in groups {
      let entries = group.as_array().ok_or_else(malformed)?;
      let mut slot = Vec::with_capacity(entries.len());
      for entry in entries {
        let connection = parse_connection(entry).ok_or_else(malformed)?;
        if !node_names.contains(connection.node.as_str()) {
          return Err(ValidationError::UnknownTargetNode {
            from: source.clone(),
            to: connection.node,
          });
        }
        slot.push(connection);
      }
      slots.push(slot);
    }

    sets.push(ConnectionSet {
      source: source.clone(),
      main: slots,
    });
  }

  Ok(sets)
}

/// Project a connection entry. `type` and `index` are optional and fall back
/// to their defaults when absent or mistyped.
fn parse_connection(entry: &Value) -> Option<Connection> {
  let entry = entry.as_object()?;
  let mut connection = Connection::new(entry.get("node")?.as_str()?);
  if let Some(connection_type) = entry.get("type").and_then(Value::as_str) {
    connection.connection_type = connection_type.to_string();
  }
  if let Some(index) = entry.get("index").and_then(Value::as_u64) {
    connection.index = index;
  }
  Some(connection)
}
