use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single node in a declarative automation graph.
///
/// The field names and the `type` strings are a fixed external schema
/// consumed by the downstream workflow-execution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: f64,
    pub position: [i64; 2],
    pub parameters: serde_json::Value,
}

/// One forwarding entry: the target node, port kind, and zero-based index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type")]
    pub port: String,
    pub index: u32,
}

/// The outgoing connections of one node, grouped by branch.
///
/// The `main` key and the nested list-of-lists shape must round-trip exactly
/// for the downstream engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConnections {
    pub main: Vec<Vec<ConnectionTarget>>,
}

/// A generated declarative automation graph: named nodes plus a mapping from
/// source-node name to its forwarding lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    pub name: String,
    pub nodes: Vec<Node>,
    pub connections: AHashMap<String, NodeConnections>,
}
