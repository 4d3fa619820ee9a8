use crate::error::BlueprintLoadError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Identifier of a node in the blueprint graph.
pub type NodeId = String;
/// Identifier of a form definition.
pub type FormDefinitionId = String;
/// Key of a single field within a form's schema.
pub type FieldKey = String;

/// The raw blueprint graph payload: workflow nodes, prerequisite edges, and
/// the form definitions those nodes are bound to.
///
/// Every collection is optional on the wire and defaults to empty, so a
/// partial payload degrades to empty lookups instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlueprintGraph {
    pub blueprint_id: Option<String>,
    pub blueprint_name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub forms: Vec<FormDefinition>,
}

impl BlueprintGraph {
    /// Parses a blueprint graph from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, BlueprintLoadError> {
        serde_json::from_str(json).map_err(|e| BlueprintLoadError::JsonParseError(e.to_string()))
    }

    /// Loads and parses a blueprint graph payload from a file.
    pub fn from_file(path: &str) -> Result<Self, BlueprintLoadError> {
        let content = fs::read_to_string(path).map_err(|e| BlueprintLoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The workflow steps of the graph: nodes with type `"form"`, in payload order.
    pub fn form_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|node| node.node_type == "form")
    }
}

/// A single node in the blueprint graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    /// Node discriminator; only `"form"` nodes are workflow steps.
    #[serde(rename = "type")]
    pub node_type: String,
    pub data: Option<NodeData>,
}

impl GraphNode {
    /// Display label: the node's name when present, otherwise its id.
    pub fn label(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.name.as_deref())
            .unwrap_or(&self.id)
    }

    /// Id of the form definition this node is bound to, if any.
    pub fn form_definition_id(&self) -> Option<&FormDefinitionId> {
        self.data.as_ref().and_then(|data| data.component_id.as_ref())
    }
}

/// Optional data block attached to a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    /// Id of the form definition bound to this node, if any.
    pub component_id: Option<FormDefinitionId>,
    /// Human-readable node name used in labels.
    pub name: Option<String>,
    /// Redundant prerequisite listing some payloads carry. Edges are the
    /// source of truth; this field is never consulted.
    pub prerequisites: Option<Vec<NodeId>>,
}

/// A directed prerequisite edge: `source` must complete before `target` runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// A named field schema describing the inputs collected at a form node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: FormDefinitionId,
    pub name: String,
    pub field_schema: Option<FieldSchema>,
}

/// The schema wrapper around a form's field properties.
///
/// Property descriptors stay opaque JSON; the field projector only reads the
/// optional `title` of each entry. Declaration order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSchema {
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}
