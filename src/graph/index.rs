use crate::blueprint::{BlueprintGraph, FormDefinition, FormDefinitionId, GraphNode, NodeId};
use ahash::AHashMap;

/// Fast lookup structures derived from one raw blueprint payload.
///
/// Built once per payload and read-only afterwards; a changed payload means
/// building a fresh index, never mutating this one. Lookups against unknown
/// ids degrade to empty results instead of failing.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    incoming: AHashMap<NodeId, Vec<NodeId>>,
    outgoing: AHashMap<NodeId, Vec<NodeId>>,
    node_by_id: AHashMap<NodeId, GraphNode>,
    form_definition_by_id: AHashMap<FormDefinitionId, FormDefinition>,
    form_definition_id_by_node: AHashMap<NodeId, FormDefinitionId>,
}

impl GraphIndex {
    /// Builds the index for quick lookup of graph relationships and form
    /// definitions.
    ///
    /// Total function: missing payload collections produce empty maps. For
    /// each edge `(source, target)` the target is appended to
    /// `outgoing[source]` and the source to `incoming[target]`, preserving
    /// edge input order. Duplicate edges stay duplicated (adjacency lists
    /// are multisets), and every node id from the payload gets an entry in
    /// both adjacency maps even when it has no edges.
    pub fn build(graph: &BlueprintGraph) -> Self {
        let mut incoming: AHashMap<NodeId, Vec<NodeId>> = AHashMap::new();
        let mut outgoing: AHashMap<NodeId, Vec<NodeId>> = AHashMap::new();
        let mut node_by_id = AHashMap::new();
        let mut form_definition_by_id = AHashMap::new();
        let mut form_definition_id_by_node = AHashMap::new();

        for form in &graph.forms {
            form_definition_by_id.insert(form.id.clone(), form.clone());
        }

        for node in &graph.nodes {
            if let Some(form_id) = node.form_definition_id() {
                form_definition_id_by_node.insert(node.id.clone(), form_id.clone());
            }
            node_by_id.insert(node.id.clone(), node.clone());
        }

        for edge in &graph.edges {
            // parent -> child
            outgoing
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            // child -> parent
            incoming
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
        }

        // Every payload node gets an adjacency entry, edges or not.
        for node in &graph.nodes {
            incoming.entry(node.id.clone()).or_default();
            outgoing.entry(node.id.clone()).or_default();
        }

        tracing::debug!(
            nodes = node_by_id.len(),
            edges = graph.edges.len(),
            forms = form_definition_by_id.len(),
            "built graph index"
        );

        Self {
            incoming,
            outgoing,
            node_by_id,
            form_definition_by_id,
            form_definition_id_by_node,
        }
    }

    /// Direct parents of a node: every node with an edge pointing into it,
    /// in edge input order. Empty for unknown ids.
    pub fn direct_parents(&self, node_id: &str) -> &[NodeId] {
        self.incoming.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct children of a node, in edge input order. Empty for unknown ids.
    pub fn children(&self, node_id: &str) -> &[NodeId] {
        self.outgoing.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node(&self, node_id: &str) -> Option<&GraphNode> {
        self.node_by_id.get(node_id)
    }

    /// Display label for a node id: the node's name when known, the raw id
    /// otherwise.
    pub fn label_of<'a>(&'a self, node_id: &'a str) -> &'a str {
        self.node_by_id
            .get(node_id)
            .map(GraphNode::label)
            .unwrap_or(node_id)
    }

    pub fn form_definition(&self, form_id: &str) -> Option<&FormDefinition> {
        self.form_definition_by_id.get(form_id)
    }

    /// Id of the form definition bound to a node, if any.
    pub fn form_definition_id_of(&self, node_id: &str) -> Option<&FormDefinitionId> {
        self.form_definition_id_by_node.get(node_id)
    }

    /// The form definition bound to a node, resolved through its binding.
    pub fn form_definition_of(&self, node_id: &str) -> Option<&FormDefinition> {
        let form_id = self.form_definition_id_by_node.get(node_id)?;
        self.form_definition_by_id.get(form_id)
    }

    pub fn node_count(&self) -> usize {
        self.node_by_id.len()
    }
}
