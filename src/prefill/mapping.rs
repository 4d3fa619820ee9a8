use super::source::PrefillSource;
use crate::blueprint::{FieldKey, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chosen prefill sources for one target node, keyed by field key.
///
/// `None` means the field was explicitly cleared; an absent key was never
/// touched. The engine only holds this structure in memory, persistence
/// belongs to the surrounding layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefillMapping {
    entries: BTreeMap<FieldKey, Option<PrefillSource>>,
}

impl PrefillMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen source for a field, if one is set.
    pub fn source_for(&self, field_key: &str) -> Option<&PrefillSource> {
        self.entries.get(field_key).and_then(|source| source.as_ref())
    }

    /// Records a chosen source for one field, replacing any previous choice.
    pub fn set(&mut self, field_key: &str, source: PrefillSource) {
        self.entries.insert(field_key.to_string(), Some(source));
    }

    /// Marks one field as explicitly cleared.
    pub fn clear(&mut self, field_key: &str) {
        self.entries.insert(field_key.to_string(), None);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates `(field key, chosen source)` pairs; cleared fields yield
    /// `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, Option<&PrefillSource>)> {
        self.entries.iter().map(|(key, source)| (key, source.as_ref()))
    }
}

/// Prefill mappings per node id.
///
/// Serializes to the opaque blob the persistence collaborator stores:
/// `{nodeId: {fieldKey: source | null}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefillState {
    nodes: BTreeMap<NodeId, PrefillMapping>,
}

impl PrefillState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping for a node, if any field of it was ever touched.
    pub fn mapping(&self, node_id: &str) -> Option<&PrefillMapping> {
        self.nodes.get(node_id)
    }

    /// The mapping for a node, created empty on first access.
    pub fn mapping_mut(&mut self, node_id: &str) -> &mut PrefillMapping {
        self.nodes.entry(node_id.to_string()).or_default()
    }

    /// Records a chosen source for one field of one node.
    pub fn set(&mut self, node_id: &str, field_key: &str, source: PrefillSource) {
        self.mapping_mut(node_id).set(field_key, source);
    }

    /// Marks one field of one node as explicitly cleared.
    pub fn clear(&mut self, node_id: &str, field_key: &str) {
        self.mapping_mut(node_id).clear(field_key);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
