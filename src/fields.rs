//! Projection of form schemas into flat, ordered field lists.

use crate::blueprint::FieldKey;
use crate::graph::GraphIndex;

/// One selectable input field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    /// Display title; falls back to the key when the schema carries none.
    pub title: String,
}

/// Projects the field schema of the form bound to `node_id` into an ordered
/// descriptor list.
///
/// A node without a form binding, a binding to an unknown definition, or a
/// definition without `properties` all project to an empty list, never an
/// error. Declaration order of the schema properties is preserved.
pub fn fields_for_node(index: &GraphIndex, node_id: &str) -> Vec<FieldDescriptor> {
    index
        .form_definition_of(node_id)
        .and_then(|definition| definition.field_schema.as_ref())
        .and_then(|schema| schema.properties.as_ref())
        .map(|properties| {
            properties
                .iter()
                .map(|(key, descriptor)| FieldDescriptor {
                    key: key.clone(),
                    title: descriptor
                        .get("title")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or(key)
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
