use crate::blueprint::{FieldKey, NodeId};
use crate::graph::GraphIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A designated origin that can supply a value for a target field: either a
/// field on an upstream form node, or a global, environment-style constant.
///
/// Serializes to the wire shape the surrounding layers persist:
/// `{"kind":"formField","nodeId":…,"fieldKey":…}` or
/// `{"kind":"global","key":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PrefillSource {
    #[serde(rename = "formField", rename_all = "camelCase")]
    FormField { node_id: NodeId, field_key: FieldKey },
    #[serde(rename = "global")]
    Global { key: String },
}

impl PrefillSource {
    /// Human-readable label resolved against an index, using the node's
    /// display name where known, e.g. `Form B.email` or `user.id`.
    pub fn describe(&self, index: &GraphIndex) -> String {
        match self {
            PrefillSource::FormField { node_id, field_key } => {
                format!("{}.{}", index.label_of(node_id), field_key)
            }
            PrefillSource::Global { key } => key.clone(),
        }
    }
}

impl fmt::Display for PrefillSource {
    /// Id-based rendering, independent of any index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefillSource::FormField { node_id, field_key } => {
                write!(f, "{}.{}", node_id, field_key)
            }
            PrefillSource::Global { key } => write!(f, "{}", key),
        }
    }
}
