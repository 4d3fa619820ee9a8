use super::source::PrefillSource;
use crate::blueprint::{BlueprintGraph, NodeId};
use crate::fields::fields_for_node;
use crate::graph::{DependencyDepths, GraphIndex};

/// One selectable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    pub label: String,
    pub source: PrefillSource,
}

/// A titled group of catalog entries produced by one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub title: String,
    pub items: Vec<SourceItem>,
}

/// Everything a provider may consult while producing its groups: borrowed
/// views over one resolution, including the precomputed classification of
/// the target's ancestors.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub graph: &'a BlueprintGraph,
    pub index: &'a GraphIndex,
    pub target_node_id: &'a str,
    /// Ancestors classified as direct dependencies, in discovery order.
    pub direct_node_ids: &'a [NodeId],
    /// Ancestors classified as transitive dependencies, in discovery order.
    pub transitive_node_ids: &'a [NodeId],
    pub depths: &'a DependencyDepths,
}

/// Defines the contract for one independent source of selectable prefill
/// items.
///
/// Providers are pure functions of the context: no shared state, safely
/// callable in any order or in isolation.
pub trait SourceProvider: Send + Sync {
    /// Stable identifier of this provider.
    fn id(&self) -> &str;

    /// The titled groups this provider contributes for one resolution.
    fn groups(&self, ctx: &ResolutionContext<'_>) -> Vec<SourceGroup>;
}

/// Fields of every direct dependency form, one item per field.
pub struct DirectDependencyFormsProvider;

impl SourceProvider for DirectDependencyFormsProvider {
    fn id(&self) -> &str {
        "direct-dependency-forms"
    }

    fn groups(&self, ctx: &ResolutionContext<'_>) -> Vec<SourceGroup> {
        vec![form_field_group(
            "Direct dependency forms",
            ctx.index,
            ctx.direct_node_ids,
        )]
    }
}

/// Fields of every transitive dependency form.
pub struct TransitiveDependencyFormsProvider;

impl SourceProvider for TransitiveDependencyFormsProvider {
    fn id(&self) -> &str {
        "transitive-dependency-forms"
    }

    fn groups(&self, ctx: &ResolutionContext<'_>) -> Vec<SourceGroup> {
        vec![form_field_group(
            "Transitive dependency forms",
            ctx.index,
            ctx.transitive_node_ids,
        )]
    }
}

/// Constant, environment-style values not tied to any node.
pub struct GlobalDataProvider;

impl SourceProvider for GlobalDataProvider {
    fn id(&self) -> &str {
        "global-data"
    }

    fn groups(&self, _ctx: &ResolutionContext<'_>) -> Vec<SourceGroup> {
        vec![SourceGroup {
            title: "Global data".to_string(),
            items: vec![
                global_item("Global: user.id", "user.id"),
                global_item("Global: tenant.id", "tenant.id"),
            ],
        }]
    }
}

/// Constant properties of the running action.
pub struct GlobalActionProvider;

impl SourceProvider for GlobalActionProvider {
    fn id(&self) -> &str {
        "global-action"
    }

    fn groups(&self, _ctx: &ResolutionContext<'_>) -> Vec<SourceGroup> {
        vec![SourceGroup {
            title: "Action properties".to_string(),
            items: vec![
                global_item("Global: action.id", "action.id"),
                global_item("Global: action.createdAt", "action.createdAt"),
                global_item("Global: environment.name", "env.name"),
            ],
        }]
    }
}

/// Builds one group of form-field items over a dependency id list, labelled
/// `<node label>.<field key>` in the given node order.
fn form_field_group(title: &str, index: &GraphIndex, node_ids: &[NodeId]) -> SourceGroup {
    let mut items = Vec::new();
    for node_id in node_ids {
        let label = index.label_of(node_id);
        for field in fields_for_node(index, node_id) {
            items.push(SourceItem {
                label: format!("{}.{}", label, field.key),
                source: PrefillSource::FormField {
                    node_id: node_id.clone(),
                    field_key: field.key,
                },
            });
        }
    }
    SourceGroup {
        title: title.to_string(),
        items,
    }
}

fn global_item(label: &str, key: &str) -> SourceItem {
    SourceItem {
        label: label.to_string(),
        source: PrefillSource::Global {
            key: key.to_string(),
        },
    }
}
