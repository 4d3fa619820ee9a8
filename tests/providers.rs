//! Tests for source providers, the provider registry, and visibility
//! filtering of the presented catalog.
mod common;
use common::*;
use keiro::blueprint::BlueprintGraph;
use keiro::graph::{GraphIndex, dependency_depths};
use keiro::prefill::{
    DirectDependencyFormsProvider, GlobalActionProvider, GlobalDataProvider, PrefillSource,
    ProviderRegistry, ResolutionContext, SourceGroup, SourceItem, SourceProvider,
    TransitiveDependencyFormsProvider, VisibilityMode, visible_groups,
};

#[test]
fn test_direct_provider_emits_labelled_form_fields() {
    let graph = create_branching_graph();
    let index = GraphIndex::build(&graph);
    let depths = dependency_depths(&index, "form-f");
    let partition = depths.partition();
    let ctx = ResolutionContext {
        graph: &graph,
        index: &index,
        target_node_id: "form-f",
        direct_node_ids: &partition.direct,
        transitive_node_ids: &partition.transitive,
        depths: &depths,
    };

    let groups = DirectDependencyFormsProvider.groups(&ctx);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title, "Direct dependency forms");

    let labels: Vec<&str> = groups[0].items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, ["Form D.email", "Form D.priority", "Form E.rating"]);

    match &groups[0].items[0].source {
        PrefillSource::FormField { node_id, field_key } => {
            assert_eq!(node_id, "form-d");
            assert_eq!(field_key, "email");
        }
        other => panic!("Expected a form field source, got {:?}", other),
    }
}

#[test]
fn test_transitive_provider_follows_partition_order() {
    let graph = create_branching_graph();
    let index = GraphIndex::build(&graph);
    let depths = dependency_depths(&index, "form-f");
    let partition = depths.partition();
    let ctx = ResolutionContext {
        graph: &graph,
        index: &index,
        target_node_id: "form-f",
        direct_node_ids: &partition.direct,
        transitive_node_ids: &partition.transitive,
        depths: &depths,
    };

    let groups = TransitiveDependencyFormsProvider.groups(&ctx);
    let labels: Vec<&str> = groups[0].items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Form B.notes",
            "Form C.city",
            "Form C.zip",
            "Form A.email",
            "Form A.name",
        ]
    );
}

#[test]
fn test_global_providers_ignore_the_graph() {
    let graph = BlueprintGraph::default();
    let index = GraphIndex::build(&graph);
    let depths = dependency_depths(&index, "anything");
    let partition = depths.partition();
    let ctx = ResolutionContext {
        graph: &graph,
        index: &index,
        target_node_id: "anything",
        direct_node_ids: &partition.direct,
        transitive_node_ids: &partition.transitive,
        depths: &depths,
    };

    let data_groups = GlobalDataProvider.groups(&ctx);
    assert_eq!(data_groups[0].title, "Global data");
    let keys: Vec<String> = data_groups[0]
        .items
        .iter()
        .map(|item| item.source.to_string())
        .collect();
    assert_eq!(keys, ["user.id", "tenant.id"]);

    let action_groups = GlobalActionProvider.groups(&ctx);
    assert_eq!(action_groups[0].title, "Action properties");
    assert_eq!(action_groups[0].items[2].label, "Global: environment.name");
    match &action_groups[0].items[2].source {
        PrefillSource::Global { key } => assert_eq!(key, "env.name"),
        other => panic!("Expected a global source, got {:?}", other),
    }
}

#[test]
fn test_standard_registry_order() {
    let registry = ProviderRegistry::standard();
    assert_eq!(
        registry.provider_ids(),
        [
            "direct-dependency-forms",
            "transitive-dependency-forms",
            "global-data",
            "global-action",
        ]
    );
}

#[test]
fn test_registry_concatenates_in_registration_order() {
    let graph = create_branching_graph();
    let index = GraphIndex::build(&graph);
    let depths = dependency_depths(&index, "form-f");
    let partition = depths.partition();
    let ctx = ResolutionContext {
        graph: &graph,
        index: &index,
        target_node_id: "form-f",
        direct_node_ids: &partition.direct,
        transitive_node_ids: &partition.transitive,
        depths: &depths,
    };

    let catalog = ProviderRegistry::standard().catalog(&ctx);
    let titles: Vec<&str> = catalog.iter().map(|group| group.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Direct dependency forms",
            "Transitive dependency forms",
            "Global data",
            "Action properties",
        ]
    );
}

/// A provider that contributes a fixed lookup group, used to prove the
/// registry takes arbitrary implementations.
struct InventoryProvider;

impl SourceProvider for InventoryProvider {
    fn id(&self) -> &str {
        "inventory"
    }

    fn groups(&self, _ctx: &ResolutionContext<'_>) -> Vec<SourceGroup> {
        vec![SourceGroup {
            title: "Inventory lookups".to_string(),
            items: vec![SourceItem {
                label: "Inventory: sku".to_string(),
                source: PrefillSource::Global {
                    key: "inventory.sku".to_string(),
                },
            }],
        }]
    }
}

#[test]
fn test_custom_provider_can_replace_the_standard_set() {
    let graph = create_branching_graph();
    let index = GraphIndex::build(&graph);
    let depths = dependency_depths(&index, "form-f");
    let partition = depths.partition();
    let ctx = ResolutionContext {
        graph: &graph,
        index: &index,
        target_node_id: "form-f",
        direct_node_ids: &partition.direct,
        transitive_node_ids: &partition.transitive,
        depths: &depths,
    };

    let registry = ProviderRegistry::new().with_provider(Box::new(InventoryProvider));
    assert_eq!(registry.len(), 1);

    let catalog = registry.catalog(&ctx);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].title, "Inventory lookups");
}

fn group(title: &str, labels: &[&str]) -> SourceGroup {
    SourceGroup {
        title: title.to_string(),
        items: labels
            .iter()
            .map(|label| SourceItem {
                label: label.to_string(),
                source: PrefillSource::Global {
                    key: label.to_string(),
                },
            })
            .collect(),
    }
}

#[test]
fn test_mode_all_only_drops_empty_groups() {
    let groups = vec![
        group("Direct dependency forms", &["a"]),
        group("Transitive dependency forms", &[]),
        group("Global data", &["b"]),
    ];

    let visible = visible_groups(groups, VisibilityMode::All);
    let titles: Vec<&str> = visible.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Direct dependency forms", "Global data"]);
}

#[test]
fn test_mode_direct_hides_every_other_section() {
    let groups = vec![
        group("Direct dependency forms", &["a"]),
        group("Transitive dependency forms", &["b"]),
        group("Global data", &["c"]),
        group("Action properties", &["d"]),
    ];

    let visible = visible_groups(groups, VisibilityMode::Direct);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Direct dependency forms");
}

#[test]
fn test_mode_global_keeps_every_global_section() {
    // Anything that is not a dependency-form group counts as global,
    // including groups from custom providers.
    let groups = vec![
        group("Direct dependency forms", &["a"]),
        group("Transitive dependency forms", &["b"]),
        group("Global data", &["c"]),
        group("Action properties", &["d"]),
        group("Inventory lookups", &["e"]),
    ];

    let visible = visible_groups(groups, VisibilityMode::Global);
    let titles: Vec<&str> = visible.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Global data", "Action properties", "Inventory lookups"]);
}

#[test]
fn test_filter_preserves_group_and_item_order() {
    let groups = vec![
        group("Transitive dependency forms", &["x", "y"]),
        group("Direct dependency forms", &["a"]),
    ];

    let visible = visible_groups(groups, VisibilityMode::Transitive);
    assert_eq!(visible.len(), 1);
    let labels: Vec<&str> = visible[0].items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["x", "y"]);
}
