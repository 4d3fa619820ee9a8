//! The resolution facade: owns one blueprint payload, the index built from
//! it, and a provider registry, and answers catalog queries for target
//! nodes.

use crate::blueprint::{BlueprintGraph, GraphNode, NodeId};
use crate::fields::{FieldDescriptor, fields_for_node};
use crate::graph::{DependencyDepths, DependencyPartition, GraphIndex, dependency_depths};
use crate::prefill::{
    ProviderRegistry, ResolutionContext, SourceGroup, SourceProvider, VisibilityMode,
    visible_groups,
};

/// Everything computed for one target node: the visible catalog plus the
/// classification it was derived from.
#[derive(Debug, Clone)]
pub struct SourceCatalog {
    pub target_node_id: NodeId,
    /// The visibility mode the catalog was filtered with.
    pub mode: VisibilityMode,
    /// Visible groups, in provider registration order.
    pub groups: Vec<SourceGroup>,
    /// Canonical direct/transitive classification of the target's ancestors.
    pub partition: DependencyPartition,
    /// Minimum hop distance per ancestor.
    pub depths: DependencyDepths,
    /// Fields of the target node itself, in schema order.
    pub fields: Vec<FieldDescriptor>,
}

/// Builder for [`Resolver`], preloaded with the standard provider set.
pub struct ResolverBuilder {
    graph: BlueprintGraph,
    registry: ProviderRegistry,
}

impl ResolverBuilder {
    pub fn new(graph: BlueprintGraph) -> Self {
        Self {
            graph,
            registry: ProviderRegistry::standard(),
        }
    }

    /// Appends a provider after the already registered ones.
    pub fn with_provider(mut self, provider: Box<dyn SourceProvider>) -> Self {
        self.registry.register(provider);
        self
    }

    /// Replaces the registry wholesale, e.g. with a caller-assembled set.
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builds the graph index and finishes the resolver.
    pub fn build(self) -> Resolver {
        let index = GraphIndex::build(&self.graph);
        Resolver {
            graph: self.graph,
            index,
            registry: self.registry,
        }
    }
}

/// Resolves prefill-source catalogs over one blueprint payload.
///
/// Immutable once built: a changed payload means building a new resolver.
/// All resolution state lives on the stack of [`resolve`](Self::resolve),
/// so a shared resolver can serve overlapping queries.
pub struct Resolver {
    graph: BlueprintGraph,
    index: GraphIndex,
    registry: ProviderRegistry,
}

impl Resolver {
    /// Entry point: `Resolver::builder(graph).build()`.
    pub fn builder(graph: BlueprintGraph) -> ResolverBuilder {
        ResolverBuilder::new(graph)
    }

    pub fn graph(&self) -> &BlueprintGraph {
        &self.graph
    }

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    /// Workflow steps of the payload, in payload order.
    pub fn form_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.form_nodes()
    }

    /// Ordered field descriptors of one node; empty when the node has no
    /// form binding.
    pub fn fields_of(&self, node_id: &str) -> Vec<FieldDescriptor> {
        fields_for_node(&self.index, node_id)
    }

    /// Resolves the selectable prefill sources for `target_node_id`.
    ///
    /// Computes the depth map once, derives the direct/transitive partition
    /// from it, collects every registered provider's groups, and applies
    /// the visibility mask last. Unknown target ids resolve like parentless
    /// nodes: global groups only.
    pub fn resolve(&self, target_node_id: &str, mode: VisibilityMode) -> SourceCatalog {
        let depths = dependency_depths(&self.index, target_node_id);
        let partition = depths.partition();

        let ctx = ResolutionContext {
            graph: &self.graph,
            index: &self.index,
            target_node_id,
            direct_node_ids: &partition.direct,
            transitive_node_ids: &partition.transitive,
            depths: &depths,
        };
        let groups = visible_groups(self.registry.catalog(&ctx), mode);

        tracing::debug!(
            node = target_node_id,
            direct = partition.direct.len(),
            transitive = partition.transitive.len(),
            groups = groups.len(),
            %mode,
            "resolved prefill sources"
        );

        SourceCatalog {
            target_node_id: target_node_id.to_string(),
            mode,
            groups,
            partition,
            depths,
            fields: fields_for_node(&self.index, target_node_id),
        }
    }
}
