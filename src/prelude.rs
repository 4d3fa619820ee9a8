//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the keiro crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load the blueprint graph payload and build a resolver
//! let graph = BlueprintGraph::from_file("path/to/graph.json")?;
//! let resolver = Resolver::builder(graph).build();
//!
//! // Resolve the prefill-source catalog for one target node
//! let catalog = resolver.resolve("node-id", VisibilityMode::All);
//! for group in &catalog.groups {
//!     println!("{}: {} items", group.title, group.items.len());
//! }
//! # Ok(())
//! # }
//! ```

// Core resolution
pub use crate::resolver::{Resolver, ResolverBuilder, SourceCatalog};

// Blueprint payload model
pub use crate::blueprint::{
    BlueprintGraph, FieldSchema, FormDefinition, GraphEdge, GraphNode, IntoBlueprint, NodeData,
};

// Graph lookup and traversal
pub use crate::graph::{DependencyDepths, DependencyPartition, GraphIndex};

// Fields and prefill sources
pub use crate::fields::FieldDescriptor;
pub use crate::prefill::{
    PrefillMapping, PrefillSource, PrefillState, ProviderRegistry, SourceGroup, SourceItem,
    SourceProvider, VisibilityMode,
};

// Error types
pub use crate::error::{BlueprintLoadError, GraphConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
