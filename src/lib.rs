//! # Keiro - Dependency Resolution for Workflow Form Prefill
//!
//! **Keiro** answers, for any form node in a workflow blueprint graph, which
//! upstream fields and global values may prefill its inputs. It classifies a
//! node's ancestors as direct or transitive dependencies by minimum hop
//! distance, projects their form schemas into flat field lists, and
//! assembles the selectable sources through pluggable providers.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical
//! [`BlueprintGraph`](blueprint::BlueprintGraph) payload model, and the
//! primary workflow is:
//!
//! 1.  **Load Your Graph**: Parse the JSON wire format with
//!     [`BlueprintGraph::from_json`](blueprint::BlueprintGraph::from_json),
//!     or implement [`IntoBlueprint`](blueprint::IntoBlueprint) to translate
//!     your own format into the canonical model.
//! 2.  **Build**: Use [`Resolver::builder`](resolver::Resolver::builder) to
//!     index the graph once and attach prefill-source providers.
//! 3.  **Resolve**: Call [`resolve`](resolver::Resolver::resolve) per target
//!     node to get the visible catalog of prefill sources, grouped by
//!     provider and classified by dependency depth.
//!
//! ## Quick Start
//!
//! The following example resolves the prefill sources for the second step of
//! a two-step workflow.
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let payload = r#"{
//!         "nodes": [
//!             {"id": "n-intake", "type": "form", "data": {"component_id": "f-intake", "name": "Intake"}},
//!             {"id": "n-review", "type": "form", "data": {"component_id": "f-review", "name": "Review"}}
//!         ],
//!         "edges": [{"source": "n-intake", "target": "n-review"}],
//!         "forms": [
//!             {"id": "f-intake", "name": "Intake", "field_schema": {"properties": {
//!                 "email": {"type": "string", "title": "Email"},
//!                 "name": {"type": "string", "title": "Full name"}
//!             }}},
//!             {"id": "f-review", "name": "Review", "field_schema": {"properties": {
//!                 "email": {"type": "string", "title": "Email"}
//!             }}}
//!         ]
//!     }"#;
//!
//!     // Parse the payload and build the resolver with the standard providers.
//!     let graph = BlueprintGraph::from_json(payload)?;
//!     let resolver = Resolver::builder(graph).build();
//!
//!     // Resolve the selectable sources for the "Review" step.
//!     let catalog = resolver.resolve("n-review", VisibilityMode::All);
//!     for group in &catalog.groups {
//!         println!("{}", group.title);
//!         for item in &group.items {
//!             println!("  {} -> {}", item.label, item.source);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod blueprint;
pub mod error;
pub mod fields;
pub mod graph;
pub mod prefill;
pub mod prelude;
pub mod resolver;
