use super::definition::BlueprintGraph;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a keiro `BlueprintGraph`.
///
/// This is the primary extension point for making keiro format-agnostic. By
/// implementing this trait on your own payload structs, you provide a
/// translation layer that lets the resolver work with your custom graph
/// format.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::prelude::*;
/// use keiro::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, form: Option<String> }
/// struct MyWorkflow { steps: Vec<MyStep>, order: Vec<(String, String)> }
///
/// // 2. Implement `IntoBlueprint` for your top-level struct.
/// impl IntoBlueprint for MyWorkflow {
///     fn into_blueprint(self) -> std::result::Result<BlueprintGraph, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| GraphNode {
///                 id: step.id,
///                 node_type: "form".to_string(),
///                 data: Some(NodeData {
///                     component_id: step.form,
///                     name: None,
///                     prerequisites: None,
///                 }),
///             })
///             .collect();
///
///         let edges = self
///             .order
///             .into_iter()
///             .map(|(source, target)| GraphEdge { source, target })
///             .collect();
///
///         Ok(BlueprintGraph {
///             nodes,
///             edges,
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoBlueprint {
    /// Consumes the object and converts it into a keiro-compatible blueprint graph.
    fn into_blueprint(self) -> Result<BlueprintGraph, GraphConversionError>;
}
