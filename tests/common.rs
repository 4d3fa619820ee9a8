//! Common test utilities for building blueprint graphs and payloads.
use keiro::blueprint::{
    BlueprintGraph, FieldSchema, FormDefinition, GraphEdge, GraphNode, NodeData,
};

/// Builds a `"form"` node bound to a form definition.
#[allow(dead_code)]
pub fn form_node(id: &str, name: &str, form_id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        node_type: "form".to_string(),
        data: Some(NodeData {
            component_id: Some(form_id.to_string()),
            name: Some(name.to_string()),
            prerequisites: None,
        }),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Builds a form definition with string-typed `(key, title)` properties.
#[allow(dead_code)]
pub fn form(id: &str, name: &str, fields: &[(&str, &str)]) -> FormDefinition {
    let mut properties = serde_json::Map::new();
    for (key, title) in fields {
        properties.insert(
            key.to_string(),
            serde_json::json!({"type": "string", "title": title}),
        );
    }
    FormDefinition {
        id: id.to_string(),
        name: name.to_string(),
        field_schema: Some(FieldSchema {
            properties: Some(properties),
        }),
    }
}

/// Creates the branching onboarding workflow used across the test suite.
///
/// Shape: A feeds B and C, B feeds D, C feeds E, and both D and E feed F.
/// Seen from F, the direct dependencies are D and E; B, C and A are
/// transitive at depths 2, 2 and 3.
#[allow(dead_code)]
pub fn create_branching_graph() -> BlueprintGraph {
    BlueprintGraph {
        blueprint_id: Some("bp-branching".to_string()),
        blueprint_name: Some("Branching onboarding".to_string()),
        nodes: vec![
            form_node("form-a", "Form A", "f-a"),
            form_node("form-b", "Form B", "f-b"),
            form_node("form-c", "Form C", "f-c"),
            form_node("form-d", "Form D", "f-d"),
            form_node("form-e", "Form E", "f-e"),
            form_node("form-f", "Form F", "f-f"),
        ],
        edges: vec![
            edge("form-d", "form-f"),
            edge("form-e", "form-f"),
            edge("form-b", "form-d"),
            edge("form-a", "form-b"),
            edge("form-a", "form-c"),
            edge("form-c", "form-e"),
        ],
        forms: vec![
            form("f-a", "Form A", &[("email", "Email"), ("name", "Full name")]),
            form("f-b", "Form B", &[("notes", "Notes")]),
            form("f-c", "Form C", &[("city", "City"), ("zip", "Postal code")]),
            form("f-d", "Form D", &[("email", "Email"), ("priority", "Priority")]),
            form("f-e", "Form E", &[("rating", "Rating")]),
            form("f-f", "Form F", &[("summary", "Summary"), ("email", "Email")]),
        ],
    }
}

/// Creates a cycle A -> B -> C -> A.
#[allow(dead_code)]
pub fn create_cyclic_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            form_node("form-a", "Form A", "f-a"),
            form_node("form-b", "Form B", "f-b"),
            form_node("form-c", "Form C", "f-c"),
        ],
        edges: vec![
            edge("form-a", "form-b"),
            edge("form-b", "form-c"),
            edge("form-c", "form-a"),
        ],
        forms: vec![
            form("f-a", "Form A", &[("email", "Email")]),
            form("f-b", "Form B", &[("notes", "Notes")]),
            form("f-c", "Form C", &[("summary", "Summary")]),
        ],
        ..Default::default()
    }
}

/// Creates A -> B plus an edge from B back onto itself.
#[allow(dead_code)]
pub fn create_self_loop_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            form_node("form-a", "Form A", "f-a"),
            form_node("form-b", "Form B", "f-b"),
        ],
        edges: vec![edge("form-a", "form-b"), edge("form-b", "form-b")],
        forms: vec![
            form("f-a", "Form A", &[("email", "Email")]),
            form("f-b", "Form B", &[("notes", "Notes")]),
        ],
        ..Default::default()
    }
}

/// Creates a graph where the same edge appears twice in the payload.
#[allow(dead_code)]
pub fn create_duplicate_edge_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            form_node("form-a", "Form A", "f-a"),
            form_node("form-b", "Form B", "f-b"),
        ],
        edges: vec![edge("form-a", "form-b"), edge("form-a", "form-b")],
        forms: vec![
            form("f-a", "Form A", &[("email", "Email")]),
            form("f-b", "Form B", &[("notes", "Notes")]),
        ],
        ..Default::default()
    }
}

/// Raw wire payload of a two-step workflow, including the extra fields real
/// payloads carry and the engine ignores.
#[allow(dead_code)]
pub fn two_step_payload() -> &'static str {
    r#"{
        "$id": "bp_01",
        "blueprint_id": "bp-demo",
        "blueprint_name": "Demo onboarding",
        "branches": [],
        "nodes": [
            {
                "id": "n-intake",
                "type": "form",
                "position": {"x": 100, "y": 200},
                "data": {"component_id": "f-intake", "name": "Intake", "prerequisites": []}
            },
            {
                "id": "n-review",
                "type": "form",
                "position": {"x": 400, "y": 200},
                "data": {"component_id": "f-review", "name": "Review", "prerequisites": ["n-intake"]}
            }
        ],
        "edges": [{"source": "n-intake", "target": "n-review"}],
        "forms": [
            {
                "id": "f-intake",
                "name": "Intake",
                "field_schema": {
                    "type": "object",
                    "properties": {
                        "email": {"type": "string", "title": "Email"},
                        "name": {"type": "string", "title": "Full name"}
                    },
                    "required": ["email"]
                }
            },
            {
                "id": "f-review",
                "name": "Review",
                "field_schema": {
                    "type": "object",
                    "properties": {
                        "summary": {"type": "string", "title": "Summary"}
                    }
                }
            }
        ]
    }"#
}
