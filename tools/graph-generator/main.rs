use clap::Parser;
use keiro::blueprint::{
    BlueprintGraph, FieldSchema, FormDefinition, GraphEdge, GraphNode, NodeData,
};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate workflow blueprint graphs for the keiro resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The number of workflow layers to generate
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// The minimum number of form nodes per layer
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of form nodes per layer
    #[arg(long, default_value_t = 3)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min == 0 {
        eprintln!("Error: --min must be at least 1");
        std::process::exit(1);
    }
    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating blueprint graph ({} layers, {} to {} nodes per layer)...",
        cli.layers, cli.min, cli.max
    );

    let graph = generate_graph(&mut rng, cli.layers, cli.min, cli.max);

    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved blueprint graph to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates a layered workflow graph: every node in a layer depends on one
/// or two nodes of the previous layer, so deeper layers accumulate both
/// direct and transitive dependencies.
fn generate_graph(rng: &mut ThreadRng, layers: usize, min: usize, max: usize) -> BlueprintGraph {
    let forms = form_pool();
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut previous_layer: Vec<String> = Vec::new();
    let mut next_number = 1;

    for layer in 0..layers {
        let count = rng.random_range(min..=max);
        let mut current_layer = Vec::with_capacity(count);

        for _ in 0..count {
            let id = format!("node-{:03}", next_number);
            let form = &forms[rng.random_range(0..forms.len())];
            nodes.push(GraphNode {
                id: id.clone(),
                node_type: "form".to_string(),
                data: Some(NodeData {
                    component_id: Some(form.id.clone()),
                    name: Some(format!("Step {}", next_number)),
                    prerequisites: None,
                }),
            });
            next_number += 1;

            for parent in pick_parents(rng, &previous_layer) {
                edges.push(GraphEdge {
                    source: parent,
                    target: id.clone(),
                });
            }
            current_layer.push(id);
        }

        println!("-> Generated layer {} with {} node(s).", layer, count);
        previous_layer = current_layer;
    }

    BlueprintGraph {
        blueprint_id: Some("generated".to_string()),
        blueprint_name: Some("Generated workflow".to_string()),
        nodes,
        edges,
        forms,
    }
}

/// Picks one or two distinct parents from the previous layer.
fn pick_parents(rng: &mut ThreadRng, previous_layer: &[String]) -> Vec<String> {
    if previous_layer.is_empty() {
        return Vec::new();
    }

    let wanted = rng.random_range(1..=2).min(previous_layer.len());
    let mut parents: Vec<String> = Vec::new();
    while parents.len() < wanted {
        let candidate = &previous_layer[rng.random_range(0..previous_layer.len())];
        if !parents.contains(candidate) {
            parents.push(candidate.clone());
        }
    }
    parents
}

// --- Form Definitions Shared by the Generated Nodes ---

fn form_pool() -> Vec<FormDefinition> {
    vec![
        FormDefinition {
            id: "f-contact".to_string(),
            name: "Contact".to_string(),
            field_schema: Some(contact_schema()),
        },
        FormDefinition {
            id: "f-details".to_string(),
            name: "Details".to_string(),
            field_schema: Some(details_schema()),
        },
        FormDefinition {
            id: "f-review".to_string(),
            name: "Review".to_string(),
            field_schema: Some(review_schema()),
        },
    ]
}

fn contact_schema() -> FieldSchema {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "email".to_string(),
        json!({"type": "string", "title": "Email"}),
    );
    properties.insert(
        "name".to_string(),
        json!({"type": "string", "title": "Full name"}),
    );
    properties.insert(
        "phone".to_string(),
        json!({"type": "string", "title": "Phone number"}),
    );
    FieldSchema {
        properties: Some(properties),
    }
}

fn details_schema() -> FieldSchema {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "address".to_string(),
        json!({"type": "string", "title": "Street address"}),
    );
    properties.insert(
        "city".to_string(),
        json!({"type": "string", "title": "City"}),
    );
    properties.insert(
        "zip".to_string(),
        json!({"type": "string", "title": "Postal code"}),
    );
    FieldSchema {
        properties: Some(properties),
    }
}

fn review_schema() -> FieldSchema {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "comments".to_string(),
        json!({"type": "string", "title": "Comments"}),
    );
    properties.insert(
        "approved".to_string(),
        json!({"type": "boolean", "title": "Approved"}),
    );
    FieldSchema {
        properties: Some(properties),
    }
}
