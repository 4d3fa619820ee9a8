use clap::{Parser, ValueEnum};
use itertools::Itertools;
use keiro::prelude::*;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    All,
    Direct,
    Transitive,
    Global,
}

impl From<ModeCli> for VisibilityMode {
    fn from(mode: ModeCli) -> Self {
        match mode {
            ModeCli::All => VisibilityMode::All,
            ModeCli::Direct => VisibilityMode::Direct,
            ModeCli::Transitive => VisibilityMode::Transitive,
            ModeCli::Global => VisibilityMode::Global,
        }
    }
}

/// A dependency-resolution CLI for workflow form prefill
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the blueprint graph JSON file
    graph_path: Option<String>,

    /// Id of the target node to resolve prefill sources for.
    /// Omit to list the workflow steps of the payload instead.
    #[arg(short, long)]
    target: Option<String>,

    /// Visibility mode for the presented catalog
    #[arg(short, long, value_enum)]
    mode: Option<ModeCli>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_resolution(graph_path: String, target: Option<String>, mode: VisibilityMode) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let graph = BlueprintGraph::from_file(&graph_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let load_duration = load_start.elapsed();

    // --- 2. Index Construction ---
    let index_start = Instant::now();
    let resolver = Resolver::builder(graph).build();
    let index_duration = index_start.elapsed();

    if let Some(name) = &resolver.graph().blueprint_name {
        println!("\nLoaded blueprint '{}'", name);
    }
    println!("Indexed {} nodes.", resolver.index().node_count());

    println!("\nWorkflow steps:");
    for node in resolver.form_nodes() {
        println!("  - {} ({})", node.label(), node.id);
    }

    let target = match target {
        Some(target) => target,
        None => {
            println!("\nNo target node given; pass --target <node-id> to resolve prefill sources.");
            return;
        }
    };

    // --- 3. Resolution ---
    println!(
        "\nResolving prefill sources for '{}' (mode: {})...",
        resolver.index().label_of(&target),
        mode
    );
    let resolve_start = Instant::now();
    let catalog = resolver.resolve(&target, mode);
    let resolve_duration = resolve_start.elapsed();

    // --- 4. Classification and Catalog ---
    println!("\nDependency classification:");
    println!(
        "  -> Direct:     [{}]",
        catalog
            .partition
            .direct
            .iter()
            .map(|id| resolver.index().label_of(id))
            .join(", ")
    );
    println!(
        "  -> Transitive: [{}]",
        catalog
            .partition
            .transitive
            .iter()
            .map(|id| format!(
                "{} (depth {})",
                resolver.index().label_of(id),
                catalog.depths.depth_of(id).unwrap_or(0)
            ))
            .join(", ")
    );

    if !catalog.fields.is_empty() {
        println!("\nFields of the target form:");
        for field in &catalog.fields {
            println!("  - {} ({})", field.key, field.title);
        }
    }

    println!("\nSelectable prefill sources:");
    if catalog.groups.is_empty() {
        println!("  (none visible in this mode)");
    }
    for group in &catalog.groups {
        println!("\n  [{}] ({} items)", group.title, group.items.len());
        for item in &group.items {
            println!("    {} -> {}", item.label, item.source);
        }
    }

    // --- 5. Performance Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:       {:?}", load_duration);
    println!("Index Construction: {:?}", index_duration);
    println!("Resolution:         {:?}", resolve_duration);
    println!("---------------------------");
    println!("Total Execution:    {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let graph_path = cli.graph_path.unwrap_or_else(|| {
        exit_with_error("Graph path is required in non-interactive mode.");
    });
    let mode = cli.mode.unwrap_or(ModeCli::All).into();

    run_resolution(graph_path, cli.target, mode);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Keiro Interactive Mode ---");

    let graph_path = prompt_for_input("Enter blueprint graph path", Some("data/graph.json"));
    let target_str = prompt_for_input("Enter target node id (optional)", None);
    let target = if target_str.is_empty() {
        None
    } else {
        Some(target_str)
    };

    let mode = loop {
        println!("\nPlease select a visibility mode:");
        println!("  1: all (show every group)");
        println!("  2: direct (only direct-dependency forms)");
        println!("  3: transitive (only transitive-dependency forms)");
        println!("  4: global (only global value groups)");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break VisibilityMode::All,
            "2" => break VisibilityMode::Direct,
            "3" => break VisibilityMode::Transitive,
            "4" => break VisibilityMode::Global,
            _ => println!("Invalid choice. Please enter 1-4."),
        }
    };

    run_resolution(graph_path, target, mode);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
