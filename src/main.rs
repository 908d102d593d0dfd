use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphwalk::analysis::{is_graphical_sequence, GraphReport};
use graphwalk::export::{self, ExportData, ExportFormat};
use graphwalk::graph::{Graph, GraphError, Vertex};
use graphwalk::parser::{self, EdgeMode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(version)]
#[command(about = "Graph traversal and degree-sequence analysis over edge-list files")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an edge list and print vertex and degree statistics
    Analyze {
        /// Edge-list file: one `from to [weight]` per line
        file: PathBuf,

        /// Insert each line as a one-way edge
        #[arg(short, long)]
        directed: bool,

        /// Output format: text, json, csv or markdown
        #[arg(short, long, default_value = "text", env = "GRAPHWALK_FORMAT")]
        format: ExportFormat,
    },
    /// Run every traversal query from a source vertex
    Traverse {
        /// Edge-list file: one `from to [weight]` per line
        file: PathBuf,

        /// Source vertex label
        #[arg(long)]
        from: String,

        /// Target vertex label for the shortest-path query
        #[arg(long)]
        to: Option<String>,

        /// Insert each line as a one-way edge
        #[arg(short, long)]
        directed: bool,
    },
    /// Test whether a degree sequence is graphical (Havel–Hakimi)
    Graphical {
        /// Non-negative vertex degrees
        degrees: Vec<usize>,
    },
    /// Run the built-in demonstration graphs
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Analyze {
            file,
            directed,
            format,
        }) => {
            let graph = load(&file, directed)?;
            let data = ExportData::new(file.display().to_string(), GraphReport::from_graph(&graph));
            export::export(format, &data, &mut io::stdout().lock())?;
        }
        Some(Commands::Traverse {
            file,
            from,
            to,
            directed,
        }) => {
            let graph = load(&file, directed)?;
            traverse(&graph, &from, to.as_ref())?;
        }
        Some(Commands::Graphical { degrees }) => {
            println!(
                "Sequence [{}] -> graphical? {}",
                join(&degrees, ", "),
                is_graphical_sequence(&degrees)
            );
        }
        Some(Commands::Demo) => demo()?,
        None => {
            println!("graphwalk - graph traversal and analysis");
            println!("Run 'graphwalk analyze <FILE>' to analyze an edge list");
            println!("Run 'graphwalk --help' for more information");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load(file: &Path, directed: bool) -> Result<Graph<String>> {
    info!(path = %file.display(), directed, "loading edge list");
    parser::parse_file(file, EdgeMode::from_directed(directed))
        .with_context(|| format!("could not load edge list '{}'", file.display()))
}

fn traverse<V: Vertex + Display>(graph: &Graph<V>, source: &V, target: Option<&V>) -> Result<()> {
    println!("BFS:            {}", join(&graph.bfs(source)?, " -> "));

    let distances = graph.bfs_distances(source)?;
    let mut reachable: Vec<_> = graph
        .vertices()
        .into_iter()
        .filter_map(|v| distances.get(v).map(|d| (v, *d)))
        .collect();
    reachable.sort_by_key(|&(_, d)| d);
    println!("Distances:");
    for (vertex, distance) in reachable {
        println!("  {}: {} edge(s)", vertex, distance);
    }

    println!("DFS recursive:  {}", join(&graph.dfs_recursive(source)?, " -> "));
    println!("DFS iterative:  {}", join(&graph.dfs_iterative(source)?, " -> "));

    if let Some(target) = target {
        match graph.bfs_shortest_path(source, target)? {
            Some(path) => println!(
                "Shortest path:  {} ({} edge(s))",
                join(&path, " -> "),
                path.len() - 1
            ),
            None => println!("Shortest path:  none, {} is unreachable", target),
        }
    }

    println!("Has cycle:      {}", graph.has_cycle_directed());
    match graph.topological_sort() {
        Ok(order) => println!("Topological:    {}", join(&order, " -> ")),
        Err(err) => println!("Topological:    {}", err),
    }

    match graph.find_connected_components() {
        Ok(components) => {
            println!("Components:     {}", components.len());
            for (i, component) in components.iter().enumerate() {
                println!("  {}: [{}]", i + 1, join(component, ", "));
            }
        }
        Err(GraphError::DirectedEdges) => {
            debug!("skipping components on a directed graph");
            println!("Components:     n/a for directed graphs");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn demo() -> Result<()> {
    println!("=== BFS and DFS ===");
    let mut graph = Graph::new();
    for (u, v) in [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (5, 7)] {
        graph.add_edge(u, v);
    }
    println!("Graph: 1-2, 1-3, 2-4, 2-5, 3-6, 5-7");
    traverse(&graph, &1, Some(&7))?;
    println!();

    println!("=== Cycle detection ===");
    let mut digraph = Graph::new();
    for (u, v) in [(1, 2), (2, 3), (3, 1), (3, 4)] {
        digraph.add_directed_edge(u, v);
    }
    println!("Directed: 1->2, 2->3, 3->1, 3->4");
    println!("Has cycle: {}", digraph.has_cycle_directed());
    println!();

    println!("=== Topological sort ===");
    let mut dag = Graph::new();
    for (u, v) in [(1, 2), (1, 3), (2, 4), (3, 4)] {
        dag.add_directed_edge(u, v);
    }
    println!("DAG: 1->2, 1->3, 2->4, 3->4");
    println!("Order: {}", join(&dag.topological_sort()?, " -> "));
    println!();

    println!("=== Connected components ===");
    let mut disconnected = Graph::new();
    for (u, v) in [(1, 2), (2, 3), (4, 5), (6, 7), (7, 8)] {
        disconnected.add_edge(u, v);
    }
    let components = disconnected.find_connected_components()?;
    println!("Components: {}", components.len());
    for (i, component) in components.iter().enumerate() {
        let mut sorted = component.clone();
        sorted.sort_unstable();
        println!("  {}: [{}]", i + 1, join(&sorted, ", "));
    }
    println!();

    println!("=== Graphical sequences ===");
    for degrees in [vec![4, 3, 3, 2, 2, 2, 1, 1], vec![3, 3, 3, 1]] {
        println!(
            "[{}] -> graphical? {}",
            join(&degrees, ", "),
            is_graphical_sequence(&degrees)
        );
    }

    Ok(())
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
