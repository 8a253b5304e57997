//! Single-source shortest paths over a JSON adjacency list.
//!
//! The graph file is a JSON object mapping every node to its outgoing edges:
//! `{"a": [["b", 9], ["c", 6]], "b": [], "c": []}`.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use classic_sssp::{BellmanFord, Dijkstra, DirectedGraph, Graph, ShortestPathAlgorithm};
use log::info;
use serde_json::json;

type Engine = Box<dyn ShortestPathAlgorithm<String, f64, DirectedGraph<String, f64>>>;

/// Shortest paths from one source node
#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file mapping each node to its [[neighbor, weight], ...] edges
    graph: PathBuf,

    /// Shortest path engine
    #[arg(long, short, value_enum, default_value = "dijkstra")]
    algorithm: Algorithm,

    /// Source node
    #[arg(long, short)]
    source: String,

    /// Report only this node
    #[arg(long, short)]
    target: Option<String>,

    /// Report paths instead of distances
    #[arg(long)]
    paths: bool,

    /// Make Dijkstra reject graphs with negative weights (not accepted with bellman-ford)
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    BellmanFord,
    Dijkstra,
}

fn engine(cli: &Cli) -> Result<Engine, Box<dyn Error>> {
    match cli.algorithm {
        Algorithm::BellmanFord if cli.strict => {
            Err("--strict only applies to --algorithm dijkstra".into())
        }
        Algorithm::BellmanFord => Ok(Box::new(BellmanFord::new())),
        Algorithm::Dijkstra => Ok(Box::new(
            Dijkstra::new().with_weight_validation(cli.strict),
        )),
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let engine = engine(cli)?;
    let text = fs::read_to_string(&cli.graph)?;
    let graph: DirectedGraph<String, f64> = serde_json::from_str(&text)?;
    info!(
        "Loaded {} ({} nodes, {} edges), running {}",
        cli.graph.display(),
        graph.node_count(),
        graph.edge_count(),
        engine.name()
    );

    let mut report = json!({
        "algorithm": engine.name(),
        "source": cli.source,
    });

    match (&cli.target, cli.paths) {
        (Some(target), true) => {
            report["target"] = json!(target);
            report["path"] = json!(engine.path_to(&graph, &cli.source, target)?);
        }
        (Some(target), false) => {
            report["target"] = json!(target);
            report["distance"] = json!(engine.distance_to(&graph, &cli.source, target)?);
        }
        (None, true) => {
            let paths: BTreeMap<String, Vec<String>> =
                engine.paths(&graph, &cli.source)?.into_iter().collect();
            report["paths"] = json!(paths);
        }
        (None, false) => {
            // Unreachable nodes are reported as null
            let distances: BTreeMap<String, Option<f64>> = engine
                .distances(&graph, &cli.source)?
                .into_iter()
                .map(|(node, d)| (node, Some(d).filter(|d| d.is_finite())))
                .collect();
            report["distances"] = json!(distances);
        }
    }

    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
