use std::time::{Duration, Instant};

use clap::Parser;
use classic_sssp::graph::generators::random_gnm;
use classic_sssp::{BellmanFord, Dijkstra, DirectedGraph, Graph, ShortestPathAlgorithm};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestGraph = DirectedGraph<usize, f64>;

/// Times Bellman-Ford against Dijkstra on random G(n, m) graphs
#[derive(Parser, Debug)]
#[command(name = "benchmark", about, long_about = None)]
struct Args {
    /// Runs per graph size
    #[arg(long, default_value_t = 5)]
    runs: usize,

    /// Seed for graph generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Edges per node
    #[arg(long, default_value_t = 4)]
    edge_factor: usize,
}

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &TestGraph, source: usize) -> (Duration, Vec<f64>)
where
    A: ShortestPathAlgorithm<usize, f64, TestGraph>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source);
    let duration = start.elapsed();

    match result {
        Ok(result) => (duration, result.distances),
        Err(e) => {
            warn!("{} failed: {}", algorithm.name(), e);
            (duration, Vec::new())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let graph_sizes = [100, 250, 500, 1_000];
    let mut rng = StdRng::seed_from_u64(args.seed);

    let bellman_ford = BellmanFord::new();
    let bellman_ford_early = BellmanFord::new().with_early_exit(true);
    let dijkstra = Dijkstra::new();

    println!("=====================================================");
    println!("Benchmark: Bellman-Ford vs Dijkstra");
    println!("Edge factor: {} edges per node, {} runs per size", args.edge_factor, args.runs);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let mut totals = [Duration::ZERO; 3];
        let mut mismatches = 0;

        for run in 0..args.runs {
            let graph = random_gnm(size, size * args.edge_factor, false, &mut rng)?;
            info!(
                "Run {} on {} nodes, {} edges",
                run,
                graph.node_count(),
                graph.edge_count()
            );

            let (bf_time, bf_distances) = benchmark_algorithm(&bellman_ford, &graph, 0);
            let (early_time, _) = benchmark_algorithm(&bellman_ford_early, &graph, 0);
            let (dij_time, dij_distances) = benchmark_algorithm(&dijkstra, &graph, 0);

            if bf_distances != dij_distances {
                mismatches += 1;
            }
            totals[0] += bf_time;
            totals[1] += early_time;
            totals[2] += dij_time;
        }

        if mismatches > 0 {
            warn!("{} of {} runs disagreed on {} nodes", mismatches, args.runs, size);
        }
        results.push((size, totals, mismatches));
    }

    println!();
    println!("{:<8} | {:<14} | {:<14} | {:<14} | {:<10}",
             "Nodes", "BF (ms)", "BF early (ms)", "Dijkstra (ms)", "Mismatch");
    println!("-----------------------------------------------------------------------");

    let runs = args.runs.max(1) as f64;
    for (size, totals, mismatches) in &results {
        let avg = |d: &Duration| d.as_secs_f64() * 1000.0 / runs;
        println!("{:<8} | {:<14.3} | {:<14.3} | {:<14.3} | {:<10}",
                 size, avg(&totals[0]), avg(&totals[1]), avg(&totals[2]), mismatches);
    }

    Ok(())
}
