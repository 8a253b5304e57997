//! Classic SSSP - Bellman-Ford and Dijkstra single-source shortest paths
//!
//! Both engines run over a read-only adjacency-list graph keyed by arbitrary
//! node identifiers. Bellman-Ford accepts negative edge weights and reports
//! negative cycles reachable from the source; Dijkstra requires non-negative
//! weights and is driven by a lazy-deletion binary heap.
//!
//! Every query returns a [`Result`]: unknown nodes are
//! [`Error::InvalidArgument`], negative cycles are [`Error::NegativeCycle`]
//! and unreachable targets are [`Error::NoPath`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::Graph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Negative-weight cycle reachable from the source")]
    NegativeCycle,

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },
}

impl Error {
    pub(crate) fn no_path<K: Debug + ?Sized>(from: &K, to: &K) -> Self {
        Error::NoPath {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn unknown_node<K: Debug + ?Sized>(role: &str, node: &K) -> Self {
        Error::InvalidArgument(format!("{} {:?} is not a node of the graph", role, node))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Shortest distances from `source` to every node, `+inf` for unreachable ones.
pub fn bellman_ford<N, W, G>(graph: &G, source: &N) -> Result<HashMap<N, W>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    BellmanFord::new().distances(graph, source)
}

/// Shortest distance from `source` to `target`.
pub fn bellman_ford_to<N, W, G>(graph: &G, source: &N, target: &N) -> Result<W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    BellmanFord::new().distance_to(graph, source, target)
}

/// Shortest paths from `source` to every reachable node.
pub fn bellman_ford_paths<N, W, G>(graph: &G, source: &N) -> Result<HashMap<N, Vec<N>>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    BellmanFord::new().paths(graph, source)
}

/// Shortest path from `source` to `target`, both ends included.
pub fn bellman_ford_path_to<N, W, G>(graph: &G, source: &N, target: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    BellmanFord::new().path_to(graph, source, target)
}

/// Shortest distances from `source` to every node, `+inf` for unreachable ones.
///
/// Edge weights must be non-negative; use
/// [`Dijkstra::with_weight_validation`] to have that checked.
pub fn dijkstra<N, W, G>(graph: &G, source: &N) -> Result<HashMap<N, W>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    Dijkstra::new().distances(graph, source)
}

/// Shortest distance from `source` to `target`.
pub fn dijkstra_to<N, W, G>(graph: &G, source: &N, target: &N) -> Result<W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    Dijkstra::new().distance_to(graph, source, target)
}

/// Shortest paths from `source` to every reachable node.
pub fn dijkstra_paths<N, W, G>(graph: &G, source: &N) -> Result<HashMap<N, Vec<N>>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    Dijkstra::new().paths(graph, source)
}

/// Shortest path from `source` to `target`, both ends included.
pub fn dijkstra_path_to<N, W, G>(graph: &G, source: &N, target: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    Dijkstra::new().path_to(graph, source, target)
}
