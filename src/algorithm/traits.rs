use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;
use crate::algorithm::path;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution, indexed by node index
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each node, `+inf` when unreachable
    pub distances: Vec<W>,

    /// Predecessor of each node in the shortest path tree. The source is its
    /// own predecessor; unreached nodes have none.
    pub predecessors: Vec<Option<usize>>,

    /// Source node index
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Fresh state for a run over `node_count` nodes: every distance `+inf`
    /// except the source at zero
    pub(crate) fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![W::infinity(); node_count];
        let mut predecessors = vec![None; node_count];
        distances[source] = W::zero();
        predecessors[source] = Some(source);
        ShortestPathResult {
            distances,
            predecessors,
            source,
        }
    }

    /// Returns true if `node` has a finite distance
    pub fn is_reachable(&self, node: usize) -> bool {
        self.distances.get(node).map_or(false, |d| d.is_finite())
    }

    /// Shortest path from the source to `target` as node indices
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        path::reconstruct_path(&self.source, &target, self.predecessors.as_slice())
    }

    /// Shortest paths to every reachable node as node indices
    pub fn paths(&self) -> Result<HashMap<usize, Vec<usize>>> {
        path::all_paths(&self.source, self.predecessors.as_slice())
    }
}

/// Trait for shortest path algorithms
///
/// Implementors provide `compute_shortest_paths` over node indices; the
/// provided methods translate from and to node identifiers.
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node index to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node identifier. The result can
    /// serve any number of path reconstructions.
    fn solve(&self, graph: &G, source: &N) -> Result<ShortestPathResult<W>> {
        let source = graph
            .index_of(source)
            .ok_or_else(|| Error::unknown_node("source", source))?;
        self.compute_shortest_paths(graph, source)
    }

    /// Shortest distance to every node, `+inf` for unreachable ones
    fn distances(&self, graph: &G, source: &N) -> Result<HashMap<N, W>> {
        let result = self.solve(graph, source)?;
        Ok(graph.nodes().cloned().zip(result.distances).collect())
    }

    /// Shortest distance to `target`; [`Error::NoPath`] if it is unreachable
    fn distance_to(&self, graph: &G, source: &N, target: &N) -> Result<W> {
        let target_index = graph
            .index_of(target)
            .ok_or_else(|| Error::unknown_node("target", target))?;
        let result = self.solve(graph, source)?;
        let distance = result.distances[target_index];
        if distance.is_infinite() {
            return Err(Error::no_path(source, target));
        }
        Ok(distance)
    }

    /// Shortest path to every reachable node; unreachable nodes are omitted
    fn paths(&self, graph: &G, source: &N) -> Result<HashMap<N, Vec<N>>> {
        let result = self.solve(graph, source)?;
        let ids: Vec<&N> = graph.nodes().collect();
        let paths = result
            .paths()?
            .into_iter()
            .map(|(target, path)| {
                let path = path.into_iter().map(|v| ids[v].clone()).collect();
                (ids[target].clone(), path)
            })
            .collect();
        Ok(paths)
    }

    /// Shortest path to `target`; [`Error::NoPath`] if it is unreachable
    fn path_to(&self, graph: &G, source: &N, target: &N) -> Result<Vec<N>> {
        let target_index = graph
            .index_of(target)
            .ok_or_else(|| Error::unknown_node("target", target))?;
        let result = self.solve(graph, source)?;
        let path = result.path_to(target_index).map_err(|e| match e {
            Error::NoPath { .. } => Error::no_path(source, target),
            other => other,
        })?;
        let ids: Vec<&N> = graph.nodes().collect();
        Ok(path.into_iter().map(|v| ids[v].clone()).collect())
    }
}
