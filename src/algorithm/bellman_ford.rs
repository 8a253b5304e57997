use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Bellman-Ford shortest paths, tolerant of negative edge weights
///
/// Runs `|V| - 1` relaxation passes over every edge followed by one detection
/// pass. If the detection pass can still shorten a distance, a negative cycle
/// is reachable from the source and the run fails with
/// [`Error::NegativeCycle`]. O(V·E) time, O(V) space.
#[derive(Debug, Default, Clone)]
pub struct BellmanFord {
    /// Stop as soon as a pass changes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance that always runs all `|V| - 1` passes
    pub fn new() -> Self {
        BellmanFord { early_exit: false }
    }

    /// Stop relaxing after the first pass without an update. Distances and
    /// predecessors are the same either way.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Relaxes every edge once in node then edge order, returning the number
    /// of distances lowered
    fn relax_pass<N, W, G>(graph: &G, result: &mut ShortestPathResult<W>) -> usize
    where
        W: Float + Debug,
        G: Graph<N, W>,
    {
        let mut updates = 0;
        for v in 0..graph.node_count() {
            for (u, weight) in graph.outgoing_edges(v) {
                // An unreached v keeps this at +inf, which never improves u
                let candidate = result.distances[v] + weight;
                if candidate < result.distances[u] {
                    result.distances[u] = candidate;
                    result.predecessors[u] = Some(v);
                    updates += 1;
                }
            }
        }
        updates
    }

    /// Returns the first edge `(v, u)` that could still lower a distance
    fn find_improving_edge<N, W, G>(graph: &G, distances: &[W]) -> Option<(usize, usize)>
    where
        W: Float + Debug,
        G: Graph<N, W>,
    {
        (0..graph.node_count()).find_map(|v| {
            graph
                .outgoing_edges(v)
                .find(|&(u, weight)| distances[v] + weight < distances[u])
                .map(|(u, _)| (v, u))
        })
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for BellmanFord
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.node_count();
        if source >= n {
            return Err(Error::InvalidArgument(format!(
                "source index {} out of range for a graph of {} nodes",
                source, n
            )));
        }

        debug!(
            "Bellman-Ford from node #{}: {} nodes, {} edges",
            source,
            n,
            graph.edge_count()
        );

        let mut result = ShortestPathResult::new(n, source);

        for pass in 1..n {
            let updates = Self::relax_pass::<N, W, G>(graph, &mut result);
            trace!("Pass {}/{}: {} distances lowered", pass, n - 1, updates);
            if updates == 0 && self.early_exit {
                debug!("Converged after {} of {} passes", pass, n - 1);
                break;
            }
        }

        if let Some((v, u)) = Self::find_improving_edge::<N, W, G>(graph, &result.distances) {
            debug!(
                "Edge #{} -> #{} still relaxes after {} passes: negative cycle",
                v,
                u,
                n - 1
            );
            return Err(Error::NegativeCycle);
        }

        Ok(result)
    }
}
