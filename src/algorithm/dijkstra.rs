use std::fmt::Debug;
use std::hash::Hash;
use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative edge weights. Negative weights are not detected
/// unless [`Dijkstra::with_weight_validation`] is enabled, in which case the
/// graph is scanned first and rejected with [`Error::InvalidArgument`].
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject graphs containing a negative weight before running
    validate_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: false,
        }
    }

    /// Enable or disable the negative weight scan. Without it a negative
    /// weight gives unspecified (but terminating) results.
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.node_count();
        if source >= n {
            return Err(Error::InvalidArgument(format!(
                "source index {} out of range for a graph of {} nodes",
                source, n
            )));
        }

        if self.validate_weights {
            if let Some((from, to, weight)) = graph.first_negative_edge() {
                let label = |index: usize| match graph.node(index) {
                    Some(node) => format!("{:?}", node),
                    None => format!("#{}", index),
                };
                return Err(Error::InvalidArgument(format!(
                    "edge {} -> {} has negative weight {:?}; Dijkstra requires non-negative weights",
                    label(from),
                    label(to),
                    weight
                )));
            }
        }

        let mut result = ShortestPathResult::new(n, source);

        let mut queue = MinPriorityQueue::new();
        queue.push(source, OrderedFloat(W::zero()));
        let mut settled = vec![false; n];
        let mut stale = 0usize;

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // A shorter path to u was queued after this entry
            if settled[u] || dist_u > result.distances[u] {
                stale += 1;
                continue;
            }
            settled[u] = true;

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                // Settled distances are final, negative weights included
                if !settled[v] && candidate < result.distances[v] {
                    result.distances[v] = candidate;
                    result.predecessors[v] = Some(u);
                    queue.push(v, OrderedFloat(candidate));
                }
            }
        }

        debug!(
            "Dijkstra from node #{}: {} nodes, {} edges, {} stale queue entries skipped",
            source,
            n,
            graph.edge_count(),
            stale
        );

        Ok(result)
    }
}
