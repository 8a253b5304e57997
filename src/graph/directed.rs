use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
///
/// Built once from a `node -> [(neighbor, weight)]` mapping and never
/// mutated afterwards. Every edge destination must itself be a key.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Node identifiers in insertion order; the position is the node index
    nodes: Vec<N>,

    /// Node identifier -> index into `nodes`
    index: HashMap<N, usize>,

    /// Outgoing edges for each node index: [(target index, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Builds a graph from `(node, outgoing edges)` entries.
    ///
    /// Key order is kept and decides the order both engines visit nodes in.
    /// Fails with [`Error::InvalidArgument`] on a duplicate key, on an edge
    /// into a node that is not a key, and on a NaN or infinite weight.
    pub fn from_adjacency<I>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Vec<(N, W)>)>,
    {
        let entries: Vec<(N, Vec<(N, W)>)> = adjacency.into_iter().collect();

        let mut nodes = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for (node, _) in &entries {
            if index.insert(node.clone(), nodes.len()).is_some() {
                return Err(Error::InvalidArgument(format!(
                    "node {:?} is listed more than once",
                    node
                )));
            }
            nodes.push(node.clone());
        }

        let mut outgoing_edges = Vec::with_capacity(entries.len());
        for (from, edges) in entries {
            let mut resolved = Vec::with_capacity(edges.len());
            for (to, weight) in edges {
                let to_index = *index.get(&to).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "edge {:?} -> {:?} points to a node that is not a key of the graph",
                        from, to
                    ))
                })?;
                if !weight.is_finite() {
                    return Err(Error::InvalidArgument(format!(
                        "edge {:?} -> {:?} has non-finite weight {:?}",
                        from, to, weight
                    )));
                }
                resolved.push((to_index, weight));
            }
            outgoing_edges.push(resolved);
        }

        Ok(DirectedGraph {
            nodes,
            index,
            outgoing_edges,
        })
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.first_negative_edge().is_none()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(index) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<N, W> TryFrom<Vec<(N, Vec<(N, W)>)>> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    type Error = Error;

    fn try_from(adjacency: Vec<(N, Vec<(N, W)>)>) -> Result<Self> {
        DirectedGraph::from_adjacency(adjacency)
    }
}

impl<N, W> TryFrom<BTreeMap<N, Vec<(N, W)>>> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    type Error = Error;

    fn try_from(adjacency: BTreeMap<N, Vec<(N, W)>>) -> Result<Self> {
        DirectedGraph::from_adjacency(adjacency)
    }
}

/// Deserializes from a map `{ node: [[neighbor, weight], ...] }`.
///
/// Keys are visited in sorted order, so node indices follow key order.
impl<'de, N, W> Deserialize<'de> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Ord + Debug + Deserialize<'de>,
    W: Float + Debug + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let adjacency = BTreeMap::<N, Vec<(N, W)>>::deserialize(deserializer)?;
        DirectedGraph::try_from(adjacency).map_err(serde::de::Error::custom)
    }
}
