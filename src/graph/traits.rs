use std::fmt::Debug;
use num_traits::Float;

/// Trait representing a read-only weighted directed graph.
///
/// Nodes are addressed by dense indices `0..node_count()` in the order the
/// graph was built; `index_of` and `node` translate between indices and the
/// caller's node identifiers.
pub trait Graph<N, W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, counting parallel edges
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the node identifiers in index order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns the identifier of the node at `index`
    fn node(&self, index: usize) -> Option<&N>;

    /// Returns the index of a node identifier
    fn index_of(&self, node: &N) -> Option<usize>;

    /// Returns an iterator over the outgoing edges `(target index, weight)` of a node,
    /// in insertion order. Unknown indices have no edges.
    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the node identifier belongs to the graph
    fn contains(&self, node: &N) -> bool {
        self.index_of(node).is_some()
    }

    /// Returns the first edge `(from, to, weight)` with a negative weight, if any
    fn first_negative_edge(&self) -> Option<(usize, usize, W)> {
        (0..self.node_count()).find_map(|from| {
            self.outgoing_edges(from)
                .find(|(_, weight)| *weight < W::zero())
                .map(|(to, weight)| (from, to, weight))
        })
    }
}
