//! Path reconstruction from a predecessor mapping.
//!
//! A predecessor mapping sends every node to the node right before it on its
//! best known path from the source. The source maps to itself and nodes that
//! were never reached map to `None`.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use log::warn;

use crate::{Error, Result};

/// Read access to a predecessor mapping keyed by `K`
pub trait PredecessorMap<K> {
    /// Returns the predecessor of `node`, `None` when it has none.
    ///
    /// Fails with [`Error::InvalidArgument`] if `node` is not in the mapping.
    fn predecessor(&self, node: &K) -> Result<Option<K>>;

    /// Returns an iterator over every node of the mapping
    fn nodes(&self) -> Box<dyn Iterator<Item = K> + '_>;
}

impl PredecessorMap<usize> for [Option<usize>] {
    fn predecessor(&self, node: &usize) -> Result<Option<usize>> {
        self.get(*node)
            .copied()
            .ok_or_else(|| Error::unknown_node("node", node))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.len())
    }
}

impl PredecessorMap<usize> for Vec<Option<usize>> {
    fn predecessor(&self, node: &usize) -> Result<Option<usize>> {
        self.as_slice().predecessor(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        self.as_slice().nodes()
    }
}

impl<N, S> PredecessorMap<N> for HashMap<N, Option<N>, S>
where
    N: Clone + Eq + Hash + Debug,
    S: BuildHasher,
{
    fn predecessor(&self, node: &N) -> Result<Option<N>> {
        self.get(node)
            .cloned()
            .ok_or_else(|| Error::unknown_node("node", node))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.keys().cloned())
    }
}

/// Walks `predecessors` back from `target` to `source` and returns the path
/// in forward order, both ends included.
///
/// # Errors
/// * [`Error::InvalidArgument`] if `target`, or a node on its chain, is not in
///   the mapping.
/// * [`Error::NoPath`] if the chain ends in `None` or loops without reaching
///   `source`.
pub fn reconstruct_path<K, P>(source: &K, target: &K, predecessors: &P) -> Result<Vec<K>>
where
    K: Clone + Eq + Hash + Debug,
    P: PredecessorMap<K> + ?Sized,
{
    let mut previous = predecessors.predecessor(target)?;
    if target == source {
        return Ok(vec![source.clone()]);
    }

    let mut path = vec![target.clone()];
    let mut visited = HashSet::new();
    visited.insert(target.clone());

    loop {
        match previous {
            None => return Err(Error::no_path(source, target)),
            Some(node) if node == *source => {
                path.push(node);
                break;
            }
            Some(node) => {
                if !visited.insert(node.clone()) {
                    warn!(
                        "Predecessor chain of {:?} revisits {:?} without reaching {:?}",
                        target, node, source
                    );
                    return Err(Error::no_path(source, target));
                }
                previous = predecessors.predecessor(&node)?;
                path.push(node);
            }
        }
    }

    path.reverse();
    Ok(path)
}

/// Reconstructs the path to every node whose predecessor chain reaches
/// `source`. Nodes without a path are left out rather than reported.
pub fn all_paths<K, P>(source: &K, predecessors: &P) -> Result<HashMap<K, Vec<K>>>
where
    K: Clone + Eq + Hash + Debug,
    P: PredecessorMap<K> + ?Sized,
{
    let mut paths = HashMap::new();
    for node in predecessors.nodes() {
        match reconstruct_path(source, &node, predecessors) {
            Ok(path) => {
                paths.insert(node, path);
            }
            Err(Error::NoPath { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(paths)
}
