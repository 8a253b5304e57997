#![allow(dead_code)]

use classic_sssp::{DirectedGraph, Graph};

pub type IntGraph = DirectedGraph<usize, f64>;

/// Builds a graph from `(node, [(neighbor, weight)])` entries
pub fn graph(adjacency: &[(usize, &[(usize, f64)])]) -> IntGraph {
    DirectedGraph::from_adjacency(
        adjacency
            .iter()
            .map(|(node, edges)| (*node, edges.to_vec())),
    )
    .expect("test graph is well formed")
}

/// Cycle 3 -> 4 -> 3 of weight -1 is reachable from 0
pub fn negative_cycle_graph() -> IntGraph {
    graph(&[
        (0, &[(1, 2.0)]),
        (1, &[(2, 8.0), (3, 5.0)]),
        (2, &[(3, -5.0)]),
        (3, &[(4, 4.0), (5, -2.0), (6, 1.0)]),
        (4, &[(3, -5.0)]),
        (5, &[(6, 6.0)]),
        (6, &[]),
    ])
}

/// Same shape with node 4 cut off from the rest
pub fn isolated_node_graph() -> IntGraph {
    graph(&[
        (0, &[(1, 2.0)]),
        (1, &[(2, 8.0), (3, 5.0)]),
        (2, &[(3, -5.0)]),
        (3, &[(5, -2.0), (6, 1.0)]),
        (4, &[]),
        (5, &[(6, 6.0)]),
        (6, &[]),
    ])
}

/// Non-negative version of the isolated node graph
pub fn isolated_node_graph_positive() -> IntGraph {
    graph(&[
        (0, &[(1, 2.0)]),
        (1, &[(2, 8.0), (3, 5.0)]),
        (2, &[(3, 5.0)]),
        (3, &[(5, 2.0), (6, 1.0)]),
        (4, &[]),
        (5, &[(6, 6.0)]),
        (6, &[]),
    ])
}

/// 12-node layered graph. Two shortest paths of weight 32 reach node 11:
/// 0-1-2-3-6-9-11 and 0-8-10-11.
pub fn layered_graph() -> IntGraph {
    graph(&[
        (0, &[(1, 3.0), (8, 20.0)]),
        (1, &[(2, 1.0)]),
        (2, &[(3, 7.0)]),
        (3, &[(4, 5.0), (6, 10.0)]),
        (4, &[(5, 2.0), (7, 6.0)]),
        (5, &[(7, 3.0)]),
        (6, &[(8, 1.0), (9, 6.0)]),
        (7, &[(11, 15.0)]),
        (8, &[(10, 4.0)]),
        (9, &[(10, 11.0), (11, 5.0)]),
        (10, &[(11, 8.0)]),
        (11, &[]),
    ])
}

/// Sum of weights along `path`, taking the lightest of any parallel edges
pub fn path_weight<N, G>(graph: &G, path: &[N]) -> f64
where
    G: Graph<N, f64>,
{
    path.windows(2)
        .map(|pair| {
            let from = graph.index_of(&pair[0]).expect("path node in graph");
            let to = graph.index_of(&pair[1]).expect("path node in graph");
            graph
                .outgoing_edges(from)
                .filter(|&(target, _)| target == to)
                .map(|(_, weight)| weight)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
