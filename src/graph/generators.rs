use crate::graph::DirectedGraph;
use crate::Result;
use rand::prelude::*;
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Integral weights used for random graphs with non-negative weights
pub const POSITIVE_WEIGHTS: RangeInclusive<i32> = 1..=20;

/// Integral weights used for random graphs with negative weights (zero is skipped)
pub const SIGNED_WEIGHTS: RangeInclusive<i32> = -20..=20;

fn sample_weight<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<i32>) -> f64 {
    let weight = rng.gen_range(range.clone());
    if weight == 0 && *range.start() < 0 {
        -1.0
    } else {
        weight as f64
    }
}

/// Generates a random directed G(n, m) graph: `n` nodes labelled `0..n` and
/// `m` distinct edges without self loops (capped at `n * (n - 1)`).
///
/// Weights come from [`POSITIVE_WEIGHTS`], or from [`SIGNED_WEIGHTS`] with
/// zero mapped to `-1` when `negative_weights` is set. The same seed always
/// yields the same graph, edge order included.
pub fn random_gnm<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    negative_weights: bool,
    rng: &mut R,
) -> Result<DirectedGraph<usize, f64>> {
    let weights = if negative_weights {
        SIGNED_WEIGHTS
    } else {
        POSITIVE_WEIGHTS
    };
    let m = m.min(n * n.saturating_sub(1));

    let mut adjacency: Vec<(usize, Vec<(usize, f64)>)> = (0..n).map(|v| (v, Vec::new())).collect();
    let mut seen = HashSet::with_capacity(m);

    while seen.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && seen.insert((u, v)) {
            let weight = sample_weight(rng, &weights);
            adjacency[u].1.push((v, weight));
        }
    }

    DirectedGraph::from_adjacency(adjacency)
}

/// Generates the fixed 12-node layered DAG
///
/// ```text
/// 0 -> 1, 8      4 -> 5, 7     8 -> 10
/// 1 -> 2         5 -> 7        9 -> 10, 11
/// 2 -> 3         6 -> 8, 9     10 -> 11
/// 3 -> 4, 6      7 -> 11       11
/// ```
///
/// with every weight drawn from `weights`.
pub fn layered_dag<R: Rng + ?Sized>(
    weights: RangeInclusive<i32>,
    rng: &mut R,
) -> Result<DirectedGraph<usize, f64>> {
    const TOPOLOGY: [&[usize]; 12] = [
        &[1, 8],
        &[2],
        &[3],
        &[4, 6],
        &[5, 7],
        &[7],
        &[8, 9],
        &[11],
        &[10],
        &[10, 11],
        &[11],
        &[],
    ];

    let adjacency = TOPOLOGY
        .iter()
        .enumerate()
        .map(|(node, targets)| {
            let edges = targets
                .iter()
                .map(|&target| (target, sample_weight(rng, &weights)))
                .collect();
            (node, edges)
        })
        .collect::<Vec<_>>();

    DirectedGraph::from_adjacency(adjacency)
}
