use classic_sssp::graph::generators::random_gnm;
use classic_sssp::{BellmanFord, Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

// Engines hold no run state, so one graph can serve queries from many threads
#[test]
fn parallel_queries_match_sequential_ones() {
    let graph = random_gnm(200, 1_000, false, &mut StdRng::seed_from_u64(42)).unwrap();
    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new().with_early_exit(true);

    let sequential: Vec<_> = (0..200)
        .map(|source| dijkstra.compute_shortest_paths(&graph, source).unwrap())
        .collect();

    let parallel: Vec<_> = (0..200usize)
        .into_par_iter()
        .map(|source| {
            let a = dijkstra.compute_shortest_paths(&graph, source).unwrap();
            let b = bellman_ford.compute_shortest_paths(&graph, source).unwrap();
            assert_eq!(a.distances, b.distances);
            a
        })
        .collect();

    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.source, p.source);
        assert_eq!(s.distances, p.distances);
        assert_eq!(s.predecessors, p.predecessors);
    }
}

#[test]
fn parallel_negative_cycle_detection() {
    let graphs: Vec<_> = (0..16u64)
        .map(|seed| random_gnm(20, 60, true, &mut StdRng::seed_from_u64(seed)).unwrap())
        .collect();

    let engine = BellmanFord::new();
    let parallel: Vec<_> = graphs
        .par_iter()
        .map(|g| engine.compute_shortest_paths(g, 0).map(|r| r.distances))
        .collect();
    let sequential: Vec<_> = graphs
        .iter()
        .map(|g| engine.compute_shortest_paths(g, 0).map(|r| r.distances))
        .collect();

    assert_eq!(parallel, sequential);
}
