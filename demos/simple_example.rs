use classic_sssp::{BellmanFord, Dijkstra, DirectedGraph, Graph, ShortestPathAlgorithm};

fn main() -> Result<(), classic_sssp::Error> {
    // Create a simple directed graph with one negative edge
    let graph = DirectedGraph::from_adjacency(vec![
        (0, vec![(1, 5.0), (2, 1.0)]),
        (1, vec![(3, -5.0)]),
        (2, vec![(3, 1.0)]),
        (3, vec![(4, 1.0)]),
        (4, vec![]),
        (5, vec![(0, 2.0)]),
    ])?;

    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    // Bellman-Ford handles the negative edge 1 -> 3
    let bellman_ford = BellmanFord::new();
    let result = bellman_ford.solve(&graph, &source)?;

    println!("\n{} results:", <BellmanFord as ShortestPathAlgorithm<i32, f64, DirectedGraph<i32, f64>>>::name(&bellman_ford));
    for (index, node) in graph.nodes().enumerate() {
        match result.path_to(index) {
            Ok(path) => println!("Node {}: distance = {:.1}, path = {:?}", node, result.distances[index], path),
            Err(_) => println!("Node {}: unreachable", node),
        }
    }

    // With validation on, Dijkstra refuses the negative weight
    let dijkstra = Dijkstra::new().with_weight_validation(true);
    match dijkstra.distance_to(&graph, &source, &4) {
        Ok(distance) => println!("\nDijkstra distance to 4: {:.1}", distance),
        Err(e) => println!("\nDijkstra: {}", e),
    }

    let positive = DirectedGraph::from_adjacency(vec![
        ("a", vec![("b", 9.0), ("c", 6.0), ("e", 13.0)]),
        ("b", vec![("a", 9.0), ("f", 10.0)]),
        ("c", vec![("a", 6.0), ("e", 8.0), ("f", 18.0), ("d", 30.0)]),
        ("d", vec![("c", 30.0), ("e", 20.0), ("f", 6.0), ("h", 16.0), ("g", 11.0)]),
        ("e", vec![("a", 13.0), ("h", 25.0), ("c", 8.0), ("d", 20.0)]),
        ("f", vec![("b", 10.0), ("c", 18.0), ("d", 6.0), ("g", 6.0), ("h", 19.0)]),
        ("g", vec![("d", 11.0), ("f", 6.0), ("h", 6.0)]),
        ("h", vec![("e", 25.0), ("f", 19.0), ("d", 16.0), ("g", 6.0)]),
    ])?;

    let path = dijkstra.path_to(&positive, &"a", &"h")?;
    let distance = dijkstra.distance_to(&positive, &"a", &"h")?;
    println!("\nDijkstra a -> h: distance = {:.1}, path = {:?}", distance, path);

    Ok(())
}
