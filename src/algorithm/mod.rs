pub mod traits;
pub mod path;
pub mod bellman_ford;
pub mod dijkstra;

pub use path::{all_paths, reconstruct_path, PredecessorMap};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
