pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::Graph;
pub use directed::DirectedGraph;
