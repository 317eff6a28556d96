pub mod directed;
pub mod edge;
pub mod generators;
pub mod traits;

pub use directed::EdgeWeightedDigraph;
pub use edge::DirectedEdge;
pub use traits::{Graph, MutableGraph};
