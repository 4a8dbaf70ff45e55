//! Domain types consumed by the algorithm interfaces.

mod graph;
mod params;

pub use graph::{Edge, Graph, Node};
pub use params::Parameters;
