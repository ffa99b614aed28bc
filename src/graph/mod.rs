//! Graph model and random graph generation.

mod error;
mod model;
mod random;

pub use error::{GraphError, GraphResult};
pub use model::{Edge, Graph};
pub use random::{
	DEFAULT_EDGE_PROBABILITY, DEFAULT_VERTEX_COUNT, GeneratorConfig, generate_random,
	randomize_orientation,
};
