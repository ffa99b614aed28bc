use thiserror::Error;

/// Errors raised by the graph model, the generator settings and the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
	/// A setting arrived as text and could not be read as the expected kind.
	#[error("invalid value {value:?} for `{field}`")]
	InvalidType {
		/// Name of the setting.
		field: &'static str,
		/// Raw text that was rejected.
		value: String,
	},

	/// Self-loop, or an edge that does not have exactly two endpoints.
	#[error("invalid edge: {0}")]
	InvalidEdge(String),

	/// Layout was requested for a graph with zero vertices.
	#[error("cannot lay out a graph without vertices")]
	EmptyGraph,

	/// The drawing backend rejected an operation.
	#[error("surface error: {0}")]
	Surface(String),
}

/// Result alias used across the crate.
pub type GraphResult<T> = Result<T, GraphError>;
