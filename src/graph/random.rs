use std::str::FromStr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{GraphError, GraphResult};
use super::model::Graph;

/// Default number of vertices for [`generate_random`].
pub const DEFAULT_VERTEX_COUNT: u32 = 10;
/// Default per-trial edge probability for [`generate_random`].
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.25;

/// Sets the orientation to a fair coin flip.
pub fn randomize_orientation<V, R>(graph: &mut Graph<V>, rng: &mut R)
where
	V: Clone + Eq + Ord + std::hash::Hash,
	R: Rng,
{
	let oriented = rng.gen_bool(0.5);
	graph.set_oriented(oriented);
}

/// Replaces the contents of `graph` with vertices `1..=vertex_count` and
/// random edges.
///
/// Every ordered pair of distinct vertices `(v, n)` gets one independent trial
/// that succeeds with probability `edge_probability` and then adds `v -> n`.
/// An undirected graph tries each unordered pair twice (once per direction)
/// and ignores the repeat, so a pair ends up connected with probability
/// `1 - (1 - p)^2`. The probability is not range-checked: `p <= 0` adds
/// nothing and `p >= 1` adds every edge.
pub fn generate_random<R>(
	graph: &mut Graph<u32>,
	rng: &mut R,
	vertex_count: u32,
	edge_probability: f64,
) where
	R: Rng,
{
	graph.clear();
	for vertex in 1..=vertex_count {
		graph.add_vertex(vertex);
	}
	for v in 1..=vertex_count {
		for n in 1..=vertex_count {
			if v != n && rng.gen_range(0.0..1.0) < edge_probability {
				// v != n, so this cannot fail
				let _ = graph.add_edge(v, n);
			}
		}
	}
	debug!(
		"generated {} vertices, {} edges (p={edge_probability})",
		graph.count_vertices(),
		graph.count_edges()
	);
}

/// Settings for building a random graph, usually read from the page URL.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
	/// Number of vertices, labelled `1..=vertex_count`.
	pub vertex_count: u32,
	/// Success probability of each ordered-pair trial.
	pub edge_probability: f64,
	/// Fixed orientation; `None` flips a coin.
	pub oriented: Option<bool>,
	/// RNG seed; `None` seeds from entropy.
	pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			vertex_count: DEFAULT_VERTEX_COUNT,
			edge_probability: DEFAULT_EDGE_PROBABILITY,
			oriented: None,
			seed: None,
		}
	}
}

impl GeneratorConfig {
	/// Reads `vertices`, `chance`, `oriented` and `seed` through `get`, keeping
	/// defaults for absent keys.
	pub fn from_query(get: impl Fn(&str) -> Option<String>) -> GraphResult<Self> {
		let defaults = Self::default();
		Ok(Self {
			vertex_count: parse_field(&get, "vertices")?.unwrap_or(defaults.vertex_count),
			edge_probability: parse_field(&get, "chance")?.unwrap_or(defaults.edge_probability),
			oriented: parse_field(&get, "oriented")?,
			seed: parse_field(&get, "seed")?,
		})
	}

	/// The random source these settings ask for.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		}
	}

	/// Builds a fresh graph with a new random source.
	pub fn build(&self) -> Graph<u32> {
		self.build_with(&mut self.rng())
	}

	/// Builds a fresh graph drawing from `rng`.
	pub fn build_with<R: Rng>(&self, rng: &mut R) -> Graph<u32> {
		let mut graph = Graph::new(self.oriented.unwrap_or_default());
		if self.oriented.is_none() {
			randomize_orientation(&mut graph, rng);
		}
		generate_random(&mut graph, rng, self.vertex_count, self.edge_probability);
		info!(
			"random graph ready: oriented={}, {} vertices, {} edges",
			graph.is_oriented(),
			graph.count_vertices(),
			graph.count_edges()
		);
		graph
	}
}

fn parse_field<T: FromStr>(
	get: &impl Fn(&str) -> Option<String>,
	field: &'static str,
) -> GraphResult<Option<T>> {
	get(field)
		.map(|value| {
			value
				.trim()
				.parse()
				.map_err(|_| GraphError::InvalidType { field, value })
		})
		.transpose()
}
