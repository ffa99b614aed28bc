use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use log::debug;

use super::error::{GraphError, GraphResult};

/// An undirected edge identity. Endpoints are stored as `(min, max)` so two
/// edges compare equal regardless of the order they were discovered in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<V> {
	low: V,
	high: V,
}

impl<V: Ord> Edge<V> {
	/// Builds the pair `{a, b}`.
	pub fn new(a: V, b: V) -> Self {
		if a <= b {
			Self { low: a, high: b }
		} else {
			Self { low: b, high: a }
		}
	}

	/// Endpoints, smaller first.
	pub fn endpoints(&self) -> (&V, &V) {
		(&self.low, &self.high)
	}
}

/// Adjacency-list graph over any ordered, hashable vertex type.
///
/// Vertices iterate in insertion order and neighbor lists keep the order the
/// neighbors were added in. Neighbor lists never hold duplicates or the vertex
/// itself. In undirected mode every stored edge `u -> v` has its mirror `v -> u`.
#[derive(Clone, Debug)]
pub struct Graph<V> {
	oriented: bool,
	order: Vec<V>,
	adjacency: HashMap<V, Vec<V>>,
}

impl<V> Default for Graph<V> {
	fn default() -> Self {
		Self {
			oriented: false,
			order: Vec::new(),
			adjacency: HashMap::new(),
		}
	}
}

impl<V: Clone + Eq + Ord + Hash> Graph<V> {
	/// An empty graph.
	pub fn new(oriented: bool) -> Self {
		Self {
			oriented,
			..Self::default()
		}
	}

	/// Builds a graph from a prebuilt adjacency mapping.
	///
	/// Input is validated before anything is built: a vertex listing itself as
	/// a neighbor fails with [`GraphError::InvalidEdge`]. Duplicate neighbors
	/// are dropped and neighbors missing as keys become vertices. An undirected
	/// graph is closed symmetrically, so `{1: [2]}` stores both `1 -> 2` and
	/// `2 -> 1`.
	pub fn from_adjacency<I>(adjacency: I, oriented: bool) -> GraphResult<Self>
	where
		I: IntoIterator<Item = (V, Vec<V>)>,
	{
		let entries: Vec<(V, Vec<V>)> = adjacency.into_iter().collect();
		if entries
			.iter()
			.any(|(vertex, neighbors)| neighbors.contains(vertex))
		{
			return Err(GraphError::InvalidEdge(
				"adjacency lists a vertex as its own neighbor".into(),
			));
		}

		let mut graph = Self::new(oriented);
		for (vertex, _) in &entries {
			graph.add_vertex(vertex.clone());
		}
		for (vertex, neighbors) in entries {
			for neighbor in neighbors {
				graph.link(vertex.clone(), neighbor);
			}
		}
		debug!(
			"built graph from adjacency: {} vertices, oriented={}",
			graph.count_vertices(),
			oriented
		);
		Ok(graph)
	}

	/// Whether edges are directed.
	pub fn is_oriented(&self) -> bool {
		self.oriented
	}

	/// Switches between directed and undirected mode.
	///
	/// Stored adjacency is left as it is: edges added while undirected keep both
	/// directions and edges added while directed stay one-way. `edges()` and
	/// `count_edges()` report that stored structure.
	pub fn set_oriented(&mut self, oriented: bool) {
		if self.oriented != oriented && !self.order.is_empty() {
			debug!("orientation changed to {oriented} with existing edges left untouched");
		}
		self.oriented = oriented;
	}

	/// Inserts `vertex` with no neighbors. No-op when it already exists.
	pub fn add_vertex(&mut self, vertex: V) {
		if self.adjacency.contains_key(&vertex) {
			return;
		}
		self.order.push(vertex.clone());
		self.adjacency.insert(vertex, Vec::new());
	}

	/// Adds the edge `u -> v`, plus `v -> u` when the graph is undirected.
	///
	/// Missing endpoints are created. Adding an existing edge does nothing.
	pub fn add_edge(&mut self, u: V, v: V) -> GraphResult<()> {
		if u == v {
			return Err(GraphError::InvalidEdge(
				"an edge cannot connect a vertex with itself".into(),
			));
		}
		self.link(u, v);
		Ok(())
	}

	/// Slice form of [`Graph::add_edge`]; `endpoints` must hold exactly two
	/// distinct vertices.
	pub fn add_edge_from(&mut self, endpoints: &[V]) -> GraphResult<()> {
		match endpoints {
			[u, v] => self.add_edge(u.clone(), v.clone()),
			_ => Err(GraphError::InvalidEdge(format!(
				"an edge must have two endpoints, got {}",
				endpoints.len()
			))),
		}
	}

	// Callers have already rejected self-loops.
	fn link(&mut self, u: V, v: V) {
		self.add_vertex(u.clone());
		self.add_vertex(v.clone());
		if !self.oriented {
			push_unique(self.neighbors_mut(&v), u.clone());
		}
		push_unique(self.neighbors_mut(&u), v);
	}

	fn neighbors_mut(&mut self, vertex: &V) -> &mut Vec<V> {
		self.adjacency.entry(vertex.clone()).or_default()
	}

	/// Removes every vertex and edge. Orientation is kept.
	pub fn clear(&mut self) {
		self.order.clear();
		self.adjacency.clear();
	}

	/// Vertices in insertion order.
	pub fn vertices(&self) -> &[V] {
		&self.order
	}

	/// Whether `vertex` is present.
	pub fn contains_vertex(&self, vertex: &V) -> bool {
		self.adjacency.contains_key(vertex)
	}

	/// Neighbors of `vertex` in the order they were added, or `None` for an
	/// unknown vertex.
	pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
		self.adjacency.get(vertex).map(Vec::as_slice)
	}

	/// Whether the stored adjacency has `u -> v`.
	pub fn has_edge(&self, u: &V, v: &V) -> bool {
		self.neighbors(u).is_some_and(|n| n.contains(v))
	}

	/// Each vertex with its neighbor list, in vertex insertion order.
	pub fn adjacency(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
		self.order
			.iter()
			.map(|v| (v, self.neighbors(v).unwrap_or_default()))
	}

	/// Deduplicated edges as unordered pairs, in discovery order.
	///
	/// Pairs are deduplicated by unordered identity in both modes, so the
	/// directed edges `1 -> 2` and `2 -> 1` show up as the single pair `{1, 2}`.
	pub fn edges(&self) -> Vec<Edge<V>> {
		let mut seen = HashSet::new();
		let mut edges = Vec::new();
		for (vertex, neighbors) in self.adjacency() {
			for neighbor in neighbors {
				let edge = Edge::new(vertex.clone(), neighbor.clone());
				if seen.insert(edge.clone()) {
					edges.push(edge);
				}
			}
		}
		edges
	}

	/// Number of vertices.
	pub fn count_vertices(&self) -> usize {
		self.order.len()
	}

	/// Number of edges computed from stored adjacency entries: all entries when
	/// directed, half of them (rounded down) when undirected.
	pub fn count_edges(&self) -> usize {
		let entries: usize = self.adjacency.values().map(Vec::len).sum();
		if self.oriented { entries } else { entries / 2 }
	}
}

fn push_unique<V: PartialEq>(list: &mut Vec<V>, value: V) {
	if !list.contains(&value) {
		list.push(value);
	}
}

impl<V: fmt::Display + Eq + Hash> fmt::Display for Graph<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Graph is {}oriented",
			if self.oriented { "" } else { "not " }
		)?;
		for vertex in &self.order {
			write!(f, "\n{vertex}: ")?;
			let neighbors = self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default();
			for (i, neighbor) in neighbors.iter().enumerate() {
				if i > 0 {
					f.write_str(", ")?;
				}
				write!(f, "{neighbor}")?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn triangle(oriented: bool) -> Graph<u32> {
		let mut g = Graph::new(oriented);
		for (u, v) in [(1, 2), (2, 3), (1, 3)] {
			g.add_edge(u, v).unwrap();
			if oriented {
				g.add_edge(v, u).unwrap();
			}
		}
		g
	}

	#[test]
	fn add_vertex_is_noop_when_present() {
		let mut g = Graph::new(false);
		g.add_vertex("a");
		g.add_edge("a", "b").unwrap();
		g.add_vertex("a");
		assert_eq!(g.vertices(), &["a", "b"]);
		assert_eq!(g.neighbors(&"a"), Some(&["b"][..]));
	}

	#[test]
	fn undirected_edge_is_mirrored() {
		let mut g = Graph::new(false);
		g.add_edge(1, 2).unwrap();
		assert!(g.has_edge(&1, &2));
		assert!(g.has_edge(&2, &1));
	}

	#[test]
	fn directed_edge_is_one_way() {
		let mut g = Graph::new(true);
		g.add_edge(1, 2).unwrap();
		assert!(g.has_edge(&1, &2));
		assert!(!g.has_edge(&2, &1));
		g.add_edge(2, 1).unwrap();
		assert!(g.has_edge(&2, &1));
	}

	#[test]
	fn self_loop_is_rejected_without_mutation() {
		let mut g = Graph::<u32>::new(false);
		let err = g.add_edge(7, 7).unwrap_err();
		assert!(matches!(err, GraphError::InvalidEdge(_)));
		assert_eq!(g.count_vertices(), 0);
	}

	#[test]
	fn edge_slice_needs_two_endpoints() {
		let mut g = Graph::new(false);
		assert!(matches!(g.add_edge_from(&[1]), Err(GraphError::InvalidEdge(_))));
		assert!(matches!(g.add_edge_from(&[1, 2, 3]), Err(GraphError::InvalidEdge(_))));
		assert!(matches!(g.add_edge_from(&[4, 4]), Err(GraphError::InvalidEdge(_))));
		assert_eq!(g.count_vertices(), 0);
		g.add_edge_from(&[1, 2]).unwrap();
		assert_eq!(g.count_edges(), 1);
	}

	#[test]
	fn edges_dedups_mirrored_pair() {
		let g = Graph::from_adjacency([(1, vec![2]), (2, vec![1])], false).unwrap();
		assert_eq!(g.edges(), vec![Edge::new(1, 2)]);
		assert_eq!(g.edges()[0].endpoints(), (&1, &2));
	}

	#[test]
	fn count_edges_for_triangles() {
		assert_eq!(triangle(false).count_edges(), 3);
		let directed = triangle(true);
		assert_eq!(directed.count_edges(), 6);
		assert_eq!(directed.edges().len(), 3);
	}

	#[test]
	fn from_adjacency_closes_undirected_input() {
		let g = Graph::from_adjacency([(1, vec![2, 3, 2]), (2, vec![])], false).unwrap();
		assert_eq!(g.vertices(), &[1, 2, 3]);
		assert_eq!(g.neighbors(&1), Some(&[2, 3][..]));
		assert_eq!(g.neighbors(&2), Some(&[1][..]));
		assert_eq!(g.neighbors(&3), Some(&[1][..]));
	}

	#[test]
	fn from_adjacency_keeps_directed_input() {
		let g = Graph::from_adjacency([(1, vec![2])], true).unwrap();
		assert_eq!(g.neighbors(&2), Some(&[][..]));
		assert_eq!(g.count_edges(), 1);
	}

	#[test]
	fn from_adjacency_rejects_self_loop() {
		let err = Graph::from_adjacency([(1, vec![2]), (3, vec![3])], false).unwrap_err();
		assert!(matches!(err, GraphError::InvalidEdge(_)));
	}

	#[test]
	fn toggling_orientation_keeps_adjacency() {
		let mut g = Graph::new(true);
		g.add_edge(1, 2).unwrap();
		g.set_oriented(false);
		assert!(!g.has_edge(&2, &1));
		// one stored entry, halved and floored
		assert_eq!(g.count_edges(), 0);
		assert_eq!(g.edges().len(), 1);
	}

	#[test]
	fn display_lists_vertices_in_order() {
		let mut g = Graph::new(false);
		g.add_edge(1, 2).unwrap();
		g.add_edge(1, 3).unwrap();
		g.add_vertex(4);
		assert_eq!(
			g.to_string(),
			"Graph is not oriented\n1: 2, 3\n2: 1\n3: 1\n4: "
		);
		g.set_oriented(true);
		assert!(g.to_string().starts_with("Graph is oriented\n"));
	}

	#[test]
	fn clear_keeps_orientation() {
		let mut g = triangle(true);
		g.clear();
		assert!(g.is_oriented());
		assert_eq!(g.count_vertices(), 0);
		assert!(g.edges().is_empty());
	}

	proptest! {
		#[test]
		fn add_edge_is_idempotent(oriented in any::<bool>(), u in 0u8..20, v in 0u8..20) {
			prop_assume!(u != v);
			let mut once = Graph::new(oriented);
			once.add_edge(u, v).unwrap();
			let mut twice = once.clone();
			twice.add_edge(u, v).unwrap();
			prop_assert_eq!(once.to_string(), twice.to_string());
		}

		#[test]
		fn undirected_adjacency_stays_symmetric(pairs in prop::collection::vec((0u8..12, 0u8..12), 0..40)) {
			let mut g = Graph::new(false);
			for (u, v) in pairs {
				let _ = g.add_edge(u, v);
			}
			for (vertex, neighbors) in g.adjacency() {
				prop_assert!(!neighbors.contains(vertex));
				for n in neighbors {
					prop_assert!(g.has_edge(n, vertex));
				}
			}
			prop_assert_eq!(g.count_edges(), g.edges().len());
		}
	}
}
