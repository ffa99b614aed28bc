use circle_graph_canvas::components::circle_graph::{
	BoundingBox, Point, RenderConfig, Surface, TextAnchor, arrowhead, circle_points, render,
};
use circle_graph_canvas::graph::{Edge, GeneratorConfig, Graph, GraphError, GraphResult, generate_random};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct Tally {
	lines: usize,
	polygons: usize,
	ellipses: usize,
	labels: Vec<String>,
}

impl Surface for Tally {
	fn draw_line(&mut self, _: Point, _: Point) -> GraphResult<()> {
		self.lines += 1;
		Ok(())
	}

	fn draw_polygon(&mut self, _: &[Point]) -> GraphResult<()> {
		self.polygons += 1;
		Ok(())
	}

	fn draw_ellipse(&mut self, _: BoundingBox) -> GraphResult<()> {
		self.ellipses += 1;
		Ok(())
	}

	fn draw_text(&mut self, _: Point, label: &str, _: TextAnchor) -> GraphResult<()> {
		self.labels.push(label.to_owned());
		Ok(())
	}
}

#[test]
fn generated_graph_dump() {
	let mut graph = Graph::new(true);
	generate_random(&mut graph, &mut StdRng::seed_from_u64(0), 3, 1.0);
	assert_eq!(
		graph.to_string(),
		"Graph is oriented\n1: 2, 3\n2: 1, 3\n3: 1, 2"
	);
	assert_eq!(
		graph.edges(),
		vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 3)]
	);
	assert_eq!(graph.count_edges(), 6);
}

#[test]
fn render_empty_generated_graph() {
	let graph = GeneratorConfig {
		vertex_count: 0,
		seed: Some(5),
		..GeneratorConfig::default()
	}
	.build();
	let err = render(&graph, &mut Tally::default(), &RenderConfig::default()).unwrap_err();
	assert_eq!(err, GraphError::EmptyGraph);
	assert!(circle_points(0, Point::default(), 1.0).is_err());
}

proptest! {
	#[test]
	fn render_draws_every_stored_entry(seed in any::<u64>(), vertices in 1u32..12, chance in 0.0f64..1.0) {
		let config = GeneratorConfig {
			vertex_count: vertices,
			edge_probability: chance,
			oriented: None,
			seed: Some(seed),
		};
		let graph = config.build();
		let mut tally = Tally::default();
		render(&graph, &mut tally, &RenderConfig::default()).unwrap();

		let entries: usize = graph.adjacency().map(|(_, n)| n.len()).sum();
		prop_assert_eq!(tally.lines, entries);
		prop_assert_eq!(tally.polygons, if graph.is_oriented() { entries } else { 0 });
		prop_assert_eq!(tally.ellipses, vertices as usize);
		let expected: Vec<String> = (1..=vertices).map(|v| v.to_string()).collect();
		prop_assert_eq!(tally.labels, expected);
	}

	#[test]
	fn circle_points_sit_on_the_circle(count in 1usize..64, radius in 1.0f64..500.0) {
		let center = Point::new(300.0, 300.0);
		let points = circle_points(count, center, radius).unwrap();
		prop_assert_eq!(points.len(), count);
		for p in &points {
			prop_assert!((p.distance(center) - radius).abs() < 1e-6);
		}
	}

	#[test]
	fn arrow_tip_clears_the_marker(x in -300.0f64..300.0, y in -300.0f64..300.0) {
		prop_assume!(x.hypot(y) > 1.0);
		let config = RenderConfig::default();
		let to = Point::new(0.0, 0.0);
		let [tip, left, right] = arrowhead(Point::new(x, y), to, &config);
		prop_assert!((tip.distance(to) - 23.0).abs() < 1e-6);
		prop_assert!((tip.distance(left) - config.arrow_wing).abs() < 1e-6);
		prop_assert!((tip.distance(right) - config.arrow_wing).abs() < 1e-6);
		prop_assert!(left.distance(to) > tip.distance(to));
	}

	#[test]
	fn directed_edges_stay_one_way(pairs in prop::collection::vec((0u8..10, 0u8..10), 1..30)) {
		let mut graph = Graph::new(true);
		for &(u, v) in &pairs {
			match graph.add_edge(u, v) {
				Ok(()) => prop_assert!(graph.has_edge(&u, &v)),
				Err(e) => prop_assert!(u == v && matches!(e, GraphError::InvalidEdge(_))),
			}
		}
		for (u, neighbors) in graph.adjacency() {
			for v in neighbors {
				prop_assert!(pairs.contains(&(*u, *v)));
			}
		}
	}
}
