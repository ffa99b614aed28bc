use std::collections::HashMap;
use std::f64::consts::PI;
use std::hash::Hash;

use log::debug;

use super::config::RenderConfig;
use crate::graph::{Graph, GraphError, GraphResult};

/// A point on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate, growing to the right.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// A point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Axis-aligned box, used to describe ellipses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	/// Top-left corner.
	pub min: Point,
	/// Bottom-right corner.
	pub max: Point,
}

impl BoundingBox {
	/// The square of half-side `radius` centered on `center`.
	pub fn around(center: Point, radius: f64) -> Self {
		Self {
			min: Point::new(center.x - radius, center.y - radius),
			max: Point::new(center.x + radius, center.y + radius),
		}
	}

	/// Middle of the box.
	pub fn center(&self) -> Point {
		Point::new(
			(self.min.x + self.max.x) / 2.0,
			(self.min.y + self.max.y) / 2.0,
		)
	}
}

/// `count` points evenly spaced on a circle, the i-th at angle `2πi/count`.
pub fn circle_points(count: usize, center: Point, radius: f64) -> GraphResult<Vec<Point>> {
	if count == 0 {
		return Err(GraphError::EmptyGraph);
	}
	Ok((0..count)
		.map(|i| {
			let angle = (i as f64) * 2.0 * PI / count as f64;
			Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
		})
		.collect())
}

/// Vertex positions for one render pass, in `Graph::vertices` order.
pub struct CircularLayout<'g, V> {
	points: Vec<Point>,
	index: HashMap<&'g V, usize>,
}

impl<'g, V: Clone + Eq + Ord + Hash> CircularLayout<'g, V> {
	/// Places every vertex of `graph` on the configured circle. Fails with
	/// [`GraphError::EmptyGraph`] when there is nothing to place.
	pub fn new(graph: &'g Graph<V>, config: &RenderConfig) -> GraphResult<Self> {
		let vertices = graph.vertices();
		let points = circle_points(vertices.len(), config.center(), config.radius)?;
		let index = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
		debug!("laid out {} vertices on r={}", points.len(), config.radius);
		Ok(Self { points, index })
	}

	/// Position of `vertex`, if it was part of the graph.
	pub fn position(&self, vertex: &V) -> Option<Point> {
		self.index.get(vertex).map(|&i| self.points[i])
	}

	/// All positions in vertex order.
	pub fn points(&self) -> &[Point] {
		&self.points
	}
}
