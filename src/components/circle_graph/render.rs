use std::fmt::Display;
use std::hash::Hash;

use log::debug;

use super::config::RenderConfig;
use super::layout::{BoundingBox, CircularLayout, Point};
use super::surface::{Surface, TextAnchor};
use crate::graph::{Graph, GraphResult};

/// Draws `graph` with its vertices on a circle: every stored edge as a line
/// (with an arrowhead when the graph is oriented), then a filled marker and
/// centered label per vertex.
///
/// Fails with [`GraphError::EmptyGraph`](crate::graph::GraphError::EmptyGraph)
/// before drawing anything when the graph has no vertices.
pub fn render<V, S>(graph: &Graph<V>, surface: &mut S, config: &RenderConfig) -> GraphResult<()>
where
	V: Clone + Eq + Ord + Hash + Display,
	S: Surface + ?Sized,
{
	let layout = CircularLayout::new(graph, config)?;
	draw_edges(graph, &layout, surface, config)?;
	draw_vertices(graph, &layout, surface, config)?;
	debug!(
		"rendered {} vertices, {} edges",
		graph.count_vertices(),
		graph.count_edges()
	);
	Ok(())
}

fn draw_edges<V, S>(
	graph: &Graph<V>,
	layout: &CircularLayout<'_, V>,
	surface: &mut S,
	config: &RenderConfig,
) -> GraphResult<()>
where
	V: Clone + Eq + Ord + Hash,
	S: Surface + ?Sized,
{
	for ((_, neighbors), &from) in graph.adjacency().zip(layout.points()) {
		for neighbor in neighbors {
			let Some(to) = layout.position(neighbor) else {
				continue;
			};
			surface.draw_line(from, to)?;
			if graph.is_oriented() {
				surface.draw_polygon(&arrowhead(from, to, config))?;
			}
		}
	}
	Ok(())
}

fn draw_vertices<V, S>(
	graph: &Graph<V>,
	layout: &CircularLayout<'_, V>,
	surface: &mut S,
	config: &RenderConfig,
) -> GraphResult<()>
where
	V: Clone + Eq + Ord + Hash + Display,
	S: Surface + ?Sized,
{
	for (vertex, &center) in graph.vertices().iter().zip(layout.points()) {
		surface.draw_ellipse(BoundingBox::around(center, config.vertex_radius))?;
		surface.draw_text(center, &vertex.to_string(), TextAnchor::Middle)?;
	}
	Ok(())
}

/// Triangle `[tip, left wing, right wing]` for the edge `from -> to`.
///
/// The tip sits `vertex_radius + arrow_offset` short of `to` along the edge so
/// it touches the outside of the destination marker.
pub fn arrowhead(from: Point, to: Point, config: &RenderConfig) -> [Point; 3] {
	let angle = (to.y - from.y).atan2(to.x - from.x);
	let back = config.vertex_radius + config.arrow_offset;
	let tip = Point::new(to.x - back * angle.cos(), to.y - back * angle.sin());
	let wing = |a: f64| {
		Point::new(
			tip.x - config.arrow_wing * a.cos(),
			tip.y - config.arrow_wing * a.sin(),
		)
	};
	[
		tip,
		wing(angle - config.arrow_angle),
		wing(angle + config.arrow_angle),
	]
}
