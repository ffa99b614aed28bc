use std::f64::consts::PI;

use super::layout::Point;

/// Drawing constants for the circular renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Radius of the circle the vertices sit on.
	pub radius: f64,
	/// Radius of each vertex marker.
	pub vertex_radius: f64,
	/// Gap between an arrow tip and the edge of the destination marker.
	pub arrow_offset: f64,
	/// Length of each arrowhead wing.
	pub arrow_wing: f64,
	/// Angle between the edge and each wing, in radians.
	pub arrow_angle: f64,
	/// CSS font used for vertex labels.
	pub font: &'static str,
	/// Background fill.
	pub background: &'static str,
	/// Edge, arrowhead and marker color.
	pub foreground: &'static str,
	/// Label color, drawn on top of the markers.
	pub label: &'static str,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			width: 600.0,
			height: 600.0,
			radius: 250.0,
			vertex_radius: 20.0,
			arrow_offset: 3.0,
			arrow_wing: 5.0,
			arrow_angle: PI / 6.0,
			font: "16px sans-serif",
			background: "white",
			foreground: "black",
			label: "white",
		}
	}
}

impl RenderConfig {
	/// Center of the canvas.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}
