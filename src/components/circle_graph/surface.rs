use std::f64::consts::PI;

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement};

use super::config::RenderConfig;
use super::layout::{BoundingBox, Point};
use crate::graph::{GraphError, GraphResult};

/// Where a text label sits relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Centered both ways on the position.
	Middle,
	/// Starts at the position, sitting on its baseline.
	Start,
}

/// Sink for the renderer's draw primitives. Filled shapes and lines use the
/// surface's foreground color; text uses its label color.
pub trait Surface {
	/// Straight line from `from` to `to`.
	fn draw_line(&mut self, from: Point, to: Point) -> GraphResult<()>;
	/// Filled closed polygon.
	fn draw_polygon(&mut self, points: &[Point]) -> GraphResult<()>;
	/// Filled ellipse inscribed in `bounds`.
	fn draw_ellipse(&mut self, bounds: BoundingBox) -> GraphResult<()>;
	/// Text label at `at`.
	fn draw_text(&mut self, at: Point, label: &str, anchor: TextAnchor) -> GraphResult<()>;
}

fn js_error(err: JsValue) -> GraphError {
	GraphError::Surface(format!("{err:?}"))
}

/// Fetches the 2D context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> GraphResult<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(js_error)?
		.ok_or_else(|| GraphError::Surface("2d context unavailable".into()))?
		.dyn_into()
		.map_err(|_| GraphError::Surface("context is not a 2d context".into()))
}

/// [`Surface`] backed by an HTML canvas.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
	config: &'a RenderConfig,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d, config: &'a RenderConfig) -> Self {
		Self { ctx, config }
	}

	/// Paints the whole canvas with the background color.
	pub fn clear(&self) {
		self.ctx.set_fill_style_str(self.config.background);
		self.ctx.fill_rect(0.0, 0.0, self.config.width, self.config.height);
	}

	/// Encodes the canvas as PNG and hands it to the browser as a download
	/// named `file_name`.
	pub fn save(&self, file_name: &str) -> GraphResult<()> {
		let canvas = self
			.ctx
			.canvas()
			.ok_or_else(|| GraphError::Surface("context is detached from its canvas".into()))?;
		let url = canvas.to_data_url_with_type("image/png").map_err(js_error)?;
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or_else(|| GraphError::Surface("no document".into()))?;
		let anchor: HtmlAnchorElement = document
			.create_element("a")
			.map_err(js_error)?
			.dyn_into()
			.map_err(|_| GraphError::Surface("created element is not an anchor".into()))?;
		anchor.set_href(&url);
		anchor.set_download(file_name);
		anchor.click();
		info!("saved canvas as {file_name}");
		Ok(())
	}
}

impl Surface for CanvasSurface<'_> {
	fn draw_line(&mut self, from: Point, to: Point) -> GraphResult<()> {
		self.ctx.set_stroke_style_str(self.config.foreground);
		self.ctx.set_line_width(1.0);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
		Ok(())
	}

	fn draw_polygon(&mut self, points: &[Point]) -> GraphResult<()> {
		let Some((first, rest)) = points.split_first() else {
			return Ok(());
		};
		self.ctx.set_fill_style_str(self.config.foreground);
		self.ctx.begin_path();
		self.ctx.move_to(first.x, first.y);
		for p in rest {
			self.ctx.line_to(p.x, p.y);
		}
		self.ctx.close_path();
		self.ctx.fill();
		Ok(())
	}

	fn draw_ellipse(&mut self, bounds: BoundingBox) -> GraphResult<()> {
		let c = bounds.center();
		let (rx, ry) = (
			(bounds.max.x - bounds.min.x) / 2.0,
			(bounds.max.y - bounds.min.y) / 2.0,
		);
		self.ctx.set_fill_style_str(self.config.foreground);
		self.ctx.begin_path();
		self.ctx
			.ellipse(c.x, c.y, rx, ry, 0.0, 0.0, 2.0 * PI)
			.map_err(js_error)?;
		self.ctx.fill();
		Ok(())
	}

	fn draw_text(&mut self, at: Point, label: &str, anchor: TextAnchor) -> GraphResult<()> {
		let (align, baseline) = match anchor {
			TextAnchor::Middle => ("center", "middle"),
			TextAnchor::Start => ("start", "alphabetic"),
		};
		self.ctx.set_font(self.config.font);
		self.ctx.set_text_align(align);
		self.ctx.set_text_baseline(baseline);
		self.ctx.set_fill_style_str(self.config.label);
		self.ctx.fill_text(label, at.x, at.y).map_err(js_error)
	}
}
