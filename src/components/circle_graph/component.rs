use leptos::prelude::*;
use log::warn;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::config::RenderConfig;
use super::render::render;
use super::surface::{CanvasSurface, context_2d};
use crate::graph::{Graph, GraphResult};

fn paint(canvas: &HtmlCanvasElement, graph: &Graph<u32>, config: &RenderConfig) -> GraphResult<()> {
	canvas.set_width(config.width as u32);
	canvas.set_height(config.height as u32);
	let ctx = context_2d(canvas)?;
	let mut surface = CanvasSurface::new(&ctx, config);
	surface.clear();
	render(graph, &mut surface, config)
}

/// Canvas showing `graph` in a circular layout, redrawn whenever the graph
/// signal changes, with a button that downloads the current image as PNG.
#[component]
pub fn CircleGraphCanvas(
	#[prop(into)] graph: Signal<Graph<u32>>,
	#[prop(optional)] config: RenderConfig,
	#[prop(default = "graph.png")] file_name: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let error = RwSignal::new(None::<String>);
	let config_draw = config.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let result = graph.with(|g| paint(&canvas, g, &config_draw));
		if let Err(e) = &result {
			warn!("graph render failed: {e}");
		}
		error.set(result.err().map(|e| e.to_string()));
	});

	let on_save = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let saved = context_2d(&canvas)
			.and_then(|ctx| CanvasSurface::new(&ctx, &config).save(file_name));
		if let Err(e) = saved {
			warn!("saving {file_name} failed: {e}");
			error.set(Some(e.to_string()));
		}
	};

	view! {
		<div class="circle-graph">
			<canvas node_ref=canvas_ref class="circle-graph-canvas" style="display: block;" />
			<button on:click=on_save>"Save PNG"</button>
			<Show when=move || error.with(Option::is_some)>
				<p class="circle-graph-error">{move || error.get().unwrap_or_default()}</p>
			</Show>
		</div>
	}
}
