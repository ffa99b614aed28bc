use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use web_sys::MouseEvent;

use crate::components::circle_graph::CircleGraphCanvas;
use crate::graph::GeneratorConfig;

/// Random graph for the given settings, with a text dump and a regenerate button.
#[component]
fn RandomGraph(config: GeneratorConfig) -> impl IntoView {
	// One random stream per page load so a seeded URL replays the same sequence.
	let rng = Rc::new(RefCell::new(config.rng()));
	let graph = RwSignal::new(config.build_with(&mut *rng.borrow_mut()));

	let on_regenerate = move |_: MouseEvent| {
		graph.set(config.build_with(&mut *rng.borrow_mut()));
	};
	let summary = move || {
		graph.with(|g| format!("{} vertices, {} edges", g.count_vertices(), g.count_edges()))
	};

	view! {
		<div class="graph-page">
			<CircleGraphCanvas graph=graph />
			<div class="graph-controls">
				<button on:click=on_regenerate>"Regenerate"</button>
				<span class="graph-summary">{summary}</span>
			</div>
			<pre class="graph-dump">{move || graph.with(|g| g.to_string())}</pre>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let settings = Memo::new(move |_| query.with(|q| GeneratorConfig::from_query(|key| q.get(key))));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<h1>"Circular Graph"</h1>
			<p class="subtitle">
				"Settings come from the URL: ?vertices=10&chance=0.25&oriented=true&seed=1"
			</p>
			{move || settings.get().map(|config| view! { <RandomGraph config=config /> })}
		</ErrorBoundary>
	}
}
