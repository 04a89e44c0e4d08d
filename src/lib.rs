//! company-graph: Interactive force-directed visualization of a company network.
//!
//! This crate provides a WASM-based graph visualization that fetches companies
//! and their relationships from a REST API and renders them with physics-based
//! layout, pan/zoom, and hover effects.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod components;

pub use api::{ApiConfig, ApiError, RelationshipsPath};
pub use components::force_graph::{
	ForceGraphCanvas, GraphData, GraphLink, GraphNode, InteractionMode,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("company-graph: logging initialized");
}

/// Show or hide the `#loading-overlay` busy indicator.
/// A page without the overlay element gets a logged warning, not a failure.
fn set_loading_visible(visible: bool) {
	let overlay = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id("loading-overlay"));

	match overlay {
		Some(el) => {
			if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
				let display = if visible { "flex" } else { "none" };
				let _ = el.style().set_property("display", display);
			}
		}
		None => warn!("company-graph: no #loading-overlay element to toggle"),
	}
}

/// Pick the dataset to display after a load attempt.
///
/// A failure is reported once and leaves the current dataset in place (the
/// empty default on first load), so a rejected relationship fetch never
/// draws a partial graph.
fn apply_load_result(result: Result<GraphData, ApiError>, current: GraphData) -> GraphData {
	match result {
		Ok(data) => {
			info!(
				"company-graph: loaded {} companies, {} relationships",
				data.nodes.len(),
				data.links.len()
			);
			data
		}
		Err(e) => {
			error!("company-graph: failed to load company network: {e}");
			current
		}
	}
}

/// Main application component.
///
/// Kicks off the API load on startup and renders the force-directed
/// visualization once the dataset arrives. Until then (and on failure) the
/// canvas shows an empty graph; the loading overlay is hidden either way.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph = RwSignal::new(GraphData::default());

	set_loading_visible(true);
	spawn_local(async move {
		let result = api::load_graph(&ApiConfig::default()).await;
		graph.set(apply_load_result(result, graph.get_untracked()));
		set_loading_visible(false);
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Company Network" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas data=graph fullscreen=true interaction=InteractionMode::Tooltip />
			<div class="graph-overlay">
				<h1>"Company Network"</h1>
				<p class="subtitle">
					"Drag nodes to reposition. Scroll to zoom. Drag background to pan."
				</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_load_draws_no_partial_graph() {
		let err = ApiError::Status {
			status: 500,
			url: "/api/v1/companies/Apple/relationships/".to_string(),
		};
		let shown = apply_load_result(Err(err), GraphData::default());
		assert_eq!(shown, GraphData::default());
	}

	#[test]
	fn successful_load_replaces_the_dataset() {
		let data = GraphData {
			nodes: vec![GraphNode {
				name: "Apple".to_string(),
				industry: Some("Technology".to_string()),
				founded_year: Some("1976".to_string()),
			}],
			links: Vec::new(),
		};
		let shown = apply_load_result(Ok(data.clone()), GraphData::default());
		assert_eq!(shown, data);
	}
}
