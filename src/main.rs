//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use company_graph::{App, init_logging};
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;

fn main() {
	init_logging();

	let container = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id("graph"))
		.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

	match container {
		Some(el) => {
			leptos::mount::mount_to(el, || view! { <App /> }).forget();
		}
		None => {
			warn!("company-graph: no #graph container, mounting to <body>");
			mount_to_body(|| view! { <App /> });
		}
	}
}
