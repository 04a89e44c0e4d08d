//! Browser `fetch` plumbing for the company network endpoints.

use futures::future::try_join_all;
use log::debug;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::{Company, RelationshipMap, build_graph};
use super::{ApiConfig, ApiError};
use crate::components::force_graph::GraphData;

/// Best-effort human-readable message from a rejected JS promise.
fn js_message(value: &JsValue) -> String {
	value
		.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"))
}

/// GET a URL and deserialize its JSON body.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
	let network = |e: JsValue| ApiError::Network {
		url: url.to_string(),
		message: js_message(&e),
	};

	let window = web_sys::window().ok_or(ApiError::NoWindow)?;
	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(network)?;
	let response: Response = response.dyn_into().map_err(network)?;

	if !response.ok() {
		return Err(ApiError::Status {
			status: response.status(),
			url: url.to_string(),
		});
	}

	let body = JsFuture::from(response.text().map_err(network)?)
		.await
		.map_err(network)?;
	let body = body.as_string().unwrap_or_default();

	serde_json::from_str(&body).map_err(|source| ApiError::Json {
		url: url.to_string(),
		source,
	})
}

/// Fetch the company list, then every company's relationships concurrently,
/// and assemble the combined node/link dataset.
///
/// Issues one relationships request per company. The first failure aborts
/// the whole load; no partial graph is returned.
pub async fn load_graph(config: &ApiConfig) -> Result<GraphData, ApiError> {
	let companies: Vec<Company> = fetch_json(&config.companies_url()).await?;
	debug!("company-graph: fetched {} companies", companies.len());

	let fetches = companies
		.iter()
		.zip(config.relationship_urls(&companies))
		.map(|(company, url)| {
			let name = company.name.clone();
			async move {
				let map: RelationshipMap = fetch_json(&url).await?;
				Ok::<_, ApiError>((name, map))
			}
		});
	let relationships = try_join_all(fetches).await?;

	Ok(build_graph(&companies, &relationships))
}
