//! REST client for the company network API.
//!
//! Two endpoints feed the visualization:
//! - `GET {base}/companies/` for the node list
//! - `GET {base}/companies/{name}/{segment}/` for each company's relationships
//!
//! The relationships path segment differs between API deployments
//! (`relationships` vs the older `get_relationships` action name), so it is
//! configurable via [`ApiConfig`].

use thiserror::Error;

mod client;
mod types;

pub use client::load_graph;
pub use types::{Company, RelatedCompany, RelationshipMap, build_graph};

/// Which path segment the relationships endpoint is served under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelationshipsPath {
	/// `/companies/{name}/relationships/`
	#[default]
	Standard,
	/// `/companies/{name}/get_relationships/` (older deployments)
	Legacy,
}

impl RelationshipsPath {
	fn segment(self) -> &'static str {
		match self {
			RelationshipsPath::Standard => "relationships",
			RelationshipsPath::Legacy => "get_relationships",
		}
	}
}

/// Endpoint configuration for the company network API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// API prefix, without trailing slash (e.g. `/api/v1`).
	pub base: String,
	/// Path variant for the relationships endpoint.
	pub relationships_path: RelationshipsPath,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base: "/api/v1".to_string(),
			relationships_path: RelationshipsPath::default(),
		}
	}
}

impl ApiConfig {
	/// URL of the company list endpoint.
	pub fn companies_url(&self) -> String {
		format!("{}/companies/", self.base)
	}

	/// URL of the relationships endpoint for one company.
	pub fn relationships_url(&self, name: &str) -> String {
		format!(
			"{}/companies/{}/{}/",
			self.base,
			name,
			self.relationships_path.segment()
		)
	}

	/// Relationships URLs for a company list: exactly one request per company.
	pub fn relationship_urls(&self, companies: &[Company]) -> Vec<String> {
		companies
			.iter()
			.map(|c| self.relationships_url(&c.name))
			.collect()
	}
}

/// Errors from the fetch layer.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The browser rejected the request (network down, CORS, aborted).
	#[error("request to {url} failed: {message}")]
	Network { url: String, message: String },

	/// The server answered with a non-success status code.
	#[error("HTTP {status} from {url}")]
	Status { status: u16, url: String },

	/// The response body was not the JSON shape we expected.
	#[error("invalid JSON from {url}: {source}")]
	Json {
		url: String,
		#[source]
		source: serde_json::Error,
	},

	/// No `window` object; not running in a browser context.
	#[error("browser window unavailable")]
	NoWindow,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_uses_standard_path() {
		let config = ApiConfig::default();
		assert_eq!(config.companies_url(), "/api/v1/companies/");
		assert_eq!(
			config.relationships_url("Apple"),
			"/api/v1/companies/Apple/relationships/"
		);
	}

	#[test]
	fn legacy_path_uses_get_relationships_segment() {
		let config = ApiConfig {
			relationships_path: RelationshipsPath::Legacy,
			..ApiConfig::default()
		};
		assert_eq!(
			config.relationships_url("Microsoft"),
			"/api/v1/companies/Microsoft/get_relationships/"
		);
	}

	fn company(name: &str) -> Company {
		Company {
			name: name.to_string(),
			industry: None,
			founded_year: None,
		}
	}

	#[test]
	fn one_relationship_url_per_company() {
		let config = ApiConfig::default();
		let companies = vec![company("Apple"), company("Microsoft"), company("Amazon")];
		let urls = config.relationship_urls(&companies);
		assert_eq!(urls.len(), companies.len());
		assert_eq!(urls[1], "/api/v1/companies/Microsoft/relationships/");
	}

	#[test]
	fn empty_company_list_builds_no_relationship_urls() {
		assert!(ApiConfig::default().relationship_urls(&[]).is_empty());
	}

	#[test]
	fn status_error_mentions_code_and_url() {
		let err = ApiError::Status {
			status: 404,
			url: "/api/v1/companies/Nowhere/relationships/".to_string(),
		};
		let message = err.to_string();
		assert!(message.contains("404"));
		assert!(message.contains("/Nowhere/"));
	}
}
