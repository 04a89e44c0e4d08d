//! API payload types and graph assembly.

use std::collections::{BTreeMap, HashSet};

use log::warn;
use serde::Deserialize;

use crate::components::force_graph::{GraphData, GraphLink, GraphNode};

/// One entry from the company list endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Company {
	/// Unique company name; also the node key for edge resolution.
	pub name: String,
	/// Industry sector, when the API reports one.
	pub industry: Option<String>,
	/// Stored as a string upstream (e.g. "1976").
	pub founded_year: Option<String>,
}

/// A related company as it appears inside a relationship map.
#[derive(Clone, Debug, Deserialize)]
pub struct RelatedCompany {
	/// Name of the company on the other end of the edge.
	pub name: String,
}

/// Relationship-type label mapped to the companies on the other end.
/// `BTreeMap` keeps edge order deterministic within one response.
pub type RelationshipMap = BTreeMap<String, Vec<RelatedCompany>>;

/// Flattens the company list and per-company relationship maps into render
/// input. Produces one link per (company, kind, related company) triple.
///
/// Links whose target is not a known company are dropped with a warning;
/// the layout library cannot resolve them and would otherwise fail silently.
pub fn build_graph(companies: &[Company], relationships: &[(String, RelationshipMap)]) -> GraphData {
	let known: HashSet<&str> = companies.iter().map(|c| c.name.as_str()).collect();

	let nodes = companies
		.iter()
		.map(|company| GraphNode {
			name: company.name.clone(),
			industry: company.industry.clone(),
			founded_year: company.founded_year.clone(),
		})
		.collect();

	let mut links = Vec::new();
	for (source, map) in relationships {
		for (kind, related) in map {
			for company in related {
				if !known.contains(source.as_str()) || !known.contains(company.name.as_str()) {
					warn!(
						"company-graph: dropping {} edge {} -> {} (unknown endpoint)",
						kind, source, company.name
					);
					continue;
				}
				links.push(GraphLink {
					source: source.clone(),
					target: company.name.clone(),
					kind: kind.clone(),
				});
			}
		}
	}

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn company(name: &str) -> Company {
		Company {
			name: name.to_string(),
			industry: Some("Technology".to_string()),
			founded_year: Some("1976".to_string()),
		}
	}

	fn related(names: &[&str]) -> Vec<RelatedCompany> {
		names
			.iter()
			.map(|n| RelatedCompany {
				name: (*n).to_string(),
			})
			.collect()
	}

	#[test]
	fn one_link_per_relationship_triple() {
		let companies = vec![company("Apple"), company("Microsoft"), company("Amazon")];
		let relationships = vec![
			(
				"Apple".to_string(),
				RelationshipMap::from([
					("competitors".to_string(), related(&["Microsoft"])),
					("suppliers".to_string(), related(&["Amazon", "Microsoft"])),
				]),
			),
			(
				"Microsoft".to_string(),
				RelationshipMap::from([("partners".to_string(), related(&["Amazon"]))]),
			),
		];

		let graph = build_graph(&companies, &relationships);
		assert_eq!(graph.nodes.len(), 3);
		assert_eq!(graph.links.len(), 4);

		let kinds: Vec<&str> = graph.links.iter().map(|l| l.kind.as_str()).collect();
		assert_eq!(kinds, ["competitors", "suppliers", "suppliers", "partners"]);
	}

	#[test]
	fn empty_company_list_yields_empty_graph() {
		let graph = build_graph(&[], &[]);
		assert!(graph.nodes.is_empty());
		assert!(graph.links.is_empty());
	}

	#[test]
	fn links_to_unknown_companies_are_dropped() {
		let companies = vec![company("Apple")];
		let relationships = vec![(
			"Apple".to_string(),
			RelationshipMap::from([("competitors".to_string(), related(&["Ghost Corp"]))]),
		)];

		let graph = build_graph(&companies, &relationships);
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.links.is_empty());
	}

	#[test]
	fn rebuild_starts_from_an_empty_link_list() {
		let companies = vec![company("Apple"), company("Microsoft")];
		let relationships = vec![(
			"Apple".to_string(),
			RelationshipMap::from([("competitors".to_string(), related(&["Microsoft"]))]),
		)];

		let first = build_graph(&companies, &relationships);
		let second = build_graph(&companies, &relationships);
		assert_eq!(first.links.len(), 1);
		assert_eq!(second.links.len(), 1);
	}

	#[test]
	fn node_fields_come_from_the_company_record() {
		let graph = build_graph(&[company("Apple")], &[]);
		let node = &graph.nodes[0];
		assert_eq!(node.name, "Apple");
		assert_eq!(node.industry.as_deref(), Some("Technology"));
		assert_eq!(node.founded_year.as_deref(), Some("1976"));
	}
}
