//! Graph data structures for input to the force graph component.

/// A node in the graph: one company.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique company name. Used to resolve link endpoints.
	pub name: String,
	/// Industry sector; drives node fill color.
	pub industry: Option<String>,
	/// Founding year as reported by the API (a string, e.g. "1976").
	pub founded_year: Option<String>,
}

/// A typed relationship between two companies.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Source company name.
	pub source: String,
	/// Target company name.
	pub target: String,
	/// Relationship label (e.g. "competitors", "suppliers"); drives edge color.
	pub kind: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// All companies, one node each.
	pub nodes: Vec<GraphNode>,
	/// All relationships, resolved against `nodes` by name.
	pub links: Vec<GraphLink>,
}

/// What hovering a node does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
	/// Hovered node (and, mildly, its neighbors) grow in radius.
	#[default]
	Grow,
	/// Hovered node shows a tooltip with name, industry, and founding year.
	Tooltip,
}
