//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node company metadata,
//! view transforms for pan/zoom, and highlight state for hover effects with
//! smooth intensity transitions.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, Theme};
use super::types::GraphData;

/// Edge colors for the relationship kinds the company API serves.
/// Unknown kinds fall back to the theme palette, keyed by first appearance.
pub fn relationship_colors() -> HashMap<String, Color> {
	[
		("suppliers", Color::rgb(46, 125, 50)),
		("customers", Color::rgb(0, 131, 143)),
		("partners", Color::rgb(25, 118, 210)),
		("competitors", Color::rgb(198, 40, 40)),
	]
	.into_iter()
	.map(|(k, v)| (k.to_string(), v))
	.collect()
}

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	/// Company name; doubles as the node label.
	pub name: String,
	/// Industry sector, shown in the tooltip.
	pub industry: Option<String>,
	/// Founding year, shown in the tooltip.
	pub founded_year: Option<String>,
	/// Fill color, derived from the industry via the theme palette.
	pub color: Color,
}

/// Per-edge metadata: the relationship kind and its display color.
#[derive(Clone, Debug)]
pub struct EdgeInfo {
	/// Relationship label, drawn along highlighted edges.
	pub kind: String,
	/// Stroke color for this relationship kind.
	pub color: Color,
}

impl Default for EdgeInfo {
	fn default() -> Self {
		Self {
			kind: String::new(),
			color: Color::rgb(128, 128, 128),
		}
	}
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Horizontal pan offset in screen pixels.
	pub x: f64,
	/// Vertical pan offset in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Whether a drag is in progress.
	pub active: bool,
	/// Node being dragged.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Pointer x at drag start, in screen pixels.
	pub start_x: f64,
	/// Pointer y at drag start, in screen pixels.
	pub start_y: f64,
	/// Node x at drag start, in graph coordinates.
	pub node_start_x: f32,
	/// Node y at drag start, in graph coordinates.
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether a pan is in progress.
	pub active: bool,
	/// Pointer x at pan start, in screen pixels.
	pub start_x: f64,
	/// Pointer y at pan start, in screen pixels.
	pub start_y: f64,
	/// Transform x offset at pan start.
	pub transform_start_x: f64,
	/// Transform y offset at pan start.
	pub transform_start_y: f64,
}

/// Manages smooth highlight transitions with per-node intensity tracking.
///
/// Each node has its own intensity value (0.0 to 1.0) that animates towards
/// its target with exponential smoothing, so hover emphasis eases in and out
/// instead of snapping. A minimum hold time prevents flashing when the mouse
/// briefly skirts the edge of a node's hover zone.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Currently hovered node (if any)
	pub hovered_node: Option<DefaultNodeIdx>,
	/// Set of nodes that should be highlighted (hovered + neighbors)
	target_set: HashSet<DefaultNodeIdx>,
	/// Per-node highlight intensity. Nodes not in this map have intensity 0.
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	/// Per-node hold timer - time remaining before fade-out can begin
	hold_timer: HashMap<DefaultNodeIdx, f64>,
	/// Cached max intensity (updated each tick)
	cached_max: f64,
}

/// Minimum time (seconds) a highlight must be held before it can fade out.
const MIN_HOLD_TIME: f64 = 0.12;

impl HighlightState {
	/// Update the hovered node and recompute the target highlight set.
	pub fn set_hover(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered_node == node {
			return;
		}

		self.hovered_node = node;
		self.target_set.clear();

		if let Some(idx) = node {
			self.target_set.insert(idx);
			for &(src, tgt) in edges {
				if src == idx {
					self.target_set.insert(tgt);
				} else if tgt == idx {
					self.target_set.insert(src);
				}
			}

			for &idx in &self.target_set {
				self.hold_timer.insert(idx, MIN_HOLD_TIME);
			}
		}
	}

	/// Animate all node intensities towards their targets.
	///
	/// Exponential smoothing: value += (target - value) * (1 - e^(-speed * dt)),
	/// which slows down as it approaches the target.
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0; // ~150ms to 95%
		const FADE_OUT_SPEED: f64 = 4.0; // ~250ms to 95%

		let fade_in_factor = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out_decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let intensity = self.node_intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in_factor;
		}

		// Count down hold timers for nodes that left the target set
		self.hold_timer.retain(|idx, timer| {
			if self.target_set.contains(idx) {
				true
			} else {
				*timer -= dt;
				*timer > 0.0
			}
		});

		let mut new_max: f64 = 0.0;
		self.node_intensity.retain(|idx, intensity| {
			if self.target_set.contains(idx) {
				new_max = new_max.max(*intensity);
				true
			} else {
				let hold_remaining = self.hold_timer.get(idx).copied().unwrap_or(0.0);
				if hold_remaining <= 0.0 {
					*intensity *= fade_out_decay;
				}
				new_max = new_max.max(*intensity);
				*intensity > 0.005 // Keep only if still visible
			}
		});

		self.cached_max = new_max;
	}

	/// Get the highlight intensity for a specific node (already smoothed).
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Get the highlight intensity for an edge.
	/// Uses geometric mean so edge transitions don't lag behind nodes.
	pub fn edge_intensity(&self, idx1: DefaultNodeIdx, idx2: DefaultNodeIdx) -> f64 {
		let i1 = self.node_intensity(idx1);
		let i2 = self.node_intensity(idx2);
		(i1 * i2).sqrt()
	}

	/// Get the maximum intensity of any node (used for dimming the rest).
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// Core graph state combining physics simulation with interaction and
/// highlight tracking.
///
/// Created when the component mounts (and rebuilt when the data signal
/// changes), then mutated each frame by the animation loop.
pub struct ForceGraphState {
	/// The physics simulation holding node positions and edges.
	pub graph: ForceGraph<NodeInfo, EdgeInfo>,
	/// Current pan/zoom view transform.
	pub transform: ViewTransform,
	/// In-progress node drag, if any.
	pub drag: DragState,
	/// In-progress canvas pan, if any.
	pub pan: PanState,
	/// Hover highlight intensities.
	pub highlight: HighlightState,
	/// Canvas width in CSS pixels.
	pub width: f64,
	/// Canvas height in CSS pixels.
	pub height: f64,
	/// Whether the animation loop should keep scheduling frames.
	pub animation_running: bool,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	/// Build the simulation from a dataset, seeding nodes on a circle around
	/// the origin so the layout unfolds from the center of the view.
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut name_to_idx = HashMap::new();
		let mut edges = Vec::new();

		// Ordinal industry -> color assignment, in first-appearance order
		let mut industry_colors: HashMap<String, Color> = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let industry = node.industry.clone().unwrap_or_default();
			let next = industry_colors.len();
			let color = *industry_colors
				.entry(industry)
				.or_insert_with(|| theme.palette.get(next));

			// Seed positions on a circle around the origin so the simulation
			// starts from a non-degenerate layout
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					name: node.name.clone(),
					industry: node.industry.clone(),
					founded_year: node.founded_year.clone(),
					color,
				},
			});
			name_to_idx.insert(node.name.clone(), idx);
		}

		let kind_colors = relationship_colors();
		let mut fallback_kinds: HashMap<String, Color> = HashMap::new();

		for link in &data.links {
			let (Some(&src), Some(&tgt)) =
				(name_to_idx.get(&link.source), name_to_idx.get(&link.target))
			else {
				warn!(
					"company-graph: link {} -> {} references an unknown company",
					link.source, link.target
				);
				continue;
			};

			let color = kind_colors.get(&link.kind).copied().unwrap_or_else(|| {
				let next = kind_colors.len() + fallback_kinds.len();
				*fallback_kinds
					.entry(link.kind.clone())
					.or_insert_with(|| theme.palette.get(next))
			});

			graph.add_edge(
				src,
				tgt,
				EdgeData {
					user_data: EdgeInfo {
						kind: link.kind.clone(),
						color,
					},
					..EdgeData::default()
				},
			);
			edges.push((src, tgt));
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	/// Convert screen pixels to graph coordinates through the view transform.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Hit-test the node under a screen position, if any.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Update the hover highlight for the given node.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	/// Start dragging the node under the pointer, or a pan if there is none.
	/// Returns true when a node drag began.
	pub fn start_interaction(&mut self, sx: f64, sy: f64, config: &ScaleConfig) -> bool {
		if let Some(idx) = self.node_at_position(sx, sy, config) {
			self.drag.active = true;
			self.drag.node_idx = Some(idx);
			self.drag.start_x = sx;
			self.drag.start_y = sy;
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					self.drag.node_start_x = node.x();
					self.drag.node_start_y = node.y();
				}
			});
			true
		} else {
			self.pan.active = true;
			self.pan.start_x = sx;
			self.pan.start_y = sy;
			self.pan.transform_start_x = self.transform.x;
			self.pan.transform_start_y = self.transform.y;
			false
		}
	}

	/// Advance an active drag or pan to the given pointer position.
	/// A dragged node is pinned (`is_anchor`) so the simulation does not
	/// fight the pointer.
	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let (dx, dy) = (
					(sx - self.drag.start_x) / self.transform.k,
					(sy - self.drag.start_y) / self.transform.k,
				);
				let (nx, ny) = (
					self.drag.node_start_x + dx as f32,
					self.drag.node_start_y + dy as f32,
				);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// End any active drag or pan. Releasing a dragged node clears its pin
	/// so the simulation is free to move it again.
	pub fn end_interaction(&mut self) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.is_anchor = false;
					}
				});
			}
		}
		self.drag.active = false;
		self.drag.node_idx = None;
		self.pan.active = false;
	}

	/// Zoom towards the pointer position. `zoom_in` maps wheel direction.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Advance the simulation and highlight animations by one frame.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.highlight.tick(dt as f64);
	}

	/// Record a new canvas size after a window resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(name: &str, industry: &str) -> GraphNode {
		GraphNode {
			name: name.to_string(),
			industry: Some(industry.to_string()),
			founded_year: Some("1990".to_string()),
		}
	}

	fn link(source: &str, target: &str, kind: &str) -> GraphLink {
		GraphLink {
			source: source.to_string(),
			target: target.to_string(),
			kind: kind.to_string(),
		}
	}

	fn sample_data() -> GraphData {
		GraphData {
			nodes: vec![
				node("Apple", "Technology"),
				node("Microsoft", "Technology"),
				node("Amazon", "E-commerce"),
			],
			links: vec![
				link("Apple", "Microsoft", "competitors"),
				link("Apple", "Amazon", "suppliers"),
			],
		}
	}

	fn state() -> ForceGraphState {
		ForceGraphState::new(&sample_data(), 800.0, 600.0, &Theme::default())
	}

	#[test]
	fn links_resolve_by_company_name() {
		let state = state();
		let mut nodes = 0;
		state.graph.visit_nodes(|_| nodes += 1);
		let mut edges = 0;
		state.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(nodes, 3);
		assert_eq!(edges, 2);
	}

	#[test]
	fn links_to_unknown_companies_are_skipped() {
		let mut data = sample_data();
		data.links.push(link("Apple", "Ghost Corp", "partners"));
		let state = ForceGraphState::new(&data, 800.0, 600.0, &Theme::default());
		let mut edges = 0;
		state.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(edges, 2);
	}

	#[test]
	fn same_industry_shares_a_fill_color() {
		let state = state();
		let mut colors = HashMap::new();
		state.graph.visit_nodes(|node| {
			colors.insert(
				node.data.user_data.name.clone(),
				node.data.user_data.color,
			);
		});
		assert_eq!(colors["Apple"], colors["Microsoft"]);
		assert_ne!(colors["Apple"], colors["Amazon"]);
	}

	#[test]
	fn known_relationship_kinds_have_fixed_edge_colors() {
		let state = state();
		let expected = relationship_colors();
		state.graph.visit_edges(|_, _, edge| {
			assert_eq!(edge.user_data.color, expected[&edge.user_data.kind]);
		});
	}

	#[test]
	fn empty_graph_builds_without_error() {
		let state = ForceGraphState::new(&GraphData::default(), 800.0, 600.0, &Theme::default());
		let mut nodes = 0;
		state.graph.visit_nodes(|_| nodes += 1);
		assert_eq!(nodes, 0);
	}

	#[test]
	fn releasing_a_drag_unpins_the_node() {
		let mut state = state();
		let config = ScaleConfig::default();

		// First node is seeded at world (100, 0); transform centers at (400, 300)
		assert!(state.start_interaction(500.0, 300.0, &config));
		state.pointer_moved(530.0, 320.0);

		let idx = state.drag.node_idx.unwrap();
		let mut pinned = false;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		assert!(pinned, "node should be pinned while dragged");

		state.end_interaction();
		let mut pinned = true;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		assert!(!pinned, "releasing the drag must clear the pin");
		assert!(!state.drag.active);
	}

	#[test]
	fn dragging_moves_the_node_in_graph_space() {
		let mut state = state();
		let config = ScaleConfig::default();
		assert!(state.start_interaction(500.0, 300.0, &config));
		state.pointer_moved(550.0, 300.0);

		let idx = state.drag.node_idx.unwrap();
		let mut x = 0.0f32;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				x = node.x();
			}
		});
		assert!((x - 150.0).abs() < 0.01);
	}

	#[test]
	fn background_press_starts_a_pan() {
		let mut state = state();
		let config = ScaleConfig::default();
		assert!(!state.start_interaction(10.0, 10.0, &config));
		state.pointer_moved(30.0, 25.0);
		assert_eq!(state.transform.x, 420.0);
		assert_eq!(state.transform.y, 315.0);
	}

	#[test]
	fn zoom_is_clamped_and_pointer_invariant() {
		let mut state = state();
		for _ in 0..100 {
			state.zoom_at(400.0, 300.0, true);
		}
		assert!(state.transform.k <= 10.0);

		// The graph point under the pointer stays put across a zoom step
		let before = state.screen_to_graph(400.0, 300.0);
		state.zoom_at(400.0, 300.0, false);
		let after = state.screen_to_graph(400.0, 300.0);
		assert!((before.0 - after.0).abs() < 1e-6);
		assert!((before.1 - after.1).abs() < 1e-6);
	}

	#[test]
	fn hover_highlights_node_and_neighbors() {
		let mut state = state();
		let config = ScaleConfig::default();
		let idx = state.node_at_position(500.0, 300.0, &config).unwrap();
		state.set_hover(Some(idx));
		state.highlight.tick(0.1);

		assert!(state.highlight.node_intensity(idx) > 0.0);
		assert!(state.highlight.max_intensity() > 0.0);

		// Neighbors of the hovered node are highlighted too
		let mut neighbor_lit = false;
		state.graph.visit_edges(|n1, n2, _| {
			if n1.index() == idx {
				neighbor_lit |= state.highlight.node_intensity(n2.index()) > 0.0;
			}
		});
		assert!(neighbor_lit);
	}

	#[test]
	fn highlight_fades_out_after_hold_time() {
		let mut state = state();
		let config = ScaleConfig::default();
		let idx = state.node_at_position(500.0, 300.0, &config).unwrap();
		state.set_hover(Some(idx));
		state.highlight.tick(0.1);
		let lit = state.highlight.node_intensity(idx);

		state.set_hover(None);
		// Within the hold window the intensity must not drop
		state.highlight.tick(0.05);
		assert!(state.highlight.node_intensity(idx) >= lit - 1e-9);

		// Well past the hold window it decays away
		for _ in 0..100 {
			state.highlight.tick(0.1);
		}
		assert_eq!(state.highlight.node_intensity(idx), 0.0);
	}
}
