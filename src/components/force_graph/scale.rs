//! Zoom-dependent scaling configuration for graph visuals.
//!
//! Centralizes how visual parameters behave at different zoom levels.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: The coordinate system of the graph. Values in world-space
//!   scale proportionally with zoom (appear larger when zoomed in).
//! - **Screen-space**: Pixel coordinates on the canvas. Values in screen-space
//!   remain constant regardless of zoom level.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
#[allow(
	dead_code,
	reason = "World/Screen variants complete the API for users customizing ScaleConfig"
)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	/// Use `f64::NEG_INFINITY` or `f64::INFINITY` for unbounded.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// Compute the world-space value for a given base value and zoom level.
	///
	/// The returned value should be used directly in world-space drawing
	/// commands (after the canvas transform has been applied).
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => {
				// screen_size = world_size * k, so world bounds are screen / k
				let min_world = min_screen / k;
				let max_world = max_screen / k;
				base.clamp(min_world, max_world)
			}
		}
	}
}

/// Defines how alpha/opacity scales with zoom level.
#[derive(Clone, Debug)]
#[allow(dead_code, reason = "Constant variant available for custom alpha behaviors")]
pub enum AlphaBehavior {
	/// Constant alpha regardless of zoom.
	Constant,
	/// Alpha fades based on zoom thresholds.
	/// Fully visible at `full_alpha_k`, fades to zero at `zero_alpha_k`.
	Fade {
		zero_alpha_k: f64,
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	/// Compute alpha multiplier for a given zoom level.
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				let t = (k - zero_alpha_k) / (full_alpha_k - zero_alpha_k);
				t.clamp(0.0, 1.0)
			}
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	/// How the node radius scales with zoom.
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	/// How hit radius scales with zoom.
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Minimum zoom level for label font scaling.
	pub label_min_k: f64,
	/// How label opacity behaves as the view zooms out.
	pub label_alpha_behavior: AlphaBehavior,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in screen pixels.
	pub line_width: f64,
}

/// Configuration for the hover ring.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width in screen pixels.
	pub width: f64,
	/// Offset from node edge in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius, hit area, and label scaling.
	pub node: NodeScaleConfig,
	/// Edge stroke scaling.
	pub edge: EdgeScaleConfig,
	/// Hover ring scaling.
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 10.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 5.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 14.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 12.0,
				label_min_k: 0.5,
				label_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.25,
					full_alpha_k: 0.6,
				},
			},
			edge: EdgeScaleConfig { line_width: 2.0 },
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// All sizes are in world-space (ready to use after canvas transform).
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom level.
	pub k: f64,
	/// Node radius in world-space.
	pub node_radius: f64,
	/// Hit detection radius in world-space.
	pub hit_radius: f64,
	/// Label font string (e.g., "12px sans-serif").
	pub label_font: String,
	/// Label opacity multiplier [0, 1].
	pub label_alpha: f64,
	/// Edge line width in world-space.
	pub edge_line_width: f64,
	/// Hover ring width in world-space.
	pub ring_width: f64,
	/// Hover ring offset in world-space.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and current zoom level.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node_radius = config.node.radius_behavior.apply(config.node.radius, k);
		let hit_radius = config.node.hit_behavior.apply(config.node.hit_radius, k);
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			node_radius,
			hit_radius,
			label_font: format!("{}px sans-serif", label_font_size),
			label_alpha: config.node.label_alpha_behavior.apply(k),
			edge_line_width: config.edge.line_width / k,
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_behavior_counteracts_zoom() {
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 2.0), 5.0);
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 0.5), 20.0);
	}

	#[test]
	fn clamped_behavior_enforces_minimum_screen_size() {
		let behavior = ScaleBehavior::Clamped {
			min_screen: 5.0,
			max_screen: f64::INFINITY,
		};
		// At k = 0.25, 10 world units would be 2.5 screen px; clamp to 5 px.
		assert_eq!(behavior.apply(10.0, 0.25), 20.0);
		// At k = 1.0, 10 world units are already >= 5 px.
		assert_eq!(behavior.apply(10.0, 1.0), 10.0);
	}

	#[test]
	fn label_alpha_fades_out_when_zoomed_out() {
		let fade = AlphaBehavior::Fade {
			zero_alpha_k: 0.25,
			full_alpha_k: 0.6,
		};
		assert_eq!(fade.apply(0.1), 0.0);
		assert_eq!(fade.apply(1.0), 1.0);
		let mid = fade.apply(0.425);
		assert!(mid > 0.49 && mid < 0.51);
	}

	#[test]
	fn scaled_values_keep_edge_width_constant_on_screen() {
		let config = ScaleConfig::default();
		let zoomed = ScaledValues::new(&config, 4.0);
		assert_eq!(zoomed.edge_line_width * 4.0, config.edge.line_width);
	}
}
