//! Canvas rendering for the force graph.
//!
//! Handles all drawing operations: background, edges, nodes, labels, and the
//! hover tooltip. Rendering uses multiple passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Edges, non-highlighted nodes, then highlighted nodes on top (world space)
//! 3. Vignette and tooltip (screen space)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::Theme;
use super::types::InteractionMode;

/// Smooths values that would otherwise cause abrupt visual changes.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Whether a highlighted edge is lit enough to carry its relationship-kind
/// label, given the zoom-dependent label visibility.
fn show_edge_kind(edge_t: f64, label_alpha: f64) -> bool {
	edge_t > 0.3 && label_alpha > 0.05
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	interaction: InteractionMode,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme, interaction);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}

	if interaction == InteractionMode::Tooltip {
		draw_tooltip(state, ctx, &scale, theme);
	}
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			state.width.min(state.height) * 0.3,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.7,
		)
		.unwrap();

	gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)").unwrap();
	gradient
		.add_color_stop(
			1.0,
			&format!("rgba(0, 0, 0, {})", theme.background.vignette),
		)
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));

		// Highlighted edges brighten and thicken; the rest dim while any
		// highlight is active
		let (alpha_mult, width) = if edge_t > 0.01 {
			(
				1.0 + 0.5 * edge_t,
				scale.edge_line_width * (1.0 + 0.4 * edge_t),
			)
		} else if max_t > 0.01 {
			(
				1.0 - 0.6 * max_t,
				scale.edge_line_width * (1.0 - 0.3 * max_t),
			)
		} else {
			(1.0, scale.edge_line_width)
		};

		let alpha = (theme.edge.opacity * alpha_mult).clamp(0.0, 1.0);
		ctx.set_stroke_style_str(&edge.user_data.color.with_alpha(alpha).to_css());
		ctx.set_line_width(width);

		// Trim the line at the node circles
		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
		ctx.line_to(x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
		ctx.stroke();

		// Highlighted edges name their relationship kind at the midpoint
		if show_edge_kind(edge_t, scale.label_alpha) {
			let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
			let label_alpha = edge_t * scale.label_alpha;
			ctx.set_fill_style_str(
				&edge
					.user_data
					.color
					.lighten(0.5)
					.with_alpha(label_alpha)
					.to_css(),
			);
			ctx.set_font(&scale.label_font);
			let _ = ctx.fill_text(&edge.user_data.kind, mx + 4.0, my - 4.0);
		}
	});
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	interaction: InteractionMode,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;
	let grow = interaction == InteractionMode::Grow;

	// Pass 1: non-highlighted nodes, dimmed while something is highlighted
	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		let alpha = if has_highlight { 1.0 - 0.7 * max_t } else { 1.0 };
		draw_node(ctx, node, scale, theme, alpha, 1.0);
	});

	// Pass 2: highlighted/transitioning nodes on top
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = state.highlight.node_intensity(idx);
		if node_t <= 0.001 {
			return;
		}

		let eased_t = smooth_step(node_t);
		let hovered = state.highlight.hovered_node == Some(idx);

		let radius_mult = if grow {
			// Hovered node grows to 1.5x, neighbors to 1.2x
			1.0 + (if hovered { 0.5 } else { 0.2 }) * eased_t
		} else {
			1.0
		};

		let dim_alpha = if has_highlight { 1.0 - 0.7 * max_t } else { 1.0 };
		let alpha = dim_alpha + (1.0 - dim_alpha) * eased_t;

		draw_node(ctx, node, scale, theme, alpha, radius_mult);

		if grow && hovered {
			let (x, y) = (node.x() as f64, node.y() as f64);
			let radius = scale.node_radius * radius_mult;
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.8 * eased_t));
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = scale.node_radius * radius_mult;
	let color = node.data.user_data.color;

	ctx.set_global_alpha(alpha);

	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.unwrap();

		let highlight = color.lighten(0.4);
		let shadow = color.darken(0.2);

		gradient.add_color_stop(0.0, &highlight.to_css()).unwrap();
		gradient.add_color_stop(0.7, &color.to_css()).unwrap();
		gradient.add_color_stop(1.0, &shadow.to_css()).unwrap();

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&color.to_css());
		ctx.fill();
	}

	if theme.node.border_width > 0.0 {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);

	// Every node carries its company name, fading out when zoomed far out
	let label_alpha = alpha * scale.label_alpha;
	if label_alpha > 0.05 {
		ctx.set_global_alpha(label_alpha);
		ctx.set_fill_style_str(&theme.node.label_color.to_css());
		ctx.set_font(&scale.label_font);
		let _ = ctx.fill_text(&node.data.user_data.name, x + radius + 4.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	}
}

/// Draws the hover tooltip (name, industry, founding year) in screen space
/// next to the hovered node.
fn draw_tooltip(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let Some(hovered) = state.highlight.hovered_node else {
		return;
	};

	let mut info: Option<(f64, f64, NodeInfo)> = None;
	state.graph.visit_nodes(|node| {
		if node.index() == hovered {
			info = Some((
				node.x() as f64,
				node.y() as f64,
				node.data.user_data.clone(),
			));
		}
	});
	let Some((gx, gy, node)) = info else {
		return;
	};

	// World to screen
	let sx = gx * state.transform.k + state.transform.x;
	let sy = gy * state.transform.k + state.transform.y;

	let mut lines = vec![node.name.clone()];
	if let Some(industry) = &node.industry {
		lines.push(format!("Industry: {}", industry));
	}
	if let Some(year) = &node.founded_year {
		lines.push(format!("Founded: {}", year));
	}

	const LINE_HEIGHT: f64 = 16.0;
	const PADDING: f64 = 8.0;

	ctx.set_font("12px sans-serif");
	let text_width = lines
		.iter()
		.filter_map(|line| ctx.measure_text(line).ok())
		.map(|m| m.width())
		.fold(0.0f64, f64::max);

	let box_w = text_width + PADDING * 2.0;
	let box_h = lines.len() as f64 * LINE_HEIGHT + PADDING * 2.0;
	let node_screen_r = scale.node_radius * state.transform.k;

	// Offset right of the node; flip left if it would leave the canvas
	let mut bx = sx + node_screen_r + 10.0;
	if bx + box_w > state.width {
		bx = sx - node_screen_r - 10.0 - box_w;
	}
	let by = (sy - box_h / 2.0).clamp(0.0, (state.height - box_h).max(0.0));

	ctx.set_fill_style_str("rgba(15, 18, 24, 0.92)");
	ctx.fill_rect(bx, by, box_w, box_h);
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.25)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(bx, by, box_w, box_h);

	ctx.set_fill_style_str(&theme.node.label_color.to_css());
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, bx + PADDING, by + PADDING + (i as f64 + 0.8) * LINE_HEIGHT);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn smooth_step_eases_between_endpoints() {
		assert_eq!(smooth_step(0.0), 0.0);
		assert_eq!(smooth_step(1.0), 1.0);
		assert!(smooth_step(0.25) < 0.25);
		assert!(smooth_step(0.75) > 0.75);
	}

	#[test]
	fn edge_kind_labels_need_highlight_and_visible_labels() {
		assert!(show_edge_kind(0.9, 1.0));
		assert!(!show_edge_kind(0.0, 1.0));
		assert!(!show_edge_kind(0.9, 0.0));
	}
}
