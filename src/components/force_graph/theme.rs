//! Visual theming for the force graph.
//!
//! Provides color palettes and visual style configuration. Relationship-kind
//! edge colors live in [`super::state`] next to the graph construction; the
//! theme covers everything else.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Fully opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels and an alpha in 0.0 to 1.0.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS color string: hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A curated color palette, used for industry-keyed node fills.
#[derive(Clone, Debug)]
pub struct NodePalette {
	/// Palette entries, cycled through by index.
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted, harmonious palette - slate blues and teals (default)
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(160, 125, 100), // Taupe
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(180, 136, 100), // Tan
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(170, 145, 115), // Khaki
			],
		}
	}

	/// Ocean depths palette - blues and teals
	pub fn ocean() -> Self {
		Self {
			colors: vec![
				Color::rgb(70, 110, 140),  // Deep blue
				Color::rgb(80, 130, 150),  // Cerulean
				Color::rgb(100, 145, 160), // Steel teal
				Color::rgb(90, 125, 145),  // Slate blue
				Color::rgb(85, 135, 155),  // Ocean
				Color::rgb(95, 120, 140),  // Denim
				Color::rgb(75, 115, 135),  // Navy gray
				Color::rgb(88, 128, 148),  // Cadet
			],
		}
	}

	/// Soft pastel palette - gentle, pleasing colors
	pub fn pastel() -> Self {
		Self {
			colors: vec![
				Color::rgb(200, 180, 190), // Dusty rose
				Color::rgb(180, 195, 205), // Powder blue
				Color::rgb(190, 200, 180), // Sage
				Color::rgb(205, 195, 180), // Cream
				Color::rgb(185, 190, 200), // Lavender gray
				Color::rgb(195, 185, 175), // Mushroom
				Color::rgb(180, 200, 195), // Seafoam
				Color::rgb(200, 190, 185), // Blush
			],
		}
	}

	/// Palette color for an index, wrapping around at the end.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Base edge opacity; kind colors are drawn at this alpha.
	pub opacity: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border color
	pub border_color: Color,
	/// Label text color
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme identifier.
	pub name: &'static str,
	/// Canvas background style.
	pub background: BackgroundStyle,
	/// Edge stroke style.
	pub edge: EdgeStyle,
	/// Node fill, border, and label style.
	pub node: NodeStyle,
	/// Industry-keyed node fill palette.
	pub palette: NodePalette,
}

impl Theme {
	/// Clean modern theme with subtle effects (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			edge: EdgeStyle { opacity: 0.6 },
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(255, 255, 255, 0.85),
			},
			palette: NodePalette::slate(),
		}
	}

	/// Elegant dark theme
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
				vignette: 0.2,
			},
			edge: EdgeStyle { opacity: 0.5 },
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(230, 235, 245, 0.85),
			},
			palette: NodePalette::ocean(),
		}
	}

	/// Minimal, ultra-clean theme
	pub fn minimal() -> Self {
		Self {
			name: "minimal",
			background: BackgroundStyle {
				color: Color::rgb(25, 28, 35),
				color_secondary: Color::rgb(25, 28, 35),
				use_gradient: false,
				vignette: 0.0,
			},
			edge: EdgeStyle { opacity: 0.5 },
			node: NodeStyle {
				use_gradient: false,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(255, 255, 255, 0.8),
			},
			palette: NodePalette::pastel(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(94, 129, 172).to_css(), "#5e81ac");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgba(140, 160, 180, 0.5).to_css(),
			"rgba(140, 160, 180, 0.5)"
		);
	}

	#[test]
	fn lighten_moves_towards_white() {
		let c = Color::rgb(100, 100, 100).lighten(1.0);
		assert_eq!((c.r, c.g, c.b), (255, 255, 255));
	}

	#[test]
	fn palette_lookup_wraps_around() {
		let palette = NodePalette::slate();
		assert_eq!(palette.get(0), palette.get(palette.colors.len()));
	}
}
