//! Colors for the site graph: depth palette, status indicators and chrome.

use crate::site::PageStatus;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

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

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Visual theme of the architecture diagram.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub background_secondary: Color,
	pub edge: Color,
	pub edge_width: f64,
	/// Node fill by click depth: home, level 1, level 2, deeper.
	pub depth: [Color; 4],
	pub active: Color,
	pub error: Color,
	pub redirect: Color,
	pub warning: Color,
	pub selection: Color,
	pub shadow: Color,
	pub label: Color,
}

impl Theme {
	pub fn depth_color(&self, clicks_from_home: u32) -> Color {
		self.depth[(clicks_from_home as usize).min(self.depth.len() - 1)]
	}

	pub fn status_color(&self, status: PageStatus) -> Color {
		match status {
			PageStatus::Active => self.active,
			PageStatus::Error => self.error,
			PageStatus::Redirect => self.redirect,
			PageStatus::Warning => self.warning,
		}
	}

	/// Swatches explaining node fill (click depth) and the status dot.
	pub fn legend(&self) -> Vec<LegendItem> {
		let last = self.depth.len() - 1;
		let depths = self.depth.iter().enumerate().map(|(level, &color)| {
			let label = match level {
				0 => "Depth 0 (home)".to_string(),
				l if l == last => format!("Depth {l}+"),
				l => format!("Depth {l}"),
			};
			LegendItem {
				label,
				color,
				kind: LegendKind::Depth,
			}
		});
		let statuses = [
			PageStatus::Active,
			PageStatus::Warning,
			PageStatus::Redirect,
			PageStatus::Error,
		]
		.into_iter()
		.map(|status| LegendItem {
			label: status.label().to_string(),
			color: self.status_color(status),
			kind: LegendKind::Status,
		});
		depths.chain(statuses).collect()
	}
}

/// What a legend swatch stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendKind {
	Depth,
	Status,
}

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
	pub label: String,
	pub color: Color,
	pub kind: LegendKind,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(243, 244, 246),
			background_secondary: Color::rgb(249, 250, 251),
			edge: Color::rgba(203, 213, 225, 0.4),
			edge_width: 1.5,
			depth: [
				Color::rgb(16, 185, 129), // Emerald
				Color::rgb(59, 130, 246), // Blue
				Color::rgb(139, 92, 246), // Violet
				Color::rgb(99, 102, 241), // Indigo
			],
			active: Color::rgb(16, 185, 129),
			error: Color::rgb(239, 68, 68),
			redirect: Color::rgb(245, 158, 11),
			warning: Color::rgb(234, 179, 8),
			selection: Color::rgb(245, 158, 11),
			shadow: Color::rgba(0, 0, 0, 0.1),
			label: Color::rgb(255, 255, 255),
		}
	}
}
