//! Layout parameters and canvas dimensions.
//!
//! All force constants are in layout units per iteration. The defaults
//! reproduce the site architecture view: a fast cooling schedule where forces
//! fade out within about ten iterations and friction settles the rest.

use serde::{Deserialize, Serialize};

use super::error::{LayoutError, Result};
use super::vector::Vec2;

/// Size of the drawing area. The layout is centered on its midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
	pub width: f64,
	pub height: f64,
}

impl Canvas {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> Vec2 {
		Vec2::new(self.width / 2.0, self.height / 2.0)
	}

	pub fn validate(&self) -> Result<()> {
		let ok = |v: f64| v.is_finite() && v > 0.0;
		if ok(self.width) && ok(self.height) {
			Ok(())
		} else {
			Err(LayoutError::InvalidCanvas {
				width: self.width,
				height: self.height,
			})
		}
	}
}

impl Default for Canvas {
	fn default() -> Self {
		Self::new(800.0, 600.0)
	}
}

/// Tunable constants of the force simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutParams {
	/// Fixed number of integration steps. There is no convergence detection.
	pub iterations: usize,
	/// Multiplier applied to alpha at the start of every iteration (alpha starts at 1.0).
	pub cooling_factor: f64,
	/// Inverse-square repulsion constant between every ordered pair of nodes.
	pub repulsion_strength: f64,
	/// Linear spring constant along edges.
	pub attraction_strength: f64,
	/// Pull towards the canvas center, proportional to the offset.
	pub centering_strength: f64,
	/// Velocity retained after each step, in `[0, 1]`.
	pub friction: f64,
	/// Nodes start within this distance of the canvas center.
	pub initial_radius: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			iterations: 300,
			cooling_factor: 0.3,
			repulsion_strength: 2000.0,
			attraction_strength: 0.01,
			centering_strength: 0.001,
			friction: 0.9,
			initial_radius: 200.0,
		}
	}
}

impl LayoutParams {
	/// Slow anneal: alpha decays by 1% per iteration, so forces keep shaping
	/// the layout for most of the budget instead of the first few steps.
	pub fn gradual() -> Self {
		Self {
			cooling_factor: 0.99,
			..Self::default()
		}
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_attraction(mut self, strength: f64) -> Self {
		self.attraction_strength = strength;
		self
	}

	/// Rejects values that would make the simulation diverge or produce NaN.
	pub fn validate(&self) -> Result<()> {
		unit_interval("cooling_factor", self.cooling_factor)?;
		unit_interval("friction", self.friction)?;
		non_negative("repulsion_strength", self.repulsion_strength)?;
		non_negative("attraction_strength", self.attraction_strength)?;
		non_negative("centering_strength", self.centering_strength)?;
		non_negative("initial_radius", self.initial_radius)?;
		Ok(())
	}
}

fn unit_interval(name: &'static str, value: f64) -> Result<()> {
	if (0.0..=1.0).contains(&value) {
		Ok(())
	} else {
		Err(LayoutError::InvalidParameter {
			name,
			value,
			reason: "must be within [0, 1]",
		})
	}
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
	if value.is_finite() && value >= 0.0 {
		Ok(())
	} else {
		Err(LayoutError::InvalidParameter {
			name,
			value,
			reason: "must be finite and non-negative",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(LayoutParams::default().validate().is_ok());
		assert!(LayoutParams::gradual().validate().is_ok());
		assert!(Canvas::default().validate().is_ok());
	}

	#[test]
	fn rejects_out_of_range_cooling() {
		let params = LayoutParams {
			cooling_factor: 1.5,
			..LayoutParams::default()
		};
		assert_eq!(
			params.validate(),
			Err(LayoutError::InvalidParameter {
				name: "cooling_factor",
				value: 1.5,
				reason: "must be within [0, 1]",
			})
		);
	}

	#[test]
	fn rejects_nan_friction_and_negative_strengths() {
		let nan_friction = LayoutParams {
			friction: f64::NAN,
			..LayoutParams::default()
		};
		assert!(matches!(
			nan_friction.validate(),
			Err(LayoutError::InvalidParameter { name: "friction", .. })
		));

		let negative = LayoutParams::default().with_attraction(-0.1);
		assert!(matches!(
			negative.validate(),
			Err(LayoutError::InvalidParameter {
				name: "attraction_strength",
				..
			})
		));

		let infinite = LayoutParams {
			repulsion_strength: f64::INFINITY,
			..LayoutParams::default()
		};
		assert!(infinite.validate().is_err());
	}

	#[test]
	fn rejects_degenerate_canvas() {
		assert!(Canvas::new(0.0, 600.0).validate().is_err());
		assert!(Canvas::new(800.0, -1.0).validate().is_err());
		assert!(Canvas::new(f64::NAN, 600.0).validate().is_err());
	}

	#[test]
	fn partial_json_falls_back_to_defaults() {
		let params: LayoutParams =
			serde_json::from_str(r#"{ "iterations": 50, "coolingFactor": 0.99 }"#).unwrap();
		assert_eq!(params.iterations, 50);
		assert_eq!(params.cooling_factor, 0.99);
		assert_eq!(params.friction, 0.9);
		assert_eq!(params.repulsion_strength, 2000.0);
	}
}
