//! Seeded pseudo-random source for initial node placement.
//!
//! Layouts must be reproducible for a given seed, so the engine never reaches
//! for ambient randomness. Callers that want a different layout on every run
//! pass a fresh seed (the canvas view derives one from `Math.random`).

use std::f64::consts::TAU;

use super::vector::Vec2;

/// SplitMix64 generator. Every seed, including zero, yields a full-period stream.
#[derive(Clone, Debug)]
pub struct SeededRng {
	state: u64,
}

impl SeededRng {
	pub fn new(seed: u64) -> Self {
		Self { state: seed }
	}

	pub fn next_u64(&mut self) -> u64 {
		self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
		let mut z = self.state;
		z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
		z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
		z ^ (z >> 31)
	}

	/// Uniform float in `[0, 1)` built from the top 53 bits.
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Random point around `center`: uniform angle, uniform radius in `[0, max_radius)`.
	///
	/// The radius is sampled linearly rather than by area, so points cluster
	/// towards the center.
	pub fn point_in_disk(&mut self, center: Vec2, max_radius: f64) -> Vec2 {
		let angle = self.next_f64() * TAU;
		let radius = self.next_f64() * max_radius;
		center + Vec2::from_angle(angle) * radius
	}
}
