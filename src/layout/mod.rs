//! Force-directed graph layout.
//!
//! Positions nodes of a small graph by simulating physical forces for a fixed
//! number of iterations:
//! - inverse-square repulsion between every pair of nodes
//! - linear spring attraction along edges
//! - a weak pull towards the canvas center
//! - friction that damps velocity after every step
//!
//! Forces are scaled by a cooling factor (alpha) that decays geometrically, so
//! the layout settles instead of oscillating. Initial placement is random but
//! driven by an explicit seed, which makes every run reproducible.
//!
//! # Example
//!
//! ```
//! use site_graph::layout::{Canvas, LayoutNode, LayoutParams, compute_layout};
//!
//! let nodes = vec![
//!     LayoutNode::new("home", ["docs", "blog"]),
//!     LayoutNode::leaf("docs"),
//!     LayoutNode::leaf("blog"),
//! ];
//! let positions =
//!     compute_layout(&nodes, Canvas::new(800.0, 600.0), &LayoutParams::default(), 42).unwrap();
//! assert_eq!(positions.len(), 3);
//! ```

mod error;
mod forces;
mod graph;
mod params;
mod rng;
mod simulation;
mod vector;

use std::collections::HashMap;
use std::hash::Hash;

pub use error::{LayoutError, Result};
pub use graph::LayoutNode;
pub use params::{Canvas, LayoutParams};
pub use rng::SeededRng;
pub use simulation::Simulation;
pub use vector::Vec2;

/// Runs a full simulation and returns the final position of every distinct node id.
pub fn compute_layout<K: Clone + Eq + Hash>(
	nodes: &[LayoutNode<K>],
	canvas: Canvas,
	params: &LayoutParams,
	seed: u64,
) -> Result<HashMap<K, Vec2>> {
	let mut simulation = Simulation::new(nodes, canvas, params, seed)?;
	simulation.run();
	Ok(simulation.into_positions())
}
