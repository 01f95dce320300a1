//! Incremental force simulation over an indexed graph.
//!
//! A [`Simulation`] owns all mutable state for one layout run. It can be
//! driven one iteration at a time (the canvas view steps it once per animation
//! frame) or run to completion in one call.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use super::error::Result;
use super::forces::{self, Body};
use super::graph::{IndexedGraph, LayoutNode};
use super::params::{Canvas, LayoutParams};
use super::rng::SeededRng;
use super::vector::Vec2;

/// Force-directed layout in progress.
pub struct Simulation<K> {
	graph: IndexedGraph<K>,
	bodies: Vec<Body>,
	center: Vec2,
	params: LayoutParams,
	alpha: f64,
	iteration: usize,
	max_displacement: f64,
}

impl<K: Clone + Eq + Hash> Simulation<K> {
	/// Validates the inputs and scatters nodes randomly around the canvas center.
	pub fn new(
		nodes: &[LayoutNode<K>],
		canvas: Canvas,
		params: &LayoutParams,
		seed: u64,
	) -> Result<Self> {
		canvas.validate()?;
		params.validate()?;

		let graph = IndexedGraph::build(nodes);
		let center = canvas.center();
		let mut rng = SeededRng::new(seed);
		let bodies = graph
			.ids
			.iter()
			.map(|_| Body::at(rng.point_in_disk(center, params.initial_radius)))
			.collect();

		debug!(
			"layout: {} nodes, {} edges, {} iterations",
			graph.ids.len(),
			graph.edges.len(),
			params.iterations
		);

		Ok(Self {
			graph,
			bodies,
			center,
			params: params.clone(),
			alpha: 1.0,
			iteration: 0,
			max_displacement: 0.0,
		})
	}

	/// Advances one iteration. Returns `false` once the budget is spent.
	pub fn step(&mut self) -> bool {
		if self.is_finished() {
			return false;
		}
		self.iteration += 1;
		self.alpha *= self.params.cooling_factor;

		// A lone node has nothing to react to and keeps its initial position.
		if self.bodies.len() < 2 {
			self.max_displacement = 0.0;
			return true;
		}

		let p = &self.params;
		forces::apply_repulsion(&mut self.bodies, p.repulsion_strength, self.alpha);
		forces::apply_attraction(
			&mut self.bodies,
			&self.graph.edges,
			p.attraction_strength,
			self.alpha,
		);
		forces::apply_centering(&mut self.bodies, self.center, p.centering_strength, self.alpha);
		self.max_displacement = forces::integrate(&mut self.bodies, p.friction);

		trace!(
			"layout: iteration {} alpha {:.3e} max step {:.3e}",
			self.iteration, self.alpha, self.max_displacement
		);
		true
	}

	/// Runs the remaining iterations.
	pub fn run(&mut self) {
		while self.step() {}
		debug!(
			"layout: finished after {} iterations, last step {:.3e}",
			self.iteration, self.max_displacement
		);
	}

	pub fn is_finished(&self) -> bool {
		self.iteration >= self.params.iterations
	}

	/// Iterations completed so far.
	pub fn iteration(&self) -> usize {
		self.iteration
	}

	/// Current cooling factor applied to every force.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Largest distance any node moved during the last iteration.
	pub fn max_displacement(&self) -> f64 {
		self.max_displacement
	}

	/// Point the centering force pulls towards.
	pub fn center(&self) -> Vec2 {
		self.center
	}

	/// Moves the centering target, e.g. when the canvas is resized mid-run.
	pub fn set_center(&mut self, center: Vec2) {
		self.center = center;
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bodies.is_empty()
	}

	pub fn position(&self, id: &K) -> Option<Vec2> {
		self.graph.index.get(id).map(|&i| self.bodies[i].position)
	}

	/// Places a node and clears its velocity. Returns `false` for an unknown id.
	pub fn set_position(&mut self, id: &K, position: Vec2) -> bool {
		match self.graph.index.get(id) {
			Some(&i) => {
				self.bodies[i] = Body::at(position);
				true
			}
			None => false,
		}
	}

	/// Node ids with their current positions, in input order.
	pub fn iter(&self) -> impl Iterator<Item = (&K, Vec2)> + '_ {
		self.graph
			.ids
			.iter()
			.zip(&self.bodies)
			.map(|(id, body)| (id, body.position))
	}

	/// Current endpoints of every edge, in derivation order.
	pub fn edge_endpoints(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
		self.graph
			.edges
			.iter()
			.map(|&(s, t)| (self.bodies[s].position, self.bodies[t].position))
	}

	pub fn positions(&self) -> HashMap<K, Vec2> {
		self.iter().map(|(id, p)| (id.clone(), p)).collect()
	}

	pub fn into_positions(self) -> HashMap<K, Vec2> {
		self.graph
			.ids
			.into_iter()
			.zip(self.bodies)
			.map(|(id, body)| (id, body.position))
			.collect()
	}
}
