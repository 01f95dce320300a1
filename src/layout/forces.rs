//! Force passes of one simulation step.
//!
//! Each pass only accumulates into velocities; positions move in
//! [`integrate`]. Passes read positions that are fixed for the whole step, so
//! their order does not change where forces point.

use super::vector::Vec2;

/// Simulation-private particle state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
	pub position: Vec2,
	pub velocity: Vec2,
}

impl Body {
	pub fn at(position: Vec2) -> Self {
		Self {
			position,
			velocity: Vec2::ZERO,
		}
	}
}

/// Vector from `from` to `to` and its length, with a zero length replaced by 1.
fn separation(from: Vec2, to: Vec2) -> (Vec2, f64) {
	let delta = to - from;
	let distance = delta.length();
	(delta, if distance == 0.0 { 1.0 } else { distance })
}

/// Inverse-square repulsion over every ordered pair of distinct bodies.
///
/// Each unordered pair is visited twice, once from each side, and each visit
/// pushes both bodies apart by the same amount.
pub fn apply_repulsion(bodies: &mut [Body], strength: f64, alpha: f64) {
	let n = bodies.len();
	for i in 0..n {
		for j in 0..n {
			if i == j {
				continue;
			}
			let (delta, distance) = separation(bodies[i].position, bodies[j].position);
			let magnitude = strength / (distance * distance);
			let force = delta / distance * (magnitude * alpha);
			bodies[i].velocity -= force;
			bodies[j].velocity += force;
		}
	}
}

/// Linear spring along each edge, pulling both endpoints together.
pub fn apply_attraction(bodies: &mut [Body], edges: &[(usize, usize)], strength: f64, alpha: f64) {
	for &(source, target) in edges {
		let (delta, distance) = separation(bodies[source].position, bodies[target].position);
		let magnitude = distance * strength;
		let force = delta / distance * (magnitude * alpha);
		bodies[source].velocity += force;
		bodies[target].velocity -= force;
	}
}

/// Pulls every body towards `center` in proportion to its offset.
pub fn apply_centering(bodies: &mut [Body], center: Vec2, strength: f64, alpha: f64) {
	for body in bodies {
		body.velocity += (center - body.position) * (strength * alpha);
	}
}

/// Moves bodies by their velocity, then damps it by `friction`.
///
/// Returns the largest distance any body moved.
pub fn integrate(bodies: &mut [Body], friction: f64) -> f64 {
	let mut max_step: f64 = 0.0;
	for body in bodies {
		body.position += body.velocity;
		max_step = max_step.max(body.velocity.length());
		body.velocity *= friction;
	}
	max_step
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pair(a: Vec2, b: Vec2) -> Vec<Body> {
		vec![Body::at(a), Body::at(b)]
	}

	#[test]
	fn repulsion_pushes_apart_with_equal_and_opposite_deltas() {
		let mut bodies = pair(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
		apply_repulsion(&mut bodies, 100.0, 1.0);

		// Two ordered visits of 100 / 10^2 each.
		assert_eq!(bodies[0].velocity, Vec2::new(-2.0, 0.0));
		assert_eq!(bodies[1].velocity, Vec2::new(2.0, 0.0));
	}

	#[test]
	fn repulsion_scales_with_alpha() {
		let mut full = pair(Vec2::new(0.0, 0.0), Vec2::new(0.0, 5.0));
		let mut cooled = full.clone();
		apply_repulsion(&mut full, 50.0, 1.0);
		apply_repulsion(&mut cooled, 50.0, 0.25);
		assert!((cooled[1].velocity.y - full[1].velocity.y * 0.25).abs() < 1e-12);
	}

	#[test]
	fn coincident_bodies_do_not_produce_nan() {
		let p = Vec2::new(3.0, 3.0);
		let mut bodies = pair(p, p);
		apply_repulsion(&mut bodies, 2000.0, 1.0);
		apply_attraction(&mut bodies, &[(0, 1)], 0.01, 1.0);
		for body in &bodies {
			assert!(body.velocity.is_finite());
		}
	}

	#[test]
	fn attraction_is_a_linear_spring() {
		let mut bodies = pair(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0));
		apply_attraction(&mut bodies, &[(0, 1)], 0.1, 1.0);
		assert_eq!(bodies[0].velocity, Vec2::new(2.0, 0.0));
		assert_eq!(bodies[1].velocity, Vec2::new(-2.0, 0.0));
	}

	#[test]
	fn centering_points_at_center() {
		let mut bodies = pair(Vec2::new(0.0, 0.0), Vec2::new(200.0, 100.0));
		apply_centering(&mut bodies, Vec2::new(100.0, 50.0), 0.01, 1.0);
		assert_eq!(bodies[0].velocity, Vec2::new(1.0, 0.5));
		assert_eq!(bodies[1].velocity, Vec2::new(-1.0, -0.5));
	}

	#[test]
	fn integrate_moves_then_damps() {
		let mut bodies = vec![Body {
			position: Vec2::new(1.0, 1.0),
			velocity: Vec2::new(3.0, 4.0),
		}];
		let moved = integrate(&mut bodies, 0.5);
		assert_eq!(moved, 5.0);
		assert_eq!(bodies[0].position, Vec2::new(4.0, 5.0));
		assert_eq!(bodies[0].velocity, Vec2::new(1.5, 2.0));
	}
}
