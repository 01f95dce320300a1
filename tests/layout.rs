// Integration tests only touch the layout API.
#![allow(unused_crate_dependencies)]

use std::collections::HashMap;

use site_graph::layout::{
	Canvas, LayoutError, LayoutNode, LayoutParams, Simulation, Vec2, compute_layout,
};
use site_graph::sample_site;

/// Root with two children and twelve grandchildren, 15 nodes in total.
fn fifteen_node_tree() -> Vec<LayoutNode<u32>> {
	let mut nodes = vec![LayoutNode::new(0, [1, 2])];
	nodes.push(LayoutNode::new(1, 3..9));
	nodes.push(LayoutNode::new(2, 9..15));
	nodes.extend((3..15).map(LayoutNode::leaf));
	nodes
}

fn example_graph() -> Vec<LayoutNode<&'static str>> {
	vec![
		LayoutNode::new("A", ["B", "C"]),
		LayoutNode::leaf("B"),
		LayoutNode::leaf("C"),
	]
}

// ==================================================================================
// Output shape
// ==================================================================================

#[test]
fn empty_graph_yields_empty_map() {
	let nodes: Vec<LayoutNode<u32>> = Vec::new();
	let positions =
		compute_layout(&nodes, Canvas::default(), &LayoutParams::default(), 1).unwrap();
	assert!(positions.is_empty());
}

#[test]
fn single_node_keeps_its_initial_position() {
	let nodes = vec![LayoutNode::leaf(7u32)];
	let canvas = Canvas::new(800.0, 600.0);
	let params = LayoutParams::default();

	let initial = Simulation::new(&nodes, canvas, &params, 99)
		.unwrap()
		.position(&7)
		.unwrap();
	let positions = compute_layout(&nodes, canvas, &params, 99).unwrap();

	assert_eq!(positions.len(), 1);
	assert_eq!(positions[&7], initial);
	assert!(initial.distance(canvas.center()) <= params.initial_radius);
}

#[test]
fn one_entry_per_distinct_id() {
	let mut nodes = fifteen_node_tree();
	nodes.push(LayoutNode::new(4, [0]));
	let positions =
		compute_layout(&nodes, Canvas::default(), &LayoutParams::default(), 5).unwrap();
	assert_eq!(positions.len(), 15);
	for id in 0..15 {
		assert!(positions[&id].is_finite(), "node {id} not finite");
	}
}

// ==================================================================================
// Reproducibility and tolerance
// ==================================================================================

#[test]
fn same_seed_same_layout() {
	let nodes = fifteen_node_tree();
	let params = LayoutParams::default();
	let a = compute_layout(&nodes, Canvas::default(), &params, 2024).unwrap();
	let b = compute_layout(&nodes, Canvas::default(), &params, 2024).unwrap();
	assert_eq!(a, b);

	let c = compute_layout(&nodes, Canvas::default(), &params, 2025).unwrap();
	assert_ne!(a, c);
}

#[test]
fn stepping_matches_compute_layout() {
	let nodes = fifteen_node_tree();
	let params = LayoutParams::default().with_iterations(40);
	let mut sim = Simulation::new(&nodes, Canvas::default(), &params, 8).unwrap();
	while sim.step() {}
	let stepped = sim.into_positions();
	let computed = compute_layout(&nodes, Canvas::default(), &params, 8).unwrap();
	assert_eq!(stepped, computed);
}

#[test]
fn dangling_children_are_ignored() {
	let clean = example_graph();
	let mut dangling = example_graph();
	dangling[0].children.push("missing");
	dangling[1].children.push("also-missing");

	let params = LayoutParams::default().with_iterations(50);
	let a = compute_layout(&clean, Canvas::default(), &params, 3).unwrap();
	let b = compute_layout(&dangling, Canvas::default(), &params, 3).unwrap();
	assert_eq!(a, b);
}

#[test]
fn without_attraction_edges_do_not_matter() {
	let linked = fifteen_node_tree();
	let unlinked: Vec<_> = linked.iter().map(|n| LayoutNode::leaf(n.id)).collect();
	let params = LayoutParams::gradual().with_attraction(0.0);

	let a = compute_layout(&linked, Canvas::default(), &params, 17).unwrap();
	let b = compute_layout(&unlinked, Canvas::default(), &params, 17).unwrap();
	assert_eq!(a, b);
}

// ==================================================================================
// Physics
// ==================================================================================

#[test]
fn two_nodes_stay_symmetric_about_center() {
	let nodes = vec![LayoutNode::leaf(1u32), LayoutNode::leaf(2u32)];
	let canvas = Canvas::new(800.0, 600.0);
	let center = canvas.center();
	let offset = Vec2::new(30.0, 20.0);

	let mut sim = Simulation::new(&nodes, canvas, &LayoutParams::gradual(), 0).unwrap();
	sim.set_position(&1, center + offset);
	sim.set_position(&2, center - offset);
	sim.run();

	let p1 = sim.position(&1).unwrap();
	let p2 = sim.position(&2).unwrap();
	let midpoint = (p1 + p2) / 2.0;
	assert!(midpoint.distance(center) < 1e-9, "midpoint drifted to {midpoint:?}");

	// Still on the line through the center along the initial offset, and pushed apart.
	let d = p1 - center;
	assert!((d.x * offset.y - d.y * offset.x).abs() < 1e-6);
	assert!(p1.distance(p2) > (offset * 2.0).length());
}

#[test]
fn default_schedule_comes_to_rest() {
	let nodes = fifteen_node_tree();
	let canvas = Canvas::new(800.0, 600.0);
	let mut sim = Simulation::new(&nodes, canvas, &LayoutParams::default(), 12).unwrap();
	sim.run();
	assert_eq!(sim.iteration(), 300);
	assert!(
		sim.max_displacement() < 1e-6 * canvas.width,
		"still moving by {}",
		sim.max_displacement()
	);
}

#[test]
fn children_settle_closer_to_parent_than_to_each_other() {
	let canvas = Canvas::new(800.0, 600.0);
	let params = LayoutParams::gradual().with_iterations(50);
	let positions: HashMap<_, _> = compute_layout(&example_graph(), canvas, &params, 42).unwrap();

	let mut keys: Vec<_> = positions.keys().copied().collect();
	keys.sort();
	assert_eq!(keys, vec!["A", "B", "C"]);

	let (a, b, c) = (positions["A"], positions["B"], positions["C"]);
	assert!(a.distance(b) < b.distance(c), "A-B {} B-C {}", a.distance(b), b.distance(c));
	assert!(a.distance(c) < b.distance(c), "A-C {} B-C {}", a.distance(c), b.distance(c));

	let margin = 75.0;
	for (id, p) in &positions {
		assert!(
			p.x > -margin && p.x < canvas.width + margin,
			"{id} x out of bounds: {}",
			p.x
		);
		assert!(
			p.y > -margin && p.y < canvas.height + margin,
			"{id} y out of bounds: {}",
			p.y
		);
	}
}

#[test]
fn default_schedule_fades_forces_within_fifty_steps() {
	let canvas = Canvas::new(800.0, 600.0);
	let params = LayoutParams::default().with_iterations(50);
	let mut sim = Simulation::new(&example_graph(), canvas, &params, 42).unwrap();

	for _ in 0..49 {
		sim.step();
	}
	let coasting = sim.max_displacement();
	assert!(sim.step());
	assert!(sim.is_finished());

	// 0.3^50: forces no longer matter, nodes only coast on damped velocity.
	assert!(sim.alpha() < 1e-20, "alpha still {}", sim.alpha());
	let expected = params.friction * coasting;
	assert!(
		(sim.max_displacement() - expected).abs() < 1e-12 * (1.0 + coasting),
		"last step {} expected {}",
		sim.max_displacement(),
		expected
	);

	let positions = sim.into_positions();
	assert_eq!(positions.len(), 3);
	assert!(positions.values().all(|p| p.is_finite()));
	assert_eq!(positions, compute_layout(&example_graph(), canvas, &params, 42).unwrap());
}

#[test]
fn sample_site_lays_out_under_both_schedules() {
	let nodes = sample_site().layout_nodes();
	for params in [LayoutParams::default(), LayoutParams::gradual()] {
		let positions = compute_layout(&nodes, Canvas::default(), &params, 77).unwrap();
		assert_eq!(positions.len(), 16);
		assert!(positions.values().all(|p| p.is_finite()));
	}
}

// ==================================================================================
// Validation
// ==================================================================================

#[test]
fn out_of_domain_parameters_are_rejected() {
	let params = LayoutParams {
		cooling_factor: 1.5,
		..LayoutParams::default()
	};
	let err = compute_layout(&example_graph(), Canvas::default(), &params, 0).unwrap_err();
	assert!(matches!(
		err,
		LayoutError::InvalidParameter {
			name: "cooling_factor",
			..
		}
	));
	assert!(err.to_string().contains("cooling_factor"));

	let err = compute_layout(
		&example_graph(),
		Canvas::new(-5.0, 600.0),
		&LayoutParams::default(),
		0,
	)
	.unwrap_err();
	assert_eq!(
		err,
		LayoutError::InvalidCanvas {
			width: -5.0,
			height: 600.0
		}
	);
}
