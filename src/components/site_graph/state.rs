//! View state for the site graph canvas.
//!
//! Wraps the layout [`Simulation`] with the crawled node metadata, the
//! pan/zoom transform and the current selection. The component mutates this
//! once per animation frame and on pointer events.

use std::collections::HashMap;

use crate::layout::{Canvas, LayoutParams, Result, Simulation, Vec2};
use crate::site::{PageKind, SiteData, SiteNode};

/// Zoom limits of the diagram.
pub const MIN_ZOOM: f64 = 0.3;
pub const MAX_ZOOM: f64 = 3.0;
/// Zoom factor of the zoom-in/zoom-out buttons.
pub const BUTTON_ZOOM_STEP: f64 = 1.2;
/// `MouseEvent.button` of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// On-screen radius of a node in graph units.
pub fn node_radius(node: &SiteNode) -> f64 {
	match node.kind {
		PageKind::Home => 40.0,
		PageKind::Category => 28.0,
		PageKind::Page => (node.page_rank as f64 / 5.0).max(15.0),
	}
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to MIN_ZOOM..=MAX_ZOOM).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	/// Set once the pointer moved far enough that the release is not a click.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Pointer travel (screen pixels) below which a press and release count as a click.
const CLICK_SLOP: f64 = 4.0;

/// Simulation plus everything needed to draw and interact with it.
pub struct SiteGraphState {
	pub simulation: Simulation<u32>,
	pub nodes: HashMap<u32, SiteNode>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub selected: Option<u32>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl SiteGraphState {
	/// Lays the graph out on a `width` x `height` canvas. Nodes are scattered
	/// from `seed` and settle over the following frames.
	pub fn new(
		data: &SiteData,
		width: f64,
		height: f64,
		params: &LayoutParams,
		seed: u64,
	) -> Result<Self> {
		let simulation =
			Simulation::new(&data.layout_nodes(), Canvas::new(width, height), params, seed)?;
		// First record wins for a repeated id, as in the layout graph.
		let mut nodes = HashMap::with_capacity(data.nodes.len());
		for node in &data.nodes {
			nodes.entry(node.id).or_insert_with(|| node.clone());
		}
		Ok(Self {
			simulation,
			nodes,
			transform: ViewTransform::default(),
			pan: PanState::default(),
			selected: None,
			width,
			height,
			animation_running: true,
		})
	}

	/// Advances the layout by one iteration; stops animating once it is spent.
	pub fn tick(&mut self) {
		if self.animation_running && !self.simulation.step() {
			self.animation_running = false;
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point. Later nodes are drawn on top.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<u32> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let point = Vec2::new(gx, gy);
		let mut found = None;
		for (id, position) in self.simulation.iter() {
			let Some(node) = self.nodes.get(id) else {
				continue;
			};
			if position.distance(point) <= node_radius(node) {
				found = Some(*id);
			}
		}
		found
	}

	/// Multiplies the zoom by `factor`, keeping the screen point `(x, y)` fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn zoom_in(&mut self) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, BUTTON_ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, 1.0 / BUTTON_ZOOM_STEP);
	}

	pub fn reset_view(&mut self) {
		self.transform = ViewTransform::default();
	}

	/// Starts a pan (and a potential click) for the primary button only.
	/// Returns whether a pan was started.
	pub fn begin_pan(&mut self, button: i16, x: f64, y: f64) -> bool {
		if button != PRIMARY_BUTTON {
			return false;
		}
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
		true
	}

	pub fn update_pan(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if dx.hypot(dy) > CLICK_SLOP {
			self.pan.moved = true;
		}
		self.transform.x = self.pan.transform_start_x + dx;
		self.transform.y = self.pan.transform_start_y + dy;
	}

	/// Ends a pan. A release without movement is a click: it selects the node
	/// under the pointer, or clears the selection, and returns `true`.
	pub fn end_pan(&mut self, x: f64, y: f64) -> bool {
		let was_click = self.pan.active && !self.pan.moved;
		self.pan = PanState::default();
		if was_click {
			self.selected = self.node_at_position(x, y);
		}
		was_click
	}

	pub fn cancel_pan(&mut self) {
		self.pan = PanState::default();
	}

	/// Adopts a new canvas size; the layout keeps settling around the new midpoint.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.simulation.set_center(Canvas::new(width, height).center());
	}
}
