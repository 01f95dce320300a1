//! Canvas rendering for the site graph.
//!
//! Draws in two passes after the background: link lines first, then nodes on
//! top in input order (the same order hit testing uses).

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{SiteGraphState, node_radius};
use super::theme::Theme;
use crate::layout::Vec2;
use crate::site::{PageKind, SiteNode};

/// Radius of the status indicator dot in graph units.
const STATUS_DOT_RADIUS: f64 = 4.0;
/// Gap between a selected node and its ring.
const SELECTION_GAP: f64 = 6.0;

/// Renders the complete graph to the canvas.
pub fn render(state: &SiteGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, theme);
	for (id, position) in state.simulation.iter() {
		if let Some(node) = state.nodes.get(id) {
			draw_node(ctx, theme, node, position, state.selected == Some(*id));
		}
	}

	ctx.restore();
}

fn draw_background(state: &SiteGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx.create_linear_gradient(0.0, 0.0, state.width, state.height);
	let _ = gradient.add_color_stop(0.0, &theme.background_secondary.to_css());
	let _ = gradient.add_color_stop(1.0, &theme.background.to_css());
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(state: &SiteGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_stroke_style_str(&theme.edge.to_css());
	ctx.set_line_width(theme.edge_width / state.transform.k);
	ctx.begin_path();
	for (from, to) in state.simulation.edge_endpoints() {
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
	}
	ctx.stroke();
}

fn circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	node: &SiteNode,
	position: Vec2,
	selected: bool,
) {
	let (x, y) = (position.x, position.y);
	let radius = node_radius(node);
	let color = theme.depth_color(node.clicks_from_home);

	if selected {
		circle(ctx, x, y, radius + SELECTION_GAP);
		ctx.set_stroke_style_str(&theme.selection.to_css());
		ctx.set_line_width(3.0);
		ctx.stroke();
	}

	// Drop shadow offset down and right.
	circle(ctx, x + 2.0, y + 2.0, radius);
	ctx.set_fill_style_str(&theme.shadow.to_css());
	ctx.fill();

	match ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &color.lighten(0.25).to_css());
			let _ = gradient.add_color_stop(0.7, &color.to_css());
			let _ = gradient.add_color_stop(1.0, &color.darken(0.15).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&color.to_css()),
	}
	circle(ctx, x, y, radius);
	ctx.fill();

	circle(ctx, x, y, radius * 0.6);
	ctx.set_fill_style_str(&theme.label.with_alpha(0.2).to_css());
	ctx.fill();

	circle(ctx, x + radius * 0.6, y - radius * 0.6, STATUS_DOT_RADIUS);
	ctx.set_fill_style_str(&theme.status_color(node.status).to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&theme.label.to_css());
	ctx.set_line_width(1.5);
	ctx.stroke();

	if radius > 20.0 {
		let text = match node.kind {
			PageKind::Home => "\u{1F3E0}".to_string(),
			_ => node.page_rank.to_string(),
		};
		let font_size = if radius > 30.0 { 14 } else { 10 };
		ctx.set_font(&format!("600 {font_size}px sans-serif"));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(&theme.label.to_css());
		let _ = ctx.fill_text(&text, x, y);
	}
}
