//! Leptos component wrapping the site graph canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for panning, zooming and selecting nodes. An animation loop runs
//! via `requestAnimationFrame`, advancing the layout one iteration per frame
//! and redrawing until the simulation has spent its budget.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::SiteGraphState;
use super::theme::{LegendKind, Theme};
use crate::layout::LayoutParams;
use crate::site::SiteData;

/// Wheel zoom per notch.
const WHEEL_ZOOM_IN: f64 = 1.1;
const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Fresh layout seed per mount, so every crawl gets its own arrangement.
fn random_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Pointer position relative to the canvas.
fn canvas_point(canvas: &NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders the site architecture as an animated force-directed graph.
///
/// Pass crawl data via the reactive `data` signal; a new value restarts the
/// layout. The canvas sizes itself to its parent container unless `width` /
/// `height` are given, or to the viewport with `fullscreen = true`.
/// `on_select` receives the clicked node id, or `None` when the background
/// is clicked.
#[component]
pub fn SiteGraphCanvas(
	#[prop(into)] data: Signal<SiteData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = LayoutParams::default())] params: LayoutParams,
	#[prop(optional)] on_select: Option<Callback<Option<u32>>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SiteGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let site = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = match (fullscreen, window_size(&window)) {
			(true, Some(size)) => size,
			_ => (
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			),
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		match SiteGraphState::new(&site, w, h, &params, random_seed()) {
			Ok(s) => {
				info!("site-graph: laying out {} urls", site.len());
				*state_init.borrow_mut() = Some(s);
			}
			Err(e) => {
				warn!("site-graph: cannot lay out site: {}", e);
				*state_init.borrow_mut() = None;
				return;
			}
		}

		// The loop and listeners survive data changes; only the state is replaced.
		if animate_init.borrow().is_some() {
			return;
		}

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("site-graph: 2d canvas context unavailable");
				return;
			}
		};

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let theme = Theme::default();
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx, &theme);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(&canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_pan(ev.button(), x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(&canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.update_pan(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(&canvas_ref, &ev) else {
			return;
		};
		let mut clicked = None;
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.end_pan(x, y) {
				clicked = Some(s.selected);
			}
		}
		// State borrow is released before handing control to the caller.
		if let (Some(selected), Some(cb)) = (clicked, on_select) {
			cb.run(selected);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_pan();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(&canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 {
				WHEEL_ZOOM_OUT
			} else {
				WHEEL_ZOOM_IN
			};
			s.zoom_at(x, y, factor);
		}
	};

	let legend = Theme::default()
		.legend()
		.into_iter()
		.map(|item| {
			let class = match item.kind {
				LegendKind::Depth => "legend-swatch legend-depth",
				LegendKind::Status => "legend-swatch legend-status",
			};
			view! {
				<li>
					<span class=class style=format!("background: {};", item.color.to_css())></span>
					{item.label}
				</li>
			}
		})
		.collect_view();

	let (state_zi, state_zo, state_rv) = (state.clone(), state.clone(), state.clone());
	let on_zoom_in = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_zi.borrow_mut() {
			s.zoom_in();
		}
	};
	let on_zoom_out = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_zo.borrow_mut() {
			s.zoom_out();
		}
	};
	let on_reset = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_rv.borrow_mut() {
			s.reset_view();
		}
	};

	view! {
		<div class="site-graph">
			<div class="site-graph-controls">
				<button title="Zoom in" on:click=on_zoom_in>"+"</button>
				<button title="Zoom out" on:click=on_zoom_out>"\u{2212}"</button>
				<button title="Reset view" on:click=on_reset>"\u{2922}"</button>
			</div>
			<canvas
				node_ref=canvas_ref
				class="site-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: move;"
			/>
			<ul class="site-graph-legend">{legend}</ul>
		</div>
	}
}
