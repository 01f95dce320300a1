//! site-graph: force-directed site architecture visualization.
//!
//! This crate lays out the internal-link graph of a crawled website with a
//! force simulation ([`layout`]) and provides a WASM canvas component that
//! animates the layout with pan/zoom and click-to-select, next to a sortable
//! URL table with summary metrics ([`site`]).

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod layout;
pub mod site;

pub use components::site_graph::{SiteGraphCanvas, SiteGraphState, Theme};
pub use layout::{Canvas, LayoutError, LayoutNode, LayoutParams, Simulation, Vec2, compute_layout};
pub use site::{
	PageKind, PageStatus, SiteData, SiteMetrics, SiteNode, SortDirection, SortField, UrlTable,
	sample_site,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("site-graph: logging initialized");
}

/// Load crawl data from a script element with id="site-data".
/// Expected format: JSON with { nodes: [...] }
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteData>(&json_text) {
		Ok(mut data) => {
			data.assign_page_rank_shares();
			info!("site-graph: loaded {} urls", data.len());
			Some(data)
		}
		Err(e) => {
			warn!("site-graph: failed to parse site data: {}", e);
			None
		}
	}
}

fn sort_indicator(table: &UrlTable, field: SortField) -> &'static str {
	match (table.sort == field, table.direction) {
		(false, _) => "",
		(true, SortDirection::Asc) => " \u{25B2}",
		(true, SortDirection::Desc) => " \u{25BC}",
	}
}

/// Current crawl: host-provided data when present, otherwise the sample.
fn scan_site() -> SiteData {
	load_site_data().unwrap_or_else(|| {
		info!("site-graph: no host data, showing sample crawl");
		sample_site()
	})
}

fn diagram_toggle_label(shown: bool) -> &'static str {
	if shown { "Hide diagram" } else { "Show diagram" }
}

/// Main application component.
/// Shows crawl metrics, the architecture diagram and the URL table.
/// Re-scanning reloads the crawl and lays the diagram out again from a new seed.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = RwSignal::new(scan_site());
	let metrics = Memo::new(move |_| site.with(|data| SiteMetrics::from_nodes(&data.nodes)));

	let table = RwSignal::new(UrlTable::default());
	let (selected, set_selected) = signal(None::<u32>);
	let show_diagram = RwSignal::new(true);
	let on_select = Callback::new(move |id: Option<u32>| set_selected.set(id));

	let rescan = move |_| {
		set_selected.set(None);
		site.set(scan_site());
		info!("site-graph: re-scan requested");
	};

	let headers = SortField::ALL
		.into_iter()
		.map(|field| {
			view! {
				<th on:click=move |_| table.update(|t| t.toggle_sort(field))>
					{field.label()}
					{move || table.with(|t| sort_indicator(t, field))}
				</th>
			}
		})
		.collect_view();

	let rows = move || {
		site.with(|data| table.with(|t| t.rows(&data.nodes).into_iter().cloned().collect::<Vec<_>>()))
			.into_iter()
			.map(|node| {
				let id = node.id;
				view! {
					<tr
						class:selected=move || selected.get() == Some(id)
						on:click=move |_| set_selected.set(Some(id))
					>
						<td>{node.url}</td>
						<td>{node.page_rank}</td>
						<td>{format!("{:.2}%", node.page_rank_percent)}</td>
						<td>{node.clicks_from_home}</td>
						<td class=format!("status-{}", node.status.as_str())>{node.status.label()}</td>
					</tr>
				}
			})
			.collect_view()
	};

	let details = move || {
		let id = selected.get()?;
		let node = site.with(|data| data.node(id).cloned())?;
		Some(view! {
			<aside class="url-details">
				<h2>{node.url}</h2>
				<p>"PageRank: " {node.page_rank} {format!(" ({:.2}%)", node.page_rank_percent)}</p>
				<p>"Clicks from home: " {node.clicks_from_home}</p>
				<p>"Internal links: " {node.internal_links}</p>
				<p>"Status: " {node.status.label()}</p>
				<button on:click=move |_| set_selected.set(None)>"Close"</button>
			</aside>
		})
	};

	let max_depth = move || {
		let depth = metrics.with(|m| m.max_depth);
		format!("{} {}", depth, if depth == 1 { "click" } else { "clicks" })
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Site Architecture" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="site-architecture">
			<header>
				<h1>"Site Architecture"</h1>
				<p class="subtitle">"Internal linking structure and authority flow."</p>
				<button class="rescan" on:click=rescan>"Re-scan"</button>
			</header>

			<section class="metrics">
				<div><span>"Total URLs"</span><strong>{move || metrics.with(|m| m.total_urls)}</strong></div>
				<div><span>"Max depth"</span><strong>{max_depth}</strong></div>
				<div><span>"Internal links"</span><strong>{move || metrics.with(|m| m.total_internal_links)}</strong></div>
				<div><span>"Errors"</span><strong>{move || metrics.with(|m| m.errors)}</strong></div>
				<div><span>"Warnings"</span><strong>{move || metrics.with(|m| m.warnings)}</strong></div>
			</section>

			<section class="diagram">
				<button
					class="diagram-toggle"
					on:click=move |_| show_diagram.update(|shown| *shown = !*shown)
				>
					{move || diagram_toggle_label(show_diagram.get())}
				</button>
				// Stays mounted while hidden; the animation loop holds the canvas.
				<div style:display=move || if show_diagram.get() { "block" } else { "none" }>
					<SiteGraphCanvas data=site width=Some(800.0) height=Some(600.0) on_select=on_select />
					<p class="hint">"Drag to pan. Scroll to zoom. Click a node for details."</p>
				</div>
			</section>

			{details}

			<section class="url-table">
				<input
					type="search"
					placeholder="Search URL"
					prop:value=move || table.with(|t| t.query.clone())
					on:input=move |ev| {
						let query = event_target_value(&ev);
						table.update(|t| t.query = query);
					}
				/>
				<table>
					<thead><tr>{headers}</tr></thead>
					<tbody>{rows}</tbody>
				</table>
			</section>
		</main>
	}
}
