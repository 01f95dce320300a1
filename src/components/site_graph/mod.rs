//! Site architecture graph component.
//!
//! Renders crawled URLs as an interactive force-directed graph on an HTML
//! canvas:
//! - layout computed incrementally by [`crate::layout::Simulation`], one
//!   iteration per animation frame
//! - node size by page role and PageRank, color by click depth, a status dot
//! - pan by dragging with the primary button, wheel and button zoom, click to select
//! - a legend of depth and status colors
//!
//! # Example
//!
//! ```ignore
//! use site_graph::{SiteGraphCanvas, sample_site};
//!
//! let data = Signal::derive(sample_site);
//! view! { <SiteGraphCanvas data=data width=Some(800.0) height=Some(600.0) /> }
//! ```

mod component;
mod render;
mod state;
pub mod theme;

pub use component::SiteGraphCanvas;
pub use state::{MAX_ZOOM, MIN_ZOOM, PRIMARY_BUTTON, SiteGraphState, ViewTransform, node_radius};
pub use theme::{LegendItem, LegendKind, Theme};
