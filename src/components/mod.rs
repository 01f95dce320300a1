//! UI components.

pub mod site_graph;
