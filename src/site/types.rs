//! Crawled site data: one node per URL with its link-authority metrics.
//!
//! Field names follow the JSON the dashboard front-end exchanges
//! (`pageRank`, `clicksFromHome`, `type`, ...).

use serde::{Deserialize, Serialize};

use crate::layout::LayoutNode;

/// Crawl outcome for a URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
	Active,
	Error,
	Redirect,
	Warning,
}

impl PageStatus {
	/// Identifier as it appears in JSON; also the sort key for the status column.
	pub fn as_str(self) -> &'static str {
		match self {
			PageStatus::Active => "active",
			PageStatus::Error => "error",
			PageStatus::Redirect => "redirect",
			PageStatus::Warning => "warning",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			PageStatus::Active => "Active",
			PageStatus::Error => "Error",
			PageStatus::Redirect => "Redirect",
			PageStatus::Warning => "Warning",
		}
	}
}

/// Role of a URL in the site hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
	Home,
	Category,
	Page,
}

/// A crawled URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteNode {
	pub id: u32,
	pub url: String,
	/// Internal PageRank score, 0 to 100.
	pub page_rank: u32,
	/// Share of the site's total PageRank, in percent.
	#[serde(default)]
	pub page_rank_percent: f64,
	/// Click depth from the home page.
	pub clicks_from_home: u32,
	pub internal_links: u32,
	pub status: PageStatus,
	#[serde(rename = "type")]
	pub kind: PageKind,
	/// Ids of pages this URL links down to.
	#[serde(default)]
	pub children: Vec<u32>,
}

/// A crawl result: every URL node of one site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
	pub nodes: Vec<SiteNode>,
}

impl SiteData {
	pub fn new(nodes: Vec<SiteNode>) -> Self {
		Self { nodes }
	}

	/// Sets `page_rank_percent` on every node from its share of the total.
	pub fn assign_page_rank_shares(&mut self) {
		let total: u64 = self.nodes.iter().map(|n| u64::from(n.page_rank)).sum();
		for node in &mut self.nodes {
			node.page_rank_percent = if total == 0 {
				0.0
			} else {
				f64::from(node.page_rank) / total as f64 * 100.0
			};
		}
	}

	pub fn node(&self, id: u32) -> Option<&SiteNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Parent/child structure as layout input.
	pub fn layout_nodes(&self) -> Vec<LayoutNode<u32>> {
		self.nodes
			.iter()
			.map(|n| LayoutNode::new(n.id, n.children.iter().copied()))
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: u32, page_rank: u32, children: Vec<u32>) -> SiteNode {
		SiteNode {
			id,
			url: format!("https://example.org/{id}"),
			page_rank,
			page_rank_percent: 0.0,
			clicks_from_home: 0,
			internal_links: 0,
			status: PageStatus::Active,
			kind: PageKind::Page,
			children,
		}
	}

	#[test]
	fn page_rank_shares_sum_to_hundred() {
		let mut data = SiteData::new(vec![node(1, 50, vec![]), node(2, 30, vec![]), node(3, 20, vec![])]);
		data.assign_page_rank_shares();
		let total: f64 = data.nodes.iter().map(|n| n.page_rank_percent).sum();
		assert!((total - 100.0).abs() < 1e-9);
		assert!((data.nodes[0].page_rank_percent - 50.0).abs() < 1e-9);
	}

	#[test]
	fn zero_total_page_rank_yields_zero_shares() {
		let mut data = SiteData::new(vec![node(1, 0, vec![]), node(2, 0, vec![])]);
		data.assign_page_rank_shares();
		assert!(data.nodes.iter().all(|n| n.page_rank_percent == 0.0));
	}

	#[test]
	fn parses_front_end_json() {
		let json = r#"{
			"nodes": [
				{ "id": 1, "url": "https://uci.cu/", "pageRank": 100, "clicksFromHome": 0,
				  "internalLinks": 45, "type": "home", "status": "active", "children": [2] },
				{ "id": 2, "url": "https://uci.cu/cursos", "pageRank": 85, "clicksFromHome": 1,
				  "internalLinks": 32, "type": "category", "status": "redirect" }
			]
		}"#;
		let data: SiteData = serde_json::from_str(json).unwrap();
		assert_eq!(data.len(), 2);
		assert_eq!(data.nodes[0].kind, PageKind::Home);
		assert_eq!(data.nodes[1].status, PageStatus::Redirect);
		assert!(data.nodes[1].children.is_empty());

		let layout = data.layout_nodes();
		assert_eq!(layout[0], LayoutNode::new(1, [2]));
		assert_eq!(data.node(2).map(|n| n.page_rank), Some(85));
		assert!(data.node(3).is_none());
	}

	#[test]
	fn serializes_kind_as_type() {
		let value = serde_json::to_value(node(9, 10, vec![1])).unwrap();
		assert_eq!(value["type"], "page");
		assert_eq!(value["pageRank"], 10);
		assert_eq!(value["clicksFromHome"], 0);
	}
}
