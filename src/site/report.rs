//! Summary metrics and the searchable, sortable URL table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::{PageStatus, SiteNode};

/// Headline numbers for a crawl.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteMetrics {
	pub total_urls: usize,
	/// Deepest click depth from the home page; 0 for an empty crawl.
	pub max_depth: u32,
	pub total_internal_links: u64,
	pub active: usize,
	pub errors: usize,
	/// Redirects and warnings together.
	pub warnings: usize,
}

impl SiteMetrics {
	pub fn from_nodes(nodes: &[SiteNode]) -> Self {
		let count = |f: fn(PageStatus) -> bool| nodes.iter().filter(|n| f(n.status)).count();
		Self {
			total_urls: nodes.len(),
			max_depth: nodes.iter().map(|n| n.clicks_from_home).max().unwrap_or(0),
			total_internal_links: nodes.iter().map(|n| u64::from(n.internal_links)).sum(),
			active: count(|s| s == PageStatus::Active),
			errors: count(|s| s == PageStatus::Error),
			warnings: count(|s| matches!(s, PageStatus::Warning | PageStatus::Redirect)),
		}
	}
}

/// Column the URL table is sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
	Url,
	PageRank,
	PageRankPercent,
	ClicksFromHome,
	Status,
}

impl SortField {
	pub const ALL: [SortField; 5] = [
		SortField::Url,
		SortField::PageRank,
		SortField::PageRankPercent,
		SortField::ClicksFromHome,
		SortField::Status,
	];

	pub fn label(self) -> &'static str {
		match self {
			SortField::Url => "URL",
			SortField::PageRank => "PageRank",
			SortField::PageRankPercent => "PageRank %",
			SortField::ClicksFromHome => "Clicks from home",
			SortField::Status => "Status",
		}
	}

	fn compare(self, a: &SiteNode, b: &SiteNode) -> Ordering {
		match self {
			SortField::Url => a.url.cmp(&b.url),
			SortField::PageRank => a.page_rank.cmp(&b.page_rank),
			SortField::PageRankPercent => a.page_rank_percent.total_cmp(&b.page_rank_percent),
			SortField::ClicksFromHome => a.clicks_from_home.cmp(&b.clicks_from_home),
			SortField::Status => a.status.as_str().cmp(b.status.as_str()),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	pub fn flipped(self) -> Self {
		match self {
			SortDirection::Asc => SortDirection::Desc,
			SortDirection::Desc => SortDirection::Asc,
		}
	}
}

/// Search and sort state of the URL table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlTable {
	pub query: String,
	pub sort: SortField,
	pub direction: SortDirection,
}

impl Default for UrlTable {
	fn default() -> Self {
		Self {
			query: String::new(),
			sort: SortField::PageRank,
			direction: SortDirection::Desc,
		}
	}
}

impl UrlTable {
	/// Clicking the active column flips its direction; another column starts descending.
	pub fn toggle_sort(&mut self, field: SortField) {
		if self.sort == field {
			self.direction = self.direction.flipped();
		} else {
			self.sort = field;
			self.direction = SortDirection::Desc;
		}
	}

	/// Nodes whose URL contains the query (case-insensitive), in table order.
	pub fn rows<'a>(&self, nodes: &'a [SiteNode]) -> Vec<&'a SiteNode> {
		let needle = self.query.to_lowercase();
		let mut rows: Vec<&SiteNode> = nodes
			.iter()
			.filter(|n| n.url.to_lowercase().contains(&needle))
			.collect();
		rows.sort_by(|a, b| {
			let ord = self.sort.compare(a, b);
			match self.direction {
				SortDirection::Asc => ord,
				SortDirection::Desc => ord.reverse(),
			}
		});
		rows
	}
}
