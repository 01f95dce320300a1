//! Site architecture data: crawled URL nodes, summary metrics and the URL table.

mod report;
mod sample;
mod types;

pub use report::{SiteMetrics, SortDirection, SortField, UrlTable};
pub use sample::sample_site;
pub use types::{PageKind, PageStatus, SiteData, SiteNode};
