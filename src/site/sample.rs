//! Built-in crawl of a university site, shown when the host page provides no data.

use super::types::{PageKind, PageStatus, SiteData, SiteNode};

const BASE: &str = "https://uci.cu";

#[rustfmt::skip]
const PAGES: &[(u32, &str, u32, u32, u32, PageKind, PageStatus, &[u32])] = &[
	(1,  "/",                               100, 0, 45, PageKind::Home,     PageStatus::Active,   &[2, 3, 4, 5]),
	(2,  "/cursos",                          85, 1, 32, PageKind::Category, PageStatus::Active,   &[6, 7, 8]),
	(3,  "/admision",                        78, 1, 28, PageKind::Category, PageStatus::Active,   &[9, 10]),
	(4,  "/investigacion",                   72, 1, 24, PageKind::Category, PageStatus::Active,   &[11, 12]),
	(5,  "/noticias",                        68, 1, 20, PageKind::Category, PageStatus::Active,   &[13, 14]),
	(6,  "/cursos/ingenieria-software",      65, 2, 18, PageKind::Page,     PageStatus::Active,   &[]),
	(7,  "/cursos/ciencia-datos",            58, 2, 15, PageKind::Page,     PageStatus::Active,   &[]),
	(8,  "/cursos/inteligencia-artificial",  52, 2, 12, PageKind::Page,     PageStatus::Redirect, &[]),
	(9,  "/admision/requisitos",             48, 2, 16, PageKind::Page,     PageStatus::Active,   &[]),
	(10, "/admision/proceso",                45, 2, 14, PageKind::Page,     PageStatus::Active,   &[]),
	(11, "/investigacion/proyectos",         42, 2, 11, PageKind::Page,     PageStatus::Warning,  &[]),
	(12, "/investigacion/publicaciones",     38, 2,  9, PageKind::Page,     PageStatus::Active,   &[]),
	(13, "/noticias/eventos",                35, 2,  8, PageKind::Page,     PageStatus::Active,   &[]),
	(14, "/noticias/logros",                 32, 2,  7, PageKind::Page,     PageStatus::Error,    &[]),
	(15, "/contacto",                        55, 1, 22, PageKind::Category, PageStatus::Active,   &[16]),
	(16, "/contacto/formulario",             28, 2,  5, PageKind::Page,     PageStatus::Active,   &[]),
];

/// Sixteen URLs in three levels, with PageRank shares already assigned.
pub fn sample_site() -> SiteData {
	let nodes = PAGES
		.iter()
		.map(
			|&(id, path, page_rank, clicks_from_home, internal_links, kind, status, children)| {
				SiteNode {
					id,
					url: format!("{BASE}{path}"),
					page_rank,
					page_rank_percent: 0.0,
					clicks_from_home,
					internal_links,
					status,
					kind,
					children: children.to_vec(),
				}
			},
		)
		.collect();

	let mut data = SiteData::new(nodes);
	data.assign_page_rank_shares();
	data
}
