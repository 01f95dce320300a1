//! Layout input: nodes with child lists, and the edge set derived from them.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A node of the input graph. Each child id produces an edge `id -> child`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode<K> {
	pub id: K,
	#[serde(default = "Vec::new")]
	pub children: Vec<K>,
}

impl<K> LayoutNode<K> {
	pub fn new(id: K, children: impl IntoIterator<Item = K>) -> Self {
		Self {
			id,
			children: children.into_iter().collect(),
		}
	}

	pub fn leaf(id: K) -> Self {
		Self {
			id,
			children: Vec::new(),
		}
	}
}

/// Dense, index-based view of the input graph used by the simulation.
///
/// `ids[i]` is the id of body `i`; `edges` hold body indices.
#[derive(Clone, Debug)]
pub(crate) struct IndexedGraph<K> {
	pub ids: Vec<K>,
	pub index: HashMap<K, usize>,
	pub edges: Vec<(usize, usize)>,
}

impl<K: Clone + Eq + Hash> IndexedGraph<K> {
	/// Indexes nodes in input order. Duplicate ids keep their first occurrence;
	/// children that name no node, and self references, produce no edge.
	pub fn build(nodes: &[LayoutNode<K>]) -> Self {
		let mut ids = Vec::with_capacity(nodes.len());
		let mut index = HashMap::with_capacity(nodes.len());
		// Body index of each input node, `None` for a repeated id.
		let mut sources = Vec::with_capacity(nodes.len());

		for node in nodes {
			match index.entry(node.id.clone()) {
				Entry::Vacant(slot) => {
					slot.insert(ids.len());
					sources.push(Some(ids.len()));
					ids.push(node.id.clone());
				}
				Entry::Occupied(_) => sources.push(None),
			}
		}
		let duplicates = nodes.len() - ids.len();
		if duplicates > 0 {
			warn!("layout: ignored {} duplicate node id(s)", duplicates);
		}

		let mut edges = Vec::new();
		let mut dangling = 0usize;
		for (node, source) in nodes.iter().zip(sources) {
			let Some(source) = source else {
				continue;
			};
			for child in &node.children {
				match index.get(child) {
					Some(&target) if target != source => edges.push((source, target)),
					Some(_) => {}
					None => dangling += 1,
				}
			}
		}
		if dangling > 0 {
			debug!("layout: skipped {} edge(s) to unknown nodes", dangling);
		}

		Self { ids, index, edges }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edges_follow_child_order() {
		let graph = IndexedGraph::build(&[
			LayoutNode::new("a", ["b", "c"]),
			LayoutNode::leaf("b"),
			LayoutNode::new("c", ["b"]),
		]);
		assert_eq!(graph.ids, vec!["a", "b", "c"]);
		assert_eq!(graph.edges, vec![(0, 1), (0, 2), (2, 1)]);
	}

	#[test]
	fn dangling_and_self_edges_are_dropped() {
		let graph = IndexedGraph::build(&[
			LayoutNode::new(1u32, [2, 99, 1]),
			LayoutNode::leaf(2u32),
		]);
		assert_eq!(graph.edges, vec![(0, 1)]);
	}

	#[test]
	fn duplicate_ids_keep_first_occurrence() {
		let graph = IndexedGraph::build(&[
			LayoutNode::new(1u32, [2]),
			LayoutNode::leaf(2u32),
			LayoutNode::new(1u32, [3]),
			LayoutNode::leaf(3u32),
		]);
		assert_eq!(graph.ids, vec![1, 2, 3]);
		assert_eq!(graph.index[&3], 2);
		assert_eq!(graph.edges, vec![(0, 1)]);
	}

	#[test]
	fn children_default_when_missing_from_json() {
		let node: LayoutNode<u32> = serde_json::from_str(r#"{ "id": 4 }"#).unwrap();
		assert_eq!(node, LayoutNode::leaf(4));
	}
}
