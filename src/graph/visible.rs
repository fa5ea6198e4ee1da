use std::collections::HashSet;

use super::types::{SpreadLink, SpreadNode, SpreadResult};

/// The node prefix and connecting links shown at a given reveal index.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleSubgraph<'a> {
	pub nodes: &'a [SpreadNode],
	pub links: Vec<&'a SpreadLink>,
}

impl VisibleSubgraph<'_> {
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn link_count(&self) -> usize {
		self.links.len()
	}
}

/// Derive the visible subgraph for `reveal_index`.
///
/// Nodes are the first `reveal_index + 1` entries in discovery order (all of
/// them when the index runs past the end). A link is visible only when both
/// endpoints are among the visible nodes, so links naming ids the result
/// never contained are dropped rather than reported.
pub fn visible(result: &SpreadResult, reveal_index: usize) -> VisibleSubgraph<'_> {
	let end = reveal_index.saturating_add(1).min(result.nodes.len());
	let nodes = &result.nodes[..end];
	let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	let links = result
		.links
		.iter()
		.filter(|l| ids.contains(l.source.as_str()) && ids.contains(l.target.as_str()))
		.collect();

	VisibleSubgraph { nodes, links }
}
