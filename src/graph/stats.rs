use std::collections::BTreeMap;

use super::types::SpreadResult;

/// Aggregates over a whole spread result, independent of playback.
#[derive(Clone, Debug, PartialEq)]
pub struct SpreadStats {
	pub countries: usize,
	pub connections: usize,
	pub total_cases: f64,
	/// NaN when the result has no nodes.
	pub mean_cases: f64,
	/// Node count per spread level.
	pub levels: BTreeMap<u32, usize>,
}

impl SpreadStats {
	pub fn of(result: &SpreadResult) -> Self {
		let countries = result.nodes.len();
		let total_cases: f64 = result.nodes.iter().map(|n| n.cases).sum();
		let mean_cases = if countries == 0 {
			f64::NAN
		} else {
			total_cases / countries as f64
		};
		let mut levels = BTreeMap::new();
		for node in &result.nodes {
			*levels.entry(node.group).or_insert(0) += 1;
		}

		Self {
			countries,
			connections: result.links.len(),
			total_cases,
			mean_cases,
			levels,
		}
	}

	pub fn mean(&self) -> Option<f64> {
		(!self.mean_cases.is_nan()).then_some(self.mean_cases)
	}

	/// Mean cases to two decimals, or "N/A".
	pub fn mean_label(&self) -> String {
		self.mean()
			.map(|m| format!("{m:.2}"))
			.unwrap_or_else(|| "N/A".into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::types::{Coordinates, SpreadLink, SpreadNode};

	fn node(id: &str, group: u32, cases: f64) -> SpreadNode {
		SpreadNode {
			id: id.into(),
			group,
			cases,
			coords: Coordinates::default(),
		}
	}

	#[test]
	fn aggregates_full_result() {
		let result = SpreadResult {
			nodes: vec![
				node("Pakistan", 0, 40.0),
				node("Iran", 1, 12.0),
				node("UAE", 1, 8.0),
			],
			links: vec![
				SpreadLink::new("Pakistan", "Iran"),
				SpreadLink::new("Pakistan", "UAE"),
			],
		};
		let stats = SpreadStats::of(&result);
		assert_eq!(stats.countries, 3);
		assert_eq!(stats.connections, 2);
		assert_eq!(stats.total_cases, 60.0);
		assert_eq!(stats.mean(), Some(20.0));
		assert_eq!(stats.mean_label(), "20.00");
		assert_eq!(stats.levels.get(&1), Some(&2));
	}

	#[test]
	fn empty_result_yields_sentinel() {
		let stats = SpreadStats::of(&SpreadResult::default());
		assert_eq!(stats.countries, 0);
		assert!(stats.mean_cases.is_nan());
		assert_eq!(stats.mean(), None);
		assert_eq!(stats.mean_label(), "N/A");
	}
}
