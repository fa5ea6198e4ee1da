use serde::{Deserialize, Deserializer, Serialize};

/// A geographic position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

impl Coordinates {
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

/// One country reached during a spread simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadNode {
	pub id: String,
	/// BFS depth from the origin; level 0 is the origin itself.
	pub group: u32,
	pub cases: f64,
	#[serde(default)]
	pub coords: Coordinates,
}

/// A flight connection between two nodes of the same result, by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadLink {
	pub source: String,
	pub target: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<f64>,
}

impl SpreadLink {
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			value: None,
		}
	}
}

/// Spread-simulation output. `nodes` is in BFS discovery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadResult {
	#[serde(default)]
	pub nodes: Vec<SpreadNode>,
	#[serde(default)]
	pub links: Vec<SpreadLink>,
}

impl SpreadResult {
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node(&self, id: &str) -> Option<&SpreadNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// The origin country, if the result has any nodes.
	pub fn origin(&self) -> Option<&SpreadNode> {
		self.nodes.first()
	}
}

/// Safest-path output. An absent or empty `path` means no route exists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
	#[serde(default, deserialize_with = "empty_as_none")]
	pub path: Option<Vec<String>>,
	#[serde(default)]
	pub total_risk_cost: f64,
}

impl PathResult {
	pub fn found(path: Vec<String>, total_risk_cost: f64) -> Self {
		Self {
			path: (!path.is_empty()).then_some(path),
			total_risk_cost,
		}
	}

	pub fn no_route() -> Self {
		Self::default()
	}

	pub fn countries(&self) -> Option<&[String]> {
		self.path.as_deref().filter(|p| !p.is_empty())
	}
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	let path: Option<Vec<String>> = Option::deserialize(deserializer)?;
	Ok(path.filter(|p| !p.is_empty()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn spread_result_parses_service_payload() {
		let json = r#"{
			"nodes": [
				{"id": "Pakistan", "group": 0, "cases": 40, "coords": {"lat": 30.3753, "lng": 69.3451}},
				{"id": "Iran", "group": 1, "cases": 12.5, "coords": {"lat": 32.4279, "lng": 53.688}}
			],
			"links": [{"source": "Pakistan", "target": "Iran", "value": 1}]
		}"#;
		let result: SpreadResult = serde_json::from_str(json).unwrap();
		assert_eq!(result.len(), 2);
		assert_eq!(result.origin().map(|n| n.id.as_str()), Some("Pakistan"));
		assert_eq!(result.node("Iran").map(|n| n.group), Some(1));
		assert_eq!(result.links[0].value, Some(1.0));
	}

	#[test]
	fn missing_coords_fall_back_to_zero() {
		let json = r#"{"nodes": [{"id": "Atlantis", "group": 0, "cases": 1}], "links": []}"#;
		let result: SpreadResult = serde_json::from_str(json).unwrap();
		assert_eq!(result.nodes[0].coords, Coordinates::default());
	}

	#[test]
	fn path_error_payload_is_no_route() {
		let result: PathResult = serde_json::from_str(r#"{"error": "No path found"}"#).unwrap();
		assert_eq!(result.countries(), None);
		assert_eq!(result.total_risk_cost, 0.0);

		let empty: PathResult = serde_json::from_str(r#"{"path": [], "total_risk_cost": 0}"#).unwrap();
		assert_eq!(empty.path, None);
	}

	#[test]
	fn path_payload_keeps_order() {
		let json = r#"{"path": ["Pakistan", "Iran", "Germany"], "total_risk_cost": 0.0421}"#;
		let result: PathResult = serde_json::from_str(json).unwrap();
		assert_eq!(
			result.countries().unwrap(),
			["Pakistan", "Iran", "Germany"].map(String::from)
		);
		assert!((result.total_risk_cost - 0.0421).abs() < 1e-12);
	}
}
