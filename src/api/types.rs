use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A non-empty country selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
	pub fn new(name: &str) -> Result<Self, ValidationError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(ValidationError::MissingCountry);
		}
		Ok(Self(name.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Country {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Serialize)]
pub(crate) struct CountryBody<'a> {
	pub country: &'a Country,
}

/// Two distinct, non-empty endpoints for a safest-path search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteRequest {
	#[serde(rename = "start_country")]
	start: Country,
	#[serde(rename = "end_country")]
	end: Country,
}

impl RouteRequest {
	pub fn new(start: &str, end: &str) -> Result<Self, ValidationError> {
		let (Ok(start), Ok(end)) = (Country::new(start), Country::new(end)) else {
			return Err(ValidationError::MissingEndpoints);
		};
		if start == end {
			return Err(ValidationError::SameEndpoints);
		}
		Ok(Self { start, end })
	}

	pub fn start(&self) -> &Country {
		&self.start
	}

	pub fn end(&self) -> &Country {
		&self.end
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
	pub country: String,
	pub prediction: Prediction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
	pub malaria: f64,
	pub dengue: f64,
	#[serde(default)]
	pub features_used: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
	Low,
	Medium,
	High,
}

impl RiskLevel {
	pub fn from_cases(malaria: f64) -> Self {
		if malaria < 50.0 {
			Self::Low
		} else if malaria < 80.0 {
			Self::Medium
		} else {
			Self::High
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Low => "Low",
			Self::Medium => "Medium",
			Self::High => "High",
		}
	}

	/// Foreground and background colours of the risk badge.
	pub fn colors(&self) -> (&'static str, &'static str) {
		match self {
			Self::Low => ("#10b981", "#d1fae5"),
			Self::Medium => ("#f59e0b", "#fef3c7"),
			Self::High => ("#ef4444", "#fee2e2"),
		}
	}
}

/// How a model input is presented: key, label, decimals, prefix, unit.
const FEATURES: &[(&str, &str, usize, &str, &str)] = &[
	("temperature", "Temperature", 1, "", "°C"),
	("humidity", "Humidity", 0, "", "%"),
	("precipitation", "Precipitation", 0, "", " mm"),
	("vector_index", "Vector Index", 2, "", ""),
	("water_stagnation_index", "Water Stagnation", 2, "", ""),
	("population_density", "Population Density", 1, "", " /km²"),
	("healthcare_budget", "Healthcare Budget", 0, "$", "/capita"),
	("malaria_lag_1", "Last Month", 2, "", " cases"),
	("malaria_lag_12", "Same Month Last Year", 2, "", " cases"),
	("malaria_rolling_mean_3", "3-Month Average", 2, "", " cases"),
];

const MONTHS: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Prediction {
	pub fn risk(&self) -> RiskLevel {
		RiskLevel::from_cases(self.malaria)
	}

	pub fn feature(&self, key: &str) -> Option<f64> {
		self.features_used.get(key).and_then(Value::as_f64)
	}

	/// Label/value pairs for the model inputs the service reported.
	pub fn feature_rows(&self) -> Vec<(&'static str, String)> {
		let mut rows: Vec<_> = FEATURES
			.iter()
			.filter_map(|&(key, label, decimals, prefix, unit)| {
				self.feature(key)
					.map(|v| (label, format!("{prefix}{v:.decimals$}{unit}")))
			})
			.collect();
		if let Some(region) = self.features_used.get("region").and_then(Value::as_str) {
			rows.push(("Region", region.to_string()));
		}
		let month = self
			.feature("month")
			.and_then(|m| MONTHS.get((m as usize).checked_sub(1)?));
		if let (Some(month), Some(year)) = (month, self.feature("year")) {
			rows.push(("Time Period", format!("{month} {year}")));
		}
		rows
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn country_must_be_selected() {
		assert_eq!(Country::new("  "), Err(ValidationError::MissingCountry));
		assert_eq!(Country::new(" Kenya ").unwrap().as_str(), "Kenya");
	}

	#[test]
	fn route_endpoints_must_differ() {
		assert_eq!(RouteRequest::new("A", "A"), Err(ValidationError::SameEndpoints));
		assert_eq!(RouteRequest::new("", "B"), Err(ValidationError::MissingEndpoints));
		assert_eq!(RouteRequest::new("A", ""), Err(ValidationError::MissingEndpoints));
		let route = RouteRequest::new("Pakistan", "Germany").unwrap();
		assert_eq!(route.start().as_str(), "Pakistan");
	}

	#[test]
	fn request_bodies_match_the_service() {
		let route = RouteRequest::new("Pakistan", "Germany").unwrap();
		assert_eq!(
			serde_json::to_value(&route).unwrap(),
			serde_json::json!({"start_country": "Pakistan", "end_country": "Germany"})
		);
		let country = Country::new("Kenya").unwrap();
		assert_eq!(
			serde_json::to_value(CountryBody { country: &country }).unwrap(),
			serde_json::json!({"country": "Kenya"})
		);
	}

	#[test]
	fn risk_thresholds() {
		assert_eq!(RiskLevel::from_cases(49.9), RiskLevel::Low);
		assert_eq!(RiskLevel::from_cases(50.0), RiskLevel::Medium);
		assert_eq!(RiskLevel::from_cases(80.0), RiskLevel::High);
	}

	#[test]
	fn feature_rows_skip_missing_inputs() {
		let json = r#"{
			"country": "Kenya",
			"prediction": {
				"malaria": 63,
				"dengue": 4,
				"features_used": {"temperature": 24.56, "healthcare_budget": 412.4, "region": "Africa", "month": 3, "year": 2024}
			}
		}"#;
		let response: PredictionResponse = serde_json::from_str(json).unwrap();
		assert_eq!(response.prediction.risk(), RiskLevel::Medium);
		assert_eq!(
			response.prediction.feature_rows(),
			vec![
				("Temperature", "24.6°C".to_string()),
				("Healthcare Budget", "$412/capita".to_string()),
				("Region", "Africa".to_string()),
				("Time Period", "Mar 2024".to_string()),
			]
		);
	}
}
