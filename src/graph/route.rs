//! Display values derived from a safest-path result.

use super::types::{Coordinates, PathResult};
use crate::geo;

/// Position of a country along a route. Roles are purely positional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopRole {
	Origin,
	/// An intermediate country, numbered by its index in the path.
	Transit(usize),
	Destination,
	/// A one-country path is both ends at once.
	OriginAndDestination,
}

impl StopRole {
	fn at(index: usize, len: usize) -> Self {
		match (index == 0, index + 1 == len) {
			(true, true) => Self::OriginAndDestination,
			(true, false) => Self::Origin,
			(false, true) => Self::Destination,
			(false, false) => Self::Transit(index),
		}
	}

	pub fn is_origin(&self) -> bool {
		matches!(self, Self::Origin | Self::OriginAndDestination)
	}

	pub fn is_destination(&self) -> bool {
		matches!(self, Self::Destination | Self::OriginAndDestination)
	}

	/// Popup captions. Both ends of a one-country path get both labels.
	pub fn labels(&self) -> Vec<String> {
		match self {
			Self::Origin => vec!["Start Point".into()],
			Self::Destination => vec!["Destination".into()],
			Self::OriginAndDestination => vec!["Start Point".into(), "Destination".into()],
			Self::Transit(i) => vec![format!("Stop {i}")],
		}
	}

	pub fn marker_color(&self) -> &'static str {
		if self.is_origin() {
			"#10b981"
		} else if self.is_destination() {
			"#ef4444"
		} else {
			"#3b82f6"
		}
	}

	pub fn marker_radius(&self) -> f64 {
		match self {
			Self::Transit(_) => 6.0,
			_ => 10.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteStop {
	pub country: String,
	pub role: StopRole,
	pub coords: Coordinates,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary {
	pub stops: Vec<RouteStop>,
	pub total_risk_cost: f64,
}

impl RouteSummary {
	pub fn hop_count(&self) -> usize {
		self.stops.len().saturating_sub(1)
	}

	pub fn country_count(&self) -> usize {
		self.stops.len()
	}

	pub fn risk_label(&self) -> String {
		format!("{:.4}", self.total_risk_cost)
	}

	pub fn countries(&self) -> impl Iterator<Item = &str> {
		self.stops.iter().map(|s| s.country.as_str())
	}
}

/// Either a route to draw or the informational "no route" state.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome {
	Found(RouteSummary),
	NoRoute,
}

impl RouteOutcome {
	pub fn from_result(result: &PathResult) -> Self {
		let Some(path) = result.countries() else {
			return Self::NoRoute;
		};
		let stops = path
			.iter()
			.enumerate()
			.map(|(i, country)| RouteStop {
				country: country.clone(),
				role: StopRole::at(i, path.len()),
				coords: geo::coordinates(country),
			})
			.collect();

		Self::Found(RouteSummary {
			stops,
			total_risk_cost: result.total_risk_cost,
		})
	}
}
