//! Static country locations used to place markers on the map.

use crate::graph::Coordinates;

const TABLE: &[(&str, Coordinates)] = &[
	("Bangladesh", Coordinates::new(23.6850, 90.3563)),
	("Belgium", Coordinates::new(50.5039, 4.4699)),
	("Brazil", Coordinates::new(-14.2350, -51.9253)),
	("Egypt", Coordinates::new(26.8206, 30.8025)),
	("Ethiopia", Coordinates::new(9.1450, 40.4897)),
	("Germany", Coordinates::new(51.1657, 10.4515)),
	("India", Coordinates::new(20.5937, 78.9629)),
	("Iran", Coordinates::new(32.4279, 53.6880)),
	("Japan", Coordinates::new(36.2048, 138.2529)),
	("Kenya", Coordinates::new(-0.0236, 37.9062)),
	("Mexico", Coordinates::new(23.6345, -102.5528)),
	("Nigeria", Coordinates::new(9.0820, 8.6753)),
	("Pakistan", Coordinates::new(30.3753, 69.3451)),
	("Saudi Arabia", Coordinates::new(23.8859, 45.0792)),
	("Singapore", Coordinates::new(1.3521, 103.8198)),
	("United Arab Emirates", Coordinates::new(23.4241, 53.8478)),
];

/// Location of `country`. Unknown names map to `(0, 0)`, which puts the
/// marker at the map origin instead of failing.
pub fn coordinates(country: &str) -> Coordinates {
	TABLE
		.iter()
		.find(|(name, _)| *name == country)
		.map(|(_, coords)| *coords)
		.unwrap_or_default()
}

/// Countries offered by the picker, alphabetically.
pub fn countries() -> impl Iterator<Item = &'static str> {
	TABLE.iter().map(|(name, _)| *name)
}
