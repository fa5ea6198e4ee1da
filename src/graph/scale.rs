//! Marker styling for spread levels and case counts.

/// Fill colours for spread levels 0..=3.
pub const LEVEL_COLORS: &[&str] = &["#ef4444", "#f97316", "#f59e0b", "#84cc16"];

/// Used for any level past the end of [`LEVEL_COLORS`].
pub const NEUTRAL_COLOR: &str = "#64748b";

pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 20.0;

/// Legend captions for the levels the service currently produces.
pub const LEVEL_LABELS: &[&str] = &["Level 0 - Origin", "Level 1 - Direct", "Level 2 - Indirect"];

pub fn color(group: u32) -> &'static str {
	LEVEL_COLORS
		.get(group as usize)
		.copied()
		.unwrap_or(NEUTRAL_COLOR)
}

/// Linear `cases / 5`, clamped to `[MIN_RADIUS, MAX_RADIUS]`. NaN lands on
/// the floor.
pub fn radius(cases: f64) -> f64 {
	(cases / 5.0).max(MIN_RADIUS).min(MAX_RADIUS)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_falls_back_past_its_end() {
		assert_eq!(color(0), "#ef4444");
		assert_eq!(color(3), "#84cc16");
		assert_eq!(color(4), NEUTRAL_COLOR);
		assert_eq!(color(u32::MAX), NEUTRAL_COLOR);
	}

	#[test]
	fn radius_is_clamped() {
		assert_eq!(radius(0.0), 5.0);
		assert_eq!(radius(50.0), 10.0);
		assert_eq!(radius(1e9), 20.0);
		assert_eq!(radius(f64::NAN), 5.0);
		assert_eq!(radius(f64::INFINITY), 20.0);
	}
}
