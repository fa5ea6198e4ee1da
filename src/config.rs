//! Build-time settings.

/// Service root used when `SPREAD_ATLAS_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Delay between playback reveals.
pub const TICK_INTERVAL_MS: u32 = 800;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	pub base_url: String,
}

impl ApiConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url: String = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(option_env!("SPREAD_ATLAS_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_join_cleanly() {
		let config = ApiConfig::new("http://example.test/api/");
		assert_eq!(
			config.endpoint("/simulation/spread"),
			"http://example.test/api/simulation/spread"
		);
		assert_eq!(config.endpoint("predict"), "http://example.test/api/predict");
	}
}
