use gloo_net::http::Request;
use log::{debug, error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Fetcher;
use super::types::{Country, CountryBody, PredictionResponse, RouteRequest};
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::graph::{PathResult, SpreadResult};

/// [`Fetcher`] over the browser's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
	config: ApiConfig,
}

impl HttpFetcher {
	pub fn new(config: ApiConfig) -> Self {
		Self { config }
	}

	async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let url = self.config.endpoint(path);
		debug!("[api] POST {url}");
		let result = async {
			let response = Request::post(&url)
				.json(body)
				.map_err(|e| FetchError::Network(e.to_string()))?
				.send()
				.await
				.map_err(|e| FetchError::Network(e.to_string()))?;
			let status = response.status();
			let text = response
				.text()
				.await
				.map_err(|e| FetchError::Network(e.to_string()))?;
			if !response.ok() {
				return Err(FetchError::Status { status, body: text });
			}
			decode(&text)
		}
		.await;

		match &result {
			Ok(_) => info!("[api] {path} succeeded"),
			Err(e) => error!("[api] {path} failed: {e}"),
		}
		result
	}
}

impl Fetcher for HttpFetcher {
	async fn predict(&self, country: &Country) -> Result<PredictionResponse, FetchError> {
		self.post("predict", &CountryBody { country }).await
	}

	async fn spread_simulation(&self, country: &Country) -> Result<SpreadResult, FetchError> {
		self.post("simulation/spread", &CountryBody { country })
			.await
	}

	async fn safest_path(&self, route: &RouteRequest) -> Result<PathResult, FetchError> {
		self.post("simulation/path", route).await
	}
}

pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
	serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_spread_payload() {
		let result: SpreadResult = decode(
			r#"{"nodes": [{"id": "Pakistan", "group": 0, "cases": 40}], "links": []}"#,
		)
		.unwrap();
		assert_eq!(result.len(), 1);
	}

	#[test]
	fn malformed_payload_is_a_decode_error() {
		let err = decode::<SpreadResult>("<html>502 Bad Gateway</html>").unwrap_err();
		assert!(matches!(err, FetchError::Decode(_)));
	}

	#[test]
	fn endpoints_follow_config() {
		let fetcher = HttpFetcher::new(ApiConfig::new("https://atlas.test/api"));
		assert_eq!(
			fetcher.config.endpoint("simulation/path"),
			"https://atlas.test/api/simulation/path"
		);
	}
}
