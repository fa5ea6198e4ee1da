//! Contract with the analytics service.
//!
//! Every call is a single POST with a JSON body and a single JSON response.
//! Inputs arrive already validated ([`Country`], [`RouteRequest`]), so an
//! invalid selection can never produce a request.

mod http;
pub mod slot;
mod types;

pub use http::HttpFetcher;
pub use slot::{RequestSlot, Ticket};
pub use types::{Country, Prediction, PredictionResponse, RiskLevel, RouteRequest};

use crate::error::FetchError;
use crate::graph::{PathResult, SpreadResult};

/// The three remote operations the views depend on.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
	async fn predict(&self, country: &Country) -> Result<PredictionResponse, FetchError>;

	async fn spread_simulation(&self, country: &Country) -> Result<SpreadResult, FetchError>;

	async fn safest_path(&self, route: &RouteRequest) -> Result<PathResult, FetchError>;
}
