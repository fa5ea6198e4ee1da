use std::cell::Cell;
use std::sync::Arc;

use spread_atlas::api::{
	Country, Fetcher, Prediction, PredictionResponse, RequestSlot, RouteRequest,
};
use spread_atlas::error::{FetchError, Operation, ValidationError};
use spread_atlas::graph::{
	Coordinates, ManualScheduler, PathResult, PlaybackController, RouteOutcome, SpreadLink,
	SpreadNode, SpreadResult, StopRole,
};

/// In-memory stand-in for the analytics service.
#[derive(Default)]
struct FakeService {
	calls: Cell<usize>,
	offline: bool,
}

impl FakeService {
	fn hit(&self) -> Result<(), FetchError> {
		self.calls.set(self.calls.get() + 1);
		if self.offline {
			Err(FetchError::Network("connection refused".into()))
		} else {
			Ok(())
		}
	}
}

impl Fetcher for FakeService {
	async fn predict(&self, country: &Country) -> Result<PredictionResponse, FetchError> {
		self.hit()?;
		Ok(PredictionResponse {
			country: country.to_string(),
			prediction: Prediction {
				malaria: 42.0,
				dengue: 3.0,
				features_used: Default::default(),
			},
		})
	}

	async fn spread_simulation(&self, country: &Country) -> Result<SpreadResult, FetchError> {
		self.hit()?;
		let node = |id: &str, group, cases| SpreadNode {
			id: id.into(),
			group,
			cases,
			coords: Coordinates::default(),
		};
		Ok(SpreadResult {
			nodes: vec![node(country.as_str(), 0, 40.0), node("Iran", 1, 12.0)],
			links: vec![SpreadLink::new(country.as_str(), "Iran")],
		})
	}

	async fn safest_path(&self, route: &RouteRequest) -> Result<PathResult, FetchError> {
		self.hit()?;
		if route.end().as_str() == "Japan" {
			return Ok(PathResult::no_route());
		}
		Ok(PathResult::found(
			vec![
				route.start().to_string(),
				"B".into(),
				route.end().to_string(),
			],
			0.12,
		))
	}
}

#[test]
fn same_endpoints_never_reach_the_service() {
	let service = FakeService::default();
	let mut slot = RequestSlot::<RouteOutcome>::new(Operation::Path);

	let submitted = slot.submit(RouteRequest::new("A", "A"));
	assert!(submitted.is_none());
	assert_eq!(service.calls.get(), 0);
	assert_eq!(
		slot.error(),
		Some(ValidationError::SameEndpoints.to_string().as_str())
	);
	assert!(!slot.is_loading());
}

#[test]
fn route_roles_from_service_path() {
	let service = FakeService::default();
	let mut slot = RequestSlot::new(Operation::Path);
	let (ticket, route) = slot.submit(RouteRequest::new("A", "C")).unwrap();
	let outcome = pollster::block_on(service.safest_path(&route))
		.map(|result| RouteOutcome::from_result(&result));
	slot.finish(ticket, outcome);

	let Some(RouteOutcome::Found(summary)) = slot.result() else {
		panic!("expected a route, got {:?}", slot.result());
	};
	assert_eq!(summary.hop_count(), 2);
	assert_eq!(summary.stops[0].role, StopRole::Origin);
	assert_eq!(summary.stops[1].role, StopRole::Transit(1));
	assert_eq!(summary.stops[2].role, StopRole::Destination);
}

#[test]
fn no_route_is_a_successful_response() {
	let service = FakeService::default();
	let mut slot = RequestSlot::new(Operation::Path);
	let (ticket, route) = slot.submit(RouteRequest::new("Kenya", "Japan")).unwrap();
	let outcome = pollster::block_on(service.safest_path(&route))
		.map(|result| RouteOutcome::from_result(&result));
	slot.finish(ticket, outcome);

	assert_eq!(slot.result(), Some(&RouteOutcome::NoRoute));
	assert_eq!(slot.error(), None);
}

#[test]
fn spread_response_loads_into_playback() {
	let service = FakeService::default();
	let mut slot = RequestSlot::new(Operation::Simulation);
	let (ticket, country) = slot.submit(Country::new("Pakistan")).unwrap();
	let outcome = pollster::block_on(service.spread_simulation(&country)).map(Arc::new);
	assert!(slot.finish(ticket, outcome));

	let playback = PlaybackController::new(ManualScheduler::new(), 800);
	playback.load(slot.result().cloned().unwrap());
	let frame = playback.frame().unwrap();
	assert_eq!(frame.visible().node_count(), 1);
	assert_eq!(frame.result.origin().map(|n| n.id.as_str()), Some("Pakistan"));
}

#[test]
fn failed_fetch_clears_display_and_shows_generic_message() {
	let online = FakeService::default();
	let mut slot = RequestSlot::new(Operation::Prediction);
	let (ticket, country) = slot.submit(Country::new("Kenya")).unwrap();
	slot.finish(ticket, pollster::block_on(online.predict(&country)));
	assert_eq!(slot.result().map(|r| r.country.as_str()), Some("Kenya"));

	let offline = FakeService {
		offline: true,
		..Default::default()
	};
	let (ticket, country) = slot.submit(Country::new("Egypt")).unwrap();
	slot.finish(ticket, pollster::block_on(offline.predict(&country)));

	assert_eq!(offline.calls.get(), 1);
	assert_eq!(slot.result(), None);
	assert_eq!(slot.error(), Some(Operation::Prediction.failure_message()));
}

#[test]
fn empty_selection_is_rejected_locally() {
	let mut slot = RequestSlot::<PredictionResponse>::new(Operation::Prediction);
	assert!(slot.submit(Country::new("")).is_none());
	assert_eq!(slot.error(), Some("Please select a country"));
}
