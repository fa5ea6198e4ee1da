//! Drawable map content, built from results by pure functions.

use crate::graph::{Coordinates, PlaybackFrame, RouteSummary, scale};

/// Where the map looks when there is nothing to centre on.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(20.0, 0.0);

/// Extra pixels around a marker that still count as a hit.
const HIT_SLOP: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
	pub coords: Coordinates,
	pub radius: f64,
	pub fill: &'static str,
	pub fill_opacity: f64,
	pub label: Option<String>,
	/// Lines shown in the detail card when the marker is hovered.
	pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapLine {
	pub points: Vec<Coordinates>,
	pub color: &'static str,
	pub width: f64,
	pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapScene {
	pub center: Coordinates,
	pub lines: Vec<MapLine>,
	pub markers: Vec<MapMarker>,
}

impl Default for MapScene {
	fn default() -> Self {
		Self {
			center: DEFAULT_CENTER,
			lines: Vec::new(),
			markers: Vec::new(),
		}
	}
}

impl MapScene {
	/// The visible part of a spread result, centred on its origin.
	pub fn spread(frame: &PlaybackFrame) -> Self {
		let sub = frame.visible();

		let lines = sub
			.links
			.iter()
			.filter_map(|link| {
				let from = frame.result.node(&link.source)?;
				let to = frame.result.node(&link.target)?;
				Some(MapLine {
					points: vec![from.coords, to.coords],
					color: "#94a3b8",
					width: 1.0,
					opacity: 0.5,
				})
			})
			.collect();

		let markers = sub
			.nodes
			.iter()
			.map(|node| MapMarker {
				coords: node.coords,
				radius: scale::radius(node.cases),
				fill: scale::color(node.group),
				fill_opacity: 0.7,
				label: Some(node.id.clone()),
				details: vec![
					format!("Level: {}", node.group),
					format!("Cases: {:.2}", node.cases),
				],
			})
			.collect();

		Self {
			center: frame
				.result
				.origin()
				.map(|n| n.coords)
				.unwrap_or(DEFAULT_CENTER),
			lines,
			markers,
		}
	}

	/// A route polyline with one marker per stop.
	pub fn route(route: &RouteSummary) -> Self {
		let markers = route
			.stops
			.iter()
			.map(|stop| MapMarker {
				coords: stop.coords,
				radius: stop.role.marker_radius(),
				fill: stop.role.marker_color(),
				fill_opacity: 0.8,
				label: Some(stop.country.clone()),
				details: stop.role.labels(),
			})
			.collect();

		Self {
			center: route
				.stops
				.first()
				.map(|s| s.coords)
				.unwrap_or(DEFAULT_CENTER),
			lines: vec![MapLine {
				points: route.stops.iter().map(|s| s.coords).collect(),
				color: "#3b82f6",
				width: 3.0,
				opacity: 0.8,
			}],
			markers,
		}
	}

	/// Index of the topmost marker under the canvas point `(sx, sy)`.
	pub fn marker_at(
		&self,
		view: &ViewTransform,
		width: f64,
		height: f64,
		sx: f64,
		sy: f64,
	) -> Option<usize> {
		self.markers.iter().rposition(|marker| {
			let (x, y) = view.project(self.center, marker.coords, width, height);
			let (dx, dy) = (x - sx, y - sy);
			(dx * dx + dy * dy).sqrt() <= marker.radius + HIT_SLOP
		})
	}
}

/// Pan and zoom on top of the scene's centre. `k` multiplies the base
/// pixels-per-degree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 2.0,
		}
	}
}

impl ViewTransform {
	pub const MIN_ZOOM: f64 = 1.0;
	pub const MAX_ZOOM: f64 = 40.0;

	fn scale(&self, width: f64) -> f64 {
		width / 360.0 * self.k
	}

	/// Equirectangular projection of `coords` into canvas pixels.
	pub fn project(&self, center: Coordinates, coords: Coordinates, width: f64, height: f64) -> (f64, f64) {
		let s = self.scale(width);
		(
			width / 2.0 + self.x + (coords.lng - center.lng) * s,
			height / 2.0 + self.y - (coords.lat - center.lat) * s,
		)
	}

	/// Zoom by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, factor: f64, sx: f64, sy: f64, width: f64, height: f64) {
		let k = (self.k * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
		let ratio = k / self.k;
		let (cx, cy) = (width / 2.0 + self.x, height / 2.0 + self.y);
		self.x = sx - (sx - cx) * ratio - width / 2.0;
		self.y = sy - (sy - cy) * ratio - height / 2.0;
		self.k = k;
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::graph::{
		PathResult, PlaybackState, RouteOutcome, SpreadLink, SpreadNode, SpreadResult,
	};

	fn frame(reveal: usize) -> PlaybackFrame {
		let node = |id: &str, group, cases, lat, lng| SpreadNode {
			id: id.into(),
			group,
			cases,
			coords: Coordinates::new(lat, lng),
		};
		let result = Arc::new(SpreadResult {
			nodes: vec![
				node("Pakistan", 0, 40.0, 30.0, 69.0),
				node("Iran", 1, 200.0, 32.0, 53.0),
			],
			links: vec![SpreadLink::new("Pakistan", "Iran")],
		});
		let mut state = PlaybackState::loaded(2).start();
		for _ in 0..reveal {
			state = state.tick();
		}
		PlaybackFrame { result, state }
	}

	#[test]
	fn spread_scene_tracks_reveal() {
		let first = MapScene::spread(&frame(0));
		assert_eq!(first.markers.len(), 1);
		assert!(first.lines.is_empty());
		assert_eq!(first.center, Coordinates::new(30.0, 69.0));

		let both = MapScene::spread(&frame(1));
		assert_eq!(both.markers.len(), 2);
		assert_eq!(both.lines.len(), 1);
		assert_eq!(both.markers[1].radius, 20.0);
		assert_eq!(both.markers[1].fill, "#f97316");
	}

	#[test]
	fn route_scene_has_polyline_through_stops() {
		let result = PathResult::found(vec!["Kenya".into(), "Egypt".into(), "Germany".into()], 0.1);
		let RouteOutcome::Found(route) = RouteOutcome::from_result(&result) else {
			panic!("expected a route");
		};
		let scene = MapScene::route(&route);
		assert_eq!(scene.lines[0].points.len(), 3);
		assert_eq!(scene.markers[0].fill, "#10b981");
		assert_eq!(scene.markers[1].radius, 6.0);
		assert_eq!(scene.center, route.stops[0].coords);
	}

	#[test]
	fn spread_markers_carry_level_and_cases() {
		let scene = MapScene::spread(&frame(1));
		let iran = &scene.markers[1];
		assert_eq!(iran.label.as_deref(), Some("Iran"));
		assert_eq!(iran.details, vec!["Level: 1", "Cases: 200.00"]);
	}

	#[test]
	fn route_markers_carry_stop_captions() {
		let result = PathResult::found(vec!["Kenya".into(), "Egypt".into(), "Germany".into()], 0.1);
		let RouteOutcome::Found(route) = RouteOutcome::from_result(&result) else {
			panic!("expected a route");
		};
		let scene = MapScene::route(&route);
		let details: Vec<_> = scene.markers.iter().map(|m| m.details.clone()).collect();
		assert_eq!(
			details,
			vec![vec!["Start Point"], vec!["Stop 1"], vec!["Destination"]]
		);
	}

	#[test]
	fn hit_test_finds_marker_under_cursor() {
		let scene = MapScene::spread(&frame(1));
		let view = ViewTransform::default();
		let (x, y) = view.project(scene.center, scene.markers[1].coords, 800.0, 500.0);

		assert_eq!(scene.marker_at(&view, 800.0, 500.0, x + 10.0, y), Some(1));
		assert_eq!(scene.marker_at(&view, 800.0, 500.0, x + 40.0, y + 40.0), None);
		assert_eq!(
			MapScene::default().marker_at(&view, 800.0, 500.0, 400.0, 250.0),
			None
		);
	}

	#[test]
	fn centre_projects_to_middle() {
		let view = ViewTransform::default();
		let (x, y) = view.project(DEFAULT_CENTER, DEFAULT_CENTER, 800.0, 500.0);
		assert_eq!((x, y), (400.0, 250.0));
	}

	#[test]
	fn zoom_keeps_cursor_fixed() {
		let mut view = ViewTransform::default();
		let target = Coordinates::new(40.0, 30.0);
		let (sx, sy) = view.project(DEFAULT_CENTER, target, 800.0, 500.0);
		view.zoom_at(1.5, sx, sy, 800.0, 500.0);
		let (nx, ny) = view.project(DEFAULT_CENTER, target, 800.0, 500.0);
		assert!((nx - sx).abs() < 1e-9 && (ny - sy).abs() < 1e-9);
	}
}
