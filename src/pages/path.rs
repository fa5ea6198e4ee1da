use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::api::{Fetcher, HttpFetcher, RequestSlot, RouteRequest};
use crate::components::map::{MapCanvas, MapScene};
use crate::components::widgets::{CountrySelect, LoadingSpinner, StatsCard};
use crate::error::Operation;
use crate::graph::{RouteOutcome, RouteSummary, StopRole};

#[component]
pub fn PathView() -> impl IntoView {
	let fetcher = use_context::<HttpFetcher>().unwrap_or_default();
	let start = RwSignal::new(String::new());
	let end = RwSignal::new(String::new());
	let slot = RwSignal::new(RequestSlot::<RouteOutcome>::new(Operation::Path));
	let loading = move || slot.with(RequestSlot::is_loading);

	let on_find = move |_| {
		let mut submitted = None;
		slot.update(|s| {
			submitted = s.submit(RouteRequest::new(
				&start.get_untracked(),
				&end.get_untracked(),
			))
		});
		let Some((ticket, route)) = submitted else {
			return;
		};
		info!("[path] requesting {} -> {}", route.start(), route.end());
		let fetcher = fetcher.clone();
		spawn_local(async move {
			let outcome = fetcher
				.safest_path(&route)
				.await
				.map(|result| RouteOutcome::from_result(&result));
			slot.update(|s| {
				s.finish(ticket, outcome);
			});
		});
	};

	view! {
		<div class="path-analysis-container">
			<div class="path-header">
				<h2>"Safest Path Analysis"</h2>
				<p>"A* algorithm to find the route with lowest disease risk between countries"</p>
			</div>

			<div class="path-control">
				<div class="path-inputs">
					<div class="input-group">
						<label>"Start Country"</label>
						<CountrySelect value=start placeholder="Select start country" />
					</div>
					<div class="input-group">
						<label>"Destination Country"</label>
						<CountrySelect value=end placeholder="Select destination" />
					</div>
				</div>
				<button
					class="btn btn-primary"
					on:click=on_find
					disabled=move || {
						start.with(String::is_empty) || end.with(String::is_empty) || loading()
					}
				>
					{move || if loading() { "Finding Path..." } else { "Find Safest Path" }}
				</button>
			</div>

			{move || {
				slot.with(|s| {
					s.error().map(|e| view! { <div class="alert alert-error">{e.to_string()}</div> })
				})
			}}
			<Show when=loading>
				<LoadingSpinner message="Calculating safest route using A*..." />
			</Show>
			{move || {
				slot.with(|s| s.result().cloned())
					.map(|outcome| match outcome {
						RouteOutcome::Found(route) => view! { <RouteDetails route=route /> }.into_any(),
						RouteOutcome::NoRoute => {
							view! {
								<div class="alert alert-info">
									"No path found between the selected countries. They may not be connected through available flight routes."
								</div>
							}
								.into_any()
						}
					})
			}}
		</div>
	}
}

#[component]
fn RouteDetails(route: RouteSummary) -> impl IntoView {
	let scene = MapScene::route(&route);
	let scene = Signal::derive(move || scene.clone());
	let last = route.stops.len().saturating_sub(1);

	view! {
		<div class="stats-grid">
			<StatsCard
				title="Total Risk Score"
				value=route.risk_label()
				color="#ef4444"
				subtitle="Lower is safer"
			/>
			<StatsCard
				title="Stops"
				value=route.hop_count().to_string()
				color="#3b82f6"
				subtitle=format!("{} countries", route.country_count())
			/>
		</div>

		<div class="path-route">
			<h4>"Route"</h4>
			<div class="route-path">
				{route
					.stops
					.iter()
					.enumerate()
					.map(|(i, stop)| {
						view! {
							<span class="route-country" title=stop.role.labels().join(" / ")>
								{stop.country.clone()}
							</span>
							{(i < last).then_some(view! { <span class="route-arrow">"→"</span> })}
						}
					})
					.collect_view()}
			</div>
		</div>

		<div class="map-container">
			<MapCanvas scene=scene />
		</div>

		<div class="path-legend">
			<h4>"Route Legend"</h4>
			<div class="legend-items">
				{[
					(StopRole::Origin, "Start Point"),
					(StopRole::Transit(1), "Transit Points"),
					(StopRole::Destination, "Destination"),
				]
					.into_iter()
					.map(|(role, label)| {
						view! {
							<div class="legend-item">
								<span
									class="legend-color"
									style=format!("background-color: {}", role.marker_color())
								></span>
								<span>{label}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
