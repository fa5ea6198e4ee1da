use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::api::{Country, Fetcher, HttpFetcher, RequestSlot};
use crate::components::map::{MapCanvas, MapScene};
use crate::components::widgets::{CountrySelect, LoadingSpinner};
use crate::config::TICK_INTERVAL_MS;
use crate::error::Operation;
use crate::graph::{
	PlaybackController, PlaybackFrame, PlaybackStatus, SpreadResult, SpreadStats,
	TimeoutScheduler, scale,
};

#[component]
pub fn SimulationView() -> impl IntoView {
	let fetcher = use_context::<HttpFetcher>().unwrap_or_default();
	let selected = RwSignal::new(String::new());
	let slot = RwSignal::new(RequestSlot::<Arc<SpreadResult>>::new(Operation::Simulation));
	let frame = RwSignal::new(None::<PlaybackFrame>);
	let playback = StoredValue::new_local(PlaybackController::new(
		TimeoutScheduler,
		TICK_INTERVAL_MS,
	));
	playback.with_value(|p| {
		p.on_change(move |next| {
			frame.try_set(next);
		})
	});
	on_cleanup(move || {
		playback.try_with_value(PlaybackController::clear);
	});

	let loading = move || slot.with(RequestSlot::is_loading);

	let on_simulate = move |_| {
		let mut submitted = None;
		slot.update(|s| submitted = s.submit(Country::new(&selected.get_untracked())));
		let Some((ticket, country)) = submitted else {
			return;
		};
		info!("[simulation] requesting spread from {country}");
		playback.with_value(PlaybackController::clear);
		let fetcher = fetcher.clone();
		spawn_local(async move {
			let outcome = fetcher.spread_simulation(&country).await.map(Arc::new);
			let loaded = outcome.as_ref().ok().cloned();
			let mut applied = false;
			slot.update(|s| applied = s.finish(ticket, outcome));
			if let (true, Some(result)) = (applied, loaded) {
				info!(
					"[simulation] {} nodes, {} links",
					result.nodes.len(),
					result.links.len()
				);
				playback.try_with_value(|p| p.load(result));
			}
		});
	};

	let status = move || frame.with(|f| f.as_ref().map(|f| f.state.status()));
	let scene = Signal::derive(move || {
		frame.with(|f| f.as_ref().map(MapScene::spread).unwrap_or_default())
	});
	let stats = Signal::derive(move || frame.with(|f| f.as_ref().map(|f| SpreadStats::of(&f.result))));

	view! {
		<div class="spread-simulation-container">
			<div class="simulation-header">
				<h2>"Disease Spread Simulation"</h2>
				<p>"BFS-based visualization showing how disease spreads through flight connections"</p>
			</div>

			<div class="simulation-control">
				<CountrySelect value=selected placeholder="Select origin country" />
				<button
					class="btn btn-primary"
					on:click=on_simulate
					disabled=move || selected.with(String::is_empty) || loading()
				>
					{move || if loading() { "Simulating..." } else { "Run Simulation" }}
				</button>
				<PlaybackControls frame=frame playback=playback />
			</div>

			{move || {
				slot.with(|s| {
					s.error().map(|e| view! { <div class="alert alert-error">{e.to_string()}</div> })
				})
			}}
			<Show when=loading>
				<LoadingSpinner message="Running BFS simulation..." />
			</Show>

			<Show when=move || frame.with(Option::is_some)>
				<div class="simulation-info">
					<span>
						{move || {
							frame.with(|f| {
								f.as_ref()
									.map(|f| {
										format!(
											"Showing {} of {} countries",
											f.state.revealed(),
											f.state.len(),
										)
									})
									.unwrap_or_default()
							})
						}}
						{move || (status() == Some(PlaybackStatus::Running)).then_some(" (Animating...)")}
					</span>
				</div>

				<div class="map-container">
					<MapCanvas scene=scene />
				</div>

				<div class="simulation-legend">
					<h4>"Spread Levels"</h4>
					<div class="legend-items">
						{scale::LEVEL_LABELS
							.iter()
							.enumerate()
							.map(|(level, label)| {
								let color = scale::color(level as u32);
								view! {
									<div class="legend-item">
										<span
											class="legend-color"
											style=format!("background-color: {color}")
										></span>
										<span>{*label}</span>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="simulation-stats">
					<div class="stat-item">
						<span class="stat-label">"Total Countries Affected:"</span>
						<span class="stat-value">
							{move || stats.with(|s| s.as_ref().map(|s| s.countries))}
						</span>
					</div>
					<div class="stat-item">
						<span class="stat-label">"Flight Connections:"</span>
						<span class="stat-value">
							{move || stats.with(|s| s.as_ref().map(|s| s.connections))}
						</span>
					</div>
					<div class="stat-item">
						<span class="stat-label">"Average Cases:"</span>
						<span class="stat-value">
							{move || stats.with(|s| s.as_ref().map(SpreadStats::mean_label))}
						</span>
					</div>
				</div>
			</Show>
		</div>
	}
}

type LocalPlayback = StoredValue<PlaybackController<TimeoutScheduler>, LocalStorage>;

#[component]
fn PlaybackControls(
	frame: RwSignal<Option<PlaybackFrame>>,
	playback: LocalPlayback,
) -> impl IntoView {
	let run = move |action: fn(&PlaybackController<TimeoutScheduler>)| {
		move |_: leptos::ev::MouseEvent| playback.with_value(action)
	};

	let status = Memo::new(move |_| frame.with(|f| f.as_ref().map(|f| f.state.status())));

	move || match status.get() {
		None => ().into_any(),
		Some(PlaybackStatus::Idle) => view! {
			<button class="btn btn-secondary" on:click=run(PlaybackController::start)>
				"Animate Spread"
			</button>
			<button class="btn btn-secondary" on:click=run(PlaybackController::reset)>
				"Show All"
			</button>
		}
		.into_any(),
		Some(PlaybackStatus::Running) => view! {
			<button class="btn btn-secondary" on:click=run(PlaybackController::pause)>
				"Pause"
			</button>
			<button class="btn btn-secondary" on:click=run(PlaybackController::reset)>
				"Show All"
			</button>
		}
		.into_any(),
		Some(PlaybackStatus::Paused) => view! {
			<button class="btn btn-secondary" on:click=run(PlaybackController::start)>
				"Resume"
			</button>
			<button class="btn btn-secondary" on:click=run(PlaybackController::reset)>
				"Show All"
			</button>
		}
		.into_any(),
		Some(PlaybackStatus::Completed) => view! {
			<button class="btn btn-secondary" on:click=run(PlaybackController::replay)>
				"Replay"
			</button>
		}
		.into_any(),
	}
}
