use leptos::prelude::*;

use super::path::PathView;
use super::prediction::PredictionView;
use super::simulation::SimulationView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Prediction,
	Spread,
	Path,
}

impl Tab {
	const ALL: [Tab; 3] = [Tab::Prediction, Tab::Spread, Tab::Path];

	fn label(&self) -> &'static str {
		match self {
			Tab::Prediction => "Prediction",
			Tab::Spread => "Spread Simulation",
			Tab::Path => "Path Analysis",
		}
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let active = RwSignal::new(Tab::Prediction);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="app">
				<header class="app-header">
					<h1>"Disease Spread Analytics"</h1>
					<p>"ML-powered prediction and graph-based simulation platform"</p>
				</header>

				<nav class="app-nav">
					{Tab::ALL
						.into_iter()
						.map(|tab| {
							view! {
								<button
									class=move || {
										if active.get() == tab { "nav-tab active" } else { "nav-tab" }
									}
									on:click=move |_| active.set(tab)
								>
									{tab.label()}
								</button>
							}
						})
						.collect_view()}
				</nav>

				<main class="app-main">
					{move || match active.get() {
						Tab::Prediction => view! { <PredictionView /> }.into_any(),
						Tab::Spread => view! { <SimulationView /> }.into_any(),
						Tab::Path => view! { <PathView /> }.into_any(),
					}}
				</main>
			</div>
		</ErrorBoundary>
	}
}
