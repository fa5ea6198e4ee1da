use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::api::{Country, Fetcher, HttpFetcher, PredictionResponse, RequestSlot};
use crate::components::widgets::{CountrySelect, LoadingSpinner, StatsCard};
use crate::error::Operation;

#[component]
pub fn PredictionView() -> impl IntoView {
	let fetcher = use_context::<HttpFetcher>().unwrap_or_default();
	let selected = RwSignal::new(String::new());
	let slot = RwSignal::new(RequestSlot::<PredictionResponse>::new(Operation::Prediction));
	let loading = move || slot.with(RequestSlot::is_loading);

	let on_predict = move |_| {
		let mut submitted = None;
		slot.update(|s| submitted = s.submit(Country::new(&selected.get_untracked())));
		let Some((ticket, country)) = submitted else {
			return;
		};
		info!("[prediction] requesting {country}");
		let fetcher = fetcher.clone();
		spawn_local(async move {
			let outcome = fetcher.predict(&country).await;
			slot.update(|s| {
				s.finish(ticket, outcome);
			});
		});
	};

	view! {
		<div class="prediction-container">
			<div class="prediction-header">
				<h2>"Disease Prediction"</h2>
				<p>"Select a country to predict malaria cases using ML model"</p>
			</div>

			<div class="prediction-control">
				<CountrySelect value=selected placeholder="Select a country for prediction" />
				<button
					class="btn btn-primary"
					on:click=on_predict
					disabled=move || selected.with(String::is_empty) || loading()
				>
					{move || if loading() { "Predicting..." } else { "Predict Cases" }}
				</button>
			</div>

			{move || {
				slot.with(|s| {
					s.error().map(|e| view! { <div class="alert alert-error">{e.to_string()}</div> })
				})
			}}
			<Show when=loading>
				<LoadingSpinner message="Analyzing data and predicting..." />
			</Show>
			{move || {
				slot.with(|s| s.result().cloned())
					.map(|response| view! { <PredictionResults response=response /> })
			}}
		</div>
	}
}

#[component]
fn PredictionResults(response: PredictionResponse) -> impl IntoView {
	let prediction = response.prediction;
	let risk = prediction.risk();
	let (fg, bg) = risk.colors();
	let features = prediction.feature_rows();

	view! {
		<div class="prediction-results">
			<div class="result-header">
				<h3>{response.country}</h3>
			</div>

			<div class="stats-grid">
				<StatsCard
					title="Predicted Malaria Cases"
					value=format!("{:.2}", prediction.malaria)
					color="#ef4444"
					subtitle="Cases per month"
				/>
				<StatsCard
					title="Predicted Dengue Cases"
					value=format!("{:.2}", prediction.dengue)
					color="#8b5cf6"
					subtitle="Cases per month"
				/>
			</div>

			<div class="risk-assessment">
				<h4>"Risk Assessment"</h4>
				<div class="risk-badge" style=format!("background-color: {bg}; color: {fg}")>
					<span class="risk-level">{format!("{} Risk", risk.label())}</span>
					<span class="risk-value">{format!("{:.2} cases/month", prediction.malaria)}</span>
				</div>
			</div>

			{(!features.is_empty())
				.then(|| {
					view! {
						<div class="features-details">
							<h4>"Model Inputs"</h4>
							<div class="features-grid">
								{features
									.into_iter()
									.map(|(label, value)| {
										view! {
											<div class="feature-item">
												<span class="feature-label">{format!("{label}:")}</span>
												<span class="feature-value">{value}</span>
											</div>
										}
									})
									.collect_view()}
							</div>
						</div>
					}
				})}
		</div>
	}
}
