//! Small presentational pieces shared by the pages.

use leptos::prelude::*;

use crate::geo;

#[component]
pub fn CountrySelect(
	value: RwSignal<String>,
	#[prop(default = "Select a country")] placeholder: &'static str,
) -> impl IntoView {
	view! {
		<div class="country-select-wrapper">
			<select
				class="country-select"
				prop:value=move || value.get()
				on:change=move |ev| value.set(event_target_value(&ev))
			>
				<option value="">{placeholder}</option>
				{geo::countries()
					.map(|country| view! { <option value=country>{country}</option> })
					.collect_view()}
			</select>
		</div>
	}
}

#[component]
pub fn LoadingSpinner(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
	view! {
		<div class="loading-spinner">
			<div class="spinner-icon"></div>
			<p>{message}</p>
		</div>
	}
}

#[component]
pub fn StatsCard(
	title: &'static str,
	#[prop(into)] value: String,
	#[prop(default = "#3b82f6")] color: &'static str,
	#[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
	view! {
		<div class="stats-card" style=format!("border-left: 4px solid {color}")>
			<div class="stats-card-header">
				<h3>{title}</h3>
			</div>
			<div class="stats-card-value">{value}</div>
			{subtitle.map(|s| view! { <div class="stats-card-subtitle">{s}</div> })}
		</div>
	}
}
