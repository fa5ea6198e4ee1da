use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::scene::{MapScene, ViewTransform};
use crate::graph::Coordinates;

/// Marker under the pointer and where the pointer is, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Hover {
	index: usize,
	x: f64,
	y: f64,
}

/// Canvas map that redraws whenever `scene` or the pan/zoom changes.
/// A scene with a new centre resets the view. Hovering a marker shows its
/// details in a card next to the pointer.
#[component]
pub fn MapCanvas(
	#[prop(into)] scene: Signal<MapScene>,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let viewport = RwSignal::new(ViewTransform::default());
	let hover = RwSignal::new(None::<Hover>);
	let drag: Rc<Cell<Option<(f64, f64, ViewTransform)>>> = Rc::new(Cell::new(None));

	Effect::new(move |prev_center: Option<Coordinates>| {
		let center = scene.with(|s| s.center);
		if prev_center.is_some_and(|c| c != center) {
			viewport.set(ViewTransform::default());
			hover.set(None);
		}
		center
	});

	Effect::new(move |_| {
		let transform = viewport.get();
		let hovered = hover.with(|h| h.map(|h| h.index));
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::warn!("map: 2d context unavailable");
			return;
		};
		scene.with(|s| render::render(s, &transform, &ctx, width, height, hovered));
	});

	let local_point = move |client_x: i32, client_y: i32| {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			client_x as f64 - rect.left(),
			client_y as f64 - rect.top(),
			canvas.width() as f64,
		))
	};

	let drag_md = drag.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some((x, y, _)) = local_point(ev.client_x(), ev.client_y()) {
			drag_md.set(Some((x, y, viewport.get_untracked())));
			hover.set(None);
		}
	};

	let drag_mm = drag.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y, width)) = local_point(ev.client_x(), ev.client_y()) else {
			return;
		};
		match drag_mm.get() {
			Some((start_x, start_y, start)) => viewport.set(ViewTransform {
				x: start.x + (x - start_x),
				y: start.y + (y - start_y),
				..start
			}),
			None => {
				let transform = viewport.get_untracked();
				let next = scene
					.with_untracked(|s| s.marker_at(&transform, width, height, x, y))
					.map(|index| Hover { index, x, y });
				if hover.get_untracked() != next {
					hover.set(next);
				}
			}
		}
	};

	let (drag_mu, drag_ml) = (drag.clone(), drag);
	let on_mouseup = move |_: MouseEvent| drag_mu.set(None);
	let on_mouseleave = move |_: MouseEvent| {
		drag_ml.set(None);
		hover.set(None);
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some((x, y, width)) = local_point(ev.client_x(), ev.client_y()) {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			viewport.update(|v| v.zoom_at(factor, x, y, width, height));
		}
	};

	let card = move || {
		let Hover { index, x, y } = hover.get()?;
		let marker = scene.with(|s| s.markers.get(index).cloned())?;
		Some(view! {
			<div
				class="map-popup"
				style=format!(
					"position: absolute; left: {}px; top: {}px; pointer-events: none;",
					x + 12.0,
					y + 12.0,
				)
			>
				{marker.label.map(|label| view! { <strong>{label}</strong> })}
				{marker
					.details
					.into_iter()
					.map(|line| view! { <div>{line}</div> })
					.collect_view()}
			</div>
		})
	};

	view! {
		<div class="map-container" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="map-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; width: 100%; cursor: grab;"
			/>
			{card}
		</div>
	}
}
