use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{MapScene, ViewTransform};
use crate::graph::Coordinates;

const OCEAN: &str = "#0f172a";
const GRATICULE: &str = "rgba(148, 163, 184, 0.15)";

pub fn render(
	scene: &MapScene,
	view: &ViewTransform,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	hovered: Option<usize>,
) {
	ctx.set_fill_style_str(OCEAN);
	ctx.fill_rect(0.0, 0.0, width, height);
	let project = |c: Coordinates| view.project(scene.center, c, width, height);
	draw_graticule(&project, ctx);
	draw_lines(scene, &project, ctx);
	draw_markers(scene, &project, ctx, hovered);
}

fn draw_graticule(project: &impl Fn(Coordinates) -> (f64, f64), ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(GRATICULE);
	ctx.set_line_width(1.0);
	for lng in (-180..=180).step_by(30) {
		let (x1, y1) = project(Coordinates::new(90.0, lng as f64));
		let (x2, y2) = project(Coordinates::new(-90.0, lng as f64));
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	for lat in (-90..=90).step_by(30) {
		let (x1, y1) = project(Coordinates::new(lat as f64, -180.0));
		let (x2, y2) = project(Coordinates::new(lat as f64, 180.0));
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_lines(
	scene: &MapScene,
	project: &impl Fn(Coordinates) -> (f64, f64),
	ctx: &CanvasRenderingContext2d,
) {
	for line in &scene.lines {
		let mut points = line.points.iter().map(|c| project(*c));
		let Some((x, y)) = points.next() else {
			continue;
		};
		ctx.set_global_alpha(line.opacity);
		ctx.set_stroke_style_str(line.color);
		ctx.set_line_width(line.width);
		ctx.begin_path();
		ctx.move_to(x, y);
		for (x, y) in points {
			ctx.line_to(x, y);
		}
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_markers(
	scene: &MapScene,
	project: &impl Fn(Coordinates) -> (f64, f64),
	ctx: &CanvasRenderingContext2d,
	hovered: Option<usize>,
) {
	for (i, marker) in scene.markers.iter().enumerate() {
		let (x, y) = project(marker.coords);

		ctx.begin_path();
		let _ = ctx.arc(x, y, marker.radius, 0.0, 2.0 * PI);
		ctx.set_global_alpha(marker.fill_opacity);
		ctx.set_fill_style_str(marker.fill);
		ctx.fill();
		ctx.set_global_alpha(1.0);
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(if hovered == Some(i) { 3.5 } else { 2.0 });
		ctx.stroke();

		if let Some(label) = &marker.label {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
			ctx.set_font("11px sans-serif");
			let _ = ctx.fill_text(label, x + marker.radius + 3.0, y + 3.0);
		}
	}
}
