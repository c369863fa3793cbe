//! Doughnut Chart Component
//!
//! Proportional engagement chart drawn on an HTML5 Canvas.

use leptos::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::store::{ChartProjection, DashboardState};

/// Fraction of the outer radius removed to form the doughnut hole
const HOLE_RATIO: f64 = 0.55;

/// Doughnut chart of the ranked element counts
#[component]
pub fn DoughnutChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new snapshot lands
    create_effect(move |_| {
        let projection = state.projection();

        if let Some(canvas) = canvas_ref.get() {
            draw_doughnut(&canvas, &projection);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="w-full rounded-lg"
            />

            <ChartLegend />
        </div>
    }
}

/// Legend mapping element labels to slice colors
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                let projection = state.projection();

                projection.labels
                    .into_iter()
                    .zip(projection.colors)
                    .map(|(label, color)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Draw the doughnut on canvas
fn draw_doughnut(canvas: &HtmlCanvasElement, projection: &ChartProjection) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let segments = segment_angles(&projection.series);
    if segments.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(
            "No interaction data yet",
            width / 2.0 - 80.0,
            height / 2.0,
        );
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    for (idx, (start, end)) in segments.iter().enumerate() {
        ctx.set_fill_style(&projection.colors[idx].into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, *start, *end);
        ctx.close_path();
        ctx.fill();
    }

    // Cut the hole
    ctx.set_fill_style(&"#1f2937".into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * HOLE_RATIO, 0.0, TAU);
    ctx.fill();
}

/// Compute the (start, end) angle of each slice, starting at 12 o'clock
/// and proceeding clockwise. Empty when the series has no weight.
fn segment_angles(series: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = series.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    series
        .iter()
        .map(|value| {
            let sweep = value / total * TAU;
            let segment = (start, start + sweep);
            start += sweep;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn slices_are_proportional() {
        let segments = segment_angles(&[10.0, 5.0, 5.0]);

        assert_eq!(segments.len(), 3);
        assert_close(segments[0].1 - segments[0].0, TAU / 2.0);
        assert_close(segments[1].1 - segments[1].0, TAU / 4.0);
        assert_close(segments[2].1 - segments[2].0, TAU / 4.0);
    }

    #[test]
    fn slices_cover_full_turn() {
        let segments = segment_angles(&[1.0, 2.0, 3.0, 4.0]);

        assert_close(segments[0].0, -FRAC_PI_2);
        assert_close(segments.last().unwrap().1, -FRAC_PI_2 + TAU);

        // Adjacent slices share boundaries
        for pair in segments.windows(2) {
            assert_close(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn zero_total_yields_no_slices() {
        assert!(segment_angles(&[]).is_empty());
        assert!(segment_angles(&[0.0, 0.0]).is_empty());
    }
}
