//! Chart Component
//!
//! Two-bar probability chart using HTML5 Canvas.

use leptos::*;
use recidivision::report::ChartData;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Probability bar chart
#[component]
pub fn ProbabilityChart(chart: ChartData) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &chart);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="280"
            class="w-full rounded-lg"
        />
    }
}

/// Top of the y axis: 1.0 for fractions, next multiple of 10 for percentages
fn axis_top(max_value: f64) -> f64 {
    if max_value <= 1.0 {
        1.0
    } else {
        (max_value / 10.0).ceil() * 10.0
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 30.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;
    let top = axis_top(chart.max_value());

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&"#e5e7eb".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(chart.title, margin_left, 18.0);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = top - (i as f64 / 4.0) * top;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let label = if top <= 1.0 {
            format!("{:.2}", value)
        } else {
            format!("{:.0}", value)
        };
        let _ = ctx.fill_text(&label, 5.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / chart.bars.len() as f64;
    let bar_width = slot * 0.5;

    for (idx, bar) in chart.bars.iter().enumerate() {
        let bar_height = (bar.value.max(0.0) / top).min(1.0) * chart_height;
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&bar.color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_stroke_style(&bar.border.into());
        ctx.set_line_width(1.0);
        ctx.stroke_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(bar.label, x, height - 15.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_top_fractions() {
        assert_eq!(axis_top(0.7), 1.0);
        assert_eq!(axis_top(0.0), 1.0);
    }

    #[test]
    fn test_axis_top_percentages() {
        assert_eq!(axis_top(70.0), 70.0);
        assert_eq!(axis_top(64.2), 70.0);
    }
}
