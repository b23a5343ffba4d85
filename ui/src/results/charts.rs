use dioxus::prelude::*;

use crate::core::series::segments;
use crate::core::{format, ChartSeries};
use crate::results::{polyline_points, ChartGeometry, CHART_HEIGHT, CHART_WIDTH};
use crate::t;

#[component]
pub fn HistoryCharts(series: ChartSeries) -> Element {
    let total = series.len();
    let gaps = series.gap_count();
    let mean_toxicity = series.mean_toxicity().unwrap_or(f64::NAN);
    let mean_gibberish = series.mean_gibberish().unwrap_or(f64::NAN);

    let first_label = series.labels.first().cloned().unwrap_or_default();
    let last_label = series.labels.last().cloned().unwrap_or_default();

    let toxicity_chart = render_line_chart(
        t!("chart-toxicity"),
        "results-chart--toxicity",
        &series.toxicity_points(),
        &first_label,
        &last_label,
    );
    let gibberish_chart = render_line_chart(
        t!("chart-gibberish"),
        "results-chart--gibberish",
        &series.gibberish,
        &first_label,
        &last_label,
    );

    rsx! {
        section { class: "results-card results-charts",
            div { class: "results-card__header",
                h3 { {t!("chart-heading")} }
                if gaps > 0 {
                    span { class: "results-card__meta", {t!("chart-gaps", count = gaps)} }
                }
            }

            if total == 0 {
                p { class: "results-card__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "results-highlights",
                    div { class: "results-highlight",
                        span { class: "results-highlight__label", {t!("chart-total")} }
                        strong { class: "results-highlight__value", "{total}" }
                    }
                    div { class: "results-highlight",
                        span { class: "results-highlight__label", {t!("chart-mean-toxicity")} }
                        strong { class: "results-highlight__value", "{format::format_number(mean_toxicity, 3)}" }
                    }
                    div { class: "results-highlight",
                        span { class: "results-highlight__label", {t!("chart-mean-gibberish")} }
                        strong { class: "results-highlight__value", "{format::format_number(mean_gibberish, 3)}" }
                    }
                }

                div { class: "graphs-container",
                    {toxicity_chart}
                    {gibberish_chart}
                }
            }
        }
    }
}

fn render_line_chart(
    title: String,
    modifier: &'static str,
    values: &[Option<f64>],
    first_label: &str,
    last_label: &str,
) -> Element {
    let geometry = ChartGeometry::new(values);
    let lines: Vec<String> = segments(values)
        .iter()
        .map(|run| polyline_points(run, &geometry))
        .collect();
    let dots: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| value.map(|v| (geometry.x(index), geometry.y(v))))
        .collect();
    let gridlines = geometry.gridlines();
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let first_label = first_label.to_string();
    let last_label = last_label.to_string();

    rsx! {
        figure { class: "results-chart {modifier}",
            figcaption { class: "results-chart__title", "{title}" }
            svg {
                class: "results-chart__svg",
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                role: "img",
                for (index, (y, label)) in gridlines.into_iter().enumerate() {
                    g { key: "grid-{index}",
                        line { class: "results-chart__grid", x1: "0", x2: "{CHART_WIDTH}", y1: "{y}", y2: "{y}" }
                        text { class: "results-chart__axis", x: "2", y: "{y - 4.0}", "{label}" }
                    }
                }
                for (index, points) in lines.into_iter().enumerate() {
                    polyline { key: "line-{index}", class: "results-chart__line", points: "{points}" }
                }
                for (index, (x, y)) in dots.into_iter().enumerate() {
                    circle { key: "dot-{index}", class: "results-chart__dot", cx: "{x}", cy: "{y}", r: "3" }
                }
            }
            div { class: "results-chart__legend",
                span { "{first_label}" }
                span { "{last_label}" }
            }
        }
    }
}
