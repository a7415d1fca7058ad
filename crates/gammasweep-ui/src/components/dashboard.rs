//! Simulated analytics dashboard shown beside the hero copy.
//!
//! The chart is plain SVG built from [`REVENUE`]; there is no live data.

use dioxus::prelude::*;

use crate::content::{KPIS, REVENUE, RevenuePoint};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 256.0;
const PADDING_X: f64 = 16.0;
const PADDING_TOP: f64 = 16.0;
const PADDING_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 4;

/// A plotted data point, with the hover text shown over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub month: &'static str,
    pub value: f64,
}

impl ChartPoint {
    pub fn tooltip(&self) -> String {
        format!("{}: {:.0}", self.month, self.value)
    }
}

/// Paths and label positions for an area chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub line: String,
    pub area: String,
    /// Horizontal grid line y positions, top to bottom.
    pub grid: Vec<f64>,
    /// `(x, month)` for each point.
    pub labels: Vec<(f64, &'static str)>,
    pub points: Vec<ChartPoint>,
}

/// Lay out `points` in a `width` x `height` box.
///
/// The y axis starts at zero and ends 10% above the largest value.
pub fn chart_geometry(points: &[RevenuePoint], width: f64, height: f64) -> ChartGeometry {
    let plot_width = width - 2.0 * PADDING_X;
    let plot_height = height - PADDING_TOP - PADDING_BOTTOM;
    let baseline = PADDING_TOP + plot_height;

    let grid = (0..=GRID_LINES)
        .map(|i| PADDING_TOP + plot_height * i as f64 / GRID_LINES as f64)
        .collect();

    if points.is_empty() {
        return ChartGeometry {
            line: String::new(),
            area: String::new(),
            grid,
            labels: Vec::new(),
            points: Vec::new(),
        };
    }

    let y_max = points.iter().map(|p| p.value).fold(0.0, f64::max) * 1.1;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    let step = if points.len() > 1 {
        plot_width / (points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PADDING_X + step * i as f64;
            let y = PADDING_TOP + (1.0 - p.value.max(0.0) / y_max) * plot_height;
            (x, y)
        })
        .collect();

    let mut line = String::new();
    for (i, (x, y)) in coords.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        line.push_str(&format!("{cmd} {x:.1} {y:.1}"));
    }

    let (first_x, _) = coords[0];
    let (last_x, _) = coords[coords.len() - 1];
    let area = format!(
        "M {first_x:.1} {baseline:.1} L{} L {last_x:.1} {baseline:.1} Z",
        line.trim_start_matches('M')
    );

    let labels = coords
        .iter()
        .zip(points)
        .map(|((x, _), p)| (*x, p.month))
        .collect();

    let points = coords
        .iter()
        .zip(points)
        .map(|(&(x, y), p)| ChartPoint {
            x,
            y,
            month: p.month,
            value: p.value,
        })
        .collect();

    ChartGeometry {
        line,
        area,
        grid,
        labels,
        points,
    }
}

#[component]
pub fn DashboardPreview() -> Element {
    let chart = chart_geometry(REVENUE, CHART_WIDTH, CHART_HEIGHT);
    let label_y = CHART_HEIGHT - 6.0;

    rsx! {
        div { class: "dashboard-preview",
            div { class: "dashboard-titlebar",
                div { class: "window-dots",
                    span { class: "window-dot" }
                    span { class: "window-dot" }
                    span { class: "window-dot" }
                }
                div { class: "dashboard-title", "Live Analytics Engine" }
                div { class: "live-indicator",
                    span { class: "live-dot" }
                }
            }

            div { class: "dashboard-body",
                div { class: "kpi-grid",
                    for kpi in KPIS.iter() {
                        div { key: "{kpi.label}", class: "kpi-card {kpi.tone.css_class()}",
                            div { class: "kpi-label", "{kpi.label}" }
                            div { class: "kpi-value", "{kpi.value}" }
                            div { class: "kpi-note", "{kpi.note}" }
                        }
                    }
                }

                div { class: "chart-frame",
                    svg {
                        class: "area-chart",
                        view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                        preserve_aspect_ratio: "none",
                        defs {
                            linearGradient { id: "chart-gradient", x1: "0", y1: "0", x2: "0", y2: "1",
                                stop { offset: "5%", style: "stop-color: var(--brand); stop-opacity: 0.2" }
                                stop { offset: "95%", style: "stop-color: var(--brand); stop-opacity: 0" }
                            }
                        }
                        for y in chart.grid.iter() {
                            line {
                                class: "chart-grid",
                                x1: "0",
                                y1: "{y:.1}",
                                x2: "{CHART_WIDTH}",
                                y2: "{y:.1}",
                                stroke_dasharray: "4,4",
                            }
                        }
                        path { class: "chart-area", d: "{chart.area}", fill: "url(#chart-gradient)" }
                        path { class: "chart-line", d: "{chart.line}", fill: "none" }
                        for point in chart.points.iter() {
                            circle {
                                key: "{point.month}",
                                class: "chart-point",
                                cx: "{point.x:.1}",
                                cy: "{point.y:.1}",
                                r: "6",
                                title { "{point.tooltip()}" }
                            }
                        }
                        for (x, month) in chart.labels.iter() {
                            text {
                                class: "chart-label",
                                x: "{x:.1}",
                                y: "{label_y}",
                                text_anchor: "middle",
                                "{month}"
                            }
                        }
                    }
                }
            }
        }
    }
}
