//! SVG trend chart: a gradient-filled area under the main series and an
//! optional dashed secondary series (target, budget, forecast).

use leptos::prelude::*;

use crate::config::CHART_PADDING;
use crate::kpi::geometry::{map_area, map_linear, to_svg_points, CanvasRange, Domain};

/// Pre-computed SVG attributes for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub line: String,
    pub area: String,
    pub secondary: Option<String>,
}

/// Map both series against a shared domain so they are comparable on one canvas.
pub fn chart_geometry(
    values: &[f64],
    secondary: Option<&[f64]>,
    domain: Option<Domain>,
    width: f64,
    height: f64,
) -> ChartGeometry {
    let domain = domain.unwrap_or_else(|| match secondary {
        Some(s) => Domain::spanning(&[values, s]),
        None => Domain::from_values(values),
    });
    let range = CanvasRange::padded(width, height, CHART_PADDING);

    let points = map_linear(values, domain, range);
    let area = map_area(&points, height);

    ChartGeometry {
        line: to_svg_points(&points),
        area: to_svg_points(&area),
        secondary: secondary
            .map(|s| map_linear(s, domain, range))
            .filter(|p| !p.is_empty())
            .map(|p| to_svg_points(&p)),
    }
}

#[component]
pub fn LineChart(
    /// Unique id, used for the gradient definition.
    #[prop(into)]
    id: String,
    values: Vec<f64>,
    #[prop(default = None)] secondary: Option<Vec<f64>>,
    /// Fixed domain; derived from the data when absent.
    #[prop(default = None)]
    domain: Option<Domain>,
    width: f64,
    height: f64,
    /// Period labels rendered under the chart.
    #[prop(optional)]
    labels: Vec<String>,
) -> impl IntoView {
    if values.len() < 2 {
        return view! { <div class="chart-empty">"Pas assez de points"</div> }.into_any();
    }

    let geometry = chart_geometry(&values, secondary.as_deref(), domain, width, height);
    let gradient_id = format!("{}-fill", id);
    let fill = format!("url(#{})", gradient_id);

    view! {
        <div class="line-chart">
            <svg
                viewBox=format!("0 0 {} {}", width, height)
                preserveAspectRatio="none"
                class="line-chart-svg"
            >
                <defs>
                    <linearGradient id=gradient_id x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="var(--chart-accent)" stop-opacity="0.35" />
                        <stop offset="100%" stop-color="var(--chart-accent)" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <polygon points=geometry.area fill=fill stroke="none" />
                <polyline
                    points=geometry.line
                    fill="none"
                    stroke="var(--chart-accent)"
                    stroke-width="2"
                    vector-effect="non-scaling-stroke"
                />
                {geometry.secondary.map(|points| view! {
                    <polyline
                        points=points
                        fill="none"
                        stroke="var(--chart-secondary)"
                        stroke-width="1.5"
                        stroke-dasharray="4 3"
                        vector-effect="non-scaling-stroke"
                    />
                })}
            </svg>
            {(!labels.is_empty()).then(|| view! {
                <div class="line-chart-labels">
                    {labels.into_iter().map(|l| view! { <span>{l}</span> }).collect::<Vec<_>>()}
                </div>
            })}
        </div>
    }
    .into_any()
}
