use leptos::prelude::*;

use crate::config::GAUGE_RADIUS;
use crate::format::{format_number, format_variation};
use crate::kpi::geometry::{circumference, map_circular, CircularOptions, Domain};

/// Circular progress ring for rates expressed in `domain` (usually `[0, 100]`).
#[component]
pub fn RadialGauge(
    #[prop(into)] title: String,
    value: f64,
    #[prop(default = Domain::percent())] domain: Domain,
    /// Optional delta shown under the value.
    #[prop(default = None)]
    variation: Option<f64>,
) -> impl IntoView {
    let c = circumference(GAUGE_RADIUS);
    let offset = map_circular(value, domain, c, CircularOptions::default());
    let center = GAUGE_RADIUS + 5.0;
    let size = center * 2.0;

    view! {
        <div class="kpi-card gauge-card">
            <h4 class="kpi-title">{title}</h4>
            <svg viewBox=format!("0 0 {} {}", size, size) class="gauge-svg">
                <circle
                    cx=center.to_string()
                    cy=center.to_string()
                    r=GAUGE_RADIUS.to_string()
                    class="gauge-track"
                    fill="none"
                    stroke-width="8"
                />
                <circle
                    cx=center.to_string()
                    cy=center.to_string()
                    r=GAUGE_RADIUS.to_string()
                    class="gauge-value"
                    fill="none"
                    stroke-width="8"
                    stroke-linecap="round"
                    stroke-dasharray=format!("{:.2}", c)
                    stroke-dashoffset=format!("{:.2}", offset)
                    transform=format!("rotate(-90 {} {})", center, center)
                />
            </svg>
            <div class="gauge-label">{format!("{} %", format_number(value))}</div>
            {variation.map(|v| {
                let (text, class) = format_variation(v);
                view! { <span class=class>{text}</span> }
            })}
        </div>
    }
}
