use leptos::prelude::*;

use crate::config::{SPARK_HEIGHT, SPARK_WIDTH};
use crate::format::{format_number, format_variation};
use crate::kpi::payload::{secondary_values, KpiMetric};

use super::line_chart::LineChart;

/// Current value, delta badge and a sparkline of the history.
#[component]
pub fn KpiCard(metric: KpiMetric) -> impl IntoView {
    let values = metric.values();
    let secondary = secondary_values(&metric.history);
    let labels = metric.labels();
    let chart_id = format!("spark-{}", metric.key.to_lowercase());

    view! {
        <div class="kpi-card">
            <h4 class="kpi-title">{metric.title.clone()}</h4>
            <div class="kpi-value-row">
                <span class="kpi-value">{format_number(metric.current)}</span>
                {metric.variation.map(|v| {
                    let (text, class) = format_variation(v);
                    view! { <span class=class>{text}</span> }
                })}
            </div>
            <LineChart
                id=chart_id
                values=values
                secondary=secondary
                width=SPARK_WIDTH
                height=SPARK_HEIGHT
                labels=labels
            />
        </div>
    }
}
