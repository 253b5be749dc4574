use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::detail_table::DetailTable;
use crate::components::kpi_card::KpiCard;
use crate::components::period_tabs::PeriodTabs;
use crate::components::radial_gauge::RadialGauge;
use crate::config::{find_domain, DashboardDomain, Period};
use crate::kpi::payload::KpiMetric;
use crate::kpi::records::{assign_row_keys, KeyedRecord};
use crate::kpi::request::RequestTracker;

/// `/dashboard/:slug`
#[component]
pub fn DashboardPage() -> impl IntoView {
    let params = use_params_map();
    let domain = Memo::new(move |_| {
        params
            .with(|p| p.get("slug"))
            .and_then(|slug| find_domain(&slug))
    });

    move || match domain.get() {
        Some(d) => view! { <DashboardView domain=d /> }.into_any(),
        None => view! {
            <div class="page">
                <p class="page-error">"Tableau de bord inconnu"</p>
            </div>
        }
        .into_any(),
    }
}

/// One dashboard: period tabs, KPI cards and gauges, then the detail table.
///
/// Fetches on mount and on every period change. Responses that arrive after
/// a newer fetch has started are dropped.
#[component]
pub fn DashboardView(
    domain: &'static DashboardDomain,
    #[prop(default = true)] show_periods: bool,
) -> impl IntoView {
    let (period, set_period) = signal(Period::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let metrics = RwSignal::new(Vec::<KpiMetric>::new());
    let records = RwSignal::new(Vec::<KeyedRecord>::new());

    let tracker = RequestTracker::new();
    let fetch_tracker = tracker.clone();

    Effect::new(move |_| {
        let period = period.get();
        let token = fetch_tracker.begin();
        let tracker = fetch_tracker.clone();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_dashboard(domain, period).await;
            let Some(result) = tracker.accept(token, result) else {
                log!("Dropping stale {} response for {}", period.as_query(), domain.slug);
                return;
            };
            match result {
                Ok(data) => {
                    records.set(assign_row_keys(data.details));
                    metrics.set(data.metrics);
                }
                Err(e) => {
                    warn!("Failed to load {} ({}): {}", domain.slug, period.as_query(), e);
                    metrics.set(Vec::new());
                    records.set(Vec::new());
                    set_error.set(Some(format!("Impossible de charger les donnees : {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    on_cleanup(move || tracker.cancel());

    view! {
        <div class="page dashboard-page">
            <div class="dashboard-header">
                <div>
                    <h2>{domain.title}</h2>
                    <p class="page-description">{domain.subtitle}</p>
                </div>
                {show_periods.then(|| view! { <PeriodTabs period=period set_period=set_period /> })}
            </div>

            {move || {
                if let Some(err) = error.get() {
                    return view! { <div class="page-error">{err}</div> }.into_any();
                }
                if loading.get() {
                    return view! { <p class="loading">"Chargement..."</p> }.into_any();
                }
                view! {
                    <MetricGrid domain=domain metrics=metrics.get() />
                    // Remount per period so the table starts on page 1.
                    {move || {
                        period.track();
                        view! { <DetailTable domain=domain records=records.into() /> }
                    }}
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn MetricGrid(domain: &'static DashboardDomain, metrics: Vec<KpiMetric>) -> impl IntoView {
    (!metrics.is_empty()).then(|| view! {
        <div class="kpi-grid">
            {metrics
                .into_iter()
                .map(|m| {
                    if domain.gauges.contains(&m.key.as_str()) {
                        view! {
                            <RadialGauge title=m.title.clone() value=m.current variation=m.variation />
                        }
                        .into_any()
                    } else {
                        view! { <KpiCard metric=m /> }.into_any()
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    })
}
