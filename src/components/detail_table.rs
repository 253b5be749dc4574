//! Paginated, filterable drill-down table shared by every dashboard.
//!
//! Page and expansion state live in one `PageState` signal. Every filter
//! edit resets it to page 1; every page move collapses the open rows.

use leptos::prelude::*;

use crate::config::{Column, DashboardDomain, DETAIL_CHART_HEIGHT, DETAIL_CHART_WIDTH, ITEMS_PER_PAGE};
use crate::format::format_number;
use crate::kpi::pagination::{total_pages, PageState};
use crate::kpi::payload::{secondary_values, series_values};
use crate::kpi::records::{
    aggregate_by, distinct_dimensions, total, KeyedRecord, RecordFilter, RowKey,
};

use super::line_chart::LineChart;
use super::pagination_controls::PaginationControls;

fn cell_text(row: &KeyedRecord, column: &Column) -> String {
    if column.numeric {
        format_number(row.record.number(column.key))
    } else {
        row.record.text(column.key)
    }
}

#[component]
pub fn DetailTable(
    domain: &'static DashboardDomain,
    records: Signal<Vec<KeyedRecord>>,
) -> impl IntoView {
    let page = RwSignal::new(PageState::<RowKey>::new(ITEMS_PER_PAGE));
    let filter = RwSignal::new(RecordFilter::default());

    let filtered = Memo::new(move |_| filter.with(|f| records.with(|all| f.apply(all))));
    let dimensions = Memo::new(move |_| {
        records.with(|all| distinct_dimensions(all.iter().map(|r| &r.record)))
    });
    let page_count = Signal::derive(move || {
        let per_page = page.with(|p| p.items_per_page());
        filtered.with(|rows| total_pages(rows.len(), per_page))
    });

    // New data may shrink the result set below the current page.
    Effect::new(move |_| {
        let count = filtered.with(Vec::len);
        page.update(|p| p.on_data_change(count));
    });

    let on_query = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter.update(|f| f.query = value);
        page.update(|p| p.on_filter_change());
    };

    let on_dimension = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter.update(|f| f.dimension = (!value.is_empty()).then_some(value));
        page.update(|p| p.on_filter_change());
    };

    let column_count = domain.columns.len() + 1;

    view! {
        <section class="detail-table">
            <div class="detail-toolbar">
                <input
                    type="text"
                    class="detail-filter-input"
                    placeholder="Filtrer..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=on_query
                />
                <select
                    class="detail-dimension-select"
                    prop:value=move || filter.with(|f| f.dimension.clone().unwrap_or_default())
                    on:change=on_dimension
                >
                    <option value="">"Toutes les dimensions"</option>
                    {move || {
                        dimensions
                            .get()
                            .into_iter()
                            .map(|d| view! { <option value=d.clone()>{d.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <Show when=move || filter.with(|f| !f.is_empty())>
                    <button
                        class="btn btn-small btn-secondary"
                        on:click=move |_| {
                            filter.set(RecordFilter::default());
                            page.update(|p| p.on_filter_change());
                        }
                    >
                        "Effacer"
                    </button>
                </Show>
                <span class="detail-count">
                    {move || {
                        let shown = filtered.with(Vec::len);
                        let all = records.with(Vec::len);
                        if shown == all {
                            format!("{} lignes", all)
                        } else {
                            format!("{} / {}", shown, all)
                        }
                    }}
                </span>
            </div>

            {domain.measure.map(|measure| view! {
                <DimensionSummary rows=filtered.into() measure=measure />
            })}

            <table class="kpi-table">
                <thead>
                    <tr>
                        <th class="expand-col"></th>
                        {domain
                            .columns
                            .iter()
                            .map(|c| view! {
                                <th class:numeric=c.numeric>{c.label}</th>
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = page.get();
                        let visible = filtered.with(|rows| state.slice(rows).visible.to_vec());
                        if visible.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table-empty" colspan=column_count.to_string()>
                                        "Aucune donnee"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        visible
                            .into_iter()
                            .map(|row| {
                                let open = state.is_open(&row.key);
                                view! {
                                    <DetailRow
                                        domain=domain
                                        row=row
                                        open=open
                                        column_count=column_count
                                        on_toggle=Callback::new(move |key: RowKey| {
                                            page.update(|p| {
                                                p.toggle_row(key);
                                            });
                                        })
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <PaginationControls
                current=Signal::derive(move || page.with(|p| p.current_page()))
                total=page_count
                on_prev=move |_: ()| page.update(|p| p.prev())
                on_next=move |_: ()| {
                    let total = page_count.get_untracked();
                    page.update(|p| p.next(total));
                }
            />
        </section>
    }
}

/// One table row plus, when open, its drill-down panel.
#[component]
fn DetailRow(
    domain: &'static DashboardDomain,
    row: KeyedRecord,
    open: bool,
    column_count: usize,
    on_toggle: Callback<RowKey>,
) -> impl IntoView {
    let key = row.key.clone();
    let cells = domain
        .columns
        .iter()
        .map(|c| {
            let text = cell_text(&row, c);
            view! { <td class:numeric=c.numeric>{text}</td> }
        })
        .collect::<Vec<_>>();

    view! {
        <tr class="detail-row" class:open=open on:click=move |_| on_toggle.run(key.clone())>
            <td class="expand-col">{if open { "\u{25BE}" } else { "\u{25B8}" }}</td>
            {cells}
        </tr>
        {open.then(|| view! {
            <tr class="detail-expanded">
                <td colspan=column_count.to_string()>
                    <DetailPanel domain=domain row=row.clone() />
                </td>
            </tr>
        })}
    }
}

#[component]
fn DetailPanel(domain: &'static DashboardDomain, row: KeyedRecord) -> impl IntoView {
    let fields = row
        .record
        .scalar_fields()
        .into_iter()
        .map(|(k, v)| (k.replace('_', " "), v))
        .collect::<Vec<_>>();
    let history = row.record.history(domain.series_order);
    let chart_id = format!("detail-{}", row.key.as_str().replace(|c: char| !c.is_alphanumeric(), "-"));

    view! {
        <div class="detail-panel">
            <dl class="detail-fields">
                {fields
                    .into_iter()
                    .map(|(k, v)| view! {
                        <dt>{k}</dt>
                        <dd>{v}</dd>
                    })
                    .collect::<Vec<_>>()}
            </dl>
            {(history.len() > 1).then(|| view! {
                <div class="detail-trend">
                    <LineChart
                        id=chart_id
                        values=series_values(&history)
                        secondary=secondary_values(&history)
                        width=DETAIL_CHART_WIDTH
                        height=DETAIL_CHART_HEIGHT
                        labels={history.iter().map(|p| p.label.clone()).collect::<Vec<_>>()}
                    />
                </div>
            })}
        </div>
    }
}

/// Per-dimension totals of the filtered rows as horizontal bars.
#[component]
fn DimensionSummary(rows: Signal<Vec<KeyedRecord>>, measure: &'static str) -> impl IntoView {
    let groups = Memo::new(move |_| rows.with(|r| aggregate_by(r.iter().map(|k| &k.record), measure)));

    view! {
        <div class="dimension-summary">
            {move || {
                let groups = groups.get();
                let max = groups.iter().map(|g| g.total.abs()).fold(0.0_f64, f64::max);
                let bars = groups
                    .into_iter()
                    .take(6)
                    .map(|g| {
                        let width = if max > 0.0 { g.total.abs() / max * 100.0 } else { 0.0 };
                        view! {
                            <div class="summary-row">
                                <span class="summary-label">{g.dimension.clone()}</span>
                                <div class="summary-bar-track">
                                    <div class="summary-bar" style=format!("width: {:.1}%", width)></div>
                                </div>
                                <span class="summary-value">{format_number(g.total)}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="summary-total">
                        {format!("Total : {}", format_number(rows.with(|r| total(r.iter().map(|k| &k.record), measure))))}
                    </div>
                    {bars}
                }
            }}
        </div>
    }
}
