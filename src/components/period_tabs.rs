use leptos::prelude::*;

use crate::config::Period;

#[component]
pub fn PeriodTabs(period: ReadSignal<Period>, set_period: WriteSignal<Period>) -> impl IntoView {
    view! {
        <div class="period-tabs">
            {Period::ALL
                .into_iter()
                .map(|p| view! {
                    <button
                        class="period-tab"
                        class:active=move || period.get() == p
                        on:click=move |_| {
                            if period.get_untracked() != p {
                                set_period.set(p);
                            }
                        }
                    >
                        {p.label()}
                    </button>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
