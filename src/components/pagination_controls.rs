use leptos::prelude::*;

/// Previous / next buttons with a "page x / y" readout. Buttons are disabled
/// at the boundaries so the table never asks for an out-of-range page.
#[component]
pub fn PaginationControls(
    current: Signal<usize>,
    total: Signal<usize>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn btn-small btn-secondary"
                disabled=move || current.get() <= 1
                on:click=move |_| on_prev.run(())
            >
                "Precedent"
            </button>
            <span class="pagination-status">
                {move || format!("Page {} / {}", current.get(), total.get().max(1))}
            </span>
            <button
                class="btn btn-small btn-secondary"
                disabled=move || current.get() >= total.get()
                on:click=move |_| on_next.run(())
            >
                "Suivant"
            </button>
        </div>
    }
}
