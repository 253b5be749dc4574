use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::theme::{Theme, ThemeContext, THEME_PREFERENCE};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    let (status, set_status) = signal::<Option<String>>(None);

    let on_theme_change = move |ev: leptos::ev::Event| {
        let theme = Theme::parse(&event_target_value(&ev));
        ctx.set_theme.set(theme);
        spawn_local(async move {
            match api::set_preference(THEME_PREFERENCE, theme.as_str()).await {
                Ok(()) => set_status.set(Some("Theme enregistre".to_string())),
                Err(e) => set_status.set(Some(format!("Echec de l'enregistrement : {}", e))),
            }
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Parametres"</h2>

            <section class="settings-section">
                <h3>"Apparence"</h3>
                <div class="form-group">
                    <label for="theme-select">"Theme"</label>
                    <select id="theme-select" class="input" on:change=on_theme_change>
                        {Theme::ALL
                            .into_iter()
                            .map(|t| view! {
                                <option value=t.as_str() selected=move || ctx.theme.get() == t>
                                    {t.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <Show when=move || status.get().is_some()>
                        <span class="status-text">{move || status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>
        </div>
    }
}
