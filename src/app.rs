use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::sidebar::Sidebar;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::payroll::PayrollPage;
use crate::pages::settings::SettingsPage;
use crate::theme::{apply_theme, Theme, ThemeContext, THEME_PREFERENCE};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::System);
    provide_context(ThemeContext { theme, set_theme });

    // Load saved theme preference on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_preference(THEME_PREFERENCE).await {
                Ok(Some(saved)) => set_theme.set(Theme::parse(&saved)),
                Ok(None) => {}
                Err(e) => warn!("Failed to load theme preference: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page introuvable"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/dashboard/:slug") view=DashboardPage />
                        <Route path=path!("/payroll") view=PayrollPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
