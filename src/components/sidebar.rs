use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::{served_domains, DashboardDomain, DOMAINS, PAYROLL};

fn nav_link(domain: &'static DashboardDomain) -> impl IntoView {
    let href = if domain.slug == PAYROLL.slug {
        "/payroll".to_string()
    } else {
        format!("/dashboard/{}", domain.slug)
    };
    view! {
        <li class="nav-item">
            <a href=href class="nav-link">{domain.title}</a>
        </li>
    }
}

/// Navigation. Lists the whole catalogue until the shell reports its routes,
/// then only the dashboards it serves.
#[component]
pub fn Sidebar() -> impl IntoView {
    let (routes, set_routes) = signal::<Option<Vec<String>>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_routes().await {
                Ok(served) => set_routes.set(Some(served)),
                Err(e) => warn!("Failed to list API routes: {}", e),
            }
        });
    });

    let links = move || {
        let domains = match routes.get() {
            Some(served) => served_domains(&served),
            None => DOMAINS.iter().chain(std::iter::once(&PAYROLL)).collect(),
        };
        domains.into_iter().map(nav_link).collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"MSP KPI"</h1>
                <p class="sidebar-subtitle">"Tableau de bord industriel"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Vue d'ensemble"</a>
                </li>
                {links}
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Parametres"</a>
                </li>
            </ul>
        </nav>
    }
}
