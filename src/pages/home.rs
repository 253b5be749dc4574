use leptos::prelude::*;

use crate::config::{DOMAINS, PAYROLL};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Tableau de bord MSP"</h2>
            <p class="page-description">
                "Indicateurs hebdomadaires et mensuels par domaine, avec le detail de chaque ligne."
            </p>

            <div class="card-grid">
                {DOMAINS
                    .iter()
                    .chain(std::iter::once(&PAYROLL))
                    .map(|d| {
                        let href = if d.slug == PAYROLL.slug {
                            "/payroll".to_string()
                        } else {
                            format!("/dashboard/{}", d.slug)
                        };
                        view! {
                            <div class="card">
                                <h3>{d.title}</h3>
                                <p>{d.subtitle}</p>
                                <a href=href class="btn btn-primary">"Ouvrir"</a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
