use leptos::prelude::*;

use crate::config::PAYROLL;
use crate::pages::dashboard::DashboardView;

/// Weekly payroll calculation rows from the sample route. The route ignores
/// `type`, so there are no period tabs.
#[component]
pub fn PayrollPage() -> impl IntoView {
    view! { <DashboardView domain=&PAYROLL show_periods=false /> }
}
