//! Local API behind the dashboard pages.
//!
//! The front end asks for `GET /api/<domain>?type=weekly|monthly`; this module
//! parses the path, looks the domain up in the route registry and answers
//! with the embedded fixture wrapped in the route's envelope. There is no
//! real backend: every answer is a hardcoded document.
//!
//! # Example
//!
//! ```ignore
//! use msp_kpi_tauri::api::{default_routes, handle};
//!
//! let registry = default_routes();
//! let json = handle(&registry, "/api/scrap?type=monthly")?;
//! assert!(json["data"]["data"]["Taux_Scrap"].is_object());
//! ```

mod fixtures;
mod registry;
mod router;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::KpiError;

pub use fixtures::{load_fixture, select_period};
pub use registry::{default_routes, load_routes, Envelope, RouteConfig, RouteRegistry};
pub use router::{parse_route, ApiRequest, Period};

/// Answer a parsed request.
pub fn respond(registry: &RouteRegistry, request: &ApiRequest) -> Result<Value, KpiError> {
    let route = registry
        .find(&request.domain)
        .ok_or_else(|| KpiError::UnknownDomain(request.domain.clone()))?;

    let fixture = load_fixture(&route.fixture)?;
    let payload = select_period(fixture, request.period)?;
    debug!(
        "Serving {} ({}) from fixture '{}'",
        request.domain,
        request.period.as_str(),
        route.fixture
    );

    Ok(wrap(payload, route.envelope))
}

/// Parse `path` and answer it.
pub fn handle(registry: &RouteRegistry, path: &str) -> Result<Value, KpiError> {
    let request = parse_route(path)?;
    respond(registry, &request)
}

fn wrap(payload: Value, envelope: Envelope) -> Value {
    let generated_at = Utc::now().to_rfc3339();
    match envelope {
        Envelope::Nested => json!({ "data": { "data": payload }, "generated_at": generated_at }),
        Envelope::Data => json!({ "data": payload, "generated_at": generated_at }),
        Envelope::Bare => payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_envelopes() {
        let payload = json!({ "Effectif": { "Valeur_Actuelle": 420 } });

        let nested = wrap(payload.clone(), Envelope::Nested);
        assert_eq!(nested["data"]["data"], payload);
        assert!(nested["generated_at"].is_string());

        let data = wrap(payload.clone(), Envelope::Data);
        assert_eq!(data["data"], payload);

        assert_eq!(wrap(payload.clone(), Envelope::Bare), payload);
    }

    #[test]
    fn test_unknown_domain() {
        let registry = default_routes();
        let err = handle(&registry, "/api/marketing?type=weekly").unwrap_err();
        assert!(matches!(err, KpiError::UnknownDomain(ref d) if d == "marketing"));
    }
}
