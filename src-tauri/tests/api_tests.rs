use std::io::Write;

use serde_json::Value;

use msp_kpi_tauri::api::{parse_route, respond, Envelope, Period};
use msp_kpi_tauri::{default_routes, handle, load_routes, resolve_routes, KpiError};

const DASHBOARDS: [&str; 7] = [
    "scrap",
    "quality",
    "workflow",
    "program",
    "finance",
    "hr",
    "supply_chain",
];

/// Strip whichever envelope the route uses.
fn payload(json: &Value, envelope: Envelope) -> &Value {
    match envelope {
        Envelope::Nested => &json["data"]["data"],
        Envelope::Data => &json["data"],
        Envelope::Bare => json,
    }
}

fn history_of(metric: &Value) -> Option<&Vec<Value>> {
    metric.as_object()?.iter().find_map(|(k, v)| {
        if k.starts_with("Historique_") || k.starts_with("Serie_") {
            v.as_array()
        } else {
            None
        }
    })
}

#[test]
fn test_every_dashboard_serves_both_periods() {
    let registry = default_routes();
    for domain in DASHBOARDS {
        let envelope = registry.find(domain).unwrap().envelope;
        for period in ["weekly", "monthly"] {
            let path = format!("/api/{}?type={}", domain, period);
            let json = handle(&registry, &path).unwrap_or_else(|e| panic!("{}: {}", path, e));
            let body = payload(&json, envelope);

            let details = body["Details"].as_array();
            assert!(
                details.map_or(false, |d| !d.is_empty()),
                "{} should carry detail rows",
                path
            );

            let metrics: Vec<&Value> = body
                .as_object()
                .unwrap()
                .iter()
                .filter(|(k, v)| *k != "Details" && v.is_object())
                .map(|(_, v)| v)
                .collect();
            assert!(!metrics.is_empty(), "{} should carry metrics", path);
            for metric in metrics {
                let history = history_of(metric);
                assert!(
                    history.map_or(false, |h| h.len() >= 2),
                    "{} metric without a usable history: {}",
                    path,
                    metric
                );
            }
        }
    }
}

#[test]
fn test_weekly_and_monthly_differ() {
    let registry = default_routes();
    let weekly = handle(&registry, "/api/scrap?type=weekly").unwrap();
    let monthly = handle(&registry, "/api/scrap?type=monthly").unwrap();
    assert_ne!(weekly["data"]["data"], monthly["data"]["data"]);
    assert!(weekly["data"]["data"]["Taux_Scrap"]["Historique_4_Semaines"].is_array());
    assert!(monthly["data"]["data"]["Taux_Scrap"]["Historique_5_Mois"].is_array());
}

#[test]
fn test_missing_type_serves_weekly() {
    let registry = default_routes();
    let implicit = handle(&registry, "/api/finance").unwrap();
    let explicit = handle(&registry, "/api/finance?type=weekly").unwrap();
    assert_eq!(implicit["data"], explicit["data"]);
}

#[test]
fn test_enveloped_responses_are_stamped() {
    let registry = default_routes();
    let json = handle(&registry, "/api/quality?type=weekly").unwrap();
    let stamp = json["generated_at"].as_str().expect("generated_at should be a string");
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());

    let bare = handle(&registry, "/api/hr?type=weekly").unwrap();
    assert!(bare.get("generated_at").is_none());
}

#[test]
fn test_payroll_is_a_bare_array() {
    let registry = default_routes();
    let json = handle(&registry, "/api/payroll?type=weekly").unwrap();
    let rows = json.as_array().expect("payroll should be a bare array");
    assert!(rows.len() > 5, "payroll should span more than one page");
    for row in rows {
        assert!(row["Operateur"].is_string());
        assert!(row["Montant"].is_number());
    }

    // The same document answers every period.
    assert_eq!(json, handle(&registry, "/api/payroll?type=monthly").unwrap());
}

#[test]
fn test_errors() {
    let registry = default_routes();
    assert!(matches!(
        handle(&registry, "/api/marketing?type=weekly"),
        Err(KpiError::UnknownDomain(_))
    ));
    assert!(matches!(
        handle(&registry, "/api/scrap?type=yearly"),
        Err(KpiError::UnsupportedPeriod(_))
    ));
    assert!(matches!(handle(&registry, "/health"), Err(KpiError::InvalidRoute(_))));

    let err: String = handle(&registry, "/api/marketing").unwrap_err().into();
    assert!(err.contains("marketing"));
}

#[test]
fn test_respond_with_parsed_request() {
    let registry = default_routes();
    let request = parse_route("/api/program?type=monthly").unwrap();
    assert_eq!(request.period, Period::Monthly);
    let json = respond(&registry, &request).unwrap();
    assert!(json["data"]["data"]["Realisation_Programme"].is_object());
}

#[test]
fn test_load_routes_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[routes]]
domain = "costs"
fixture = "finance"
envelope = "bare"
"#
    )
    .unwrap();

    let registry = load_routes(file.path()).unwrap();
    assert_eq!(registry.domains(), vec!["costs".to_string()]);

    let json = handle(&registry, "/api/costs?type=monthly").unwrap();
    assert!(json["Details"].is_array());
    assert!(matches!(
        handle(&registry, "/api/finance"),
        Err(KpiError::UnknownDomain(_))
    ));
}

#[test]
fn test_load_routes_rejects_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[[routes]]\ndomain = ").unwrap();
    assert!(load_routes(file.path()).is_err());
}

#[test]
fn test_resolve_routes_falls_back_to_embedded() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("routes.toml");
    assert_eq!(resolve_routes(&missing).routes.len(), default_routes().routes.len());

    std::fs::write(&missing, "not toml at all [").unwrap();
    assert!(resolve_routes(&missing).find("scrap").is_some());
}
