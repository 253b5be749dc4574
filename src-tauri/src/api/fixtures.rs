//! Hardcoded API documents compiled into the binary.

use serde_json::Value;

use super::router::Period;
use crate::error::KpiError;

fn fixture_source(name: &str) -> Option<&'static str> {
    let source = match name {
        "scrap" => include_str!("../../fixtures/scrap.json"),
        "quality" => include_str!("../../fixtures/quality.json"),
        "workflow" => include_str!("../../fixtures/workflow.json"),
        "program" => include_str!("../../fixtures/program.json"),
        "finance" => include_str!("../../fixtures/finance.json"),
        "hr" => include_str!("../../fixtures/hr.json"),
        "supply_chain" => include_str!("../../fixtures/supply_chain.json"),
        "payroll" => include_str!("../../fixtures/payroll.json"),
        _ => return None,
    };
    Some(source)
}

/// Parse a named fixture.
pub fn load_fixture(name: &str) -> Result<Value, KpiError> {
    let source = fixture_source(name)
        .ok_or_else(|| KpiError::Fixture(format!("no fixture named '{}'", name)))?;
    serde_json::from_str(source).map_err(|e| KpiError::Fixture(format!("{}: {}", name, e)))
}

/// Pick the payload for `period`.
///
/// A fixture keyed by period must carry the requested one; any other
/// document is served unchanged for every period.
pub fn select_period(fixture: Value, period: Period) -> Result<Value, KpiError> {
    match fixture {
        Value::Object(mut map)
            if map.contains_key(Period::Weekly.as_str())
                || map.contains_key(Period::Monthly.as_str()) =>
        {
            map.remove(period.as_str())
                .ok_or_else(|| KpiError::Fixture(format!("no {} payload", period)))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fixture() {
        assert!(matches!(load_fixture("marketing"), Err(KpiError::Fixture(_))));
    }

    #[test]
    fn test_select_period() {
        let doc = json!({ "weekly": { "a": 1 }, "monthly": { "a": 2 } });
        assert_eq!(select_period(doc.clone(), Period::Weekly).unwrap(), json!({ "a": 1 }));
        assert_eq!(select_period(doc, Period::Monthly).unwrap(), json!({ "a": 2 }));
    }

    #[test]
    fn test_missing_period_is_an_error() {
        let doc = json!({ "weekly": { "a": 1 } });
        assert!(select_period(doc, Period::Monthly).is_err());
    }

    #[test]
    fn test_unkeyed_document_served_for_every_period() {
        let doc = json!([{ "Semaine": "S1" }]);
        assert_eq!(select_period(doc.clone(), Period::Monthly).unwrap(), doc);
    }

    #[test]
    fn test_every_fixture_parses() {
        for name in [
            "scrap",
            "quality",
            "workflow",
            "program",
            "finance",
            "hr",
            "supply_chain",
            "payroll",
        ] {
            assert!(load_fixture(name).is_ok(), "fixture {} should parse", name);
        }
    }
}
