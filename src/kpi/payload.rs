//! The JSON contract between the API routes and the pages.
//!
//! A dashboard payload is an object whose keys name KPIs
//! (`Program_Semaine`, `Reclamations_Clients`, ...). Each KPI object carries a
//! current value, a `Variation_Vs_*` delta and a `Historique_*` / `Serie_*`
//! array of `{ Valeur, Label, Mois?, Annee?, Semaine? }`. An optional
//! top-level `Details` array holds the drill-down rows.
//!
//! All numeric coercion happens here. Series leave this module oldest first.

use serde_json::Value;

use super::records::DetailRecord;

const CURRENT_VALUE_KEYS: &[&str] = &["Valeur_Actuelle", "Valeur", "Total", "Taux"];
const SECONDARY_VALUE_KEYS: &[&str] = &["Objectif", "Budget", "Prevision"];
const DETAILS_KEY: &str = "Details";

/// Strip the response envelope: `data.data`, then `data`, then the document itself.
pub fn unwrap_envelope(json: &Value) -> &Value {
    let data = json.get("data").filter(|v| !v.is_null());
    data.and_then(|d| d.get("data"))
        .filter(|v| !v.is_null())
        .or(data)
        .unwrap_or(json)
}

/// Lenient number conversion. Anything that is not a finite number becomes 0.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn optional_number(obj: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).filter(|v| !v.is_null()).map(coerce_number)
}

/// Integer date parts. Text such as `"S12"` or `"2024-03"` is not a date part.
fn optional_int(obj: &serde_json::Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// How a source orders its history arrays when the points carry no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// One period of a KPI history.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    /// Target, budget or forecast for the same period.
    pub secondary: Option<f64>,
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub week: Option<i64>,
}

impl SeriesPoint {
    /// Parse one history entry. Non-objects are skipped.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let year = optional_int(obj, "Annee");
        let month = optional_int(obj, "Mois");
        let week = optional_int(obj, "Semaine");

        let label = match obj.get("Label").and_then(Value::as_str) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => match (week, month, year) {
                (Some(w), _, _) => format!("S{}", w),
                (None, Some(m), Some(y)) => format!("{:02}/{}", m, y),
                (None, Some(m), None) => format!("M{}", m),
                _ => String::new(),
            },
        };

        Some(Self {
            label,
            value: obj.get("Valeur").map(coerce_number).unwrap_or(0.0),
            secondary: SECONDARY_VALUE_KEYS
                .iter()
                .find_map(|k| optional_number(obj, k)),
            year,
            month,
            week,
        })
    }

    fn sort_key(&self) -> Option<(i64, i64)> {
        Some((self.year?, self.week.or(self.month)?))
    }
}

/// Put a history into canonical oldest-first order.
///
/// Dated points (year plus week or month on every point) are sorted
/// chronologically; otherwise the declared source order decides.
pub fn normalize_order(mut points: Vec<SeriesPoint>, order: SeriesOrder) -> Vec<SeriesPoint> {
    if !points.is_empty() && points.iter().all(|p| p.sort_key().is_some()) {
        points.sort_by_key(|p| p.sort_key());
        return points;
    }
    if order == SeriesOrder::NewestFirst {
        points.reverse();
    }
    points
}

pub fn parse_series(items: &[Value], order: SeriesOrder) -> Vec<SeriesPoint> {
    let points = items.iter().filter_map(SeriesPoint::from_json).collect();
    normalize_order(points, order)
}

pub fn series_values(points: &[SeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Secondary values, only when every point has one.
pub fn secondary_values(points: &[SeriesPoint]) -> Option<Vec<f64>> {
    if points.is_empty() {
        return None;
    }
    points.iter().map(|p| p.secondary).collect()
}

/// "Reclamations_Clients" -> "Reclamations Clients"
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One KPI card: current value, delta and trend.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiMetric {
    pub key: String,
    pub title: String,
    pub current: f64,
    pub variation: Option<f64>,
    pub history: Vec<SeriesPoint>,
}

impl KpiMetric {
    pub fn from_json(key: &str, value: &Value, order: SeriesOrder) -> Option<Self> {
        let obj = value.as_object()?;

        let history = obj
            .iter()
            .find(|(k, v)| (k.starts_with("Historique_") || k.starts_with("Serie_")) && v.is_array())
            .and_then(|(_, v)| v.as_array())
            .map(|items| parse_series(items, order))
            .unwrap_or_default();

        let variation = obj
            .iter()
            .find(|(k, v)| k.starts_with("Variation_Vs_") && !v.is_null())
            .map(|(_, v)| coerce_number(v));

        let current = CURRENT_VALUE_KEYS
            .iter()
            .find_map(|k| optional_number(obj, k))
            .or_else(|| history.last().map(|p| p.value))
            .unwrap_or(0.0);

        Some(Self {
            key: key.to_string(),
            title: humanize_key(key),
            current,
            variation,
            history,
        })
    }

    pub fn values(&self) -> Vec<f64> {
        series_values(&self.history)
    }

    pub fn labels(&self) -> Vec<String> {
        self.history.iter().map(|p| p.label.clone()).collect()
    }
}

/// Everything one dashboard view needs from a response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub metrics: Vec<KpiMetric>,
    pub details: Vec<DetailRecord>,
}

impl DashboardData {
    /// Build from a raw response, envelope included.
    pub fn from_json(json: &Value, order: SeriesOrder) -> Self {
        match unwrap_envelope(json) {
            Value::Array(rows) => Self {
                metrics: Vec::new(),
                details: rows.iter().filter_map(DetailRecord::from_json).collect(),
            },
            Value::Object(obj) => {
                let details = obj
                    .get(DETAILS_KEY)
                    .and_then(Value::as_array)
                    .map(|rows| rows.iter().filter_map(DetailRecord::from_json).collect())
                    .unwrap_or_default();
                let metrics = obj
                    .iter()
                    .filter(|(k, _)| k.as_str() != DETAILS_KEY)
                    .filter_map(|(k, v)| KpiMetric::from_json(k, v, order))
                    .collect();
                Self { metrics, details }
            }
            _ => Self::default(),
        }
    }

    pub fn metric(&self, key: &str) -> Option<&KpiMetric> {
        self.metrics.iter().find(|m| m.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_shapes() {
        let inner = json!({ "Scrap": { "Valeur": 3 } });
        assert_eq!(unwrap_envelope(&json!({ "data": { "data": inner.clone() } })), &inner);
        assert_eq!(unwrap_envelope(&json!({ "data": inner.clone() })), &inner);
        assert_eq!(unwrap_envelope(&inner), &inner);
        assert_eq!(unwrap_envelope(&json!({ "data": null, "x": 1 })), &json!({ "data": null, "x": 1 }));
        assert_eq!(unwrap_envelope(&json!({ "data": [1, 2] })), &json!([1, 2]));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(12.5)), 12.5);
        assert_eq!(coerce_number(&json!(" 42 ")), 42.0);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!("n/a")), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
        assert_eq!(coerce_number(&json!("inf")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!({ "Valeur": 3 })), 0.0);
    }

    #[test]
    fn test_series_point_fields() {
        let p = SeriesPoint::from_json(&json!({
            "Valeur": "87.5", "Label": "S12", "Semaine": 12, "Annee": 2024, "Objectif": 90
        }))
        .unwrap();
        assert_eq!(p.label, "S12");
        assert_eq!(p.value, 87.5);
        assert_eq!(p.secondary, Some(90.0));
        assert_eq!((p.year, p.week, p.month), (Some(2024), Some(12), None));

        let p = SeriesPoint::from_json(&json!({ "Valeur": null, "Mois": 3, "Annee": 2024 })).unwrap();
        assert_eq!(p.value, 0.0);
        assert_eq!(p.label, "03/2024");

        assert!(SeriesPoint::from_json(&json!(5)).is_none());
    }

    #[test]
    fn test_dated_series_sorted_oldest_first() {
        let items = vec![
            json!({ "Valeur": 4, "Semaine": 2, "Annee": 2025 }),
            json!({ "Valeur": 3, "Semaine": 52, "Annee": 2024 }),
            json!({ "Valeur": 2, "Semaine": 51, "Annee": 2024 }),
        ];
        // Declared order is ignored when every point is dated.
        let points = parse_series(&items, SeriesOrder::OldestFirst);
        assert_eq!(series_values(&points), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_undated_series_follow_declared_order() {
        let items = vec![
            json!({ "Valeur": 9, "Label": "W4" }),
            json!({ "Valeur": 8, "Label": "W3" }),
            json!({ "Valeur": 7, "Label": "W2" }),
        ];
        let newest_first = parse_series(&items, SeriesOrder::NewestFirst);
        assert_eq!(series_values(&newest_first), vec![7.0, 8.0, 9.0]);

        let oldest_first = parse_series(&items, SeriesOrder::OldestFirst);
        assert_eq!(oldest_first[0].label, "W4");
    }

    #[test]
    fn test_text_dates_fall_back_to_declared_order() {
        let weeks = vec![
            json!({ "Valeur": 12, "Label": "S12", "Semaine": "S12", "Annee": 2024 }),
            json!({ "Valeur": 11, "Label": "S11", "Semaine": "S11", "Annee": 2024 }),
            json!({ "Valeur": 10, "Label": "S10", "Semaine": "S10", "Annee": 2024 }),
        ];
        let points = parse_series(&weeks, SeriesOrder::NewestFirst);
        assert_eq!(points[0].label, "S10");
        assert!(points.iter().all(|p| p.week.is_none()));

        let months = vec![
            json!({ "Valeur": 3, "Mois": "2024-03", "Annee": 2024 }),
            json!({ "Valeur": 2, "Mois": "2024-02", "Annee": 2024 }),
        ];
        let points = parse_series(&months, SeriesOrder::NewestFirst);
        assert_eq!(series_values(&points), vec![2.0, 3.0]);
    }

    #[test]
    fn test_numeric_string_dates_still_sort() {
        let items = vec![
            json!({ "Valeur": 2, "Semaine": "11", "Annee": "2024" }),
            json!({ "Valeur": 1, "Semaine": "10", "Annee": "2024" }),
        ];
        let points = parse_series(&items, SeriesOrder::OldestFirst);
        assert_eq!(series_values(&points), vec![1.0, 2.0]);
        assert_eq!(points[0].week, Some(10));
    }

    #[test]
    fn test_secondary_values_need_every_point() {
        let full = parse_series(
            &[json!({ "Valeur": 1, "Budget": 2 }), json!({ "Valeur": 3, "Budget": 4 })],
            SeriesOrder::OldestFirst,
        );
        assert_eq!(secondary_values(&full), Some(vec![2.0, 4.0]));

        let partial = parse_series(
            &[json!({ "Valeur": 1, "Budget": 2 }), json!({ "Valeur": 3 })],
            SeriesOrder::OldestFirst,
        );
        assert_eq!(secondary_values(&partial), None);
        assert_eq!(secondary_values(&[]), None);
    }

    #[test]
    fn test_metric_from_payload() {
        let metric = KpiMetric::from_json(
            "Reclamations_Clients",
            &json!({
                "Valeur_Actuelle": 6,
                "Variation_Vs_Semaine_Precedente": "-2",
                "Historique_4_Semaines": [
                    { "Valeur": 8, "Label": "S9", "Semaine": 9, "Annee": 2024 },
                    { "Valeur": 6, "Label": "S10", "Semaine": 10, "Annee": 2024 }
                ]
            }),
            SeriesOrder::OldestFirst,
        )
        .unwrap();
        assert_eq!(metric.title, "Reclamations Clients");
        assert_eq!(metric.current, 6.0);
        assert_eq!(metric.variation, Some(-2.0));
        assert_eq!(metric.labels(), vec!["S9", "S10"]);
    }

    #[test]
    fn test_metric_current_falls_back_to_latest_point() {
        let metric = KpiMetric::from_json(
            "Taux_Service",
            &json!({ "Serie_5_Mois": [{ "Valeur": 91 }, { "Valeur": 94 }] }),
            SeriesOrder::OldestFirst,
        )
        .unwrap();
        assert_eq!(metric.current, 94.0);
        assert_eq!(metric.variation, None);
    }

    #[test]
    fn test_dashboard_from_enveloped_object() {
        let json = json!({
            "data": {
                "Scrap_Semaine": { "Valeur": 120, "Historique_4_Semaines": [] },
                "Details": [
                    { "Date": "2024-03-04", "Zone": "Zone A", "Quantite": 4 },
                    "not a record"
                ]
            }
        });
        let data = DashboardData::from_json(&json, SeriesOrder::OldestFirst);
        assert_eq!(data.metrics.len(), 1);
        assert_eq!(data.metric("Scrap_Semaine").unwrap().current, 120.0);
        assert_eq!(data.details.len(), 1);
    }

    #[test]
    fn test_dashboard_from_bare_array() {
        let json = json!([{ "Semaine": "S12", "Operateur": "Martin" }]);
        let data = DashboardData::from_json(&json, SeriesOrder::OldestFirst);
        assert!(data.metrics.is_empty());
        assert_eq!(data.details.len(), 1);

        let data = DashboardData::from_json(&json!("oops"), SeriesOrder::OldestFirst);
        assert_eq!(data, DashboardData::default());
    }
}
