//! Drill-down rows (scrap incidents, cost-center lines, operator hours...).
//!
//! Field names vary per dashboard, so a record keeps its JSON object and
//! exposes typed accessors on top. Records are read-only once loaded.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use super::payload::{coerce_number, parse_series, SeriesOrder, SeriesPoint};

const PERIOD_KEYS: &[&str] = &["Date", "Semaine", "Mois", "Periode"];
const DIMENSION_KEYS: &[&str] = &[
    "Zone",
    "Machine",
    "Departement",
    "Cellule",
    "Operateur",
    "Fournisseur",
    "Client",
    "Centre_Cout",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord {
    fields: Map<String, Value>,
}

impl DetailRecord {
    pub fn from_json(value: &Value) -> Option<Self> {
        value.as_object().map(|obj| Self {
            fields: obj.clone(),
        })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Display text for a field. Numbers and booleans are stringified; null and missing give "".
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    pub fn number(&self, key: &str) -> f64 {
        self.fields.get(key).map(coerce_number).unwrap_or(0.0)
    }

    fn first_present(&self, keys: &[&str]) -> String {
        keys.iter()
            .map(|k| self.text(k))
            .find(|t| !t.is_empty())
            .unwrap_or_default()
    }

    /// Period label: first of `Date`, `Semaine`, `Mois`, `Periode`.
    pub fn period(&self) -> String {
        self.first_present(PERIOD_KEYS)
    }

    /// Categorical dimension: zone, machine, department, cell, operator...
    pub fn dimension(&self) -> String {
        self.first_present(DIMENSION_KEYS)
    }

    /// Per-record trend, when the row carries its own `Historique_*` / `Serie_*` array.
    pub fn history(&self, order: SeriesOrder) -> Vec<SeriesPoint> {
        self.fields
            .iter()
            .find(|(k, v)| (k.starts_with("Historique_") || k.starts_with("Serie_")) && v.is_array())
            .and_then(|(_, v)| v.as_array())
            .map(|items| parse_series(items, order))
            .unwrap_or_default()
    }

    /// Scalar fields in payload order, for the expanded detail panel.
    pub fn scalar_fields(&self) -> Vec<(&str, String)> {
        self.fields
            .iter()
            .filter(|(_, v)| !v.is_array() && !v.is_object() && !v.is_null())
            .map(|(k, _)| (k.as_str(), self.text(k)))
            .collect()
    }

    /// Case-insensitive substring match over every text field.
    pub fn contains_text(&self, needle_lower: &str) -> bool {
        self.fields.values().any(|v| match v {
            Value::String(s) => s.to_lowercase().contains(needle_lower),
            Value::Number(n) => n.to_string().contains(needle_lower),
            _ => false,
        })
    }
}

/// Stable identity of a row, independent of its position on a page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(String);

impl RowKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRecord {
    pub key: RowKey,
    pub record: DetailRecord,
}

/// Key every record by `period|dimension`, suffixing `#n` on the n-th
/// repeat so keys stay unique. Keys are assigned once per payload, so they
/// survive filtering and paging.
pub fn assign_row_keys(records: Vec<DetailRecord>) -> Vec<KeyedRecord> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    records
        .into_iter()
        .map(|record| {
            let base = format!("{}|{}", record.period(), record.dimension());
            let count = seen.entry(base.clone()).or_insert(0);
            let key = if *count == 0 {
                base
            } else {
                format!("{}#{}", base, count)
            };
            *count += 1;
            KeyedRecord {
                key: RowKey(key),
                record,
            }
        })
        .collect()
}

/// Text search plus an optional exact dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub query: String,
    pub dimension: Option<String>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.dimension.is_none()
    }

    pub fn matches(&self, record: &DetailRecord) -> bool {
        if let Some(dim) = &self.dimension {
            if &record.dimension() != dim {
                return false;
            }
        }
        let q = self.query.trim().to_lowercase();
        q.is_empty() || record.contains_text(&q)
    }

    pub fn apply(&self, records: &[KeyedRecord]) -> Vec<KeyedRecord> {
        records
            .iter()
            .filter(|r| self.matches(&r.record))
            .cloned()
            .collect()
    }
}

/// Sum of one measure for one dimension value.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub dimension: String,
    pub total: f64,
    pub count: usize,
}

/// Sum `measure` per dimension, largest total first (ties by name).
pub fn aggregate_by<'a, I>(records: I, measure: &str) -> Vec<Aggregate>
where
    I: IntoIterator<Item = &'a DetailRecord>,
{
    let mut by_dimension: HashMap<String, Aggregate> = HashMap::new();
    for record in records {
        let dimension = record.dimension();
        let group = by_dimension
            .entry(dimension.clone())
            .or_insert_with(|| Aggregate {
                dimension,
                total: 0.0,
                count: 0,
            });
        group.total += record.number(measure);
        group.count += 1;
    }
    let mut groups: Vec<Aggregate> = by_dimension.into_values().collect();
    groups.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.dimension.cmp(&b.dimension))
    });
    groups
}

pub fn total<'a, I>(records: I, measure: &str) -> f64
where
    I: IntoIterator<Item = &'a DetailRecord>,
{
    records.into_iter().map(|r| r.number(measure)).sum()
}

/// Sorted, de-duplicated dimension values for the filter dropdown.
pub fn distinct_dimensions<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a DetailRecord>,
{
    let mut dims: Vec<String> = records
        .into_iter()
        .map(DetailRecord::dimension)
        .filter(|d| !d.is_empty())
        .collect();
    dims.sort();
    dims.dedup();
    dims
}
