use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::KpiError;

/// Reporting window selected with `?type=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = KpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            _ => Err(KpiError::UnsupportedPeriod(s.to_string())),
        }
    }
}

/// A parsed `GET /api/<domain>?type=<period>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub domain: String,
    pub period: Period,
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Parse an API path. A missing `type` means weekly; an empty one is rejected.
pub fn parse_route(path: &str) -> Result<ApiRequest, KpiError> {
    let base = Url::parse("http://localhost/").map_err(|e| KpiError::InvalidRoute(e.to_string()))?;
    let url = base
        .join(path.trim())
        .map_err(|e| KpiError::InvalidRoute(format!("{}: {}", path, e)))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let domain = match segments.as_slice() {
        ["api", domain] => domain.to_string(),
        _ => return Err(KpiError::InvalidRoute(path.to_string())),
    };
    if !is_valid_domain(&domain) {
        return Err(KpiError::InvalidRoute(path.to_string()));
    }

    let period = match url.query_pairs().find(|(k, _)| k == "type") {
        Some((_, value)) => value.parse()?,
        None => Period::default(),
    };

    Ok(ApiRequest { domain, period })
}
