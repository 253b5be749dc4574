//! Route registry: which fixture answers which domain, and in which envelope.
//!
//! - `default_routes()` reads the table compiled into the binary
//! - `load_routes(path)` reads an override from disk

use std::path::Path;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Shape of the JSON wrapped around a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope {
    /// `{ "data": { "data": payload } }`
    Nested,
    /// `{ "data": payload }`
    Data,
    /// The payload itself.
    Bare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub domain: String,
    pub fixture: String,
    pub envelope: Envelope,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRegistry {
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl RouteRegistry {
    pub fn find(&self, domain: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|r| r.domain == domain)
    }

    pub fn domains(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.domain.clone()).collect()
    }

    fn validate(&self) -> Result<()> {
        for (i, route) in self.routes.iter().enumerate() {
            if self.routes[..i].iter().any(|r| r.domain == route.domain) {
                bail!("duplicate route for domain '{}'", route.domain);
            }
        }
        Ok(())
    }
}

/// Routes embedded from `src-tauri/config/routes.toml`.
const DEFAULT_ROUTES: &str = include_str!("../../config/routes.toml");

/// Load a route table from a TOML file.
///
/// Duplicate domains are rejected so lookups stay unambiguous.
pub fn load_routes(path: &Path) -> Result<RouteRegistry> {
    let content = std::fs::read_to_string(path)?;
    let registry: RouteRegistry = toml::from_str(&content)?;
    registry.validate()?;
    Ok(registry)
}

/// # Panics
/// Panics if the embedded TOML is invalid.
pub fn default_routes() -> RouteRegistry {
    toml::from_str(DEFAULT_ROUTES).expect("embedded routes.toml must be valid TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_cover_every_dashboard() {
        let registry = default_routes();
        for domain in [
            "scrap",
            "quality",
            "workflow",
            "program",
            "finance",
            "hr",
            "supply_chain",
            "payroll",
        ] {
            assert!(registry.find(domain).is_some(), "missing route for {}", domain);
        }
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_envelopes_vary() {
        let registry = default_routes();
        assert_eq!(registry.find("scrap").unwrap().envelope, Envelope::Nested);
        assert_eq!(registry.find("quality").unwrap().envelope, Envelope::Data);
        assert_eq!(registry.find("payroll").unwrap().envelope, Envelope::Bare);
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let registry: RouteRegistry = toml::from_str(
            r#"
            [[routes]]
            domain = "hr"
            fixture = "hr"
            envelope = "bare"

            [[routes]]
            domain = "hr"
            fixture = "finance"
            envelope = "data"
            "#,
        )
        .unwrap();
        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_unknown_envelope_rejected() {
        let parsed: Result<RouteRegistry, _> = toml::from_str(
            r#"
            [[routes]]
            domain = "hr"
            fixture = "hr"
            envelope = "xml"
            "#,
        );
        assert!(parsed.is_err());
    }
}
