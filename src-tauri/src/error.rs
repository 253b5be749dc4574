use thiserror::Error;

#[derive(Debug, Error)]
pub enum KpiError {
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unsupported period '{0}' (expected weekly or monthly)")]
    UnsupportedPeriod(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<KpiError> for String {
    fn from(err: KpiError) -> Self {
        err.to_string()
    }
}
