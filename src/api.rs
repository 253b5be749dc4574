use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::config::{api_path, DashboardDomain, Period};
use crate::kpi::payload::DashboardData;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Backend(String),

    #[error("Invalid request: {0}")]
    Encode(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct ApiGetArgs {
    path: String,
}

#[derive(Serialize)]
struct GetPreferenceArgs {
    key: String,
}

#[derive(Serialize)]
struct SetPreferenceArgs {
    key: String,
    value: String,
}

async fn call<A: Serialize, T: serde::de::DeserializeOwned>(
    cmd: &str,
    args: &A,
) -> Result<T, ApiError> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| ApiError::Encode(e.to_string()))?;

    let result = invoke(cmd, args).await.map_err(|e| {
        ApiError::Backend(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
    })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` an API route and return the raw JSON document.
pub async fn api_get(path: &str) -> Result<serde_json::Value, ApiError> {
    call(
        "api_get",
        &ApiGetArgs {
            path: path.to_string(),
        },
    )
    .await
}

/// Fetch and decode one dashboard view.
pub async fn fetch_dashboard(
    domain: &DashboardDomain,
    period: Period,
) -> Result<DashboardData, ApiError> {
    let json = api_get(&api_path(domain, period)).await?;
    Ok(DashboardData::from_json(&json, domain.series_order))
}

/// Domains the shell's route table serves.
pub async fn list_routes() -> Result<Vec<String>, ApiError> {
    call("list_routes", &serde_json::json!({})).await
}

pub async fn get_preference(key: &str) -> Result<Option<String>, ApiError> {
    call(
        "get_preference",
        &GetPreferenceArgs {
            key: key.to_string(),
        },
    )
    .await
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), ApiError> {
    call::<_, ()>(
        "set_preference",
        &SetPreferenceArgs {
            key: key.to_string(),
            value: value.to_string(),
        },
    )
    .await
}
