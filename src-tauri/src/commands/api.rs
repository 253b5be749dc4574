use serde_json::Value;
use tauri::State;
use tracing::{info, warn};

use crate::api::{self, RouteRegistry};

/// Route table shared by every request.
pub struct ApiState {
    pub registry: RouteRegistry,
}

impl ApiState {
    pub fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }
}

/// `GET <path>` against the local API.
#[tauri::command]
pub fn api_get(state: State<'_, ApiState>, path: String) -> Result<Value, String> {
    info!("GET {}", path);
    api::handle(&state.registry, &path).map_err(|e| {
        warn!("GET {} failed: {}", path, e);
        e.into()
    })
}

#[tauri::command]
pub fn list_routes(state: State<'_, ApiState>) -> Vec<String> {
    state.registry.domains()
}
