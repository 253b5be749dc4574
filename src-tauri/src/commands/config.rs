use std::sync::Arc;

use tauri::{AppHandle, Wry};
use tauri_plugin_store::{Store, StoreExt};
use tracing::{debug, warn};

/// File backing the dashboard preferences (theme).
pub const PREFERENCES_STORE: &str = "preferences.json";

fn open_store(app: &AppHandle) -> Result<Arc<Store<Wry>>, String> {
    app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open {}: {}", PREFERENCES_STORE, e);
        e.to_string()
    })
}

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    let store = open_store(&app)?;
    let value = store
        .get(key)
        .and_then(|v| v.as_str().map(str::to_string));
    debug!("Preference {} = {:?}", key, value);
    Ok(value)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("Preference key must not be empty".to_string());
    }
    debug!("Saving preference {} = {}", key, value);
    let store = open_store(&app)?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save {}: {}", PREFERENCES_STORE, e);
        e.to_string()
    })
}
