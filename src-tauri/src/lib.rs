pub mod api;
mod commands;
pub mod error;

pub use api::{default_routes, handle, load_routes, ApiRequest, Period, RouteRegistry};
pub use error::KpiError;

use std::path::Path;

use tauri::Manager;
use tracing::{info, warn};

/// Optional route table override in the app config directory.
const ROUTES_OVERRIDE: &str = "routes.toml";

/// Use the override at `path` when it exists and parses, the embedded table otherwise.
pub fn resolve_routes(path: &Path) -> RouteRegistry {
    if !path.exists() {
        return default_routes();
    }
    match load_routes(path) {
        Ok(registry) => {
            info!("Loaded {} routes from {}", registry.routes.len(), path.display());
            registry
        }
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            default_routes()
        }
    }
}

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::api::api_get,
            commands::api::list_routes,
            commands::config::get_preference,
            commands::config::set_preference,
        ])
        .setup(|app| {
            let registry = match app.path().app_config_dir() {
                Ok(dir) => resolve_routes(&dir.join(ROUTES_OVERRIDE)),
                Err(e) => {
                    warn!("No app config dir, using embedded routes: {}", e);
                    default_routes()
                }
            };
            info!("Serving {} API domains", registry.routes.len());
            app.manage(commands::api::ApiState::new(registry));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
