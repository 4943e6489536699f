//! Application state for the predictor UI.
//!
//! The model artifact is loaded once at startup into an immutable shared
//! handle; every request reads it without coordination.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use fertiscan_core::FertilityModel;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path of the model artifact produced by the trainer.
    pub model_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            model_path: PathBuf::from("models/soil_fertility_model.bin"),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The loaded classifier, or `None` when the artifact was missing or
    /// unreadable. Without it only the warning state is served.
    pub model: Option<FertilityModel>,
    /// Where the artifact was expected, for the warning page.
    pub model_path: PathBuf,
    started_at: Instant,
}

/// Handle shared across request handlers.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Attempts to load the model artifact. Failure is downgraded to a
    /// warning: the server still starts, but no inference path is
    /// reachable until a model exists and the process restarts.
    pub fn load(config: &ServerConfig) -> Self {
        let model = match FertilityModel::load(&config.model_path) {
            Ok(model) => {
                info!(path = %config.model_path.display(), "model artifact loaded");
                Some(model)
            }
            Err(e) => {
                warn!(
                    path = %config.model_path.display(),
                    error = %e,
                    "model artifact not available; predictions disabled"
                );
                None
            }
        };

        Self {
            model,
            model_path: config.model_path.clone(),
            started_at: Instant::now(),
        }
    }

    /// State wrapping an already-fitted model.
    pub fn with_model(model: FertilityModel) -> Self {
        Self {
            model: Some(model),
            model_path: PathBuf::new(),
            started_at: Instant::now(),
        }
    }

    /// State for the warning-only UI.
    pub fn without_model() -> Self {
        Self {
            model: None,
            model_path: ServerConfig::default().model_path,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
