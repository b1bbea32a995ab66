//! Einhard dataset server binary.
//!
//! Wires configuration, structured logging and the dataset API together.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `einhard-config.yaml` (or `EINHARD_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Create an empty dataset registry
//! 4. Serve the API until `Ctrl-C`

mod config;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use einhard_api::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_CONFIG_PATH, EinhardConfig, LogFormat, LoggingSection};
use crate::error::ServerBinError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the server
/// fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging depends on it, so report afterwards.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("einhard-server starting");
    info!(
        source = %source,
        host = config.server.host,
        port = config.server.port,
        log_level = config.logging.level,
        "Configuration loaded"
    );

    // 3. Empty registry; nothing survives a restart.
    let state = Arc::new(AppState::new());

    // 4. Serve.
    einhard_api::start_server(&config.server.to_server_config(), state)
        .await
        .map_err(ServerBinError::from)?;

    info!("einhard-server shutdown complete");
    Ok(())
}

/// Load configuration, falling back to defaults when no file exists.
///
/// Returns the config and a description of where it came from.
fn load_config() -> Result<(EinhardConfig, String), ServerBinError> {
    let path = std::env::var_os("EINHARD_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = EinhardConfig::from_file(&path)?;
        Ok((config, path.display().to_string()))
    } else {
        Ok((EinhardConfig::from_env(), String::from("defaults")))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingSection) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
