//! Configuration loader for the Railsr connector.
//!
//! Reads `config.toml` from the data directory (`~/.railsr/` by default)
//! and deserializes it into [`AdapterConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::Path;

use railsr_types::config::AdapterConfig;

use crate::paths::config_path;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AdapterConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_adapter_config(data_dir: &Path) -> AdapterConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AdapterConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AdapterConfig::default();
        }
    };

    match toml::from_str::<AdapterConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AdapterConfig::default()
        }
    }
}
