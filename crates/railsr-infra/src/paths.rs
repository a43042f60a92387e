//! Data directory layout.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "RAILSR_DATA_DIR";

/// Resolve the data directory path.
///
/// Priority:
/// 1. `RAILSR_DATA_DIR` environment variable
/// 2. `~/.railsr` under the user's home directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".railsr");
    }

    // Last resort: current directory
    PathBuf::from(".railsr")
}

/// `{data_dir}/config.toml`
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// SQLite URL for the node-state database in `data_dir`.
pub fn database_url(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("railsr.db").display())
}
