//! Main application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use super::database::DatabaseConfig;
pub use super::http::HttpConfig;
pub use super::logging::LoggingConfig;

/// Application section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Environment override; when unset the detected environment is used
    pub env: Option<String>,

    /// Expose error details to clients
    pub debug: bool,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application section
    pub app: AppSection,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// HTTP configuration
    pub http: HttpConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// Resolve `path` against `home` unless it is already absolute
pub fn resolve_path(home: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        home.join(path)
    }
}
