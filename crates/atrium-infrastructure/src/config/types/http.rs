//! HTTP configuration types

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_MAINTENANCE_FILE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Maintenance payload file; relative paths are resolved against the
    /// home directory
    pub maintenance_file: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            maintenance_file: PathBuf::from(DEFAULT_MAINTENANCE_FILE),
        }
    }
}
