//! Database configuration types

use crate::constants::DEFAULT_MIGRATION_LEDGER;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// File recording applied migrations; relative paths are resolved
    /// against the home directory
    pub ledger: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            ledger: PathBuf::from(DEFAULT_MIGRATION_LEDGER),
        }
    }
}
