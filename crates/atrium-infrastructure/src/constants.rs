//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Well-known capability keys are defined in `atrium_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Configuration file name, looked up inside the home directory
pub const DEFAULT_CONFIG_FILENAME: &str = "atrium.toml";

/// Directory name used under the platform data directory
pub const DEFAULT_HOME_DIR: &str = "atrium";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ATRIUM";

/// Separator for nested keys in environment variables (`ATRIUM_HTTP__PORT`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// ENVIRONMENT DETECTION CONSTANTS
// ============================================================================

/// Variable naming the current environment
pub const ENVIRONMENT_VARIABLE: &str = "ATRIUM_ENV";

/// Environment assumed when nothing is configured
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Dotenv file name, looked up inside the home directory
pub const DOTENV_FILENAME: &str = ".env";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "ATRIUM_LOG";

/// File stem used for rolling log files
pub const LOG_FILE_STEM: &str = "atrium";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Default HTTP bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Maintenance payload file, relative to the home directory
pub const DEFAULT_MAINTENANCE_FILE: &str = "storage/framework/down";

// ============================================================================
// DATABASE CONSTANTS
// ============================================================================

/// Applied-migrations ledger, relative to the home directory
pub const DEFAULT_MIGRATION_LEDGER: &str = "storage/migrations.json";
