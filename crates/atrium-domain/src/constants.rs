//! Domain layer constants
//!
//! Well-known capability keys shared between the foundation, the providers
//! and the CLI kernel. Infrastructure defaults live in
//! `atrium_infrastructure::constants`.

use crate::value_objects::CapabilityKey;

// ============================================================================
// FOUNDATION BINDINGS
// ============================================================================

/// Loaded `AppConfig`, bound by the `LoadConfig` bootstrapper
pub const CONFIG_KEY: CapabilityKey = CapabilityKey::named("config");

/// Application home directory, bound by the `LoadConfig` bootstrapper
pub const HOME_DIRECTORY_KEY: CapabilityKey = CapabilityKey::named("path.home");

/// Detected environment name, bound by the `DetectEnv` bootstrapper
pub const ENVIRONMENT_KEY: CapabilityKey = CapabilityKey::named("environment");

// ============================================================================
// HTTP BINDINGS
// ============================================================================

/// Route table
pub const ROUTER_KEY: CapabilityKey = CapabilityKey::named("router");

/// Maintenance mode switch used by the `up` and `down` commands
pub const MAINTENANCE_KEY: CapabilityKey = CapabilityKey::named("maintenance");

/// Error reporting and rendering contract
pub const ERRORS_HANDLER_KEY: CapabilityKey = CapabilityKey::interface("http.ErrorsHandler");

// ============================================================================
// DATABASE BINDINGS
// ============================================================================

/// Migration engine
pub const MIGRATOR_KEY: CapabilityKey = CapabilityKey::named("migrator");
