//! Configuration
//!
//! `AppConfig` is assembled by [`loader::ConfigLoader`] from defaults, an
//! optional TOML file and `ATRIUM_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
