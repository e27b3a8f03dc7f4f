//! Canonical bootstrappers
//!
//! | Step | Effect |
//! |------|--------|
//! | [`DetectEnv`] | Loads `<home>/.env`, records the environment |
//! | [`LoadConfig`] | Loads `<home>/atrium.toml`, binds `config` and `path.home` |
//! | [`ConfigureLogging`] | Installs the tracing subscriber from the loaded config |
//! | [`BootProviders`] | Calls `register` on every provider |

mod boot_providers;
mod configure_logging;
mod detect_env;
mod load_config;

pub use boot_providers::BootProviders;
pub use configure_logging::ConfigureLogging;
pub use detect_env::DetectEnv;
pub use load_config::LoadConfig;

use crate::bootstrap::Bootstrapper;

/// The default pipeline: `[DetectEnv, LoadConfig, BootProviders]`
pub fn default_bootstrappers() -> Vec<Box<dyn Bootstrapper>> {
    vec![
        Box::new(DetectEnv::new()),
        Box::new(LoadConfig::new()),
        Box::new(BootProviders),
    ]
}
