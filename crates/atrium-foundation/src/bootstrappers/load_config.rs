use std::sync::Arc;

use atrium_domain::constants::{CONFIG_KEY, HOME_DIRECTORY_KEY};
use atrium_domain::error::Result;
use atrium_infrastructure::config::ConfigLoader;

use crate::application::Application;
use crate::bootstrap::Bootstrapper;

/// Loads `<home>/atrium.toml` and binds it under `config`.
///
/// Also binds the home directory under `path.home` so factories can resolve
/// relative paths. A configured `app.env` overrides the detected
/// environment.
#[derive(Debug, Clone, Default)]
pub struct LoadConfig {
    require_file: bool,
    env_prefix: Option<String>,
}

impl LoadConfig {
    /// Missing configuration file falls back to defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing configuration file is an error
    pub fn required() -> Self {
        Self {
            require_file: true,
            env_prefix: None,
        }
    }

    /// Read overrides from `<prefix>_*` variables instead of `ATRIUM_*`
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }
}

impl Bootstrapper for LoadConfig {
    fn name(&self) -> &str {
        "load-config"
    }

    fn bootstrap(&self, app: &mut Application) -> Result<()> {
        let home = app.home_directory().to_path_buf();
        let mut loader = ConfigLoader::for_home(&home).require_file(self.require_file);
        if let Some(prefix) = &self.env_prefix {
            loader = loader.with_env_prefix(prefix.clone());
        }
        let config = loader.load()?;

        if let Some(env) = config.app.env.clone() {
            app.set_environment(env);
        }

        app.bind(HOME_DIRECTORY_KEY, Arc::new(home));
        app.bind(CONFIG_KEY, Arc::new(config));
        Ok(())
    }
}
