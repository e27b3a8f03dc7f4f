use atrium_domain::error::Result;
use atrium_infrastructure::constants::{DEFAULT_ENVIRONMENT, DOTENV_FILENAME, ENVIRONMENT_VARIABLE};
use atrium_infrastructure::logging::log_env_file_skipped;
use tracing::debug;

use crate::application::Application;
use crate::bootstrap::Bootstrapper;

/// Loads `<home>/.env` and records the current environment.
///
/// Variables already present in the process environment are never
/// overwritten by the dotenv file. A dotenv file that exists but cannot be
/// parsed is logged and skipped.
#[derive(Debug, Clone)]
pub struct DetectEnv {
    variable: String,
    default: String,
}

impl Default for DetectEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectEnv {
    /// Read `ATRIUM_ENV`, defaulting to `production`
    pub fn new() -> Self {
        Self {
            variable: ENVIRONMENT_VARIABLE.to_string(),
            default: DEFAULT_ENVIRONMENT.to_string(),
        }
    }

    /// Read the environment name from `variable` instead
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Environment used when the variable is unset or empty
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

impl Bootstrapper for DetectEnv {
    fn name(&self) -> &str {
        "detect-env"
    }

    fn bootstrap(&self, app: &mut Application) -> Result<()> {
        let dotenv = app.home_directory().join(DOTENV_FILENAME);
        if dotenv.is_file() {
            match dotenvy::from_path(&dotenv) {
                Ok(()) => debug!(path = %dotenv.display(), "Environment file loaded"),
                Err(e) => log_env_file_skipped(&dotenv, &e.to_string()),
            }
        }

        let env = std::env::var(&self.variable)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.default.clone());
        app.set_environment(env);
        Ok(())
    }
}
