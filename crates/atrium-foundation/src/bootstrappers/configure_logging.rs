use atrium_domain::error::Result;
use atrium_infrastructure::config::{LoggingConfig, resolve_path};
use atrium_infrastructure::logging::init_logging;

use crate::application::Application;
use crate::bootstrap::Bootstrapper;

/// Installs the global tracing subscriber.
///
/// Uses the `logging` section of the bound configuration, or defaults when
/// `LoadConfig` has not run. Fails when `config` is bound to another type.
/// A relative log file path is resolved against
/// the home directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigureLogging;

impl Bootstrapper for ConfigureLogging {
    fn name(&self) -> &str {
        "configure-logging"
    }

    fn bootstrap(&self, app: &mut Application) -> Result<()> {
        let mut logging = app
            .try_config()?
            .map(|config| config.logging.clone())
            .unwrap_or_else(LoggingConfig::default);

        if let Some(path) = &logging.file_output {
            logging.file_output = Some(resolve_path(app.home_directory(), path));
        }

        init_logging(&logging)
    }
}
