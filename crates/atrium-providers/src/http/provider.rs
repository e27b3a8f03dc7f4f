use std::path::PathBuf;
use std::sync::Arc;

use atrium_domain::constants::{
    CONFIG_KEY, ERRORS_HANDLER_KEY, HOME_DIRECTORY_KEY, MAINTENANCE_KEY, ROUTER_KEY,
};
use atrium_domain::error::Error;
use atrium_foundation::{Application, Command, Provider, ProviderEntry, SERVICE_PROVIDERS};
use atrium_infrastructure::config::{AppConfig, resolve_path};
use tracing::warn;

use super::errors::{ErrorsHandler, ErrorsHandlerContract};
use super::maintenance::{DownCommand, MaintenanceMode, UpCommand};
use super::router::Router;
use crate::constants::{HTTP_PROVIDER_NAME, HTTP_PROVIDER_ORDER};

/// Registers the route table, the errors handler and the maintenance commands
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpServiceProvider;

impl Provider for HttpServiceProvider {
    fn name(&self) -> &str {
        HTTP_PROVIDER_NAME
    }

    fn register(&self, app: &mut Application) {
        app.commands([
            Box::new(DownCommand::default()) as Box<dyn Command>,
            Box::new(UpCommand::default()),
        ]);

        let debug = app.config().is_some_and(|config| config.app.debug);
        app.bind::<dyn ErrorsHandlerContract>(
            ERRORS_HANDLER_KEY,
            Arc::new(ErrorsHandler::with_debug(debug)),
        );
        app.bind(ROUTER_KEY, Arc::new(Router::new()));

        // Built on every resolution from the current `config` and `path.home`
        app.bind_factory(MAINTENANCE_KEY, |container| {
            let home = container
                .resolve_as::<PathBuf>(&HOME_DIRECTORY_KEY)
                .map_or_else(|_| PathBuf::from("."), |home| home.as_ref().clone());
            let file = match container.resolve_as::<AppConfig>(&CONFIG_KEY) {
                Ok(config) => config.http.maintenance_file.clone(),
                Err(err) => {
                    if !matches!(err, Error::NotRegistered { .. }) {
                        warn!(error = %err, "Ignoring unusable configuration binding");
                    }
                    AppConfig::default().http.maintenance_file
                }
            };
            Arc::new(MaintenanceMode::new(resolve_path(&home, &file)))
        });
    }
}

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static HTTP_PROVIDER: ProviderEntry = ProviderEntry {
    name: HTTP_PROVIDER_NAME,
    description: "Route table, errors handler and maintenance mode commands",
    order: HTTP_PROVIDER_ORDER,
    factory: || Arc::new(HttpServiceProvider),
};
