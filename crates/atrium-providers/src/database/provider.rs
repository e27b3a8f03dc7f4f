use std::path::PathBuf;
use std::sync::Arc;

use atrium_domain::constants::MIGRATOR_KEY;
use atrium_foundation::{Application, Command, Provider, ProviderEntry, SERVICE_PROVIDERS};
use atrium_infrastructure::config::{DatabaseConfig, resolve_path};
use tracing::debug;

use super::commands::{MigrateCommand, ResetCommand, RollbackCommand};
use super::ledger::JsonFileLedger;
use super::migrator::Migrator;
use crate::constants::{DATABASE_PROVIDER_NAME, DATABASE_PROVIDER_ORDER};

/// Registers the migrator and the migration commands.
///
/// The migrator is a singleton so migrations declared on it after boot are
/// seen by the commands. Its ledger lives at `database.ledger` under the home
/// directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseServiceProvider;

impl Provider for DatabaseServiceProvider {
    fn name(&self) -> &str {
        DATABASE_PROVIDER_NAME
    }

    fn register(&self, app: &mut Application) {
        app.commands([
            Box::new(MigrateCommand::default()) as Box<dyn Command>,
            Box::new(RollbackCommand::default()),
            Box::new(ResetCommand::default()),
        ]);

        let ledger_path: PathBuf = app.config().map_or_else(
            || DatabaseConfig::default().ledger,
            |config| config.database.ledger.clone(),
        );
        let ledger_path = resolve_path(app.home_directory(), &ledger_path);
        debug!(ledger = %ledger_path.display(), "Migration ledger");

        let ledger = Arc::new(JsonFileLedger::new(ledger_path));
        app.bind(MIGRATOR_KEY, Arc::new(Migrator::new(ledger)));
    }
}

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static DATABASE_PROVIDER: ProviderEntry = ProviderEntry {
    name: DATABASE_PROVIDER_NAME,
    description: "Migrator and migration commands",
    order: DATABASE_PROVIDER_ORDER,
    factory: || Arc::new(DatabaseServiceProvider),
};
