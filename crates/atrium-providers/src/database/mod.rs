//! Database service provider
//!
//! Migrations carry an explicit, stable id. The ledger records which ids are
//! applied and in what order, which is all rollback needs.

pub mod commands;
pub mod ledger;
pub mod migration;
pub mod migrator;
pub mod provider;

pub use commands::{MigrateCommand, ResetCommand, RollbackCommand};
pub use ledger::{AppliedMigration, JsonFileLedger, MemoryLedger, MigrationLedger};
pub use migration::{FnMigration, Migration};
pub use migrator::{MigrationStatus, Migrator};
pub use provider::DatabaseServiceProvider;
