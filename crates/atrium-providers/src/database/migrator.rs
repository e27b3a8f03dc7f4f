//! Migration engine
//!
//! Migrations run in declared order. Rollback walks the ledger backwards, so
//! the most recently applied migration is reverted first regardless of where
//! it sits in the declared list.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use atrium_domain::error::{Error, Result};
use tracing::{debug, info};

use super::ledger::MigrationLedger;
use super::migration::Migration;

/// Declared migration and whether it is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub id: String,
    pub applied: bool,
}

/// Applies and reverts migrations against a ledger
pub struct Migrator {
    migrations: RwLock<Vec<Arc<dyn Migration>>>,
    ledger: Arc<dyn MigrationLedger>,
}

impl Migrator {
    /// Migrator with no migrations declared yet
    pub fn new(ledger: Arc<dyn MigrationLedger>) -> Self {
        Self {
            migrations: RwLock::new(Vec::new()),
            ledger,
        }
    }

    /// Replace the declared migrations.
    ///
    /// Fails without changing anything when two migrations share an id.
    pub fn set_migrations(&self, migrations: Vec<Arc<dyn Migration>>) -> Result<()> {
        let mut seen = HashSet::new();
        for migration in &migrations {
            if !seen.insert(migration.id()) {
                return Err(Error::migration(format!(
                    "duplicate migration id '{}'",
                    migration.id()
                )));
            }
        }
        *self.write()? = migrations;
        Ok(())
    }

    /// Append one migration
    pub fn add_migration(&self, migration: Arc<dyn Migration>) -> Result<()> {
        let mut migrations = self.write()?;
        if migrations.iter().any(|m| m.id() == migration.id()) {
            return Err(Error::migration(format!(
                "duplicate migration id '{}'",
                migration.id()
            )));
        }
        migrations.push(migration);
        Ok(())
    }

    /// Declared migration ids in order
    pub fn migration_ids(&self) -> Result<Vec<String>> {
        Ok(self.read()?.iter().map(|m| m.id().to_string()).collect())
    }

    /// The ledger in use
    pub fn ledger(&self) -> &Arc<dyn MigrationLedger> {
        &self.ledger
    }

    /// Declared migrations with their applied flag
    pub fn status(&self) -> Result<Vec<MigrationStatus>> {
        let applied = self.applied_ids()?;
        Ok(self
            .read()?
            .iter()
            .map(|m| MigrationStatus {
                id: m.id().to_string(),
                applied: applied.contains(m.id()),
            })
            .collect())
    }

    /// Apply every pending migration in declared order.
    ///
    /// Stops at the first failure; migrations applied before it stay
    /// recorded. Returns the ids applied by this call.
    pub fn migrate(&self) -> Result<Vec<String>> {
        let migrations = self.read()?.clone();
        let applied = self.applied_ids()?;

        let mut ran = Vec::new();
        for migration in migrations.iter().filter(|m| !applied.contains(m.id())) {
            debug!(migration = migration.id(), "Applying migration");
            migration.migrate().map_err(|e| {
                Error::migration_with_source(format!("migration '{}' failed", migration.id()), e)
            })?;
            self.ledger.record(migration.id())?;
            ran.push(migration.id().to_string());
        }

        info!(applied = ran.len(), "Migrations applied");
        Ok(ran)
    }

    /// Revert the most recently applied migration.
    ///
    /// Returns its id, or `None` when nothing is applied.
    pub fn rollback(&self) -> Result<Option<String>> {
        let Some(last) = self.ledger.applied()?.pop() else {
            return Ok(None);
        };
        self.revert(&last.id)?;
        info!(migration = %last.id, "Migration rolled back");
        Ok(Some(last.id))
    }

    /// Revert every applied migration, most recent first.
    ///
    /// Returns the reverted ids in the order they were reverted.
    pub fn reset(&self) -> Result<Vec<String>> {
        let mut reverted = Vec::new();
        for entry in self.ledger.applied()?.into_iter().rev() {
            self.revert(&entry.id)?;
            reverted.push(entry.id);
        }
        info!(reverted = reverted.len(), "Migrations reset");
        Ok(reverted)
    }

    fn revert(&self, id: &str) -> Result<()> {
        let migration = self
            .read()?
            .iter()
            .find(|m| m.id() == id)
            .cloned()
            .ok_or_else(|| {
                Error::migration(format!("applied migration '{id}' is not declared"))
            })?;

        debug!(migration = id, "Reverting migration");
        migration.rollback().map_err(|e| {
            Error::migration_with_source(format!("rollback of '{id}' failed"), e)
        })?;
        self.ledger.remove(id)
    }

    fn applied_ids(&self) -> Result<HashSet<String>> {
        Ok(self
            .ledger
            .applied()?
            .into_iter()
            .map(|entry| entry.id)
            .collect())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Arc<dyn Migration>>>> {
        self.migrations
            .read()
            .map_err(|_| Error::internal("migration list lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Arc<dyn Migration>>>> {
        self.migrations
            .write()
            .map_err(|_| Error::internal("migration list lock poisoned"))
    }
}

impl std::fmt::Debug for Migrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migrator")
            .field("migrations", &self.migration_ids().unwrap_or_default())
            .finish_non_exhaustive()
    }
}
