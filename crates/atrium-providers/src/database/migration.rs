//! Migration contract

use atrium_domain::error::Result;

/// A reversible schema or data change
pub trait Migration: Send + Sync {
    /// Stable unique id, recorded in the ledger once applied
    fn id(&self) -> &str;

    /// Apply the change
    fn migrate(&self) -> Result<()>;

    /// Revert the change
    fn rollback(&self) -> Result<()>;
}

/// Migration built from a pair of closures
pub struct FnMigration<M, R> {
    id: String,
    migrate: M,
    rollback: R,
}

impl<M, R> FnMigration<M, R>
where
    M: Fn() -> Result<()> + Send + Sync,
    R: Fn() -> Result<()> + Send + Sync,
{
    /// Migration `id` running `migrate` forward and `rollback` backward
    pub fn new(id: impl Into<String>, migrate: M, rollback: R) -> Self {
        Self {
            id: id.into(),
            migrate,
            rollback,
        }
    }
}

impl<M, R> Migration for FnMigration<M, R>
where
    M: Fn() -> Result<()> + Send + Sync,
    R: Fn() -> Result<()> + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn migrate(&self) -> Result<()> {
        (self.migrate)()
    }

    fn rollback(&self) -> Result<()> {
        (self.rollback)()
    }
}
