//! Applied-migration ledgers

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use atrium_domain::error::{Error, Result};
use atrium_infrastructure::ErrorContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One applied migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMigration {
    pub id: String,
    pub applied_at: DateTime<Utc>,
}

/// Record of applied migrations, oldest first
pub trait MigrationLedger: Send + Sync {
    /// Applied migrations in application order
    fn applied(&self) -> Result<Vec<AppliedMigration>>;

    /// Append `id` as the most recently applied migration
    fn record(&self, id: &str) -> Result<()>;

    /// Forget `id`; a missing id is not an error
    fn remove(&self, id: &str) -> Result<()>;

    /// Whether `id` is applied
    fn is_applied(&self, id: &str) -> Result<bool> {
        Ok(self.applied()?.iter().any(|entry| entry.id == id))
    }
}

fn lock_poisoned() -> Error {
    Error::internal("migration ledger lock poisoned")
}

/// Ledger kept in memory
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Mutex<Vec<AppliedMigration>>,
}

impl MemoryLedger {
    /// Empty ledger
    pub fn new() -> Self {
        Self::default()
    }
}

impl MigrationLedger for MemoryLedger {
    fn applied(&self) -> Result<Vec<AppliedMigration>> {
        Ok(self.entries.lock().map_err(|_| lock_poisoned())?.clone())
    }

    fn record(&self, id: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| lock_poisoned())?
            .push(AppliedMigration {
                id: id.to_string(),
                applied_at: Utc::now(),
            });
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| lock_poisoned())?
            .retain(|entry| entry.id != id);
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    applied: Vec<AppliedMigration>,
}

/// Ledger persisted as JSON.
///
/// The file is read and rewritten on every change; a missing file is an
/// empty ledger.
#[derive(Debug)]
pub struct JsonFileLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileLedger {
    /// Ledger stored at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Ledger file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<LedgerFile> {
        if !self.path.exists() {
            return Ok(LedgerFile::default());
        }
        let raw =
            std::fs::read_to_string(&self.path).io_context("Failed to read migration ledger")?;
        serde_json::from_str(&raw).migration_context(format!(
            "Corrupt migration ledger {}",
            self.path.display()
        ))
    }

    fn store(&self, file: &LedgerFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).io_context("Failed to create ledger directory")?;
        }
        let raw = serde_json::to_string_pretty(file)?;
        std::fs::write(&self.path, raw).io_context("Failed to write migration ledger")
    }
}

impl MigrationLedger for JsonFileLedger {
    fn applied(&self) -> Result<Vec<AppliedMigration>> {
        Ok(self.load()?.applied)
    }

    fn record(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().map_err(|_| lock_poisoned())?;
        let mut file = self.load()?;
        file.applied.push(AppliedMigration {
            id: id.to_string(),
            applied_at: Utc::now(),
        });
        self.store(&file)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().map_err(|_| lock_poisoned())?;
        let mut file = self.load()?;
        file.applied.retain(|entry| entry.id != id);
        self.store(&file)
    }
}
