//! Maintenance mode
//!
//! The application is "down" while the payload file exists. `down` writes it,
//! `up` removes it; a server front-end checks [`MaintenanceMode::is_down`]
//! before routing.

use std::path::{Path, PathBuf};

use atrium_domain::constants::MAINTENANCE_KEY;
use atrium_domain::error::{Error, Result};
use atrium_domain::{CommandArgs, CommandDescriptor, FlagSpec};
use atrium_foundation::{Command, Inject, Injectable, Injector};
use atrium_infrastructure::ErrorContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Content of the maintenance file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePayload {
    /// When the application went down
    pub time: DateTime<Utc>,
    /// Message shown to clients
    pub message: Option<String>,
    /// Seconds clients should wait before retrying
    pub retry: Option<u64>,
}

impl MaintenancePayload {
    /// Payload stamped with the current time
    pub fn now(message: Option<String>, retry: Option<u64>) -> Self {
        Self {
            time: Utc::now(),
            message,
            retry,
        }
    }
}

/// Maintenance switch backed by a payload file
#[derive(Debug, Clone)]
pub struct MaintenanceMode {
    path: PathBuf,
}

impl MaintenanceMode {
    /// Switch using the payload file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Payload file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the application is in maintenance mode
    pub fn is_down(&self) -> bool {
        self.path.is_file()
    }

    /// Current payload, `None` when the application is up
    pub fn payload(&self) -> Result<Option<MaintenancePayload>> {
        if !self.is_down() {
            return Ok(None);
        }
        let raw =
            std::fs::read_to_string(&self.path).io_context("Failed to read maintenance file")?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// `InvalidState` while the application is down
    pub fn check(&self) -> Result<()> {
        if self.is_down() {
            return Err(Error::invalid_state(format!(
                "application is down for maintenance ({})",
                self.path.display()
            )));
        }
        Ok(())
    }

    /// Enter maintenance mode, replacing any earlier payload
    pub fn down(&self, payload: &MaintenancePayload) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).io_context("Failed to create maintenance directory")?;
        }
        let raw = serde_json::to_string_pretty(payload)?;
        std::fs::write(&self.path, raw).io_context("Failed to write maintenance file")?;
        info!(path = %self.path.display(), "Application is down for maintenance");
        Ok(())
    }

    /// Leave maintenance mode. Returns `false` if the application was already up.
    pub fn up(&self) -> Result<bool> {
        if !self.is_down() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path).io_context("Failed to remove maintenance file")?;
        info!(path = %self.path.display(), "Application is now live");
        Ok(true)
    }
}

// ============================================================================
// Commands
// ============================================================================

/// `down`: put the application into maintenance mode
pub struct DownCommand {
    maintenance: Inject<MaintenanceMode>,
}

impl Default for DownCommand {
    fn default() -> Self {
        Self {
            maintenance: Inject::new(MAINTENANCE_KEY),
        }
    }
}

impl Injectable for DownCommand {
    fn inject(&mut self, injector: &mut Injector<'_>) {
        injector.required(&mut self.maintenance);
    }
}

impl Command for DownCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("down")
            .usage("Put the application into maintenance mode")
            .flag(
                FlagSpec::value("message")
                    .short('m')
                    .help("Message shown while the application is down"),
            )
            .flag(FlagSpec::value("retry").help("Seconds clients should wait before retrying"))
    }

    fn handle(&mut self, args: &CommandArgs) -> Result<()> {
        let maintenance = self.maintenance.get()?;
        let payload = MaintenancePayload::now(
            args.value("message").map(str::to_string),
            args.parse_value::<u64>("retry")?,
        );
        maintenance.down(&payload)?;
        println!("Application is now in maintenance mode.");
        Ok(())
    }
}

/// `up`: bring the application out of maintenance mode
pub struct UpCommand {
    maintenance: Inject<MaintenanceMode>,
}

impl Default for UpCommand {
    fn default() -> Self {
        Self {
            maintenance: Inject::new(MAINTENANCE_KEY),
        }
    }
}

impl Injectable for UpCommand {
    fn inject(&mut self, injector: &mut Injector<'_>) {
        injector.required(&mut self.maintenance);
    }
}

impl Command for UpCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("up").usage("Bring the application out of maintenance mode")
    }

    fn handle(&mut self, _args: &CommandArgs) -> Result<()> {
        if self.maintenance.get()?.up()? {
            println!("Application is now live.");
        } else {
            println!("Application is already live.");
        }
        Ok(())
    }
}
