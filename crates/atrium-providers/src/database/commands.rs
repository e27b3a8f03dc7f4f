//! Migration commands

use atrium_domain::constants::MIGRATOR_KEY;
use atrium_domain::error::Result;
use atrium_domain::{CommandArgs, CommandDescriptor};
use atrium_foundation::{Command, Inject, Injectable, Injector};

use super::migrator::Migrator;

/// `migrate`: apply pending migrations
pub struct MigrateCommand {
    migrator: Inject<Migrator>,
}

/// `migrate:rollback`: revert the last applied migration
pub struct RollbackCommand {
    migrator: Inject<Migrator>,
}

/// `migrate:reset`: revert every applied migration
pub struct ResetCommand {
    migrator: Inject<Migrator>,
}

macro_rules! migrator_command {
    ($command:ident) => {
        impl Default for $command {
            fn default() -> Self {
                Self {
                    migrator: Inject::new(MIGRATOR_KEY),
                }
            }
        }

        impl Injectable for $command {
            fn inject(&mut self, injector: &mut Injector<'_>) {
                injector.required(&mut self.migrator);
            }
        }
    };
}

migrator_command!(MigrateCommand);
migrator_command!(RollbackCommand);
migrator_command!(ResetCommand);

impl Command for MigrateCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("migrate").usage("Run pending database migrations")
    }

    fn handle(&mut self, _args: &CommandArgs) -> Result<()> {
        let applied = self.migrator.get()?.migrate()?;
        if applied.is_empty() {
            println!("Nothing to migrate.");
        }
        for id in applied {
            println!("Migrated: {id}");
        }
        Ok(())
    }
}

impl Command for RollbackCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("migrate:rollback").usage("Rollback the last database migration")
    }

    fn handle(&mut self, _args: &CommandArgs) -> Result<()> {
        match self.migrator.get()?.rollback()? {
            Some(id) => println!("Rolled back: {id}"),
            None => println!("Nothing to rollback."),
        }
        Ok(())
    }
}

impl Command for ResetCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("migrate:reset").usage("Rollback all database migrations")
    }

    fn handle(&mut self, _args: &CommandArgs) -> Result<()> {
        let reverted = self.migrator.get()?.reset()?;
        if reverted.is_empty() {
            println!("Nothing to rollback.");
        }
        for id in reverted {
            println!("Rolled back: {id}");
        }
        Ok(())
    }
}
