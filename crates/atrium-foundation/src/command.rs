//! Console Commands
//!
//! A command's [`CommandDescriptor`] is captured at registration and is all
//! the shell sees until the command is dispatched. Dispatch then:
//!
//! 1. finds the first command registered under the requested name,
//! 2. injects its slots from the container (`UnresolvedDependency` aborts
//!    before the handler runs),
//! 3. runs [`Command::handle`], wrapping a failure in `CommandFailed`.
//!
//! A failed command leaves the registry untouched, so later dispatches in
//! the same process are unaffected.

use atrium_domain::error::{Error, Result};
use atrium_domain::{CommandArgs, CommandDescriptor};
use atrium_infrastructure::di::{Container, Injectable};
use tracing::debug;

/// Externally triggered unit of behaviour
///
/// Dependencies are declared as `Inject` slots through the [`Injectable`]
/// supertrait and are filled immediately before each [`Command::handle`].
pub trait Command: Injectable {
    /// Name, flags and help text
    fn descriptor(&self) -> CommandDescriptor;

    /// Execute with fully injected dependencies
    fn handle(&mut self, args: &CommandArgs) -> Result<()>;
}

struct RegisteredCommand {
    descriptor: CommandDescriptor,
    command: Box<dyn Command>,
}

/// Ordered list of registered commands
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Duplicate names are kept; dispatch uses the first.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let descriptor = command.descriptor();
        debug!(command = %descriptor.name, "Command registered");
        self.entries.push(RegisteredCommand {
            descriptor,
            command,
        });
    }

    /// Descriptors in registration order
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    /// Descriptor of the first command registered under `name`
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.descriptors().find(|descriptor| descriptor.name == name)
    }

    /// Whether a command named `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inject and run the command registered under `name`
    pub fn dispatch(
        &mut self,
        container: &Container,
        name: &str,
        args: &CommandArgs,
    ) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.descriptor.name == name)
            .ok_or_else(|| Error::unknown_command(name))?;

        container.make(entry.command.as_mut())?;

        debug!(command = name, "Dispatching command");
        entry
            .command
            .handle(args)
            .map_err(|source| Error::command_failed(name, source))
    }
}
