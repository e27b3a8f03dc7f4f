//! Application - the composition root
//!
//! One `Application` exists per process. It is an ordinary owned value,
//! passed by `&mut` through the bootstrap pipeline and into providers, so
//! tests can build as many as they like.
//!
//! Mutation (`bind`, command and provider registration) needs `&mut self`;
//! resolution and injection only read the container.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use atrium_domain::constants::{CONFIG_KEY, ENVIRONMENT_KEY};
use atrium_domain::error::{Error, Result};
use atrium_domain::{BootState, CapabilityKey, CommandArgs, CommandDescriptor};
use atrium_infrastructure::config::AppConfig;
use atrium_infrastructure::di::{Container, Injectable};
use tracing::{debug, info, warn};

use crate::bootstrap::{Bootstrapper, run_pipeline};
use crate::command::{Command, CommandRegistry};
use crate::provider::{Provider, discovered_providers};

/// Process-wide application state
pub struct Application {
    name: String,
    version: String,
    description: String,
    home_directory: PathBuf,
    environment: Option<String>,
    container: Container,
    providers: Vec<Arc<dyn Provider>>,
    providers_booted: bool,
    commands: CommandRegistry,
    state: BootState,
}

impl Application {
    /// Create an application with its identity metadata.
    ///
    /// The home directory defaults to the current directory.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            home_directory: PathBuf::from("."),
            environment: None,
            container: Container::new(),
            providers: Vec::new(),
            providers_booted: false,
            commands: CommandRegistry::new(),
            state: BootState::Uninitialized,
        }
    }

    /// Builder-style home directory override
    pub fn with_home_directory(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_directory = home.into();
        self
    }

    // ========================================================================
    // Identity
    // ========================================================================

    /// Application name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Application version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// One-line description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Home directory read by the bootstrap steps
    pub fn home_directory(&self) -> &Path {
        &self.home_directory
    }

    /// Change the home directory. Only allowed before bootstrap starts.
    pub fn set_home_directory(&mut self, home: impl Into<PathBuf>) -> Result<()> {
        if !self.state.can_bootstrap() {
            return Err(Error::invalid_state(format!(
                "home directory cannot change once the application is {}",
                self.state
            )));
        }
        self.home_directory = home.into();
        Ok(())
    }

    /// Detected environment, once `DetectEnv` or `LoadConfig` has run
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// Whether the detected environment is `env`
    pub fn is_environment(&self, env: &str) -> bool {
        self.environment() == Some(env)
    }

    /// Record the environment and bind it under `environment`
    pub fn set_environment(&mut self, env: impl Into<String>) {
        let env = env.into();
        debug!(environment = %env, "Environment set");
        self.container.bind(ENVIRONMENT_KEY, Arc::new(env.clone()));
        self.environment = Some(env);
    }

    /// Current bootstrap state
    pub fn state(&self) -> BootState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: BootState) {
        self.state = state;
    }

    // ========================================================================
    // Container
    // ========================================================================

    /// The binding container
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Bind a singleton, replacing any earlier binding for `key`
    pub fn bind<T>(&mut self, key: impl Into<CapabilityKey>, value: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.container.bind(key, value);
    }

    /// Bind a per-resolution factory, replacing any earlier binding for `key`
    pub fn bind_factory<T, F>(&mut self, key: impl Into<CapabilityKey>, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Arc<T> + Send + Sync + 'static,
    {
        self.container.bind_factory(key, factory);
    }

    /// Resolve `key` as `Arc<T>`
    pub fn resolve_as<T>(&self, key: &CapabilityKey) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.container.resolve_as(key)
    }

    /// Inject every slot `target` declares
    pub fn make<I>(&self, target: &mut I) -> Result<()>
    where
        I: Injectable + ?Sized,
    {
        self.container.make(target)
    }

    /// Loaded configuration, once `LoadConfig` has run.
    ///
    /// `Ok(None)` when nothing is bound under `config`; a binding of another
    /// type is an error.
    pub fn try_config(&self) -> Result<Option<Arc<AppConfig>>> {
        match self.container.resolve_as(&CONFIG_KEY) {
            Ok(config) => Ok(Some(config)),
            Err(Error::NotRegistered { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Like [`Application::try_config`] for infallible callers: a mistyped
    /// binding is logged and treated as absent
    pub fn config(&self) -> Option<Arc<AppConfig>> {
        self.try_config().unwrap_or_else(|err| {
            warn!(error = %err, "Ignoring unusable configuration binding");
            None
        })
    }

    // ========================================================================
    // Providers
    // ========================================================================

    /// Append a provider. Registration order is boot order.
    pub fn register_provider<P: Provider + 'static>(&mut self, provider: P) {
        self.providers.push(Arc::new(provider));
    }

    /// Append every provider submitted to the compile-time registry.
    ///
    /// Returns the number of providers added.
    pub fn register_discovered_providers(&mut self) -> usize {
        let entries = discovered_providers();
        for entry in &entries {
            debug!(provider = entry.name, order = entry.order, "Provider discovered");
            self.providers.push((entry.factory)());
        }
        entries.len()
    }

    /// Registered providers in boot order
    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// Call `register` on every provider, in registration order, exactly once.
    ///
    /// Providers appended while this runs are kept but not booted.
    pub fn boot_providers(&mut self) -> Result<()> {
        if self.providers_booted {
            return Err(Error::invalid_state("providers were already booted"));
        }
        self.providers_booted = true;

        let providers = self.providers.clone();
        for provider in &providers {
            debug!(provider = provider.name(), "Registering provider");
            provider.register(self);
        }

        info!(
            providers = providers.len(),
            bindings = self.container.len(),
            commands = self.commands.len(),
            "Providers booted"
        );
        Ok(())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Register one command
    pub fn register_command<C: Command + 'static>(&mut self, command: C) {
        self.commands.register(Box::new(command));
    }

    /// Register several commands at once, keeping their order
    pub fn commands<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Box<dyn Command>>,
    {
        for command in commands {
            self.commands.register(command);
        }
    }

    /// Descriptors of all registered commands, in registration order
    pub fn command_descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.descriptors()
    }

    /// The command registry
    pub fn command_registry(&self) -> &CommandRegistry {
        &self.commands
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Run `steps` in order; see [`crate::bootstrap`].
    ///
    /// May be called once. A second call, or a call after a failed pipeline,
    /// returns `InvalidState`.
    pub fn bootstrap_with(&mut self, steps: &[Box<dyn Bootstrapper>]) -> Result<()> {
        run_pipeline(self, steps)
    }

    /// Inject and run the command registered under `name`.
    ///
    /// Refused after a failed bootstrap; allowed on a never-bootstrapped
    /// application so hosts can wire commands by hand.
    pub fn dispatch(&mut self, name: &str, args: &CommandArgs) -> Result<()> {
        if !self.state.can_dispatch() {
            return Err(Error::invalid_state(format!(
                "cannot dispatch '{name}' while application is {}",
                self.state
            )));
        }
        self.commands.dispatch(&self.container, name, args)
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("home_directory", &self.home_directory)
            .field("environment", &self.environment)
            .field("state", &self.state)
            .field("providers", &self.providers.len())
            .field("commands", &self.commands.len())
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}
