//! Bootstrap Pipeline
//!
//! Runs bootstrappers strictly in order. The first failure marks the
//! application `Fatal` and is returned wrapped in `BootstrapFailed`, with
//! the step's own error kept unchanged as the source. Nothing after the
//! failing step runs and nothing is retried.

use atrium_domain::BootState;
use atrium_domain::error::{Error, Result};
use tracing::{debug, info};

use crate::application::Application;

/// A single ordered step of the startup pipeline
pub trait Bootstrapper {
    /// Diagnostic name, reported in `BootstrapFailed`
    fn name(&self) -> &str;

    /// Run the step against the application
    fn bootstrap(&self, app: &mut Application) -> Result<()>;
}

/// Bootstrapper backed by a closure
pub struct FnBootstrapper<F> {
    name: String,
    step: F,
}

impl<F> Bootstrapper for FnBootstrapper<F>
where
    F: Fn(&mut Application) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn bootstrap(&self, app: &mut Application) -> Result<()> {
        (self.step)(app)
    }
}

/// Box a closure as a named bootstrapper
///
/// ```ignore
/// let steps = vec![
///     bootstrapper("seed", |app| {
///         app.bind("seed", Arc::new(42_u64));
///         Ok(())
///     }),
/// ];
/// app.bootstrap_with(&steps)?;
/// ```
pub fn bootstrapper<F>(name: impl Into<String>, step: F) -> Box<dyn Bootstrapper>
where
    F: Fn(&mut Application) -> Result<()> + 'static,
{
    Box::new(FnBootstrapper {
        name: name.into(),
        step,
    })
}

pub(crate) fn run_pipeline(app: &mut Application, steps: &[Box<dyn Bootstrapper>]) -> Result<()> {
    if !app.state().can_bootstrap() {
        return Err(Error::invalid_state(format!(
            "bootstrap requested while application is {}",
            app.state()
        )));
    }

    app.set_state(BootState::Bootstrapping);
    info!(app = app.name(), steps = steps.len(), "Bootstrapping application");

    for (index, step) in steps.iter().enumerate() {
        debug!(step = index, name = step.name(), "Running bootstrapper");
        if let Err(source) = step.bootstrap(app) {
            app.set_state(BootState::Fatal);
            return Err(Error::bootstrap_failed(index, step.name(), source));
        }
    }

    app.set_state(BootState::Ready);
    info!(
        app = app.name(),
        bindings = app.container().len(),
        commands = app.command_registry().len(),
        "Application ready"
    );
    Ok(())
}
