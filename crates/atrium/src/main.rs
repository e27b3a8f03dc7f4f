//! Atrium - Entry Point
//!
//! Binary entry point for the Atrium console. Lives in the `atrium` facade
//! crate so the providers are linked in.

// Force-link atrium-providers to ensure linkme inventory registrations are included
extern crate atrium_providers;

use std::process::ExitCode;

use atrium::kernel::default_home_directory;
use atrium::{Application, Bootstrapper, Kernel};
use atrium::foundation::bootstrappers::{BootProviders, ConfigureLogging, DetectEnv, LoadConfig};

fn main() -> ExitCode {
    let mut application = Application::new(
        "atrium",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
    )
    .with_home_directory(default_home_directory());
    application.register_discovered_providers();

    let mut kernel = Kernel::new(application);
    kernel.set_bootstrappers(vec![
        Box::new(DetectEnv::new()) as Box<dyn Bootstrapper>,
        Box::new(LoadConfig::new()),
        Box::new(ConfigureLogging),
        Box::new(BootProviders),
    ]);

    match kernel.handle(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
