//! # Atrium
//!
//! Application framework core: a capability-keyed binding container, an
//! ordered bootstrap pipeline, service providers and console commands.
//!
//! ## Example
//!
//! ```ignore
//! use atrium::{Application, Kernel};
//!
//! let mut app = Application::new("shop", "1.0.0", "Shop backend");
//! app.register_discovered_providers();
//!
//! let mut kernel = Kernel::new(app);
//! kernel.handle(std::env::args_os())?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, capability keys, command descriptors, boot state
//! - `infrastructure` - binding container, configuration, logging
//! - `foundation` - application, bootstrap pipeline, providers, dispatch
//! - `providers` - HTTP and database service providers
//! - [`kernel`] - the console shell

/// Domain layer - errors, keys and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use atrium_domain::*;
}

/// Infrastructure layer - DI, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use atrium_infrastructure::*;
}

/// Foundation layer - application lifecycle
///
/// Re-exports from the foundation crate for convenience
pub mod foundation {
    pub use atrium_foundation::*;
}

/// Service providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use atrium_providers::*;
}

pub mod kernel;

// Re-export commonly used types at the crate root
pub use foundation::{
    Application, BootState, Bootstrapper, CapabilityKey, Command, CommandArgs, CommandDescriptor,
    Container, Error, FlagKind, FlagSpec, Inject, Injectable, Injector, Provider, Result,
};
pub use kernel::Kernel;
