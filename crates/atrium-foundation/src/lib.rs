//! # Atrium Foundation
//!
//! The composition root of an Atrium application.
//!
//! ```text
//! shell ─▶ Application::bootstrap_with([DetectEnv, LoadConfig, BootProviders])
//!                                                          │
//!                              Provider::register(&mut app) ◀┘  (registration order)
//! shell ─▶ Application::dispatch(name, args)
//!              └─▶ Container::make(command) ─▶ Command::handle(args)
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`application`] | `Application`, the owned context passed through every phase |
//! | [`bootstrap`] | `Bootstrapper` contract and the fail-fast pipeline |
//! | [`bootstrappers`] | Canonical steps: environment, configuration, providers |
//! | [`provider`] | `Provider` contract and the compile-time provider registry |
//! | [`command`] | `Command` contract, registry and dispatcher |

pub mod application;
pub mod bootstrap;
pub mod bootstrappers;
pub mod command;
pub mod provider;

pub use application::Application;
pub use bootstrap::{Bootstrapper, FnBootstrapper, bootstrapper};
pub use bootstrappers::default_bootstrappers;
pub use command::{Command, CommandRegistry};
pub use provider::{Provider, ProviderEntry, SERVICE_PROVIDERS};

// Re-export the pieces every provider and command author needs
pub use atrium_domain::{
    BootState, CapabilityKey, CommandArgs, CommandDescriptor, Error, FlagKind, FlagSpec, Result,
};
pub use atrium_infrastructure::di::{Container, Inject, Injectable, Injector, Lifetime};
