//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the foundation crate.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`di`] | Capability-keyed binding container and slot injection |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{Container, Inject, Injectable, Injector, Lifetime, Resolved};
pub use error_ext::ErrorContext;
