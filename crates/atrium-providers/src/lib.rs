//! # Atrium Service Providers
//!
//! Providers contributing bindings and commands during the provider boot
//! step. Both submit themselves to the compile-time registry, so linking this
//! crate is enough for `Application::register_discovered_providers` to find
//! them.
//!
//! | Provider | Order | Bindings | Commands |
//! |----------|-------|----------|----------|
//! | [`http::HttpServiceProvider`] | 10 | `router`, `interface:http.ErrorsHandler`, `maintenance` | `down`, `up` |
//! | [`database::DatabaseServiceProvider`] | 20 | `migrator` | `migrate`, `migrate:rollback`, `migrate:reset` |

pub use atrium_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// Router, error handler and maintenance mode
pub mod http;

/// Migrations and the migration ledger
pub mod database;

pub use database::DatabaseServiceProvider;
pub use http::HttpServiceProvider;
