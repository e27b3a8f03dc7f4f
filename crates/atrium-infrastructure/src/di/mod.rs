//! Dependency Injection - Capability-keyed Container
//!
//! ```text
//! Provider::register ──bind(key, value)──▶ Container
//!                                              │
//! Dispatcher ──make(&mut command)──▶ Injector ─┘ resolve(key) per slot
//! ```
//!
//! Bindings are keyed by explicit [`CapabilityKey`](atrium_domain::CapabilityKey)s.
//! Re-binding a key silently replaces the earlier binding.

pub mod container;
pub mod injector;

pub use container::{Container, Lifetime, Resolved};
pub use injector::{Inject, Injectable, Injector};
