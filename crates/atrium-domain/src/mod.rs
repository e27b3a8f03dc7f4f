//! # Atrium Domain
//!
//! Core types shared by every Atrium crate: the error taxonomy, capability
//! keys, command descriptors and the bootstrap state machine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias |
//! | [`value_objects`] | Capability keys, command metadata, boot state |
//! | [`constants`] | Well-known capability keys |

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
