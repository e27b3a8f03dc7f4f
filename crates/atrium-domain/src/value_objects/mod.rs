//! Domain Value Objects
//!
//! Immutable value objects without identity, compared by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CapabilityKey`] | Explicit identifier of a binding in the container |
//! | [`CommandDescriptor`] | Name, flags and help text of a console command |
//! | [`CommandArgs`] | Parsed arguments handed to a command handler |
//! | [`BootState`] | Lifecycle state of the bootstrap pipeline |

/// Bootstrap lifecycle state
pub mod boot_state;
/// Capability keys for the binding container
pub mod capability;
/// Console command metadata and arguments
pub mod command;

pub use boot_state::BootState;
pub use capability::CapabilityKey;
pub use command::{CommandArgs, CommandDescriptor, FlagKind, FlagSpec};
