//! Error handling types

use thiserror::Error;

use crate::value_objects::CapabilityKey;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error source carried by wrapping variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Atrium
#[derive(Error, Debug)]
pub enum Error {
    /// A capability key has no binding
    #[error("No binding registered for '{key}'")]
    NotRegistered {
        /// The key that was looked up
        key: CapabilityKey,
    },

    /// A mandatory injectable slot could not be filled
    #[error("Unresolved dependency '{key}'")]
    UnresolvedDependency {
        /// The key of the slot that stayed empty
        key: CapabilityKey,
    },

    /// A key is bound, but not to a value of the type the consumer asked for
    #[error("Binding '{key}' does not hold a value of type {expected}")]
    BindingTypeMismatch {
        /// The key that was resolved
        key: CapabilityKey,
        /// Type name the consumer expected
        expected: &'static str,
    },

    /// A bootstrap step failed and aborted the pipeline
    #[error("Bootstrap step #{step} ({name}) failed: {source}")]
    BootstrapFailed {
        /// Zero-based position of the failing step
        step: usize,
        /// Diagnostic name of the failing step
        name: String,
        /// The error returned by the step, unchanged
        #[source]
        source: Box<Error>,
    },

    /// Dispatch target not found in the command registry
    #[error("Unknown command '{name}'")]
    UnknownCommand {
        /// Requested command name
        name: String,
    },

    /// A command handler returned an error
    #[error("Command '{command}' failed: {source}")]
    CommandFailed {
        /// Name of the command that failed
        command: String,
        /// The error returned by the handler, unchanged
        #[source]
        source: Box<Error>,
    },

    /// The application is not in a state that allows the operation
    #[error("Invalid application state: {message}")]
    InvalidState {
        /// Description of the violated precondition
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Migration engine error
    #[error("Migration error: {message}")]
    Migration {
        /// Description of the migration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid argument provided to a command or function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Container and dispatch error creation methods
impl Error {
    /// Create a not registered error
    pub fn not_registered(key: impl Into<CapabilityKey>) -> Self {
        Self::NotRegistered { key: key.into() }
    }

    /// Create an unresolved dependency error
    pub fn unresolved(key: impl Into<CapabilityKey>) -> Self {
        Self::UnresolvedDependency { key: key.into() }
    }

    /// Create a binding type mismatch error
    pub fn type_mismatch(key: impl Into<CapabilityKey>, expected: &'static str) -> Self {
        Self::BindingTypeMismatch {
            key: key.into(),
            expected,
        }
    }

    /// Wrap the error of a failed bootstrap step
    pub fn bootstrap_failed<S: Into<String>>(step: usize, name: S, source: Error) -> Self {
        Self::BootstrapFailed {
            step,
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create an unknown command error
    pub fn unknown_command<S: Into<String>>(name: S) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Wrap the error of a failed command handler
    pub fn command_failed<S: Into<String>>(command: S, source: Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// The error a failed bootstrap step or command handler originally returned.
    ///
    /// Returns `self` for every other variant.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::BootstrapFailed { source, .. } | Self::CommandFailed { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Migration, argument and internal error creation methods
impl Error {
    /// Create a migration error
    pub fn migration<S: Into<String>>(message: S) -> Self {
        Self::Migration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a migration error with source
    pub fn migration_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Migration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
