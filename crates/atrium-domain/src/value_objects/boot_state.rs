use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of the bootstrap pipeline.
///
/// `Uninitialized → Bootstrapping → {Ready | Fatal}`. Both `Ready` and
/// `Fatal` are terminal; nothing moves an application out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootState {
    /// No pipeline has run yet
    #[default]
    Uninitialized,
    /// A pipeline is running
    Bootstrapping,
    /// Every step succeeded
    Ready,
    /// A step failed; the application must not be used further
    Fatal,
}

impl BootState {
    /// Whether the state can no longer change
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Fatal)
    }

    /// Whether a pipeline may start from this state
    pub fn can_bootstrap(self) -> bool {
        self == Self::Uninitialized
    }

    /// Whether commands may be dispatched in this state
    pub fn can_dispatch(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Ready)
    }
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uninitialized => "uninitialized",
            Self::Bootstrapping => "bootstrapping",
            Self::Ready => "ready",
            Self::Fatal => "fatal",
        };
        f.write_str(label)
    }
}
