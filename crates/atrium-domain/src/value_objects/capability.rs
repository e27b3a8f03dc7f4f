use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Explicit identifier of a binding in the container.
///
/// Keys are always supplied by the author of a provider or consumer; they are
/// never derived from the runtime type of a bound value. Two flavours exist so
/// that a concrete service (`"router"`) and an abstract contract
/// (`interface:http.ErrorsHandler`) can never collide even if they share a
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CapabilityKey {
    /// A nominal capability, e.g. `"router"`
    Named(Cow<'static, str>),
    /// An abstract interface identifier, e.g. `"http.ErrorsHandler"`
    Interface(Cow<'static, str>),
}

impl CapabilityKey {
    /// Key for a nominal capability
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// Key for an abstract interface
    pub const fn interface(name: &'static str) -> Self {
        Self::Interface(Cow::Borrowed(name))
    }

    /// The bare name without the interface prefix
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Interface(name) => name,
        }
    }

    /// Whether this key identifies an abstract interface
    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Interface(_))
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Interface(name) => write!(f, "interface:{name}"),
        }
    }
}

impl From<&'static str> for CapabilityKey {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl From<String> for CapabilityKey {
    fn from(name: String) -> Self {
        Self::Named(Cow::Owned(name))
    }
}

impl From<&CapabilityKey> for CapabilityKey {
    fn from(key: &CapabilityKey) -> Self {
        key.clone()
    }
}
