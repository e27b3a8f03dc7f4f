//! Binding Container
//!
//! Maps capability keys to a resolution strategy. Values are stored type
//! erased; the consumer names the type it expects when resolving and gets a
//! `BindingTypeMismatch` error if the binding holds something else.
//!
//! ```text
//! bind(key, Arc<T>)            → Singleton: the same Arc on every resolve
//! bind_factory(key, |c| ...)   → Transient: factory runs on every resolve
//! ```

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use atrium_domain::CapabilityKey;
use atrium_domain::error::{Error, Result};
use tracing::trace;

use super::injector::{Injectable, Injector};

type ErasedValue = Arc<dyn Any + Send + Sync>;
type ErasedFactory = Arc<dyn Fn(&Container) -> ErasedValue + Send + Sync>;

/// Resolution strategy of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// One fixed instance shared by every resolution
    Singleton,
    /// A factory invoked once per resolution
    Transient,
}

enum Binding {
    Instance(ErasedValue),
    Factory(ErasedFactory),
}

impl Binding {
    fn lifetime(&self) -> Lifetime {
        match self {
            Self::Instance(_) => Lifetime::Singleton,
            Self::Factory(_) => Lifetime::Transient,
        }
    }
}

/// A value produced by [`Container::resolve`], not yet given a concrete type
#[derive(Clone)]
pub struct Resolved {
    key: CapabilityKey,
    value: ErasedValue,
}

impl Resolved {
    /// Key the value was resolved from
    pub fn key(&self) -> &CapabilityKey {
        &self.key
    }

    /// Recover the bound `Arc<T>`; `None` if the binding holds another type
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }

    /// Like [`Resolved::downcast`], reporting a mismatch as an error
    pub fn into_typed<T>(self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.downcast::<T>()
            .ok_or_else(|| Error::type_mismatch(self.key.clone(), type_name::<T>()))
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved").field("key", &self.key).finish_non_exhaustive()
    }
}

/// Capability-keyed binding container
#[derive(Default)]
pub struct Container {
    bindings: HashMap<CapabilityKey, Binding>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a singleton instance, replacing any previous binding for `key`.
    ///
    /// `T` may be unsized, so trait objects bind as `Arc<dyn Trait>` and
    /// resolve back with `resolve_as::<dyn Trait>`.
    pub fn bind<T>(&mut self, key: impl Into<CapabilityKey>, value: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let erased: ErasedValue = Arc::new(value);
        self.insert(key.into(), Binding::Instance(erased));
    }

    /// Bind a factory invoked on every resolution, replacing any previous
    /// binding for `key`. The factory receives the container so it can
    /// build on other bindings.
    pub fn bind_factory<T, F>(&mut self, key: impl Into<CapabilityKey>, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Arc<T> + Send + Sync + 'static,
    {
        let erased: ErasedFactory = Arc::new(move |container: &Container| -> ErasedValue {
            Arc::new(factory(container))
        });
        self.insert(key.into(), Binding::Factory(erased));
    }

    fn insert(&mut self, key: CapabilityKey, binding: Binding) {
        let lifetime = binding.lifetime();
        if self.bindings.insert(key.clone(), binding).is_some() {
            trace!(key = %key, ?lifetime, "Binding shadowed");
        } else {
            trace!(key = %key, ?lifetime, "Binding registered");
        }
    }

    /// Look up a binding; `None` means the key is not registered
    pub fn resolve(&self, key: &CapabilityKey) -> Option<Resolved> {
        let value = match self.bindings.get(key)? {
            Binding::Instance(value) => Arc::clone(value),
            Binding::Factory(factory) => factory(self),
        };
        Some(Resolved {
            key: key.clone(),
            value,
        })
    }

    /// Resolve `key` as `Arc<T>`
    pub fn resolve_as<T>(&self, key: &CapabilityKey) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve(key)
            .ok_or_else(|| Error::not_registered(key))?
            .into_typed()
    }

    /// Inject every slot `target` declares.
    ///
    /// All slots are attempted even after one fails; the first failure is
    /// returned. The container itself is never modified.
    pub fn make<I>(&self, target: &mut I) -> Result<()>
    where
        I: Injectable + ?Sized,
    {
        let mut injector = Injector::new(self);
        target.inject(&mut injector);
        injector.finish()
    }

    /// Whether `key` has a binding
    pub fn contains(&self, key: &CapabilityKey) -> bool {
        self.bindings.contains_key(key)
    }

    /// Strategy of the binding for `key`
    pub fn lifetime(&self, key: &CapabilityKey) -> Option<Lifetime> {
        self.bindings.get(key).map(Binding::lifetime)
    }

    /// Every bound key, sorted
    pub fn keys(&self) -> Vec<&CapabilityKey> {
        let mut keys: Vec<_> = self.bindings.keys().collect();
        keys.sort();
        keys
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("keys", &self.keys())
            .finish()
    }
}
