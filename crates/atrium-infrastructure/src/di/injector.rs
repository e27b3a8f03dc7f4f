//! Slot injection
//!
//! A consumer declares its dependencies as [`Inject`] slots, each tagged
//! with a capability key, and lists them in [`Injectable::inject`]. The
//! container walks that list through an [`Injector`], which fills every slot
//! it can and records what it could not.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use atrium_domain::CapabilityKey;
use atrium_domain::error::{Error, Result};
use tracing::trace;

use super::container::Container;

/// A dependency slot keyed by an explicit capability key
pub struct Inject<T: ?Sized> {
    key: CapabilityKey,
    value: Option<Arc<T>>,
}

impl<T: ?Sized> Inject<T> {
    /// Empty slot for `key`
    pub fn new(key: impl Into<CapabilityKey>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Key this slot is resolved from
    pub fn key(&self) -> &CapabilityKey {
        &self.key
    }

    /// Whether the slot currently holds a value
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// The injected value, or `UnresolvedDependency` if the slot is empty
    pub fn get(&self) -> Result<Arc<T>> {
        self.value
            .clone()
            .ok_or_else(|| Error::unresolved(self.key.clone()))
    }

    /// The injected value, if any
    pub fn get_opt(&self) -> Option<&Arc<T>> {
        self.value.as_ref()
    }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("key", &self.key)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// A consumer exposing injectable slots
pub trait Injectable {
    /// Hand every slot to the injector, marking each as required or optional.
    ///
    /// The default declares no slots.
    fn inject(&mut self, _injector: &mut Injector<'_>) {}
}

/// Fills slots from a container during one `make` call
pub struct Injector<'c> {
    container: &'c Container,
    attempted: usize,
    failures: Vec<Error>,
}

impl<'c> Injector<'c> {
    pub(crate) fn new(container: &'c Container) -> Self {
        Self {
            container,
            attempted: 0,
            failures: Vec::new(),
        }
    }

    /// Fill a mandatory slot; a missing binding is recorded as
    /// `UnresolvedDependency`
    pub fn required<T>(&mut self, slot: &mut Inject<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.fill(slot, true);
    }

    /// Fill an optional slot; a missing binding leaves it empty
    pub fn optional<T>(&mut self, slot: &mut Inject<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.fill(slot, false);
    }

    fn fill<T>(&mut self, slot: &mut Inject<T>, required: bool)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.attempted += 1;
        slot.value = None;

        let Some(resolved) = self.container.resolve(&slot.key) else {
            if required {
                self.failures.push(Error::unresolved(slot.key.clone()));
            }
            return;
        };

        match resolved.downcast::<T>() {
            Some(value) => slot.value = Some(value),
            None => self
                .failures
                .push(Error::type_mismatch(slot.key.clone(), type_name::<T>())),
        }
    }

    /// Number of slots attempted so far
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub(crate) fn finish(self) -> Result<()> {
        trace!(
            attempted = self.attempted,
            failed = self.failures.len(),
            "Injection finished"
        );
        match self.failures.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}
