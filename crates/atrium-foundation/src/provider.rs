//! Service Providers
//!
//! A provider is a module-registration unit: during the provider boot step
//! it receives the application once and declares bindings and commands.
//!
//! Providers can be registered explicitly with
//! [`Application::register_provider`] or submitted to the compile-time
//! registry and picked up by [`Application::register_discovered_providers`]:
//!
//! ```ignore
//! #[linkme::distributed_slice(SERVICE_PROVIDERS)]
//! static HTTP_PROVIDER: ProviderEntry = ProviderEntry {
//!     name: "http",
//!     description: "Router, error handler and maintenance commands",
//!     order: 10,
//!     factory: || Arc::new(HttpServiceProvider),
//! };
//! ```

use std::sync::Arc;

use crate::application::Application;

/// Module-registration unit invoked once during boot
pub trait Provider: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Declare bindings and commands.
    ///
    /// Registration cannot fail; a provider that needs to abort startup
    /// should contribute a dedicated bootstrapper instead.
    fn register(&self, app: &mut Application);
}

/// Registry entry for a compile-time discovered provider
pub struct ProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registration position; lower values register first, ties break by name
    pub order: u32,
    /// Factory creating the provider instance
    pub factory: fn() -> Arc<dyn Provider>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static SERVICE_PROVIDERS: [ProviderEntry] = [..];

/// Registered entries in registration order.
///
/// Link order of a distributed slice is unspecified, so entries are sorted by
/// `(order, name)` to keep boot deterministic.
pub fn discovered_providers() -> Vec<&'static ProviderEntry> {
    let mut entries: Vec<&'static ProviderEntry> = SERVICE_PROVIDERS.iter().collect();
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));
    entries
}

/// List all discovered providers as `(name, description)` pairs
pub fn list_providers() -> Vec<(&'static str, &'static str)> {
    discovered_providers()
        .into_iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
