//! Compile-time Registration Tests

use atrium_domain::constants::{MIGRATOR_KEY, ROUTER_KEY};
use atrium_foundation::Application;
use atrium_foundation::provider::list_providers;

#[test]
fn test_providers_are_discovered_in_order() {
    let names: Vec<_> = list_providers().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["http", "database"]);
}

#[test]
fn test_discovered_providers_boot() {
    // Linking the crate is enough for discovery
    let _ = atrium_providers::HttpServiceProvider;

    let mut app = Application::new("discovery", "0.0.0", "discovery tests");
    assert_eq!(app.register_discovered_providers(), 2);
    app.boot_providers().unwrap();

    assert!(app.container().contains(&ROUTER_KEY));
    assert!(app.container().contains(&MIGRATOR_KEY));
    assert_eq!(app.command_registry().len(), 5);
}
