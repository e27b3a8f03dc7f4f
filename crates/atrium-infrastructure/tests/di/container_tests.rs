//! Binding Container Tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use atrium_domain::{CapabilityKey, Error};
use atrium_infrastructure::di::{Container, Lifetime};

trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}")
    }
}

#[derive(Debug, PartialEq)]
struct Connection(&'static str);

const DB: CapabilityKey = CapabilityKey::named("db");

#[test]
fn test_singleton_resolution_returns_same_instance() {
    let mut container = Container::new();
    let conn = Arc::new(Connection("primary"));
    container.bind(DB, Arc::clone(&conn));

    let first = container.resolve_as::<Connection>(&DB).unwrap();
    let second = container.resolve_as::<Connection>(&DB).unwrap();

    assert!(Arc::ptr_eq(&first, &conn));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(container.lifetime(&DB), Some(Lifetime::Singleton));
}

#[test]
fn test_shadowing_keeps_only_latest_binding() {
    let mut container = Container::new();
    container.bind(DB, Arc::new(Connection("first")));
    container.bind(DB, Arc::new(Connection("second")));

    assert_eq!(container.len(), 1);
    let resolved = container.resolve_as::<Connection>(&DB).unwrap();
    assert_eq!(*resolved, Connection("second"));
}

#[test]
fn test_shadowing_can_change_strategy() {
    let mut container = Container::new();
    container.bind(DB, Arc::new(Connection("fixed")));
    container.bind_factory(DB, |_| Arc::new(Connection("fresh")));

    assert_eq!(container.lifetime(&DB), Some(Lifetime::Transient));
    assert_eq!(*container.resolve_as::<Connection>(&DB).unwrap(), Connection("fresh"));
}

#[test]
fn test_factory_runs_once_per_resolution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut container = Container::new();
    container.bind_factory(DB, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Arc::new(Connection("pooled"))
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let first = container.resolve_as::<Connection>(&DB).unwrap();
    let second = container.resolve_as::<Connection>(&DB).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_factory_can_use_other_bindings() {
    let mut container = Container::new();
    container.bind("dsn", Arc::new(String::from("sqlite://memory")));
    container.bind_factory(DB, |c| {
        let dsn = c.resolve_as::<String>(&CapabilityKey::named("dsn")).unwrap();
        Arc::new(format!("connected to {dsn}"))
    });

    let conn = container.resolve_as::<String>(&DB).unwrap();
    assert_eq!(conn.as_str(), "connected to sqlite://memory");
}

#[test]
fn test_trait_objects_bind_under_interface_keys() {
    let key = CapabilityKey::interface("Greeter");
    let mut container = Container::new();
    container.bind::<dyn Greeter>(key.clone(), Arc::new(English));

    let greeter = container.resolve_as::<dyn Greeter>(&key).unwrap();
    assert_eq!(greeter.greet("Ada"), "Hello, Ada");

    // Same name, nominal flavour: a different binding
    assert!(!container.contains(&CapabilityKey::named("Greeter")));
}

#[test]
fn test_resolve_missing_key() {
    let container = Container::new();
    assert!(container.resolve(&DB).is_none());

    match container.resolve_as::<Connection>(&DB) {
        Err(Error::NotRegistered { key }) => assert_eq!(key, DB),
        other => panic!("Expected NotRegistered, got {other:?}"),
    }
}

#[test]
fn test_resolve_with_wrong_type() {
    let mut container = Container::new();
    container.bind(DB, Arc::new(Connection("primary")));

    let err = container.resolve_as::<String>(&DB).unwrap_err();
    assert!(matches!(err, Error::BindingTypeMismatch { .. }));

    let resolved = container.resolve(&DB).unwrap();
    assert_eq!(resolved.key(), &DB);
    assert!(resolved.downcast::<String>().is_none());
    assert!(resolved.downcast::<Connection>().is_some());
}

#[test]
fn test_keys_are_sorted() {
    let mut container = Container::new();
    assert!(container.is_empty());
    container.bind("zeta", Arc::new(1_u8));
    container.bind("alpha", Arc::new(2_u8));

    let keys: Vec<String> = container.keys().iter().map(ToString::to_string).collect();
    assert_eq!(keys, ["alpha", "zeta"]);
}
