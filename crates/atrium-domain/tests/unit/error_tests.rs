//! Unit tests for domain error types

use atrium_domain::{CapabilityKey, Error};

#[test]
fn test_unresolved_dependency_error() {
    let error = Error::unresolved("greeter");
    match &error {
        Error::UnresolvedDependency { key } => assert_eq!(key, &CapabilityKey::named("greeter")),
        _ => panic!("Expected UnresolvedDependency error"),
    }
    assert_eq!(error.to_string(), "Unresolved dependency 'greeter'");
}

#[test]
fn test_unknown_command_error() {
    let error = Error::unknown_command("nosuch");
    match error {
        Error::UnknownCommand { name } => assert_eq!(name, "nosuch"),
        _ => panic!("Expected UnknownCommand error"),
    }
}

#[test]
fn test_bootstrap_failed_keeps_cause() {
    let error = Error::bootstrap_failed(1, "load-config", Error::configuration("file not found"));

    let display = error.to_string();
    assert!(display.contains("#1"));
    assert!(display.contains("load-config"));
    assert!(display.contains("file not found"));

    match error.root_cause() {
        Error::Configuration { message, .. } => assert_eq!(message, "file not found"),
        other => panic!("Expected Configuration cause, got {other:?}"),
    }
}

#[test]
fn test_command_failed_source_chain() {
    let error = Error::command_failed("fail", Error::internal("boom"));
    let source = std::error::Error::source(&error).expect("source should be set");
    assert!(source.to_string().contains("boom"));
}

#[test]
fn test_root_cause_of_plain_error_is_itself() {
    let error = Error::invalid_state("already bootstrapped");
    assert!(matches!(error.root_cause(), Error::InvalidState { .. }));
}

#[test]
fn test_io_error_from_std() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
    assert!(error.to_string().contains("missing"));
}

#[test]
fn test_type_mismatch_message() {
    let error = Error::type_mismatch(CapabilityKey::interface("http.ErrorsHandler"), "String");
    assert_eq!(
        error.to_string(),
        "Binding 'interface:http.ErrorsHandler' does not hold a value of type String"
    );
}
