//! Error Extension Tests

use atrium_domain::Error;
use atrium_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("reading ledger").unwrap_err();
    match err {
        Error::Io { message, source } => {
            assert_eq!(message, "reading ledger: gone");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let err = failing_io().config_context("loading config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("loading config"));
}

#[test]
fn test_migration_context() {
    let err = failing_io().migration_context("writing ledger").unwrap_err();
    assert!(matches!(err, Error::Migration { .. }));
}

#[test]
fn test_lazy_context_not_evaluated_on_success() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must stay lazy") })
        .unwrap();
    assert_eq!(value, 7);
}
