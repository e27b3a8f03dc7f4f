//! Bootstrap Pipeline Tests

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use atrium_foundation::bootstrappers::{BootProviders, LoadConfig};
use atrium_foundation::{
    Application, BootState, Bootstrapper, CapabilityKey, Error, Provider, bootstrapper,
};

fn app() -> Application {
    Application::new("pipeline", "0.0.0", "pipeline tests")
}

/// Records its name into a shared log when run
fn recording(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Box<dyn Bootstrapper> {
    let log = Rc::clone(log);
    bootstrapper(name, move |_app| {
        log.borrow_mut().push(name);
        Ok(())
    })
}

#[test]
fn test_steps_run_in_order_and_app_becomes_ready() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let steps = vec![
        recording("a", &log),
        recording("b", &log),
        recording("c", &log),
    ];

    let mut app = app();
    app.bootstrap_with(&steps).unwrap();

    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    assert_eq!(app.state(), BootState::Ready);
}

#[test]
fn test_empty_pipeline_reaches_ready() {
    let mut app = app();
    app.bootstrap_with(&[]).unwrap();
    assert_eq!(app.state(), BootState::Ready);
}

#[test]
fn test_first_failure_stops_pipeline() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let steps = vec![
        recording("a", &log),
        bootstrapper("broken", |_app| Err(Error::internal("disk on fire"))),
        recording("c", &log),
    ];

    let mut app = app();
    let err = app.bootstrap_with(&steps).unwrap_err();

    match &err {
        Error::BootstrapFailed { step, name, source } => {
            assert_eq!(*step, 1);
            assert_eq!(name, "broken");
            assert!(matches!(**source, Error::Internal { .. }));
        }
        other => panic!("expected BootstrapFailed, got {other:?}"),
    }
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(app.state(), BootState::Fatal);
}

#[test]
fn test_root_cause_unwraps_bootstrap_failure() {
    let steps = vec![bootstrapper("broken", |_app| {
        Err(Error::configuration("bad port"))
    })];

    let mut app = app();
    let err = app.bootstrap_with(&steps).unwrap_err();

    assert!(matches!(err.root_cause(), Error::Configuration { .. }));
}

#[test]
fn test_bindings_from_earlier_steps_are_visible_to_later_steps() {
    let seed = CapabilityKey::named("seed");
    let steps = vec![
        bootstrapper("seed", |app| {
            app.bind("seed", Arc::new(41_u64));
            Ok(())
        }),
        bootstrapper("grow", |app| {
            let seed = app.resolve_as::<u64>(&CapabilityKey::named("seed"))?;
            app.bind("grown", Arc::new(*seed + 1));
            Ok(())
        }),
    ];

    let mut app = app();
    app.bootstrap_with(&steps).unwrap();

    assert_eq!(*app.resolve_as::<u64>(&seed).unwrap(), 41);
    assert_eq!(
        *app.resolve_as::<u64>(&CapabilityKey::named("grown")).unwrap(),
        42
    );
}

#[test]
fn test_second_bootstrap_is_rejected() {
    let mut app = app();
    app.bootstrap_with(&[]).unwrap();

    let err = app.bootstrap_with(&[]).unwrap_err();
    assert!(matches!(err, Error::InvalidState { .. }));
    assert_eq!(app.state(), BootState::Ready);
}

#[test]
fn test_bootstrap_after_failure_is_rejected() {
    let mut app = app();
    let steps = vec![bootstrapper("broken", |_app| Err(Error::internal("x")))];
    app.bootstrap_with(&steps).unwrap_err();

    let err = app.bootstrap_with(&[]).unwrap_err();
    assert!(matches!(err, Error::InvalidState { .. }));
    assert_eq!(app.state(), BootState::Fatal);
}

#[test]
fn test_home_directory_is_fixed_once_bootstrapped() {
    let mut app = app();
    app.set_home_directory("/srv/app").unwrap();
    app.bootstrap_with(&[]).unwrap();

    assert!(app.set_home_directory("/elsewhere").is_err());
    assert_eq!(app.home_directory(), std::path::Path::new("/srv/app"));
}

struct FlagProvider(Arc<AtomicBool>);

impl Provider for FlagProvider {
    fn name(&self) -> &str {
        "flag"
    }

    fn register(&self, _app: &mut Application) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[test]
fn test_config_failure_halts_provider_boot() {
    let home = tempfile::tempdir().unwrap();
    let booted = Arc::new(AtomicBool::new(false));

    let mut app = app().with_home_directory(home.path());
    app.register_provider(FlagProvider(Arc::clone(&booted)));

    let steps: Vec<Box<dyn Bootstrapper>> =
        vec![Box::new(LoadConfig::required()), Box::new(BootProviders)];
    let err = app.bootstrap_with(&steps).unwrap_err();

    match &err {
        Error::BootstrapFailed { step, name, .. } => {
            assert_eq!(*step, 0);
            assert_eq!(name, "load-config");
        }
        other => panic!("expected BootstrapFailed, got {other:?}"),
    }
    assert!(matches!(err.root_cause(), Error::Configuration { .. }));
    assert!(!booted.load(Ordering::SeqCst));
    assert_eq!(app.state(), BootState::Fatal);
}
