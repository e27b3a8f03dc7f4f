//! Command Dispatch Tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use atrium_foundation::{
    Application, BootState, CapabilityKey, Command, CommandArgs, CommandDescriptor, Error,
    FlagSpec, Inject, Injectable, Injector, Result, bootstrapper,
};

const GREETER: CapabilityKey = CapabilityKey::named("greeter");

trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

struct Polite;

impl Greeter for Polite {
    fn greet(&self, name: &str) -> String {
        format!("Good day, {name}")
    }
}

fn app() -> Application {
    Application::new("dispatch", "0.0.0", "dispatch tests")
}

/// Greets the first positional argument through an injected `Greeter`
struct GreetCommand {
    greeter: Inject<dyn Greeter>,
    handled: Arc<AtomicUsize>,
    last: Arc<std::sync::Mutex<String>>,
}

impl GreetCommand {
    fn new(handled: &Arc<AtomicUsize>) -> Self {
        Self {
            greeter: Inject::new(GREETER),
            handled: Arc::clone(handled),
            last: Arc::default(),
        }
    }
}

impl Injectable for GreetCommand {
    fn inject(&mut self, injector: &mut Injector<'_>) {
        injector.required(&mut self.greeter);
    }
}

impl Command for GreetCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("greet")
            .usage("greet <name>")
            .description("Greet someone")
            .flag(FlagSpec::switch("loud").short('l'))
    }

    fn handle(&mut self, args: &CommandArgs) -> Result<()> {
        self.handled.fetch_add(1, Ordering::SeqCst);
        let name = args
            .positional()
            .first()
            .ok_or_else(|| Error::invalid_argument("name is required"))?;
        let mut greeting = self.greeter.get()?.greet(name);
        if args.is_set("loud") {
            greeting = greeting.to_uppercase();
        }
        *self.last.lock().unwrap() = greeting;
        Ok(())
    }
}

/// Fails on every run
struct FailCommand;

impl Injectable for FailCommand {}

impl Command for FailCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("fail")
    }

    fn handle(&mut self, _args: &CommandArgs) -> Result<()> {
        Err(Error::internal("boom"))
    }
}

/// Counts its runs
struct OkCommand(Arc<AtomicUsize>);

impl Injectable for OkCommand {}

impl Command for OkCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("ok")
    }

    fn handle(&mut self, _args: &CommandArgs) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_dispatch_injects_and_runs_handler() {
    let handled = Arc::new(AtomicUsize::new(0));
    let command = GreetCommand::new(&handled);
    let last = Arc::clone(&command.last);

    let mut app = app();
    app.bind::<dyn Greeter>(GREETER, Arc::new(Polite));
    app.register_command(command);

    let args = CommandArgs::from_positional(["Ada"]).with_switch("loud");
    app.dispatch("greet", &args).unwrap();

    assert_eq!(handled.load(Ordering::SeqCst), 1);
    assert_eq!(*last.lock().unwrap(), "GOOD DAY, ADA");
}

#[test]
fn test_unbound_dependency_prevents_handler() {
    let handled = Arc::new(AtomicUsize::new(0));
    let mut app = app();
    app.register_command(GreetCommand::new(&handled));

    let err = app
        .dispatch("greet", &CommandArgs::from_positional(["Ada"]))
        .unwrap_err();

    assert!(matches!(err, Error::UnresolvedDependency { ref key } if *key == GREETER));
    assert_eq!(handled.load(Ordering::SeqCst), 0);
}

#[test]
fn test_handler_error_is_wrapped_and_isolated() {
    let ok_runs = Arc::new(AtomicUsize::new(0));
    let mut app = app();
    app.register_command(FailCommand);
    app.register_command(OkCommand(Arc::clone(&ok_runs)));

    let err = app.dispatch("fail", &CommandArgs::new()).unwrap_err();
    match &err {
        Error::CommandFailed { command, source } => {
            assert_eq!(command, "fail");
            assert!(matches!(**source, Error::Internal { .. }));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    app.dispatch("ok", &CommandArgs::new()).unwrap();
    assert_eq!(ok_runs.load(Ordering::SeqCst), 1);
    assert_eq!(app.command_registry().len(), 2);
}

#[test]
fn test_unknown_command_does_not_touch_container() {
    let factory_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&factory_calls);

    let mut app = app();
    app.bind_factory::<dyn Greeter, _>(GREETER, move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Arc::new(Polite) as Arc<dyn Greeter>
    });
    app.register_command(GreetCommand::new(&Arc::new(AtomicUsize::new(0))));

    let err = app.dispatch("nosuch", &CommandArgs::new()).unwrap_err();

    assert!(matches!(err, Error::UnknownCommand { ref name } if name == "nosuch"));
    assert_eq!(factory_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_slots_are_reinjected_on_every_dispatch() {
    let factory_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&factory_calls);
    let handled = Arc::new(AtomicUsize::new(0));

    let mut app = app();
    app.bind_factory::<dyn Greeter, _>(GREETER, move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Arc::new(Polite) as Arc<dyn Greeter>
    });
    app.register_command(GreetCommand::new(&handled));

    let args = CommandArgs::from_positional(["Ada"]);
    app.dispatch("greet", &args).unwrap();
    app.dispatch("greet", &args).unwrap();

    assert_eq!(factory_calls.load(Ordering::SeqCst), 2);
    assert_eq!(handled.load(Ordering::SeqCst), 2);
}

#[test]
fn test_first_registered_command_wins() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let mut app = app();
    app.register_command(OkCommand(Arc::clone(&first)));
    app.register_command(OkCommand(Arc::clone(&second)));

    app.dispatch("ok", &CommandArgs::new()).unwrap();

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert_eq!(app.command_descriptors().count(), 2);
}

#[test]
fn test_bulk_registration_keeps_order() {
    let mut app = app();
    app.commands(vec![
        Box::new(FailCommand) as Box<dyn Command>,
        Box::new(OkCommand(Arc::new(AtomicUsize::new(0)))),
    ]);

    let names: Vec<_> = app.command_descriptors().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["fail", "ok"]);
    assert!(app.command_registry().contains("ok"));
    assert!(app.command_registry().find("greet").is_none());
}

#[test]
fn test_dispatch_refused_after_failed_bootstrap() {
    let runs = Arc::new(AtomicUsize::new(0));
    let mut app = app();
    app.register_command(OkCommand(Arc::clone(&runs)));

    let steps = vec![bootstrapper("broken", |_app| Err(Error::internal("x")))];
    app.bootstrap_with(&steps).unwrap_err();
    assert_eq!(app.state(), BootState::Fatal);

    let err = app.dispatch("ok", &CommandArgs::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidState { .. }));
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}
