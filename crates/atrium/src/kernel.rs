//! Console kernel
//!
//! Handles one invocation in two parsing phases. Commands are only known
//! once providers have registered them, so:
//!
//! 1. global flags (`--home`) are read from the raw arguments,
//! 2. the application is bootstrapped against that home directory,
//! 3. a `clap` command tree is built from the registered descriptors and the
//!    full argument list is parsed against it,
//! 4. the selected command is dispatched.
//!
//! Global flags must precede the command name. When several commands share
//! a name only the first is exposed, matching dispatch. Descriptors whose
//! names or flags clash with the ids the shell reserves are rejected with
//! `InvalidArgument`.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

use atrium_domain::constants::ERRORS_HANDLER_KEY;
use atrium_domain::error::{Error, Result};
use atrium_domain::{CommandArgs, CommandDescriptor, FlagKind};
use atrium_foundation::bootstrappers::default_bootstrappers;
use atrium_foundation::{Application, Bootstrapper};
use atrium_infrastructure::ErrorContext;
use atrium_infrastructure::constants::DEFAULT_HOME_DIR;
use atrium_providers::http::ErrorsHandlerContract;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, Parser};
use tracing::{debug, warn};

/// Argument id holding a command's positional arguments
const POSITIONAL_ARGS: &str = "arguments";

/// Argument id of the home directory flag
const HOME_ARG: &str = "home";

/// Names clap claims for its help subcommand and flag
const HELP_NAME: &str = "help";

/// Short alias of the help flag
const HELP_SHORT: char = 'h';

/// Global flags, read before bootstrap
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true, ignore_errors = true)]
struct GlobalArgs {
    /// Path to home directory
    #[arg(short = 'H', long)]
    home: Option<PathBuf>,

    /// Command and its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

/// Default home directory: `<data dir>/atrium`, or `.` when the platform has
/// no data directory
pub fn default_home_directory() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(DEFAULT_HOME_DIR))
}

/// Console shell around an [`Application`]
pub struct Kernel {
    application: Application,
    bootstrappers: Vec<Box<dyn Bootstrapper>>,
}

impl Kernel {
    /// Kernel running `[DetectEnv, LoadConfig, BootProviders]`
    pub fn new(application: Application) -> Self {
        Self {
            application,
            bootstrappers: default_bootstrappers(),
        }
    }

    /// Replace the bootstrap pipeline
    pub fn set_bootstrappers(&mut self, bootstrappers: Vec<Box<dyn Bootstrapper>>) {
        self.bootstrappers = bootstrappers;
    }

    /// Names of the configured bootstrappers, in order
    pub fn bootstrapper_names(&self) -> Vec<&str> {
        self.bootstrappers.iter().map(|step| step.name()).collect()
    }

    /// The wrapped application
    pub fn application(&self) -> &Application {
        &self.application
    }

    /// The wrapped application, mutably
    pub fn application_mut(&mut self) -> &mut Application {
        &mut self.application
    }

    /// Handle one invocation. `args` includes the binary name.
    ///
    /// Help and version requests print and return `Ok`. Command failures
    /// are reported through the bound errors handler, when there is one,
    /// and returned.
    pub fn handle<I, T>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if let Ok(GlobalArgs {
            home: Some(home),
            rest,
        }) = GlobalArgs::try_parse_from(&args)
        {
            debug!(
                home = %home.display(),
                command = ?rest.first(),
                "Home directory from command line"
            );
            self.application.set_home_directory(home)?;
        }

        self.application.bootstrap_with(&self.bootstrappers)?;

        let matches = match self.cli()?.try_get_matches_from(&args) {
            Ok(matches) => matches,
            Err(e) => return Self::clap_outcome(&e),
        };

        let Some((name, sub_matches)) = matches.subcommand() else {
            return Ok(());
        };
        let Some(descriptor) = self.application.command_registry().find(name) else {
            return Err(Error::unknown_command(name));
        };
        let command_args = collect_args(descriptor, sub_matches);

        let result = self.application.dispatch(name, &command_args);
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    fn report(&self, err: &Error) {
        if let Ok(handler) = self
            .application
            .resolve_as::<dyn ErrorsHandlerContract>(&ERRORS_HANDLER_KEY)
        {
            handler.report(err);
        }
    }

    /// Help and version output is success; anything else is a usage error
    fn clap_outcome(e: &clap::Error) -> Result<()> {
        match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                e.print().io_context("Failed to print help")
            }
            ErrorKind::InvalidSubcommand => match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => Err(Error::unknown_command(name.clone())),
                _ => Err(Error::invalid_argument(e.render().to_string())),
            },
            _ => Err(Error::invalid_argument(e.render().to_string())),
        }
    }

    /// Command tree built from the registered descriptors
    fn cli(&self) -> Result<clap::Command> {
        let app = &self.application;
        let mut cli = clap::Command::new(app.name().to_string())
            .version(app.version().to_string())
            .about(app.description().to_string())
            .arg_required_else_help(true)
            .arg(
                Arg::new(HOME_ARG)
                    .short('H')
                    .long(HOME_ARG)
                    .value_name("DIR")
                    .help("Path to home directory")
                    .default_value(app.home_directory().display().to_string()),
            );

        let mut seen = HashSet::new();
        for descriptor in app.command_descriptors() {
            if !seen.insert(descriptor.name.as_str()) {
                warn!(
                    command = %descriptor.name,
                    "Duplicate command name, first registration wins"
                );
                continue;
            }
            validate(descriptor)?;
            cli = cli.subcommand(subcommand(descriptor));
        }
        Ok(cli)
    }
}

/// Reject names clap would refuse to build
fn validate(descriptor: &CommandDescriptor) -> Result<()> {
    let command = &descriptor.name;
    if command.is_empty() || command.starts_with('-') || command == HELP_NAME {
        return Err(Error::invalid_argument(format!(
            "command name '{command}' is reserved or malformed"
        )));
    }

    let mut names = HashSet::new();
    let mut shorts = HashSet::new();
    for flag in &descriptor.flags {
        let name = flag.name.as_str();
        let reserved = name == POSITIONAL_ARGS || name == HELP_NAME;
        if reserved || name.is_empty() || name.starts_with('-') {
            return Err(Error::invalid_argument(format!(
                "command '{command}': flag name '{name}' is reserved or malformed"
            )));
        }
        if !names.insert(name) {
            return Err(Error::invalid_argument(format!(
                "command '{command}': flag '--{name}' is declared twice"
            )));
        }
        if let Some(short) = flag.short {
            if short == HELP_SHORT || short == '-' {
                return Err(Error::invalid_argument(format!(
                    "command '{command}': short flag '-{short}' is reserved"
                )));
            }
            if !shorts.insert(short) {
                return Err(Error::invalid_argument(format!(
                    "command '{command}': short flag '-{short}' is declared twice"
                )));
            }
        }
    }
    Ok(())
}

fn subcommand(descriptor: &CommandDescriptor) -> clap::Command {
    let mut command = clap::Command::new(descriptor.name.clone())
        .about(descriptor.usage.clone())
        .arg(
            Arg::new(POSITIONAL_ARGS)
                .value_name("ARGS")
                .num_args(0..)
                .action(ArgAction::Append),
        );
    if !descriptor.description.is_empty() {
        command = command.long_about(descriptor.description.clone());
    }

    for flag in &descriptor.flags {
        let mut arg = Arg::new(flag.name.clone())
            .long(flag.name.clone())
            .help(flag.help.clone());
        if let Some(short) = flag.short {
            arg = arg.short(short);
        }
        arg = match flag.kind {
            FlagKind::Switch => arg.action(ArgAction::SetTrue),
            FlagKind::Value => {
                let arg = arg.action(ArgAction::Set).num_args(1);
                match &flag.default {
                    Some(default) => arg.default_value(default.clone()),
                    None => arg,
                }
            }
        };
        command = command.arg(arg);
    }
    command
}

fn collect_args(descriptor: &CommandDescriptor, matches: &ArgMatches) -> CommandArgs {
    let mut args = CommandArgs::from_positional(
        matches
            .get_many::<String>(POSITIONAL_ARGS)
            .into_iter()
            .flatten()
            .cloned(),
    );
    for flag in &descriptor.flags {
        match flag.kind {
            FlagKind::Switch => {
                if matches.get_flag(&flag.name) {
                    args = args.with_switch(flag.name.clone());
                }
            }
            FlagKind::Value => {
                if let Some(value) = matches.get_one::<String>(&flag.name) {
                    args = args.with_value(flag.name.clone(), value.clone());
                }
            }
        }
    }
    args
}
