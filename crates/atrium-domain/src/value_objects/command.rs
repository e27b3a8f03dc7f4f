use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Whether a flag is a boolean switch or carries a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    /// `--force`
    Switch,
    /// `--message "text"`
    Value,
}

/// Declaration of a single command flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Long name, used as `--name` and as the lookup key in [`CommandArgs`]
    pub name: String,
    /// Optional one-letter alias
    pub short: Option<char>,
    /// Help text
    pub help: String,
    /// Switch or value flag
    pub kind: FlagKind,
    /// Value used when a value flag is omitted
    pub default: Option<String>,
}

impl FlagSpec {
    /// Declare a value flag
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: String::new(),
            kind: FlagKind::Value,
            default: None,
        }
    }

    /// Declare a boolean switch
    pub fn switch(name: impl Into<String>) -> Self {
        Self {
            kind: FlagKind::Switch,
            ..Self::value(name)
        }
    }

    /// Set the one-letter alias
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the help text
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the default value
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Capability metadata of a console command.
///
/// The descriptor is captured once, when the command is registered, and is
/// all the CLI shell needs to build its help output and argument parser. The
/// command instance itself is only touched on dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Name used to invoke the command
    pub name: String,
    /// One-line summary
    pub usage: String,
    /// Long description shown by `help <command>`
    pub description: String,
    /// Declared flags
    pub flags: Vec<FlagSpec>,
}

impl CommandDescriptor {
    /// Create a descriptor with the given invocation name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            description: String::new(),
            flags: Vec::new(),
        }
    }

    /// Set the one-line summary
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Set the long description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a flag
    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    /// Find a declared flag by long name
    pub fn find_flag(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|flag| flag.name == name)
    }
}

/// Arguments handed to a command handler after the shell parsed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    positional: Vec<String>,
    values: BTreeMap<String, String>,
    switches: BTreeSet<String>,
}

impl CommandArgs {
    /// Empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Argument set holding only positional arguments
    pub fn from_positional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append a positional argument
    pub fn with_positional(mut self, arg: impl Into<String>) -> Self {
        self.positional.push(arg.into());
        self
    }

    /// Set a value flag
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Turn on a switch
    pub fn with_switch(mut self, name: impl Into<String>) -> Self {
        self.switches.insert(name.into());
        self
    }

    /// Positional arguments in order
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Value of a value flag
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of a value flag parsed into `T`
    pub fn parse_value<T: std::str::FromStr>(&self, name: &str) -> crate::Result<Option<T>> {
        self.value(name)
            .map(|raw| {
                raw.parse().map_err(|_| {
                    crate::Error::invalid_argument(format!("invalid value '{raw}' for --{name}"))
                })
            })
            .transpose()
    }

    /// Whether a switch was given
    pub fn is_set(&self, name: &str) -> bool {
        self.switches.contains(name)
    }

    /// True when no arguments at all were given
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.values.is_empty() && self.switches.is_empty()
    }
}
