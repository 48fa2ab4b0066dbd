use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgGroup, Parser, ValueHint};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::color::ColorMode;
use crate::config::{CdStrategy, ConfigRoots, Settings, DEFAULT_NAMESPACE};
use crate::error::{JumpError, Result};
use crate::registry::Registry;
use crate::shell::ShellKind;

/// Function name printed by `--source` when none is given
pub const DEFAULT_FUNCTION_NAME: &str = "jp";

/// Jump to named directories
///
/// Without arguments, lists jump points. With a NAME, prints a `cd` command
/// for the wrapping shell function to eval (see --source).
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .args(["source", "create", "modify", "remove"])
        .multiple(false)
))]
pub struct Cli {
    /// Print a shell function named NAME (default: jp) that wraps this tool
    #[arg(long)]
    pub source: bool,

    /// Create a new jump point NAME pointing at PATH
    #[arg(short, long)]
    pub create: bool,

    /// Point jump point NAME at PATH, replacing any existing one
    #[arg(short, long)]
    pub modify: bool,

    /// Remove jump point NAME
    #[arg(short, long)]
    pub remove: bool,

    /// Directory under each config root that holds jump points
    #[arg(long, value_name = "NS", env = "JP_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// How resolving a jump point changes directory
    #[arg(long, value_enum, env = "JP_CD_STRATEGY", default_value_t)]
    pub cd_strategy: CdStrategy,

    /// Shell dialect for commands printed on stdout
    #[arg(long, value_enum, env = "JP_SHELL", default_value_t, ignore_case = true)]
    pub shell: ShellKind,

    /// When to use colored output
    #[arg(long, value_name = "WHEN", ignore_case = true)]
    pub color: Option<ColorMode>,

    /// Jump point name
    #[arg(add = ArgValueCompleter::new(complete_jump_points))]
    pub name: Option<String>,

    /// Target directory for --create and --modify
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Jump { name: String },
    Create { name: String, path: PathBuf },
    Modify { name: String, path: PathBuf },
    Remove { name: String },
    Source { function: String },
}

impl Cli {
    /// Pick the action from the mode flag and positional arguments
    ///
    /// # Errors
    /// Returns a usage error when the positional arguments do not fit the mode
    pub fn action(&self) -> Result<Action> {
        let name = self.name.clone();
        let path = self.path.clone();

        if self.source {
            if path.is_some() {
                return Err(usage("too many arguments"));
            }
            return Ok(Action::Source {
                function: name.unwrap_or_else(|| DEFAULT_FUNCTION_NAME.to_string()),
            });
        }

        if self.create || self.modify {
            let flag = if self.create { "--create" } else { "--modify" };
            let (Some(name), Some(path)) = (name, path) else {
                return Err(usage(&format!("{flag} requires NAME and PATH")));
            };
            return Ok(if self.create {
                Action::Create { name, path }
            } else {
                Action::Modify { name, path }
            });
        }

        if self.remove {
            return match (name, path) {
                (Some(name), None) => Ok(Action::Remove { name }),
                (None, _) => Err(usage("--remove requires NAME")),
                (Some(_), Some(_)) => Err(usage("too many arguments")),
            };
        }

        match (name, path) {
            (None, _) => Ok(Action::List),
            (Some(name), None) => Ok(Action::Jump { name }),
            (Some(_), Some(_)) => Err(usage("too many arguments")),
        }
    }

    /// Resolve settings from flags and environment
    ///
    /// # Errors
    /// Returns a usage error if the namespace is invalid
    pub fn settings(&self) -> Result<Settings> {
        Settings::new(
            &self.namespace,
            self.cd_strategy,
            self.shell,
            ColorMode::resolve(self.color),
        )
    }
}

fn usage(message: &str) -> JumpError {
    JumpError::Usage(message.to_string())
}

/// Usage error for mode flags given together
///
/// Returns `None` for any other parse error.
#[must_use]
pub fn conflict_usage(err: &clap::Error) -> Option<JumpError> {
    if err.kind() != ErrorKind::ArgumentConflict {
        return None;
    }

    let message = match (err.get(ContextKind::InvalidArg), err.get(ContextKind::PriorArg)) {
        (Some(ContextValue::String(arg)), Some(ContextValue::String(prior))) => {
            format!("the argument '{arg}' cannot be used with '{prior}'")
        }
        (Some(ContextValue::String(arg)), Some(ContextValue::Strings(prior))) => {
            let prior: Vec<String> = prior.iter().map(|p| format!("'{p}'")).collect();
            format!("the argument '{arg}' cannot be used with {}", prior.join(", "))
        }
        _ => "only one of --source, --create, --modify and --remove may be given".to_string(),
    };
    Some(usage(&message))
}

/// Complete jump point names for the NAME argument
///
/// The namespace comes from `--namespace` on the line being completed, then
/// `JP_NAMESPACE`. Returns an empty Vec if no config root can be determined
/// or the namespace is invalid.
#[must_use]
pub fn complete_jump_points(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(registry) = completion_registry(std::env::args_os()) else {
        return Vec::new();
    };

    matching_names(&registry, &current.to_string_lossy())
        .into_iter()
        .map(CompletionCandidate::new)
        .collect()
}

fn completion_registry(args: impl IntoIterator<Item = OsString>) -> Option<Registry> {
    let namespace = namespace_from_args(args)
        .or_else(|| std::env::var("JP_NAMESPACE").ok())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    let settings = Settings::new(
        &namespace,
        CdStrategy::default(),
        ShellKind::default(),
        ColorMode::Never,
    )
    .ok()?;
    let roots = ConfigRoots::from_env().ok()?;

    Some(Registry::new(roots, settings.namespace))
}

/// Last `--namespace` value on a command line
fn namespace_from_args(args: impl IntoIterator<Item = OsString>) -> Option<String> {
    let mut args = args.into_iter();
    let mut namespace = None;

    while let Some(arg) = args.next() {
        let arg = arg.to_string_lossy();
        if arg == "--namespace" {
            namespace = args.next().map(|value| value.to_string_lossy().into_owned());
        } else if let Some(value) = arg.strip_prefix("--namespace=") {
            namespace = Some(value.to_string());
        }
    }

    namespace
}

fn matching_names(registry: &Registry, prefix: &str) -> Vec<String> {
    registry
        .names()
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect()
}
