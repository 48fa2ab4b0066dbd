use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;
use std::io;
use std::process::ExitCode;

use jp::cli::{conflict_usage, Action, Cli};
use jp::commands;
use jp::config::{ConfigRoots, Settings};
use jp::error::JumpError;
use jp::output::Streams;
use jp::registry::Registry;

fn main() -> ExitCode {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut eval = stdout.lock();
    let mut diag = stderr.lock();
    let mut streams = Streams::new(&mut eval, &mut diag);

    // stdout is evaluated by the shell, so help and parse errors go to stderr too
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if let Some(usage) = conflict_usage(&err) {
                report(&anyhow::Error::new(usage), &mut streams);
                return ExitCode::FAILURE;
            }
            let _ = write!(streams.diag, "{}", err.render());
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(&cli, &mut streams) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, &mut streams);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, streams: &mut Streams) -> Result<()> {
    let action = cli.action()?;
    let settings = cli.settings()?;

    match action {
        Action::Source { function } => commands::source::cmd_source(&function, &settings, streams),
        Action::List => commands::list::cmd_list(&open_registry(&settings)?, &settings, streams),
        Action::Jump { name } => {
            commands::jump::cmd_jump(&open_registry(&settings)?, &name, &settings, streams)
        }
        Action::Create { name, path } => commands::create::cmd_create(
            &open_registry(&settings)?,
            &name,
            &path,
            &settings,
            streams,
        ),
        Action::Modify { name, path } => commands::modify::cmd_modify(
            &open_registry(&settings)?,
            &name,
            &path,
            &settings,
            streams,
        ),
        Action::Remove { name } => {
            commands::remove::cmd_remove(&open_registry(&settings)?, &name, &settings, streams)
        }
    }
}

/// Registry over the XDG config roots
///
/// Not needed for `--source`, which works without a config root.
fn open_registry(settings: &Settings) -> Result<Registry> {
    Ok(Registry::new(
        ConfigRoots::from_env()?,
        settings.namespace.clone(),
    ))
}

/// Print `Error: <message>` and, for usage errors, the help text
fn report(err: &anyhow::Error, streams: &mut Streams) {
    let _ = writeln!(streams.diag, "Error: {err:#}");

    if err
        .downcast_ref::<JumpError>()
        .is_some_and(JumpError::is_usage)
    {
        let _ = writeln!(streams.diag);
        let _ = write!(streams.diag, "{}", Cli::command().render_help());
    }
}
