//! Source command - Print the shell wrapper function

use anyhow::Result;

use crate::config::Settings;
use crate::output::Streams;

/// Print a shell function named `function` that evals this tool's stdout
///
/// # Errors
/// Returns an error if the function name is invalid or stdout cannot be written
pub fn cmd_source(function: &str, settings: &Settings, streams: &mut Streams) -> Result<()> {
    let definition = settings.shell.wrapper_function(function, &current_exe())?;
    streams.emit(definition.as_bytes())?;
    Ok(())
}

/// Path of the running executable, or the bare command name
fn current_exe() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.to_str().map(String::from))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
