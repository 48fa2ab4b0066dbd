//! Jump command - Resolve a jump point and change directory

use anyhow::{Context, Result};
use std::path::Path;

use crate::color;
use crate::config::{CdStrategy, Settings};
use crate::output::Streams;
use crate::registry::Registry;

/// Resolve jump point `name` and change into its target
///
/// With `CdStrategy::Emit` a single `cd` line is written to the eval stream.
/// With `CdStrategy::InProcess` the working directory of this process is
/// changed, which does not affect the calling shell.
///
/// # Errors
/// Returns an error if:
/// - The jump point does not exist
/// - Its link cannot be read
/// - The directory cannot be entered (in-process only)
pub fn cmd_jump(
    registry: &Registry,
    name: &str,
    settings: &Settings,
    streams: &mut Streams,
) -> Result<()> {
    let target = registry.resolve(name)?;
    change_directory(&target, settings, streams)
}

fn change_directory(target: &Path, settings: &Settings, streams: &mut Streams) -> Result<()> {
    match settings.cd_strategy {
        CdStrategy::Emit => {
            streams.emit(&settings.shell.cd_command(target))?;
        }
        CdStrategy::InProcess => {
            std::env::set_current_dir(target)
                .with_context(|| format!("Failed to change directory to {}", target.display()))?;
            streams.note(color::info(
                settings.color,
                format!("Changed directory to {}", target.display()),
            ))?;
        }
    }

    Ok(())
}
