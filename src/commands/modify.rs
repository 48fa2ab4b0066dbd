//! Modify command - Point an existing jump point somewhere else

use anyhow::Result;
use std::path::Path;

use crate::color;
use crate::config::Settings;
use crate::output::Streams;
use crate::registry::Registry;

/// Replace jump point `name` with one pointing at `path`
///
/// Behaves like create when the jump point does not exist yet.
///
/// # Errors
/// Returns an error if:
/// - The name is invalid
/// - The path cannot be made absolute
/// - The link cannot be created
pub fn cmd_modify(
    registry: &Registry,
    name: &str,
    path: &Path,
    settings: &Settings,
    streams: &mut Streams,
) -> Result<()> {
    let jump_point = registry.modify(name, path)?;

    streams.note(color::success(
        settings.color,
        format!(
            "Updated jump point: {} -> {}",
            jump_point.name,
            jump_point.target.display()
        ),
    ))?;

    Ok(())
}
