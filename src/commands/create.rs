//! Create command - Add a new jump point

use anyhow::Result;
use std::path::Path;

use crate::color;
use crate::config::Settings;
use crate::output::Streams;
use crate::registry::Registry;

/// Create jump point `name` pointing at `path`
///
/// # Errors
/// Returns an error if:
/// - The name is invalid or already taken in the user config root
/// - The path cannot be made absolute
/// - The link cannot be created
pub fn cmd_create(
    registry: &Registry,
    name: &str,
    path: &Path,
    settings: &Settings,
    streams: &mut Streams,
) -> Result<()> {
    let jump_point = registry.create(name, path)?;

    streams.note(color::success(
        settings.color,
        format!(
            "Created jump point: {} -> {}",
            jump_point.name,
            jump_point.target.display()
        ),
    ))?;

    Ok(())
}
