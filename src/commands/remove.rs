//! Remove command - Delete a jump point

use anyhow::Result;

use crate::color;
use crate::config::Settings;
use crate::output::Streams;
use crate::registry::Registry;

/// Remove the highest-priority jump point named `name`
///
/// # Errors
/// Returns an error if:
/// - The jump point does not exist in any config root
/// - The link cannot be deleted
pub fn cmd_remove(
    registry: &Registry,
    name: &str,
    settings: &Settings,
    streams: &mut Streams,
) -> Result<()> {
    let link = registry.remove(name)?;

    streams.note(color::success(
        settings.color,
        format!("Removed jump point: {name} ({})", link.display()),
    ))?;

    Ok(())
}
