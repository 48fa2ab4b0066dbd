//! List command - Display all jump points

use anyhow::Result;
use std::error::Error;

use crate::color;
use crate::config::Settings;
use crate::domain::jump_point::format_table;
use crate::output::Streams;
use crate::registry::Registry;

/// List every visible jump point on the diagnostic stream
///
/// Unreadable entries are reported as warnings and skipped.
///
/// # Errors
/// Returns an error if the diagnostic stream cannot be written
pub fn cmd_list(registry: &Registry, settings: &Settings, streams: &mut Streams) -> Result<()> {
    let listing = registry.list();

    for skipped in &listing.skipped {
        streams.note(color::warn(settings.color, describe(skipped)))?;
    }

    for line in format_table(&listing.jump_points, settings.color) {
        streams.note(line)?;
    }

    Ok(())
}

/// Message of `err` followed by its causes
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
