//! Jump point value type, name rules and table formatting

use std::path::{Component, Path, PathBuf};

use crate::color::ColorMode;
use crate::error::{JumpError, Result};

/// A named shortcut to an absolute path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpPoint {
    pub name: String,
    pub target: PathBuf,
}

impl JumpPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

/// Check that `name` is usable as exactly one path component
///
/// Rejects empty strings, `.`, `..`, anything containing a separator and
/// anything containing a NUL byte.
#[must_use]
pub fn is_path_segment(name: &str) -> bool {
    if name.is_empty() || name.contains('\0') {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(segment)), None) if segment == name
    )
}

/// Validate a jump point name
///
/// # Errors
/// Returns `InvalidName` if the name is not a single path segment
pub fn validate_name(name: &str) -> Result<()> {
    if is_path_segment(name) {
        Ok(())
    } else {
        Err(JumpError::InvalidName(name.to_string()))
    }
}

/// Make `path` absolute against `base` and normalize it lexically
///
/// Symlinks are not resolved, so the stored path is what the user typed,
/// anchored at `base`.
#[must_use]
pub fn absolutize_from(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Make `path` absolute against the current working directory
///
/// # Errors
/// Returns `PathResolution` if the current directory cannot be read
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(absolutize_from(path, Path::new("/")));
    }

    let cwd = std::env::current_dir().map_err(|source| JumpError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(absolutize_from(path, &cwd))
}

/// Format jump points as a left-aligned, tab-separated table
///
/// The name column is as wide as the longest name, counted in characters.
#[must_use]
pub fn format_table(entries: &[JumpPoint], color_mode: ColorMode) -> Vec<String> {
    let width = entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let name = color_mode.colorize_name(&format!("{:<width$}", entry.name));
            format!("{name}\t{}", entry.target.display())
        })
        .collect()
}
