//! Config root search path (XDG base directories)

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{JumpError, Result};

/// Fallback for `XDG_CONFIG_DIRS` when the variable is unset or empty
const DEFAULT_SHARED_ROOT: &str = "/etc/xdg";

/// Priority-ordered list of config roots
///
/// The user root comes first and is the only one jp writes to. Shared roots
/// follow in the order they are listed in `XDG_CONFIG_DIRS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRoots {
    user: PathBuf,
    shared: Vec<PathBuf>,
}

impl ConfigRoots {
    #[must_use]
    pub const fn new(user: PathBuf, shared: Vec<PathBuf>) -> Self {
        Self { user, shared }
    }

    /// Resolve the roots from the environment
    ///
    /// Respects `XDG_CONFIG_HOME` on all platforms when it is absolute.
    /// Fallback: `$HOME/.config`
    ///
    /// # Errors
    /// Returns `NoConfigRoot` if neither `XDG_CONFIG_HOME` nor a home
    /// directory is available
    pub fn from_env() -> Result<Self> {
        let user = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or(JumpError::NoConfigRoot)?;

        let shared = shared_roots_from(std::env::var_os("XDG_CONFIG_DIRS"));

        Ok(Self::new(user, shared))
    }

    /// The writable root used by create and modify
    #[must_use]
    pub fn user(&self) -> &Path {
        &self.user
    }

    /// All roots, highest priority first
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.user.as_path()).chain(self.shared.iter().map(PathBuf::as_path))
    }
}

/// Split `XDG_CONFIG_DIRS`, keeping only absolute entries
fn shared_roots_from(value: Option<OsString>) -> Vec<PathBuf> {
    match value {
        Some(value) if !value.is_empty() => std::env::split_paths(&value)
            .filter(|p| p.is_absolute())
            .collect(),
        _ => vec![PathBuf::from(DEFAULT_SHARED_ROOT)],
    }
}
