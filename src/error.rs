//! Error kinds raised by the jump point registry

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JumpError {
    #[error("jump point already exists: {0}")]
    AlreadyExists(String),

    #[error("jump point does not exist: {0}")]
    NotFound(String),

    #[error("invalid jump point name: {0:?}")]
    InvalidName(String),

    #[error("cannot resolve absolute path for {}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("cannot determine user config directory (set XDG_CONFIG_HOME or HOME)")]
    NoConfigRoot,
}

impl JumpError {
    /// Wrap an I/O error with the action and path that caused it
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, JumpError>;
