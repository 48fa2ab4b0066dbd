//! Runtime settings resolved from flags and environment

use crate::color::ColorMode;
use crate::domain::jump_point::is_path_segment;
use crate::error::{JumpError, Result};
use crate::shell::ShellKind;

/// Directory under each config root that holds the links
pub const DEFAULT_NAMESPACE: &str = "jump";

/// How resolving a jump point changes directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum CdStrategy {
    /// Print a `cd` line on stdout for the wrapping shell function to eval
    #[default]
    Emit,
    /// Change the working directory of the jp process itself
    InProcess,
}

/// Settings for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub namespace: String,
    pub cd_strategy: CdStrategy,
    pub shell: ShellKind,
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            cd_strategy: CdStrategy::default(),
            shell: ShellKind::default(),
            color: ColorMode::default(),
        }
    }
}

impl Settings {
    /// Build settings, validating the namespace
    ///
    /// # Errors
    /// Returns a usage error if the namespace is not a single path segment
    pub fn new(
        namespace: &str,
        cd_strategy: CdStrategy,
        shell: ShellKind,
        color: ColorMode,
    ) -> Result<Self> {
        if !is_path_segment(namespace) {
            return Err(JumpError::Usage(format!("invalid namespace: {namespace:?}")));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            cd_strategy,
            shell,
            color,
        })
    }
}
