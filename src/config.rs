//! Configuration module
//!
//! jp has no configuration file of its own. Settings come from command-line
//! flags with environment-variable fallbacks, and jump points live under the
//! XDG config search path.

pub mod roots;
pub mod settings;

pub use roots::ConfigRoots;
pub use settings::{CdStrategy, Settings, DEFAULT_NAMESPACE};
