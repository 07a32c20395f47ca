//! MeetDeck configuration and persisted window state.
//!
//! TOML-based configuration with serde defaults on every section, so a
//! partial (or missing) config file works out of the box. Window
//! geometry lives in a separate state file owned by
//! [`WindowStateStore`] and is rewritten on move/resize/close.

pub mod loader;
pub mod paths;
pub mod schema;
pub mod window_state;

pub use schema::ShellConfig;
pub use window_state::{WindowGeometry, WindowStateStore};

use meetdeck_common::ConfigError;

/// Load config from the platform default path.
///
/// A missing file yields defaults and writes a starter config; a file
/// that fails validation is used as parsed, with a warning.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    loader::load_default()
}
