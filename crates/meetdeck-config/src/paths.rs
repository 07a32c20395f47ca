//! Platform path resolution for the config and state files.

use meetdeck_common::ConfigError;
use std::path::PathBuf;

fn app_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("meetdeck"))
}

/// Platform default config file path.
///
/// macOS: `~/Library/Application Support/meetdeck/config.toml`
/// Linux: `~/.config/meetdeck/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_config_dir()?.join("config.toml"))
}

/// Path of the persisted window-geometry record.
pub fn window_state_path() -> Result<PathBuf, ConfigError> {
    Ok(app_config_dir()?.join("window-state.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_and_state_share_a_directory() {
        let config = default_config_path().unwrap();
        let state = window_state_path().unwrap();
        assert_eq!(config.parent(), state.parent());
        assert_eq!(config.file_name().unwrap(), "config.toml");
        assert_eq!(state.file_name().unwrap(), "window-state.toml");
    }
}
