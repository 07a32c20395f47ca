//! Config loading: read from a path or the platform default.

use std::path::Path;

use tracing::{info, warn};

use meetdeck_common::ConfigError;

use crate::paths::default_config_path;
use crate::schema::{validate, ShellConfig};

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. If validation fails the
/// parsed config is still returned, with a warning; the shell clamps
/// sizes at the window layer anyway.
pub fn load_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;

    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validate(&config) {
        warn!("config validation warning: {e} — using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// If the file does not exist, writes a default config there and
/// returns defaults.
pub fn load_default() -> Result<ShellConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            let config = ShellConfig::default();
            if let Err(e) = write_default_config(&path, &config) {
                warn!("failed to write default config: {e}");
            }
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

fn write_default_config(path: &Path, config: &ShellConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;
    std::fs::write(path, toml_str).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })?;
    info!("created default config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_from_path_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\ntitlebar_height = 32\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.titlebar_height, 32);
        assert_eq!(config.window.default_width, 1280);
    }

    #[test]
    fn load_from_path_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not { valid = toml").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_values_still_load_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nmin_width = 0\n").unwrap();

        // Validation failure is a warning, not an error
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.min_width, 0);
    }

    #[test]
    fn write_default_creates_parseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        write_default_config(&path, &ShellConfig::default()).unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.titlebar_height, 40);
    }
}
