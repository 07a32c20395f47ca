//! Persisted window geometry.
//!
//! A small key-value record rewritten on move/resize/close and read
//! once at startup. Last write wins; writes are atomic (tmp file +
//! rename) so a crash mid-write never leaves a corrupt state file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use meetdeck_common::ConfigError;

use crate::schema::WindowConfig;

/// Main-window position, size, and maximize state.
///
/// `x`/`y` of `None` means no position was ever recorded; the window
/// manager places the window on first launch. While maximized, the
/// stored size and position keep the last un-maximized bounds so a
/// restore returns the window where it was.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowGeometry {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
    pub maximized: bool,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        let w = WindowConfig::default();
        Self {
            x: None,
            y: None,
            width: w.default_width,
            height: w.default_height,
            maximized: w.start_maximized,
        }
    }
}

impl WindowGeometry {
    /// Defaults derived from the configured window section.
    pub fn from_config(window: &WindowConfig) -> Self {
        Self {
            x: None,
            y: None,
            width: window.default_width,
            height: window.default_height,
            maximized: window.start_maximized,
        }
    }

    /// Clamp the stored size to the configured minimum.
    pub fn sanitize(mut self, window: &WindowConfig) -> Self {
        self.width = self.width.max(window.min_width);
        self.height = self.height.max(window.min_height);
        self
    }
}

/// Loads and saves the window-geometry record.
pub struct WindowStateStore {
    path: PathBuf,
}

impl WindowStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_path() -> Result<Self, ConfigError> {
        Ok(Self::new(crate::paths::window_state_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted geometry, falling back to configured defaults.
    ///
    /// A missing file is the normal first-launch case; a corrupt file
    /// is logged and replaced by defaults on the next save.
    pub fn load(&self, window: &WindowConfig) -> WindowGeometry {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => {
                debug!(path = %self.path.display(), "no window state, using defaults");
                return WindowGeometry::from_config(window);
            }
        };

        match toml::from_str::<WindowGeometry>(&content) {
            Ok(geometry) => geometry.sanitize(window),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    "corrupt window state ({e}), using defaults"
                );
                WindowGeometry::from_config(window)
            }
        }
    }

    /// Persist geometry atomically.
    pub fn save(&self, geometry: &WindowGeometry) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(geometry)
            .map_err(|e| ConfigError::StateError(format!("failed to serialize: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::StateError(format!(
                    "failed to create state directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp_path, &toml_str).map_err(|e| {
            ConfigError::StateError(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Rename can fail on Windows when the target exists; fall
            // back to a direct write.
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &toml_str).map_err(|e2| {
                ConfigError::StateError(format!("failed to write {}: {e2}", self.path.display()))
            })?;
        }

        debug!(path = %self.path.display(), "window state saved");
        Ok(())
    }
}
