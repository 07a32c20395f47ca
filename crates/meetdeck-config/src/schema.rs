//! Configuration schema.
//!
//! All structs use `serde(default)` so partial configs work correctly;
//! missing fields are filled with the defaults below.

use serde::{Deserialize, Serialize};

use meetdeck_common::ConfigError;

/// Desktop Chrome user agent presented to the embedded panes.
///
/// Google serves a degraded UI (or refuses sign-in) to unrecognized
/// embedded browsers, so the panes identify as desktop Chrome.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; ; ) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/86.0.4240.111 Safari/537.36";

/// Root configuration for the shell.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub panes: PanesConfig,
}

/// Main window sizing and chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width used when no persisted geometry exists.
    pub default_width: u32,
    /// Height used when no persisted geometry exists.
    pub default_height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Height of the custom title-bar strip in pixels. Destination
    /// panes start below this inset.
    pub titlebar_height: u32,
    /// Maximize the window on first launch (no persisted state).
    pub start_maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_width: 1280,
            default_height: 800,
            min_width: 800,
            min_height: 600,
            titlebar_height: 40,
            start_maximized: true,
        }
    }
}

/// Settings applied to every embedded destination pane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanesConfig {
    pub user_agent: String,
    /// Enable webview devtools (always on in debug builds).
    pub devtools: bool,
}

impl Default for PanesConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Check a loaded config for values the shell cannot work with.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let w = &config.window;
    if w.min_width == 0 || w.min_height == 0 {
        return Err(ConfigError::ValidationError(
            "window minimum size must be non-zero".into(),
        ));
    }
    if w.default_width < w.min_width || w.default_height < w.min_height {
        return Err(ConfigError::ValidationError(format!(
            "window default size {}x{} is below the minimum {}x{}",
            w.default_width, w.default_height, w.min_width, w.min_height
        )));
    }
    if w.titlebar_height == 0 || w.titlebar_height >= w.min_height {
        return Err(ConfigError::ValidationError(format!(
            "titlebar height {} must be between 1 and the minimum window height",
            w.titlebar_height
        )));
    }
    if config.panes.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "panes.user_agent must not be empty".into(),
        ));
    }
    Ok(())
}
