//! ShellApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use meetdeck_common::Destination;
use meetdeck_config::schema::ShellConfig;
use meetdeck_config::{WindowGeometry, WindowStateStore};
use meetdeck_webview::PaneRegistry;

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,
    pub(super) room: Option<String>,

    // Persisted window geometry
    pub(super) state_store: Option<WindowStateStore>,
    pub(super) geometry: WindowGeometry,
    pub(super) last_maximized: bool,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) canvas_window: Option<Arc<Window>>,
    pub(super) toolbar_window: Option<Arc<Window>>,

    // Embedded panes (title bar, destinations, overlays)
    pub(super) panes: Option<PaneRegistry>,
    pub(super) active: Destination,

    // Whether the app should exit
    pub(super) should_exit: bool,

    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: ShellConfig, room: Option<String>) -> Self {
        let state_store = match WindowStateStore::at_default_path() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Window state unavailable, geometry will not persist: {e}");
                None
            }
        };
        let geometry = WindowGeometry::from_config(&config.window);

        Self {
            config,
            room,
            state_store,
            geometry,
            last_maximized: false,
            window: None,
            canvas_window: None,
            toolbar_window: None,
            panes: None,
            active: Destination::Meet,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
