//! Main window creation and pane setup.

use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use meetdeck_common::{Destination, PaneId};
use meetdeck_webview::{ContentProvider, PaneManager, PaneOptions, PaneRegistry};

use super::core::ShellApp;

/// Relative path from the binary to the bundled chrome assets.
const CHROME_DIR: &str = "assets/chrome";

const TITLEBAR_URL: &str = "meetdeck://localhost/titlebar/index.html";

impl ShellApp {
    /// Create the frameless main window and its panes.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        if let Some(ref store) = self.state_store {
            self.geometry = store.load(&self.config.window);
        }

        let w = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title("MeetDeck")
            .with_decorations(false)
            .with_inner_size(LogicalSize::new(
                self.geometry.width as f64,
                self.geometry.height as f64,
            ))
            .with_min_inner_size(LogicalSize::new(w.min_width as f64, w.min_height as f64));

        if let (Some(x), Some(y)) = (self.geometry.x, self.geometry.y) {
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if self.geometry.maximized {
            window.set_maximized(true);
        }
        self.last_maximized = self.geometry.maximized;

        if !self.initialize_panes(&window) {
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created");
        true
    }

    /// Set up the pane registry with the content provider for
    /// `meetdeck://`, then create the title bar and destination panes.
    fn initialize_panes(&mut self, window: &Arc<winit::window::Window>) -> bool {
        let chrome_path = std::env::current_dir().unwrap_or_default().join(CHROME_DIR);

        if !chrome_path.is_dir() {
            tracing::warn!(
                path = %chrome_path.display(),
                "Chrome directory not found — title bar and overlays will be empty"
            );
        }

        let mut manager = PaneManager::new();
        manager.set_content_provider(ContentProvider::new(&chrome_path));
        let mut registry = PaneRegistry::new(manager);

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());

        // Title-bar strip across the top
        let titlebar_bounds = Self::rect_to_wry(&self.titlebar_rect(size.width));
        if let Err(e) = registry.create(
            PaneId::TitleBar,
            window.as_ref(),
            titlebar_bounds,
            PaneOptions::chrome(TITLEBAR_URL).with_devtools(self.config.panes.devtools),
        ) {
            tracing::error!("Failed to create title bar pane: {e}");
            return false;
        }

        // One pane per destination, below the title bar; only the
        // active one is visible.
        let content_bounds = Self::rect_to_wry(&self.content_rect(size.width, size.height));
        for dest in Destination::ALL {
            let options =
                PaneOptions::destination(self.destination_url(dest), self.config.panes.user_agent.as_str())
                    .with_devtools(self.config.panes.devtools);
            if let Err(e) = registry.create(PaneId::from(dest), window.as_ref(), content_bounds, options)
            {
                tracing::error!(destination = %dest, "Failed to create pane: {e}");
                return false;
            }
            if dest != self.active {
                if let Some(handle) = registry.get(PaneId::from(dest)) {
                    if let Err(e) = handle.set_visible(false) {
                        tracing::warn!(destination = %dest, "Failed to hide pane: {e}");
                    }
                }
            }
        }

        self.panes = Some(registry);
        tracing::info!(chrome_dir = %chrome_path.display(), "Panes initialized");
        true
    }

    /// URL loaded into a destination pane on startup. The requested
    /// room is appended to the Meet base URL.
    pub(super) fn destination_url(&self, dest: Destination) -> String {
        match (dest, &self.room) {
            (Destination::Meet, Some(room)) => format!("{}{room}", dest.base_url()),
            _ => dest.base_url().to_string(),
        }
    }
}
