//! Screen-share overlay windows.
//!
//! Two always-on-top, initially hidden windows back the annotation
//! workflow: a transparent canvas covering the primary monitor for
//! drawing over shared content, and a small floating toolbar near the
//! bottom of the screen for ending the share. The toolbar is
//! content-protected on macOS so it never shows up in the capture.

use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowAttributes, WindowLevel};

use meetdeck_common::{PaneId, Rect, ShellCommand};
use meetdeck_webview::PaneOptions;

use super::core::ShellApp;

const CANVAS_URL: &str = "meetdeck://localhost/canvas/index.html";
const TOOLBAR_URL: &str = "meetdeck://localhost/toolbar/index.html";

const TOOLBAR_WIDTH: f64 = 300.0;
const TOOLBAR_HEIGHT: f64 = 60.0;
/// Toolbar offset from the monitor's left edge.
const TOOLBAR_X: f64 = 100.0;
/// Toolbar offset from the monitor's bottom edge.
const TOOLBAR_BOTTOM_MARGIN: f64 = 200.0;

impl ShellApp {
    /// Create the hidden canvas and toolbar windows on the primary
    /// monitor, each hosting a bundled chrome pane.
    pub(super) fn create_overlay_windows(&mut self, event_loop: &ActiveEventLoop) {
        let Some(monitor) = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
        else {
            tracing::warn!("No monitor available, overlays disabled");
            return;
        };

        match self.create_canvas_window(event_loop, &monitor) {
            Ok(window) => self.canvas_window = Some(window),
            Err(e) => tracing::error!("Failed to create canvas overlay: {e}"),
        }
        match self.create_toolbar_window(event_loop, &monitor) {
            Ok(window) => self.toolbar_window = Some(window),
            Err(e) => tracing::error!("Failed to create toolbar overlay: {e}"),
        }
    }

    /// Transparent full-monitor drawing surface.
    fn create_canvas_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        monitor: &MonitorHandle,
    ) -> Result<Arc<Window>, Box<dyn std::error::Error>> {
        let attrs = overlay_attrs("MeetDeck Canvas")
            .with_transparent(true)
            .with_position(monitor.position())
            .with_inner_size(monitor.size());

        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = monitor.size().to_logical::<f64>(monitor.scale_factor());
        let bounds = Self::rect_to_wry(&Rect {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        });
        if let Some(panes) = &mut self.panes {
            panes.create(
                PaneId::Canvas,
                window.as_ref(),
                bounds,
                PaneOptions::chrome(CANVAS_URL).with_devtools(self.config.panes.devtools),
            )?;
        }

        tracing::info!(width = size.width, height = size.height, "Canvas overlay created");
        Ok(window)
    }

    /// Small floating toolbar near the bottom of the monitor.
    fn create_toolbar_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        monitor: &MonitorHandle,
    ) -> Result<Arc<Window>, Box<dyn std::error::Error>> {
        let scale = monitor.scale_factor();
        let origin = monitor.position();
        let position = PhysicalPosition::new(
            origin.x + (TOOLBAR_X * scale) as i32,
            origin.y + monitor.size().height as i32 - (TOOLBAR_BOTTOM_MARGIN * scale) as i32,
        );

        let attrs = overlay_attrs("MeetDeck Toolbar")
            .with_position(position)
            .with_inner_size(LogicalSize::new(TOOLBAR_WIDTH, TOOLBAR_HEIGHT));

        // Keep the toolbar out of the macOS screen capture.
        #[cfg(target_os = "macos")]
        let attrs = attrs.with_content_protected(true);

        let window = Arc::new(event_loop.create_window(attrs)?);

        let bounds = Self::rect_to_wry(&Rect {
            x: 0.0,
            y: 0.0,
            width: TOOLBAR_WIDTH,
            height: TOOLBAR_HEIGHT,
        });
        if let Some(panes) = &mut self.panes {
            panes.create(
                PaneId::Toolbar,
                window.as_ref(),
                bounds,
                PaneOptions::chrome(TOOLBAR_URL).with_devtools(self.config.panes.devtools),
            )?;
        }

        tracing::info!("Toolbar overlay created");
        Ok(window)
    }

    pub(super) fn show_canvas(&self) {
        if let Some(window) = &self.canvas_window {
            window.set_visible(true);
        }
    }

    /// Hide the canvas and reload its pane so the next share starts
    /// with a clean surface.
    pub(super) fn hide_canvas(&self) {
        if let Some(window) = &self.canvas_window {
            window.set_visible(false);
        }
        self.reload_overlay_pane(PaneId::Canvas);
    }

    pub(super) fn show_toolbar(&self) {
        if let Some(window) = &self.toolbar_window {
            window.set_visible(true);
        }
    }

    pub(super) fn hide_toolbar(&self) {
        if let Some(window) = &self.toolbar_window {
            window.set_visible(false);
        }
    }

    /// Reload the toolbar page, resetting it for the next share.
    pub(super) fn reload_toolbar_pane(&self) {
        self.reload_overlay_pane(PaneId::Toolbar);
    }

    /// Tell the active destination page to stop presenting.
    pub(super) fn forward_stop_to_active_pane(&self) {
        if let Some(panes) = &self.panes {
            if let Some(handle) = panes.get(PaneId::from(self.active)) {
                let kind = ShellCommand::ScreenShareStop.kind();
                if let Err(e) = handle.send_ipc(kind, &serde_json::Value::Null) {
                    tracing::warn!("Failed to forward stop to active pane: {e}");
                }
            }
        }
        tracing::info!("Screen share stopped");
    }

    fn reload_overlay_pane(&self, pane: PaneId) {
        let Some(panes) = &self.panes else { return };
        if let Some(handle) = panes.get(pane) {
            if let Err(e) = handle.reload() {
                tracing::warn!(pane = %pane, "Failed to reload overlay pane: {e}");
            }
        }
    }
}

/// Attributes shared by both overlay windows: undecorated, hidden,
/// fixed-size, always on top, and never stealing focus.
fn overlay_attrs(title: &str) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(title)
        .with_decorations(false)
        .with_visible(false)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_active(false);

    #[cfg(target_os = "windows")]
    let attrs = {
        use winit::platform::windows::WindowAttributesExtWindows;
        attrs.with_skip_taskbar(true)
    };

    attrs
}
