//! Pane layout math, visibility switching, and stylesheet injection.

use meetdeck_common::{Destination, PaneId, Rect, ShellNotification};

use super::core::ShellApp;

/// Stylesheet injected into every destination pane after each page
/// load. Compacts Google's layout for presentation on a shared screen.
const SCREEN_CSS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/chrome/screen.css"));

impl ShellApp {
    /// Title-bar strip across the top of the window.
    pub(super) fn titlebar_rect(&self, width: f64) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: self.config.window.titlebar_height as f64,
        }
    }

    /// Content area below the title bar, shared by the destination panes.
    pub(super) fn content_rect(&self, width: f64, height: f64) -> Rect {
        let titlebar = self.config.window.titlebar_height as f64;
        Rect {
            x: 0.0,
            y: titlebar,
            width,
            height: (height - titlebar).max(0.0),
        }
    }

    /// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
    pub(super) fn rect_to_wry(rect: &Rect) -> wry::Rect {
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
            size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
        }
    }

    /// Re-fit the title bar and destination panes to the current
    /// window size.
    pub(super) fn sync_pane_bounds(&mut self) {
        let Some(window) = &self.window else { return };
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());

        let titlebar = Self::rect_to_wry(&self.titlebar_rect(size.width));
        let content = Self::rect_to_wry(&self.content_rect(size.width, size.height));

        let Some(panes) = &self.panes else { return };
        if let Some(handle) = panes.get(PaneId::TitleBar) {
            if let Err(e) = handle.set_bounds(titlebar) {
                tracing::warn!("Failed to resize title bar pane: {e}");
            }
        }
        for dest in Destination::ALL {
            if let Some(handle) = panes.get(PaneId::from(dest)) {
                if let Err(e) = handle.set_bounds(content) {
                    tracing::warn!(destination = %dest, "Failed to resize pane: {e}");
                }
            }
        }
    }

    /// Activate a destination pane: show it, focus it, then hide the
    /// others. Showing first avoids a blank flash between panes.
    pub(super) fn switch_to(&mut self, dest: Destination) {
        if let Some(panes) = &self.panes {
            if let Some(handle) = panes.get(PaneId::from(dest)) {
                if let Err(e) = handle.set_visible(true) {
                    tracing::warn!(destination = %dest, "Failed to show pane: {e}");
                }
                if let Err(e) = handle.focus() {
                    tracing::debug!(destination = %dest, "Failed to focus pane: {e}");
                }
            }
            for other in Destination::ALL {
                if other == dest {
                    continue;
                }
                if let Some(handle) = panes.get(PaneId::from(other)) {
                    if let Err(e) = handle.set_visible(false) {
                        tracing::warn!(destination = %other, "Failed to hide pane: {e}");
                    }
                }
            }
        }

        self.active = dest;
        tracing::info!(destination = %dest, "Pane activated");
        self.notify_titlebar(ShellNotification::PaneActivated(dest));
    }

    /// Reload every destination pane back to its base URL and show Meet.
    pub(super) fn home(&mut self) {
        if let Some(panes) = &mut self.panes {
            for dest in Destination::ALL {
                if let Some(handle) = panes.get_mut(PaneId::from(dest)) {
                    if let Err(e) = handle.load_url(dest.base_url()) {
                        tracing::warn!(destination = %dest, "Failed to load home URL: {e}");
                    }
                }
            }
        }
        self.switch_to(Destination::Meet);
    }

    /// Push a notification into the title-bar pane.
    pub(super) fn notify_titlebar(&self, notification: ShellNotification) {
        let Some(panes) = &self.panes else { return };
        let Some(handle) = panes.get(PaneId::TitleBar) else {
            return;
        };
        if let Err(e) = handle.send_ipc(notification.kind(), &notification.payload()) {
            tracing::warn!(kind = notification.kind(), "Failed to notify title bar: {e}");
        }
    }

    /// Append the presentation stylesheet to a destination pane's
    /// document. Runs after every finished page load, so in-pane
    /// navigation keeps the styling.
    pub(super) fn inject_stylesheet(&self, pane: PaneId) {
        let Some(panes) = &self.panes else { return };
        let Some(handle) = panes.get(pane) else { return };

        let css = match serde_json::to_string(SCREEN_CSS) {
            Ok(escaped) => escaped,
            Err(e) => {
                tracing::warn!("Failed to escape stylesheet: {e}");
                return;
            }
        };
        let script = format!(
            "(function() {{\
               var style = document.createElement('style');\
               style.textContent = {css};\
               document.head.appendChild(style);\
             }})();"
        );
        if let Err(e) = handle.evaluate_script(&script) {
            tracing::warn!(pane = %pane, "Failed to inject stylesheet: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetdeck_config::schema::ShellConfig;

    fn app() -> ShellApp {
        ShellApp::new(ShellConfig::default(), None)
    }

    #[test]
    fn titlebar_strip_spans_full_width() {
        let app = app();
        let rect = app.titlebar_rect(1280.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, 1280.0);
        assert_eq!(rect.height, 40.0);
    }

    #[test]
    fn content_area_starts_below_titlebar() {
        let app = app();
        let rect = app.content_rect(1280.0, 800.0);
        assert_eq!(rect.y, 40.0);
        assert_eq!(rect.height, 760.0);
        assert_eq!(rect.width, 1280.0);
    }

    #[test]
    fn content_height_never_goes_negative() {
        let app = app();
        let rect = app.content_rect(1280.0, 10.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn rect_converts_to_wry_logical() {
        let rect = Rect {
            x: 0.0,
            y: 40.0,
            width: 1280.0,
            height: 760.0,
        };
        let wry_rect = ShellApp::rect_to_wry(&rect);
        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.y - 40.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1280.0).abs() < f64::EPSILON);
                assert!((size.height - 760.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn meet_url_carries_the_requested_room() {
        let app = ShellApp::new(ShellConfig::default(), Some("abc-defg-hij".into()));
        assert_eq!(
            app.destination_url(Destination::Meet),
            "https://meet.google.com/abc-defg-hij"
        );
        assert_eq!(
            app.destination_url(Destination::Chat),
            "https://chat.google.com/"
        );
    }

    #[test]
    fn no_room_means_base_urls() {
        let app = app();
        assert_eq!(
            app.destination_url(Destination::Meet),
            "https://meet.google.com/"
        );
    }
}
