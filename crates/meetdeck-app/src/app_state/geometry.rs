//! Window-geometry tracking and persistence.
//!
//! Size and position are recorded only while the window is
//! un-maximized, so the stored record always describes the restored
//! bounds. Maximize transitions are detected from resize events and
//! surfaced to the title bar so it can swap its maximize/restore glyph.

use winit::dpi::{PhysicalPosition, PhysicalSize};

use meetdeck_common::ShellNotification;

use super::core::ShellApp;

impl ShellApp {
    pub(super) fn on_resized(&mut self, size: PhysicalSize<u32>) {
        let Some(window) = &self.window else { return };
        let maximized = window.is_maximized();

        if maximized != self.last_maximized {
            self.last_maximized = maximized;
            self.geometry.maximized = maximized;
            tracing::debug!(maximized, "Maximize state changed");
            self.notify_titlebar(maximize_notification(maximized));
            self.save_geometry();
            return;
        }

        if !maximized {
            let logical = size.to_logical::<f64>(window.scale_factor());
            self.geometry.width = logical.width.round() as u32;
            self.geometry.height = logical.height.round() as u32;
            self.save_geometry();
        }
    }

    pub(super) fn on_moved(&mut self, position: PhysicalPosition<i32>) {
        let Some(window) = &self.window else { return };
        if window.is_maximized() {
            return;
        }
        self.geometry.x = Some(position.x);
        self.geometry.y = Some(position.y);
        self.save_geometry();
    }

    /// Push the current maximize state to the title bar so it shows
    /// the right maximize/restore glyph. Sent once the title-bar page
    /// has loaded; the page cannot observe a transition for the state
    /// the window started in.
    pub(super) fn sync_titlebar_maximize_state(&self) {
        let Some(window) = &self.window else { return };
        self.notify_titlebar(maximize_notification(window.is_maximized()));
    }

    pub(super) fn save_geometry(&self) {
        let Some(store) = &self.state_store else { return };
        if let Err(e) = store.save(&self.geometry) {
            tracing::warn!("Failed to save window state: {e}");
        }
    }
}

/// The wire notification announcing a maximize state.
pub(super) fn maximize_notification(maximized: bool) -> ShellNotification {
    if maximized {
        ShellNotification::Maximized
    } else {
        ShellNotification::Restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximize_state_maps_to_wire_notifications() {
        assert_eq!(maximize_notification(true), ShellNotification::Maximized);
        assert_eq!(maximize_notification(false), ShellNotification::Restored);
    }
}
