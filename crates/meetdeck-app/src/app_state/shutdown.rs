//! Clean shutdown: persist geometry and tear down panes.

use super::core::ShellApp;

impl ShellApp {
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Shutting down");

        self.save_geometry();

        if let Some(panes) = &mut self.panes {
            let count = panes.count();
            panes.destroy_all();
            tracing::debug!(count, "Panes destroyed");
        }
        self.panes = None;

        self.canvas_window = None;
        self.toolbar_window = None;
    }
}
