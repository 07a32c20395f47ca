//! New-window request routing.
//!
//! Destination pages open links with `window.open`; instead of
//! spawning popups, requests for a known Google destination are routed
//! into that destination's pane and everything else goes to the OS
//! browser.

use meetdeck_common::{Destination, PaneId};

use super::core::ShellApp;

impl ShellApp {
    pub(super) fn handle_new_window(&mut self, pane: PaneId, url: &str) {
        match Destination::for_url(url) {
            Some(dest) => {
                tracing::info!(from = %pane, destination = %dest, url = %url, "Routing link into pane");
                if let Some(panes) = &mut self.panes {
                    if let Some(handle) = panes.get_mut(PaneId::from(dest)) {
                        if let Err(e) = handle.load_url(url) {
                            tracing::warn!(destination = %dest, "Failed to load routed URL: {e}");
                            return;
                        }
                    }
                }
                self.switch_to(dest);
            }
            None => {
                tracing::info!(from = %pane, url = %url, "Opening link in external browser");
                if let Err(e) = open::that_detached(url) {
                    tracing::warn!(url = %url, "Failed to open external browser: {e}");
                }
            }
        }
    }
}
