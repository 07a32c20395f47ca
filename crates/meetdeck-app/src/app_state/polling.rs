//! Pane event polling and wake-up scheduling.

use std::time::{Duration, Instant};

use winit::event_loop::ActiveEventLoop;

use meetdeck_common::PaneId;
use meetdeck_webview::{PageLoadState, PaneEvent};

use super::core::ShellApp;

/// Webview callbacks land on arbitrary threads; events are drained on
/// the UI thread at this cadence.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl ShellApp {
    /// Drain pending pane events and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_pane_events();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    fn poll_pane_events(&mut self) {
        let events = match &self.panes {
            Some(panes) => panes.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                PaneEvent::IpcMessage { pane, body } => {
                    self.handle_ipc(pane, &body);
                }
                PaneEvent::PageLoad { pane, state, url } => {
                    if state != PageLoadState::Finished {
                        continue;
                    }
                    tracing::debug!(pane = %pane, url = %url, "Page loaded");
                    if pane.destination().is_some() {
                        self.inject_stylesheet(pane);
                    } else if pane == PaneId::TitleBar {
                        // The page defaults to the maximize glyph;
                        // tell it the actual startup state.
                        self.sync_titlebar_maximize_state();
                    }
                }
                PaneEvent::NewWindowRequested { pane, url } => {
                    self.handle_new_window(pane, &url);
                }
            }
        }
    }
}
