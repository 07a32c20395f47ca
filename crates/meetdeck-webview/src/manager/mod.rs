//! Pane webview lifecycle management.
//!
//! `PaneManager` creates `wry::WebView` instances as children of a
//! host window, one per pane (the three destinations, the title bar,
//! and the two overlay pages).

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::PaneEvent;

mod handle;
mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::PaneHandle;
pub use registry::PaneRegistry;
pub use types::{NavigationPolicy, PaneOptions};

/// Creates pane webviews and collects their events.
pub struct PaneManager {
    /// Event sink — webview callbacks push here for the UI loop to drain.
    pub(crate) events: Arc<Mutex<Vec<PaneEvent>>>,
    /// Content provider backing the `meetdeck://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl PaneManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Set the content provider for serving bundled chrome assets.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    /// Drain all pending events. A sink poisoned by a panicking
    /// webview callback still yields whatever was queued.
    pub fn drain_events(&self) -> Vec<PaneEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }
}

impl Default for PaneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetdeck_common::PaneId;

    #[test]
    fn drain_survives_poisoned_sink() {
        let manager = PaneManager::new();
        manager.events.lock().unwrap().push(PaneEvent::IpcMessage {
            pane: PaneId::Meet,
            body: r#"{"kind":"window.close","payload":null}"#.into(),
        });

        // Poison the sink the way a panicking callback would
        let sink = Arc::clone(&manager.events);
        let _ = std::thread::spawn(move || {
            let _guard = sink.lock().unwrap();
            panic!("callback panic");
        })
        .join();

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
