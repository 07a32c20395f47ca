//! Pane event types.

use meetdeck_common::PaneId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events pushed from webview callbacks to the UI thread.
#[derive(Debug, Clone)]
pub enum PaneEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        pane: PaneId,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage { pane: PaneId, body: String },
    /// Embedded content tried to open a new top-level window. The
    /// request was cancelled; the shell decides where the URL goes.
    NewWindowRequested { pane: PaneId, url: String },
}
