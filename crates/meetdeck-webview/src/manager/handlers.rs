use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use meetdeck_common::PaneId;

use crate::events::{PageLoadState, PaneEvent};
use crate::navigation::{is_chrome_navigation_allowed, is_destination_navigation_allowed};

use super::types::NavigationPolicy;
use super::PaneManager;

impl PaneManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PaneEvent>>>,
        pane: PaneId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    pane = %pane,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(pane = %pane, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(PaneEvent::IpcMessage { pane, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PaneEvent>>>,
        pane: PaneId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(pane = %pane, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(PaneEvent::PageLoad { pane, state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        pane: PaneId,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let allowed = match policy {
                NavigationPolicy::Chrome => is_chrome_navigation_allowed(&url),
                NavigationPolicy::Destination => is_destination_navigation_allowed(&url),
            };
            if !allowed {
                warn!(pane = %pane, url = %url, "navigation blocked by policy");
                return false;
            }
            debug!(pane = %pane, url = %url, "navigation allowed");
            true
        })
    }

    /// Cancel every new-window request and surface it as an event; the
    /// shell routes the URL into a pane or to the OS browser.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PaneEvent>>>,
        pane: PaneId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(pane = %pane, url = %url, "new window request intercepted");
            if let Ok(mut evts) = events.lock() {
                evts.push(PaneEvent::NewWindowRequested {
                    pane,
                    url: url.clone(),
                });
            }
            false
        })
    }
}
