use wry::WebView;

use meetdeck_common::PaneId;

/// Handle to a managed pane webview.
pub struct PaneHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    pub(super) pane: PaneId,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
}

impl PaneHandle {
    pub fn pane(&self) -> PaneId {
        self.pane
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Reload the tracked URL. Used to reset overlay pages on hide.
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.load_url(&self.current_url)
    }

    /// Execute JavaScript in the webview context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC notification to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the webview bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the webview.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the webview.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}
