use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use meetdeck_common::PaneId;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::PaneHandle;
use super::types::PaneOptions;
use super::PaneManager;

impl PaneManager {
    /// Create a new pane webview as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The webview is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        pane: PaneId,
        window: &W,
        bounds: wry::Rect,
        options: PaneOptions,
    ) -> Result<PaneHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(options.transparent)
            .with_devtools(options.devtools)
            .with_autoplay(true)
            .with_focused(false);

        // Initialization script for the IPC bridge
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // IPC handler: JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), pane);

        // Page load handler (drives stylesheet injection)
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), pane);

        // Navigation policy
        builder = Self::attach_navigation_handler(builder, pane, options.policy);

        // New-window interception for destination panes
        if options.intercept_new_windows {
            builder = Self::attach_new_window_handler(builder, Arc::clone(&events), pane);
        }

        // Custom protocol for bundled chrome content
        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(&options.url);

        let webview = builder.build_as_child(window)?;

        debug!(pane = %pane, url = %options.url, "pane webview created");

        Ok(PaneHandle {
            webview,
            pane,
            current_url: options.url,
        })
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol("meetdeck".to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = uri
                    .strip_prefix("meetdeck://localhost/")
                    .or_else(|| uri.strip_prefix("meetdeck://localhost"))
                    .or_else(|| uri.strip_prefix("meetdeck:///"))
                    .or_else(|| uri.strip_prefix("meetdeck://"))
                    .unwrap_or("");

                match cp.resolve(path) {
                    Some((mime, data)) => wry::http::Response::builder()
                        .status(200)
                        .header("Content-Type", mime)
                        .header("Access-Control-Allow-Origin", "meetdeck://localhost")
                        .body(std::borrow::Cow::from(data))
                        .unwrap(),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        wry::http::Response::builder()
                            .status(404)
                            .body(std::borrow::Cow::from(b"Not Found".to_vec()))
                            .unwrap()
                    }
                }
            });
        }
        builder
    }
}
