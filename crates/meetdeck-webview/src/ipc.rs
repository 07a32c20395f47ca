//! IPC protocol between Rust and the chrome/pane JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.meetdeck.ipc.send(kind, payload)` posts a
//!   JSON message that triggers the `ipc_handler` on the webview.
//! - **Rust -> JS**: the shell calls `evaluate_script` to dispatch a
//!   notification to handlers registered with
//!   `window.meetdeck.ipc.on(kind, cb)`.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message kind, e.g. `window.minimize`.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: IpcPayload,
}

/// Payload of an IPC message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    /// Parse an IPC message from the raw postMessage body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript bridge injected into every webview as an
/// initialization script.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.meetdeck = window.meetdeck || {};
    window.meetdeck.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet dispatching a notification to the JS side.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.meetdeck.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_and_null_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"window.minimize","payload":null}"#).unwrap();
        assert_eq!(msg.kind, "window.minimize");
        assert!(matches!(
            msg.payload,
            IpcPayload::Json(serde_json::Value::Null)
        ));
    }

    #[test]
    fn parses_text_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"pane.activated","payload":"meet"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Text(ref t) if t == "meet"));
    }

    #[test]
    fn rejects_non_json_and_missing_kind() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":null}"#).is_none());
        assert!(IpcMessage::from_json("").is_none());
    }

    #[test]
    fn dispatch_snippet_escapes_kind() {
        let js = js_dispatch_message("window.maximized", &serde_json::Value::Null);
        assert!(js.contains("window.meetdeck.ipc._dispatch(\"window.maximized\", null);"));

        // A kind with a quote must stay a valid JS string literal
        let js = js_dispatch_message("we\"ird", &serde_json::Value::Null);
        assert!(js.contains("\\\""));
    }

    #[test]
    fn dispatch_snippet_serializes_payload() {
        let payload = serde_json::json!({ "destination": "chat" });
        let js = js_dispatch_message("pane.activated", &payload);
        assert!(js.contains(r#"{"destination":"chat"}"#));
    }

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.meetdeck.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("postMessage"));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch"));
    }
}
