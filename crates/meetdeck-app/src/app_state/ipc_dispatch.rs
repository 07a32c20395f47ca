//! Routing of raw IPC bodies into shell commands.

use meetdeck_common::{PaneId, ShellCommand};
use meetdeck_webview::IpcMessage;

use super::core::ShellApp;

impl ShellApp {
    /// Parse and dispatch one IPC message from a pane. Malformed or
    /// unknown messages are logged and dropped; a compromised page in
    /// a destination pane must not be able to crash the shell.
    pub(super) fn handle_ipc(&mut self, pane: PaneId, body: &str) {
        let Some(message) = IpcMessage::from_json(body) else {
            tracing::warn!(pane = %pane, "Malformed IPC message");
            return;
        };

        match ShellCommand::from_kind(&message.kind) {
            Some(command) => self.dispatch(command),
            None => {
                tracing::warn!(pane = %pane, kind = %message.kind, "Unknown IPC kind");
            }
        }
    }
}
