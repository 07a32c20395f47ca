//! Typed commands and notifications exchanged between the chrome UI
//! and the window controller.
//!
//! Every IPC message from the title bar or the overlay pages resolves
//! to a [`ShellCommand`] at a single parse point; unknown kinds are
//! rejected there. Messages in the other direction are
//! [`ShellNotification`]s delivered over the webview IPC bridge.

use serde::{Deserialize, Serialize};

use crate::types::Destination;

/// Every command the chrome UI can issue to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellCommand {
    // -- Main window --
    Minimize,
    Maximize,
    Restore,
    Close,
    MainFocus,

    // -- Panes --
    ShowPane(Destination),
    Home,

    // -- Screen share / overlays --
    ScreenShareShow,
    ScreenShareHide,
    CanvasShow,
    CanvasHide,
    ScreenShareStop,
}

impl ShellCommand {
    /// Parse an IPC message kind into a command.
    ///
    /// Kinds are case-sensitive; anything not listed here is rejected.
    pub fn from_kind(kind: &str) -> Option<Self> {
        let cmd = match kind {
            "window.minimize" => ShellCommand::Minimize,
            "window.maximize" => ShellCommand::Maximize,
            "window.restore" => ShellCommand::Restore,
            "window.close" => ShellCommand::Close,
            "window.main.focus" => ShellCommand::MainFocus,
            "window.meet" => ShellCommand::ShowPane(Destination::Meet),
            "window.chat" => ShellCommand::ShowPane(Destination::Chat),
            "window.currents" => ShellCommand::ShowPane(Destination::Currents),
            "window.home" => ShellCommand::Home,
            "window.screenshare.show" => ShellCommand::ScreenShareShow,
            "window.screenshare.hide" => ShellCommand::ScreenShareHide,
            "window.canvas.show" => ShellCommand::CanvasShow,
            "window.canvas.hide" => ShellCommand::CanvasHide,
            "screenshare.stop" => ShellCommand::ScreenShareStop,
            _ => return None,
        };
        Some(cmd)
    }

    /// The wire kind for this command (inverse of [`from_kind`]).
    ///
    /// [`from_kind`]: ShellCommand::from_kind
    pub fn kind(&self) -> &'static str {
        match self {
            ShellCommand::Minimize => "window.minimize",
            ShellCommand::Maximize => "window.maximize",
            ShellCommand::Restore => "window.restore",
            ShellCommand::Close => "window.close",
            ShellCommand::MainFocus => "window.main.focus",
            ShellCommand::ShowPane(Destination::Meet) => "window.meet",
            ShellCommand::ShowPane(Destination::Chat) => "window.chat",
            ShellCommand::ShowPane(Destination::Currents) => "window.currents",
            ShellCommand::Home => "window.home",
            ShellCommand::ScreenShareShow => "window.screenshare.show",
            ShellCommand::ScreenShareHide => "window.screenshare.hide",
            ShellCommand::CanvasShow => "window.canvas.show",
            ShellCommand::CanvasHide => "window.canvas.hide",
            ShellCommand::ScreenShareStop => "screenshare.stop",
        }
    }
}

/// Notifications pushed from the shell to chrome webviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellNotification {
    /// The main window became maximized.
    Maximized,
    /// The main window returned to its normal (un-maximized) state.
    Restored,
    /// A destination pane became the visible one.
    PaneActivated(Destination),
}

impl ShellNotification {
    pub fn kind(&self) -> &'static str {
        match self {
            ShellNotification::Maximized => "window.maximized",
            ShellNotification::Restored => "window.restored",
            ShellNotification::PaneActivated(_) => "pane.activated",
        }
    }

    /// JSON payload delivered with the notification.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            ShellNotification::PaneActivated(d) => serde_json::json!({ "destination": d.id() }),
            _ => serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: &[&str] = &[
        "window.minimize",
        "window.maximize",
        "window.restore",
        "window.close",
        "window.main.focus",
        "window.meet",
        "window.chat",
        "window.currents",
        "window.home",
        "window.screenshare.show",
        "window.screenshare.hide",
        "window.canvas.show",
        "window.canvas.hide",
        "screenshare.stop",
    ];

    #[test]
    fn every_wire_kind_parses() {
        for kind in ALL_KINDS {
            assert!(
                ShellCommand::from_kind(kind).is_some(),
                "{kind} must parse to a command"
            );
        }
    }

    #[test]
    fn kind_round_trips() {
        for kind in ALL_KINDS {
            let cmd = ShellCommand::from_kind(kind).unwrap();
            assert_eq!(cmd.kind(), *kind);
        }
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        assert!(ShellCommand::from_kind("").is_none());
        assert!(ShellCommand::from_kind("window.quit").is_none());
        assert!(ShellCommand::from_kind("WINDOW.MINIMIZE").is_none());
        assert!(ShellCommand::from_kind("window.minimize ").is_none());
        assert!(ShellCommand::from_kind("eval").is_none());
        assert!(ShellCommand::from_kind("window.meet.extra").is_none());
    }

    #[test]
    fn pane_switch_kinds_map_to_destinations() {
        assert_eq!(
            ShellCommand::from_kind("window.meet"),
            Some(ShellCommand::ShowPane(Destination::Meet))
        );
        assert_eq!(
            ShellCommand::from_kind("window.chat"),
            Some(ShellCommand::ShowPane(Destination::Chat))
        );
        assert_eq!(
            ShellCommand::from_kind("window.currents"),
            Some(ShellCommand::ShowPane(Destination::Currents))
        );
    }

    #[test]
    fn maximized_and_restored_are_distinct_kinds() {
        assert_ne!(
            ShellNotification::Maximized.kind(),
            ShellNotification::Restored.kind()
        );
    }

    #[test]
    fn pane_activated_payload_carries_destination() {
        let n = ShellNotification::PaneActivated(Destination::Chat);
        assert_eq!(n.kind(), "pane.activated");
        assert_eq!(n.payload()["destination"], "chat");
    }

    #[test]
    fn window_notifications_have_null_payload() {
        assert!(ShellNotification::Maximized.payload().is_null());
        assert!(ShellNotification::Restored.payload().is_null());
    }
}
