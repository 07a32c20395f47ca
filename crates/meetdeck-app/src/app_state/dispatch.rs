//! Shell command dispatch.
//!
//! Every IPC request from the title bar or toolbar lands here as a
//! typed [`ShellCommand`]. Commands that drive several windows at once
//! (the screen-share family and `window.main.focus`) expand to a fixed
//! [`WindowOp`] sequence, keeping the command-to-effect mapping
//! testable without real windows.

use meetdeck_common::{PaneId, ShellCommand};

use super::core::ShellApp;

/// One window-level step of a multi-window command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum WindowOp {
    MinimizeMain,
    RestoreMain,
    FocusMain,
    ShowToolbar,
    HideToolbar,
    /// Reload the toolbar page so the next share starts clean.
    ReloadToolbar,
    ShowCanvas,
    /// Hide the canvas window and reload its page, clearing any
    /// annotations.
    HideCanvas,
    /// Forward `screenshare.stop` to the active destination pane so
    /// the page ends its presentation.
    ForwardStopToActivePane,
}

/// The op sequence for a multi-window command, or `None` for commands
/// handled directly in [`ShellApp::dispatch`].
///
/// Starting a share minimizes the main window out of the way of the
/// shared screen; hiding or stopping one tears down both overlays so
/// the canvas never lingers on top after the toolbar is gone.
pub(super) fn window_ops(command: ShellCommand) -> Option<&'static [WindowOp]> {
    use WindowOp::*;
    let ops: &'static [WindowOp] = match command {
        ShellCommand::MainFocus => &[RestoreMain, FocusMain],
        ShellCommand::ScreenShareShow => &[MinimizeMain, ShowToolbar],
        ShellCommand::ScreenShareHide => &[HideToolbar, ReloadToolbar, HideCanvas],
        ShellCommand::CanvasShow => &[ShowCanvas],
        ShellCommand::CanvasHide => &[HideCanvas],
        ShellCommand::ScreenShareStop => {
            &[HideToolbar, ReloadToolbar, HideCanvas, ForwardStopToActivePane]
        }
        _ => return None,
    };
    Some(ops)
}

impl ShellApp {
    pub(super) fn dispatch(&mut self, command: ShellCommand) {
        tracing::debug!(kind = command.kind(), "Dispatching command");

        if let Some(ops) = window_ops(command) {
            for op in ops {
                self.apply(*op);
            }
            return;
        }

        match command {
            ShellCommand::Minimize => {
                if let Some(window) = &self.window {
                    window.set_minimized(true);
                }
            }
            ShellCommand::Maximize => {
                if let Some(window) = &self.window {
                    window.set_maximized(true);
                }
            }
            ShellCommand::Restore => {
                if let Some(window) = &self.window {
                    window.set_maximized(false);
                }
            }
            ShellCommand::Close => {
                self.should_exit = true;
            }
            ShellCommand::ShowPane(dest) => {
                self.switch_to(dest);
            }
            ShellCommand::Home => {
                self.home();
            }
            // Expanded to window ops above
            ShellCommand::MainFocus
            | ShellCommand::ScreenShareShow
            | ShellCommand::ScreenShareHide
            | ShellCommand::CanvasShow
            | ShellCommand::CanvasHide
            | ShellCommand::ScreenShareStop => {}
        }
    }

    fn apply(&mut self, op: WindowOp) {
        match op {
            WindowOp::MinimizeMain => {
                if let Some(window) = &self.window {
                    window.set_minimized(true);
                }
            }
            WindowOp::RestoreMain => {
                if let Some(window) = &self.window {
                    window.set_minimized(false);
                }
            }
            WindowOp::FocusMain => self.focus_main_window(),
            WindowOp::ShowToolbar => self.show_toolbar(),
            WindowOp::HideToolbar => self.hide_toolbar(),
            WindowOp::ReloadToolbar => self.reload_toolbar_pane(),
            WindowOp::ShowCanvas => self.show_canvas(),
            WindowOp::HideCanvas => self.hide_canvas(),
            WindowOp::ForwardStopToActivePane => self.forward_stop_to_active_pane(),
        }
    }

    /// Raise the main window and return focus to the active pane.
    fn focus_main_window(&self) {
        if let Some(window) = &self.window {
            window.focus_window();
        }
        if let Some(panes) = &self.panes {
            if let Some(handle) = panes.get(PaneId::from(self.active)) {
                if let Err(e) = handle.focus() {
                    tracing::debug!("Failed to focus active pane: {e}");
                }
            }
        }
    }
}
