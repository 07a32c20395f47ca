//! WebView layer for the MeetDeck shell.
//!
//! Wraps the `wry` crate to provide:
//! - Managed pane webviews (destinations, title bar, overlays)
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Custom `meetdeck://` protocol for bundled chrome assets
//! - Navigation policy and new-window interception

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::ContentProvider;
pub use events::{PageLoadState, PaneEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{NavigationPolicy, PaneHandle, PaneManager, PaneOptions, PaneRegistry};
