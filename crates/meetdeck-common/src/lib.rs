//! Shared types for the MeetDeck shell: destinations, shell commands,
//! notifications, and error enums used across crates.

pub mod commands;
pub mod errors;
pub mod types;

pub use commands::{ShellCommand, ShellNotification};
pub use errors::ConfigError;
pub use types::{Destination, PaneId, Rect};
