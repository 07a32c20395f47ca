//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, window geometry, the embedded panes and
//! the screen-share overlay windows.

mod core;
mod dispatch;
mod event_handler;
mod geometry;
mod init;
mod ipc_dispatch;
mod navigation;
mod overlay;
mod panes;
mod polling;
mod shutdown;

pub use core::ShellApp;
