//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::ShellApp;

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.create_overlay_windows(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.is_main_window(window_id) {
            self.handle_main_window_event(event_loop, event);
        } else {
            self.handle_overlay_event(window_id, event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ShellApp {
    fn is_main_window(&self, window_id: WindowId) -> bool {
        self.window.as_ref().is_some_and(|w| w.id() == window_id)
    }

    fn handle_main_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_pane_bounds();
                    self.on_resized(size);
                }
            }

            WindowEvent::Moved(position) => {
                self.on_moved(position);
            }

            _ => {}
        }
    }

    /// Overlay windows have no close box, but a WM can still send a
    /// close request; treat it as hide.
    fn handle_overlay_event(&mut self, window_id: WindowId, event: WindowEvent) {
        if !matches!(event, WindowEvent::CloseRequested) {
            return;
        }
        if let Some(w) = &self.canvas_window {
            if w.id() == window_id {
                self.hide_canvas();
                return;
            }
        }
        if let Some(w) = &self.toolbar_window {
            if w.id() == window_id {
                self.hide_toolbar();
            }
        }
    }
}
