use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use meetdeck_common::PaneId;

use crate::events::PaneEvent;

use super::handle::PaneHandle;
use super::types::PaneOptions;
use super::PaneManager;

/// Maps pane IDs to webview handles; higher-level convenience over
/// `PaneManager` for managing the full lifecycle.
pub struct PaneRegistry {
    manager: PaneManager,
    handles: HashMap<PaneId, PaneHandle>,
}

impl PaneRegistry {
    pub fn new(manager: PaneManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a pane webview and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        pane: PaneId,
        window: &W,
        bounds: wry::Rect,
        options: PaneOptions,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(pane, window, bounds, options)?;
        self.handles.insert(pane, handle);
        Ok(())
    }

    pub fn get(&self, pane: PaneId) -> Option<&PaneHandle> {
        self.handles.get(&pane)
    }

    pub fn get_mut(&mut self, pane: PaneId) -> Option<&mut PaneHandle> {
        self.handles.get_mut(&pane)
    }

    /// Destroy a pane webview.
    pub fn destroy(&mut self, pane: PaneId) -> bool {
        if self.handles.remove(&pane).is_some() {
            debug!(pane = %pane, "pane webview destroyed");
            true
        } else {
            false
        }
    }

    /// All registered pane IDs.
    pub fn panes(&self) -> Vec<PaneId> {
        self.handles.keys().copied().collect()
    }

    /// Drain all pending events from all panes.
    pub fn drain_events(&self) -> Vec<PaneEvent> {
        self.manager.drain_events()
    }

    /// Destroy all panes. Used during shutdown.
    pub fn destroy_all(&mut self) {
        let panes = self.panes();
        for pane in panes {
            self.destroy(pane);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_drains_nothing() {
        let registry = PaneRegistry::new(PaneManager::new());
        assert_eq!(registry.count(), 0);
        assert!(registry.drain_events().is_empty());
        assert!(registry.panes().is_empty());
    }

    #[test]
    fn destroying_unknown_pane_is_false() {
        let mut registry = PaneRegistry::new(PaneManager::new());
        assert!(!registry.destroy(PaneId::Meet));
    }
}
