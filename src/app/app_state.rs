//! Usage: Tauri-managed, process-lifetime state shared by menu, notifier and shell handlers.

use crate::shared::mutex_ext::MutexExt;
use crate::zoom::{self, ZoomAction};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Backing state for the "Enable Background Notifications" checkbox. Never persisted.
pub(crate) struct NotificationsState {
    enabled: AtomicBool,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }
}

impl NotificationsState {
    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

/// Zoom level per window label.
#[derive(Default)]
pub(crate) struct ZoomState(Mutex<HashMap<String, f64>>);

impl ZoomState {
    /// Applies `action` to the window's level and returns the new scale factor.
    pub(crate) fn apply(&self, label: &str, action: ZoomAction) -> f64 {
        let mut levels = self.0.lock_or_recover();
        let level = levels.entry(label.to_string()).or_insert(0.0);
        *level = zoom::apply(*level, action);
        zoom::factor(*level)
    }

    pub(crate) fn forget(&self, label: &str) {
        self.0.lock_or_recover().remove(label);
    }
}
