//! Usage: Keeps each shell window's geometry in sync with the window-state store.

use crate::shared::mutex_ext::MutexExt;
use crate::window_state::{
    MonitorArea, WindowDefaults, WindowSnapshot, WindowState, WindowStateStore,
};
use std::collections::HashMap;
use std::sync::Mutex;
use tauri::Manager;

pub(crate) struct WindowTrackers {
    store: Box<dyn WindowStateStore>,
    defaults: WindowDefaults,
    windows: Mutex<HashMap<String, WindowState>>,
}

impl WindowTrackers {
    pub(crate) fn new(store: impl WindowStateStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            defaults: WindowDefaults::default(),
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// State for a window about to be created: the stored geometry, or defaults when the
    /// stored bounds no longer overlap any connected monitor's work area.
    pub(crate) fn initial_state(&self, monitors: &[MonitorArea]) -> WindowState {
        let mut state = self.store.load(self.defaults);
        if !monitors.is_empty() && !state.intersects_any(monitors) {
            tracing::info!(
                x = ?state.x,
                y = ?state.y,
                "stored window bounds are off-screen, resetting"
            );
            state.reset_bounds(self.defaults);
        }
        state
    }

    /// Starts tracking a freshly built window.
    pub(crate) fn manage(&self, label: &str, state: WindowState) {
        self.windows.lock_or_recover().insert(label.to_string(), state);
    }

    pub(crate) fn record(&self, label: &str, snapshot: &WindowSnapshot) {
        if let Some(state) = self.windows.lock_or_recover().get_mut(label) {
            state.record(snapshot);
        }
    }

    pub(crate) fn persist(&self, label: &str) {
        let state = self.windows.lock_or_recover().get(label).copied();
        if let Some(state) = state {
            self.save(label, &state);
        }
    }

    pub(crate) fn persist_all(&self) {
        let states: Vec<(String, WindowState)> = self
            .windows
            .lock_or_recover()
            .iter()
            .map(|(label, state)| (label.clone(), *state))
            .collect();
        for (label, state) in states {
            self.save(&label, &state);
        }
    }

    pub(crate) fn forget(&self, label: &str) {
        self.windows.lock_or_recover().remove(label);
    }

    fn save(&self, label: &str, state: &WindowState) {
        match self.store.save(state) {
            Ok(()) => tracing::debug!(label = %label, ?state, "window state saved"),
            Err(err) => tracing::warn!(label = %label, "window state save failed: {}", err),
        }
    }
}

pub(crate) fn monitor_areas(app: &tauri::AppHandle) -> Vec<MonitorArea> {
    let monitors = match app.available_monitors() {
        Ok(monitors) => monitors,
        Err(err) => {
            tracing::debug!("monitor query failed: {}", err);
            return Vec::new();
        }
    };

    monitors
        .iter()
        .map(|monitor| {
            let scale = monitor.scale_factor();
            let work_area = monitor.work_area();
            let position = work_area.position.to_logical::<f64>(scale);
            let size = work_area.size.to_logical::<f64>(scale);
            MonitorArea {
                x: position.x.round() as i32,
                y: position.y.round() as i32,
                width: size.width.round() as u32,
                height: size.height.round() as u32,
            }
        })
        .collect()
}

fn snapshot(window: &tauri::Window) -> WindowSnapshot {
    let scale = window.scale_factor().unwrap_or(1.0);
    let position = window
        .outer_position()
        .ok()
        .map(|p| p.to_logical::<f64>(scale))
        .map(|p| (p.x.round() as i32, p.y.round() as i32));
    let size = window
        .inner_size()
        .ok()
        .map(|s| s.to_logical::<f64>(scale))
        .map(|s| (s.width.round() as u32, s.height.round() as u32));

    WindowSnapshot {
        position,
        size,
        is_maximized: window.is_maximized().unwrap_or(false),
        is_full_screen: window.is_fullscreen().unwrap_or(false),
        is_minimized: window.is_minimized().unwrap_or(false),
    }
}

pub(crate) fn on_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    let Some(trackers) = window.try_state::<WindowTrackers>() else {
        return;
    };
    let label = window.label();

    match event {
        tauri::WindowEvent::Moved(_) | tauri::WindowEvent::Resized(_) => {
            trackers.record(label, &snapshot(window));
        }
        tauri::WindowEvent::CloseRequested { .. } => {
            trackers.record(label, &snapshot(window));
            trackers.persist(label);
        }
        tauri::WindowEvent::Destroyed => {
            trackers.forget(label);
            if let Some(zoom) = window.try_state::<crate::app_state::ZoomState>() {
                zoom.forget(label);
            }
        }
        _ => {}
    }
}
