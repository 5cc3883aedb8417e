//! Usage: Persisted window geometry (schema + JSON store + pure update rules).
//!
//! The store is a passive delegate: the shell decides when to load and save, the store only
//! knows how. A missing or unreadable file always yields the caller's defaults.

use crate::shared::fs::{read_optional_file, write_file_atomic_if_changed};
use crate::shared::mutex_ext::MutexExt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDefaults {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
    pub is_maximized: bool,
    pub is_full_screen: bool,
}

/// Geometry read back from a live window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSnapshot {
    pub position: Option<(i32, i32)>,
    pub size: Option<(u32, u32)>,
    pub is_maximized: bool,
    pub is_full_screen: bool,
    pub is_minimized: bool,
}

/// A monitor's work area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorArea {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowState {
    pub fn from_defaults(defaults: WindowDefaults) -> Self {
        Self {
            x: None,
            y: None,
            width: defaults.width,
            height: defaults.height,
            is_maximized: false,
            is_full_screen: false,
        }
    }

    /// Folds a live snapshot into the state.
    ///
    /// Bounds only follow the window while it is in its normal state, so a maximized or
    /// fullscreen window keeps remembering where it should return to.
    pub fn record(&mut self, snapshot: &WindowSnapshot) {
        let is_normal =
            !snapshot.is_maximized && !snapshot.is_full_screen && !snapshot.is_minimized;
        if is_normal {
            if let Some((x, y)) = snapshot.position {
                self.x = Some(x);
                self.y = Some(y);
            }
            if let Some((width, height)) = snapshot.size {
                if width > 0 && height > 0 {
                    self.width = width;
                    self.height = height;
                }
            }
        }
        self.is_maximized = snapshot.is_maximized;
        self.is_full_screen = snapshot.is_full_screen;
    }

    /// True when the stored bounds overlap at least one of `monitors` by a positive area.
    ///
    /// A window straddling two monitors or hanging partly off an edge is still reachable.
    /// A state without a position is always placeable (the window gets centered).
    pub fn intersects_any(&self, monitors: &[MonitorArea]) -> bool {
        let (Some(x), Some(y)) = (self.x, self.y) else {
            return true;
        };

        let left = i64::from(x);
        let top = i64::from(y);
        let right = left + i64::from(self.width);
        let bottom = top + i64::from(self.height);

        monitors.iter().any(|m| {
            let m_left = i64::from(m.x);
            let m_top = i64::from(m.y);
            let m_right = m_left + i64::from(m.width);
            let m_bottom = m_top + i64::from(m.height);
            left.max(m_left) < right.min(m_right) && top.max(m_top) < bottom.min(m_bottom)
        })
    }

    pub fn reset_bounds(&mut self, defaults: WindowDefaults) {
        *self = Self::from_defaults(defaults);
    }
}

pub trait WindowStateStore: Send + Sync {
    /// Loads the last saved state, or `defaults` when there is none or it cannot be read.
    fn load(&self, defaults: WindowDefaults) -> WindowState;

    fn save(&self, state: &WindowState) -> Result<(), String>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct WindowStateFile {
    schema_version: u32,
    x: Option<i32>,
    y: Option<i32>,
    width: Option<u32>,
    height: Option<u32>,
    is_maximized: bool,
    is_full_screen: bool,
}

impl WindowStateFile {
    fn from_state(state: &WindowState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            x: state.x,
            y: state.y,
            width: Some(state.width),
            height: Some(state.height),
            is_maximized: state.is_maximized,
            is_full_screen: state.is_full_screen,
        }
    }

    fn into_state(self, defaults: WindowDefaults) -> WindowState {
        // Half a position is as good as none.
        let (x, y) = match (self.x, self.y) {
            (Some(x), Some(y)) => (Some(x), Some(y)),
            _ => (None, None),
        };

        WindowState {
            x,
            y,
            width: self.width.filter(|v| *v > 0).unwrap_or(defaults.width),
            height: self.height.filter(|v| *v > 0).unwrap_or(defaults.height),
            is_maximized: self.is_maximized,
            is_full_screen: self.is_full_screen,
        }
    }
}

fn parse_state_json(bytes: &[u8], defaults: WindowDefaults) -> Result<WindowState, String> {
    let file: WindowStateFile = serde_json::from_slice(bytes)
        .map_err(|e| format!("failed to parse window state: {e}"))?;
    if file.schema_version > SCHEMA_VERSION {
        tracing::warn!(
            schema_version = file.schema_version,
            "window state written by a newer version; reading known fields only"
        );
    }
    Ok(file.into_state(defaults))
}

#[derive(Debug, Clone)]
pub struct JsonFileWindowStateStore {
    path: PathBuf,
}

impl JsonFileWindowStateStore {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_app(app: &tauri::AppHandle) -> Result<Self, String> {
        Ok(Self::from_path(crate::app_paths::window_state_path(app)?))
    }

    fn try_load(&self, defaults: WindowDefaults) -> Result<Option<WindowState>, String> {
        let Some(bytes) = read_optional_file(&self.path)? else {
            return Ok(None);
        };
        parse_state_json(&bytes, defaults).map(Some)
    }
}

impl WindowStateStore for JsonFileWindowStateStore {
    fn load(&self, defaults: WindowDefaults) -> WindowState {
        match self.try_load(defaults) {
            Ok(Some(state)) => state,
            Ok(None) => WindowState::from_defaults(defaults),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "window state unreadable, using defaults: {}",
                    err
                );
                WindowState::from_defaults(defaults)
            }
        }
    }

    fn save(&self, state: &WindowState) -> Result<(), String> {
        let content = serde_json::to_vec_pretty(&WindowStateFile::from_state(state))
            .map_err(|e| format!("failed to serialize window state: {e}"))?;
        write_file_atomic_if_changed(&self.path, &content)?;
        Ok(())
    }
}

/// Process-lifetime store, used when no app data directory is available.
#[derive(Debug, Default)]
pub struct MemoryWindowStateStore {
    saved: Mutex<Option<WindowState>>,
}

impl WindowStateStore for MemoryWindowStateStore {
    fn load(&self, defaults: WindowDefaults) -> WindowState {
        self.saved
            .lock_or_recover()
            .unwrap_or_else(|| WindowState::from_defaults(defaults))
    }

    fn save(&self, state: &WindowState) -> Result<(), String> {
        *self.saved.lock_or_recover() = Some(*state);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
