//! Usage: Resolve the per-installation app data directory and the files kept in it.

use std::path::PathBuf;
use tauri::Manager;

const WINDOW_STATE_FILE_NAME: &str = "window-state.json";
const LOGS_DIR_NAME: &str = "logs";

pub fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("failed to resolve app data dir: {e}"))?;
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create app dir: {e}"))?;
    Ok(dir)
}

pub fn window_state_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_dir(app)?.join(WINDOW_STATE_FILE_NAME))
}

pub fn logs_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dir = app_data_dir(app)?.join(LOGS_DIR_NAME);
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create logs dir: {e}"))?;
    Ok(dir)
}
