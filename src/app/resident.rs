//! Usage: Desktop lifecycle (quit vs. stay resident, dock re-activation, second launch).

use crate::app::shell;
use crate::app::window_tracker::WindowTrackers;
use tauri::Manager;

/// macOS keeps the app alive with no windows until the user quits explicitly.
const STAYS_RESIDENT_WITHOUT_WINDOWS: bool = cfg!(target_os = "macos");

/// Whether an exit request should be vetoed.
///
/// `code` is `None` when the runtime asks to exit because the last window closed, and
/// `Some(_)` for explicit quits (menu, `app.exit`).
fn should_stay_resident(code: Option<i32>, stays_resident_without_windows: bool) -> bool {
    stays_resident_without_windows && code.is_none()
}

/// Focuses an existing shell window, or creates one when none is left.
pub(crate) fn activate(app: &tauri::AppHandle) {
    if let Some(window) = app.webview_windows().into_values().next() {
        shell::bring_to_front(&window);
        return;
    }

    if let Err(err) = shell::create_window(app) {
        tracing::error!("shell window re-creation failed: {}", err);
    }
}

pub(crate) fn on_run_event(app: &tauri::AppHandle, event: tauri::RunEvent) {
    match event {
        tauri::RunEvent::ExitRequested { api, code, .. } => {
            if should_stay_resident(code, STAYS_RESIDENT_WITHOUT_WINDOWS) {
                api.prevent_exit();
                return;
            }
            tracing::info!(?code, "exit requested");
            if let Some(trackers) = app.try_state::<WindowTrackers>() {
                trackers.persist_all();
            }
        }
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen { .. } => {
            if app.webview_windows().is_empty() {
                activate(app);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_window_close_quits_off_macos() {
        assert!(!should_stay_resident(None, false));
    }

    #[test]
    fn last_window_close_keeps_macos_resident() {
        assert!(should_stay_resident(None, true));
    }

    #[test]
    fn explicit_quit_always_exits() {
        assert!(!should_stay_resident(Some(0), true));
        assert!(!should_stay_resident(Some(0), false));
    }
}
