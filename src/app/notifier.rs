//! Usage: Delivers title-change notifications for shell windows via `tauri-plugin-notification`.

use crate::app_state::NotificationsState;
use crate::notification::{self, MessageNotification};
use tauri::Manager;
use tauri_plugin_notification::NotificationExt;

#[cfg(target_os = "windows")]
const NOTIFICATION_SOUND: &str = "Default";
#[cfg(target_os = "macos")]
const NOTIFICATION_SOUND: &str = "default";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const NOTIFICATION_SOUND: &str = "message-new-instant";

/// Title observer registered on every shell window.
pub(crate) fn on_title_changed(window: tauri::WebviewWindow, title: String) {
    let enabled = window.state::<NotificationsState>().enabled();
    // Unknown focus counts as unfocused.
    let focused = window.is_focused().unwrap_or(false);

    let Some(message) = notification::decide(enabled, focused, &title) else {
        return;
    };
    show(window.app_handle(), message);
}

fn show(app: &tauri::AppHandle, message: MessageNotification) {
    let mut builder = app
        .notification()
        .builder()
        .title(message.title)
        .body(message.body);
    if !message.silent {
        builder = builder.sound(NOTIFICATION_SOUND);
    }

    if let Err(err) = builder.show() {
        tracing::warn!("desktop notification failed: {}", err);
    }
}
