//! Usage: Application menu (Edit/View) and its event routing.

use crate::app_state::{NotificationsState, ZoomState};
use crate::zoom::ZoomAction;
use tauri::menu::{
    CheckMenuItem, CheckMenuItemBuilder, Menu, MenuBuilder, MenuEvent, MenuItemBuilder,
    SubmenuBuilder,
};
use tauri::{Manager, WebviewWindow, Wry};

const MENU_RELOAD_ID: &str = "view.reload";
const MENU_FORCE_RELOAD_ID: &str = "view.force_reload";
const MENU_TOGGLE_DEVTOOLS_ID: &str = "view.toggle_devtools";
const MENU_RESET_ZOOM_ID: &str = "view.reset_zoom";
const MENU_ZOOM_IN_ID: &str = "view.zoom_in";
const MENU_ZOOM_OUT_ID: &str = "view.zoom_out";
const MENU_TOGGLE_FULLSCREEN_ID: &str = "view.toggle_fullscreen";
const MENU_NOTIFICATIONS_ID: &str = "view.background_notifications";

#[cfg(target_os = "macos")]
const FULLSCREEN_ACCELERATOR: &str = "Ctrl+Cmd+F";
#[cfg(not(target_os = "macos"))]
const FULLSCREEN_ACCELERATOR: &str = "F11";

pub(crate) const NOTIFICATIONS_LABEL: &str = "Enable Background Notifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewAction {
    Reload,
    ForceReload,
    ToggleDevtools,
    Zoom(ZoomAction),
    ToggleFullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    View(ViewAction),
    ToggleNotifications,
}

impl MenuAction {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        let action = match id {
            MENU_RELOAD_ID => Self::View(ViewAction::Reload),
            MENU_FORCE_RELOAD_ID => Self::View(ViewAction::ForceReload),
            MENU_TOGGLE_DEVTOOLS_ID => Self::View(ViewAction::ToggleDevtools),
            MENU_RESET_ZOOM_ID => Self::View(ViewAction::Zoom(ZoomAction::Reset)),
            MENU_ZOOM_IN_ID => Self::View(ViewAction::Zoom(ZoomAction::In)),
            MENU_ZOOM_OUT_ID => Self::View(ViewAction::Zoom(ZoomAction::Out)),
            MENU_TOGGLE_FULLSCREEN_ID => Self::View(ViewAction::ToggleFullscreen),
            MENU_NOTIFICATIONS_ID => Self::ToggleNotifications,
            _ => return None,
        };
        Some(action)
    }
}

/// Handle to the menu items whose state outlives the click that changed it.
pub(crate) struct ShellMenu {
    notifications_toggle: CheckMenuItem<Wry>,
}

/// Builds the application menu; the notifications checkbox starts from `notifications`.
pub(crate) fn build(
    app: &tauri::AppHandle,
    notifications: &NotificationsState,
) -> Result<(Menu<Wry>, ShellMenu), String> {
    let item = |id: &str, text: &str, accelerator: &str| {
        MenuItemBuilder::with_id(id, text)
            .accelerator(accelerator)
            .build(app)
            .map_err(|e| format!("failed to create menu item {id}: {e}"))
    };

    let notifications_toggle =
        CheckMenuItemBuilder::with_id(MENU_NOTIFICATIONS_ID, NOTIFICATIONS_LABEL)
            .checked(notifications.enabled())
            .build(app)
            .map_err(|e| format!("failed to create notifications toggle: {e}"))?;

    let edit = SubmenuBuilder::new(app, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all()
        .build()
        .map_err(|e| format!("failed to create edit menu: {e}"))?;

    let view = SubmenuBuilder::new(app, "View")
        .item(&item(MENU_RELOAD_ID, "Reload", "CmdOrCtrl+R")?)
        .item(&item(MENU_FORCE_RELOAD_ID, "Force Reload", "CmdOrCtrl+Shift+R")?)
        .item(&item(
            MENU_TOGGLE_DEVTOOLS_ID,
            "Toggle Developer Tools",
            "CmdOrCtrl+Alt+I",
        )?)
        .separator()
        .item(&item(MENU_RESET_ZOOM_ID, "Actual Size", "CmdOrCtrl+0")?)
        .item(&item(MENU_ZOOM_IN_ID, "Zoom In", "CmdOrCtrl+=")?)
        .item(&item(MENU_ZOOM_OUT_ID, "Zoom Out", "CmdOrCtrl+-")?)
        .separator()
        .item(&item(
            MENU_TOGGLE_FULLSCREEN_ID,
            "Toggle Full Screen",
            FULLSCREEN_ACCELERATOR,
        )?)
        .separator()
        .item(&notifications_toggle)
        .build()
        .map_err(|e| format!("failed to create view menu: {e}"))?;

    let menu = MenuBuilder::new(app);

    #[cfg(target_os = "macos")]
    let menu = {
        let app_menu = SubmenuBuilder::new(app, app.package_info().name.clone())
            .about(None)
            .separator()
            .hide()
            .hide_others()
            .show_all()
            .separator()
            .quit()
            .build()
            .map_err(|e| format!("failed to create app menu: {e}"))?;
        menu.item(&app_menu)
    };

    let menu = menu
        .item(&edit)
        .item(&view)
        .build()
        .map_err(|e| format!("failed to create application menu: {e}"))?;

    Ok((
        menu,
        ShellMenu {
            notifications_toggle,
        },
    ))
}

pub(crate) fn on_menu_event(app: &tauri::AppHandle, event: MenuEvent) {
    let Some(action) = MenuAction::from_id(event.id().as_ref()) else {
        return;
    };

    match action {
        MenuAction::ToggleNotifications => toggle_notifications(app),
        MenuAction::View(view) => {
            let Some(window) = target_window(app) else {
                return;
            };
            if let Err(err) = apply_view_action(app, &window, view) {
                tracing::warn!(label = %window.label(), ?view, "menu action failed: {}", err);
            }
        }
    }
}

fn toggle_notifications(app: &tauri::AppHandle) {
    let state = app.state::<NotificationsState>();
    // The native item has already flipped its check mark by the time the event arrives.
    let enabled = app
        .try_state::<ShellMenu>()
        .and_then(|menu| menu.notifications_toggle.is_checked().ok())
        .unwrap_or(!state.enabled());
    state.set_enabled(enabled);
    tracing::info!(enabled, "background notifications toggled");
}

/// The focused shell window, falling back to any shell window.
fn target_window(app: &tauri::AppHandle) -> Option<WebviewWindow> {
    let windows = app.webview_windows();
    windows
        .values()
        .find(|window| window.is_focused().unwrap_or(false))
        .cloned()
        .or_else(|| windows.into_values().next())
}

fn apply_view_action(
    app: &tauri::AppHandle,
    window: &WebviewWindow,
    action: ViewAction,
) -> Result<(), String> {
    match action {
        ViewAction::Reload => window.reload().map_err(|e| e.to_string()),
        ViewAction::ForceReload => {
            // No cache-bypassing reload is exposed by the webview; navigate to the same URL.
            let url = window.url().map_err(|e| e.to_string())?;
            window.navigate(url).map_err(|e| e.to_string())
        }
        ViewAction::ToggleDevtools => {
            if window.is_devtools_open() {
                window.close_devtools();
            } else {
                window.open_devtools();
            }
            Ok(())
        }
        ViewAction::Zoom(zoom) => {
            let factor = app.state::<ZoomState>().apply(window.label(), zoom);
            window.set_zoom(factor).map_err(|e| e.to_string())
        }
        ViewAction::ToggleFullscreen => {
            let fullscreen = window.is_fullscreen().map_err(|e| e.to_string())?;
            window
                .set_fullscreen(!fullscreen)
                .map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_item_id_maps_to_an_action() {
        let expected = [
            (MENU_RELOAD_ID, ViewAction::Reload),
            (MENU_FORCE_RELOAD_ID, ViewAction::ForceReload),
            (MENU_TOGGLE_DEVTOOLS_ID, ViewAction::ToggleDevtools),
            (MENU_RESET_ZOOM_ID, ViewAction::Zoom(ZoomAction::Reset)),
            (MENU_ZOOM_IN_ID, ViewAction::Zoom(ZoomAction::In)),
            (MENU_ZOOM_OUT_ID, ViewAction::Zoom(ZoomAction::Out)),
            (MENU_TOGGLE_FULLSCREEN_ID, ViewAction::ToggleFullscreen),
        ];
        for (id, action) in expected {
            assert_eq!(MenuAction::from_id(id), Some(MenuAction::View(action)), "{id}");
        }
    }

    #[test]
    fn notifications_checkbox_maps_to_toggle() {
        assert_eq!(
            MenuAction::from_id(MENU_NOTIFICATIONS_ID),
            Some(MenuAction::ToggleNotifications)
        );
        assert_eq!(NOTIFICATIONS_LABEL, "Enable Background Notifications");
    }

    #[test]
    fn predefined_and_foreign_ids_are_ignored() {
        assert_eq!(MenuAction::from_id("copy"), None);
        assert_eq!(MenuAction::from_id("tray.quit"), None);
        assert_eq!(MenuAction::from_id(""), None);
    }
}
