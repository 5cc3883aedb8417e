mod app;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, resident};
pub(crate) use domain::{navigation, notification, permissions, zoom};
pub(crate) use infra::{app_paths, window_state};

use app::window_tracker::{self, WindowTrackers};
use app::{logging, menu, shell};
use app_state::{NotificationsState, ZoomState};
use tauri::Manager;
use window_state::{JsonFileWindowStateStore, MemoryWindowStateStore};

fn window_trackers(app: &tauri::AppHandle) -> WindowTrackers {
    match JsonFileWindowStateStore::from_app(app) {
        Ok(store) => WindowTrackers::new(store),
        Err(err) => {
            tracing::warn!("window state will not persist across runs: {}", err);
            WindowTrackers::new(MemoryWindowStateStore::default())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        resident::activate(app);
    }));

    let app = builder
        .manage(NotificationsState::default())
        .manage(ZoomState::default())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_notification::init())
        .on_window_event(window_tracker::on_window_event)
        .on_menu_event(menu::on_menu_event)
        .setup(|app| {
            logging::init(app.handle());
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "messenger desktop starting");

            app.manage(window_trackers(app.handle()));

            let (app_menu, shell_menu) =
                menu::build(app.handle(), app.state::<NotificationsState>().inner())?;
            app.set_menu(app_menu)?;
            app.manage(shell_menu);

            shell::create_window(app.handle())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(resident::on_run_event);
}
