//! Usage: Shell window construction (geometry restore, user agent, page handlers, remote URL).

use crate::app::{notifier, permission_hook, window_tracker};
use crate::navigation::{self, NavigationTarget};
use std::sync::atomic::{AtomicUsize, Ordering};
use tauri::webview::{NewWindowFeatures, NewWindowResponse};
use tauri::{Manager, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_opener::OpenerExt;
use window_tracker::WindowTrackers;

pub(crate) const MESSENGER_URL: &str = "https://www.messenger.com/";
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const WINDOW_TITLE: &str = "Messenger";
const MAIN_WINDOW_LABEL: &str = "main";
const EXTRA_WINDOW_LABEL_PREFIX: &str = "messenger";

static WINDOW_SEQ: AtomicUsize = AtomicUsize::new(0);

fn next_label(app: &tauri::AppHandle) -> String {
    loop {
        let seq = WINDOW_SEQ.fetch_add(1, Ordering::Relaxed);
        let label = window_label(seq);
        if app.get_webview_window(&label).is_none() {
            return label;
        }
    }
}

fn window_label(seq: usize) -> String {
    if seq == 0 {
        MAIN_WINDOW_LABEL.to_string()
    } else {
        format!("{EXTRA_WINDOW_LABEL_PREFIX}-{}", seq + 1)
    }
}

/// Creates one shell window. Every call yields a new, independently tracked window.
pub(crate) fn create_window(app: &tauri::AppHandle) -> Result<WebviewWindow, String> {
    let trackers = app.state::<WindowTrackers>();
    let state = trackers.initial_state(&window_tracker::monitor_areas(app));
    let label = next_label(app);

    let url: Url = MESSENGER_URL
        .parse()
        .map_err(|e| format!("invalid shell url {MESSENGER_URL}: {e}"))?;

    let nav_app = app.clone();
    let nav_label = label.clone();
    let mut builder = WebviewWindowBuilder::new(app, &label, WebviewUrl::External(url))
        .title(WINDOW_TITLE)
        .inner_size(f64::from(state.width), f64::from(state.height))
        .maximized(state.is_maximized)
        .fullscreen(state.is_full_screen)
        .user_agent(USER_AGENT)
        .on_document_title_changed(notifier::on_title_changed)
        .on_new_window(move |url: Url, _features: NewWindowFeatures| {
            route_new_window(&nav_app, &nav_label, url);
            NewWindowResponse::Deny
        });

    #[cfg(target_os = "macos")]
    {
        builder =
            builder.initialization_script_for_all_frames(permission_hook::page_guard_script());
    }

    builder = match (state.x, state.y) {
        (Some(x), Some(y)) => builder.position(f64::from(x), f64::from(y)),
        _ => builder.center(),
    };

    let window = builder
        .build()
        .map_err(|e| format!("failed to build shell window {label}: {e}"))?;

    trackers.manage(&label, state);
    permission_hook::install(&window);

    tracing::info!(
        label = %label,
        width = state.width,
        height = state.height,
        maximized = state.is_maximized,
        "shell window created"
    );
    Ok(window)
}

/// Handles a page request for a new browsing context. Never opens a second in-app window.
fn route_new_window(app: &tauri::AppHandle, label: &str, url: Url) {
    let decision = navigation::decide(url.as_str());
    tracing::debug!(
        label = %label,
        url = %decision.url,
        target = ?decision.target,
        "new window request"
    );

    match decision.target {
        NavigationTarget::SameWindow => {
            let Some(window) = app.get_webview_window(label) else {
                return;
            };
            if let Err(err) = window.navigate(url) {
                tracing::warn!(label = %label, "in-window navigation failed: {}", err);
            }
            bring_to_front(&window);
        }
        NavigationTarget::SystemBrowser => {
            if let Err(err) = app.opener().open_url(decision.url, None::<&str>) {
                tracing::warn!("failed to open link externally: {}", err);
            }
        }
    }
}

pub(crate) fn bring_to_front(window: &WebviewWindow) {
    if window.is_minimized().unwrap_or(false) {
        let _ = window.unminimize();
    }
    let _ = window.show();
    let _ = window.set_focus();
}
