//! Usage: Application layer (Tauri-managed state, shell windows, menu, lifecycle, logging).

pub(crate) mod app_state;
pub(crate) mod logging;
pub(crate) mod menu;
pub(crate) mod notifier;
pub(crate) mod permission_hook;
pub(crate) mod resident;
pub(crate) mod shell;
pub(crate) mod window_tracker;
