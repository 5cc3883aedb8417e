//! Usage: Pure decision logic for the shell (no Tauri handles, unit-testable in isolation).

pub(crate) mod navigation;
pub(crate) mod notification;
pub(crate) mod permissions;
pub(crate) mod zoom;
