use super::*;
use crate::shared::fs::unique_tmp_dir;

fn defaults() -> WindowDefaults {
    WindowDefaults::default()
}

fn normal_snapshot(x: i32, y: i32, width: u32, height: u32) -> WindowSnapshot {
    WindowSnapshot {
        position: Some((x, y)),
        size: Some((width, height)),
        ..WindowSnapshot::default()
    }
}

#[test]
fn first_launch_uses_640_by_800_without_position() {
    let dir = unique_tmp_dir("window_state");
    let store = JsonFileWindowStateStore::from_path(dir.join("window-state.json"));

    let state = store.load(defaults());
    assert_eq!(state, WindowState::from_defaults(defaults()));
    assert_eq!((state.width, state.height), (640, 800));
    assert_eq!((state.x, state.y), (None, None));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn saved_geometry_round_trips_through_file() {
    let dir = unique_tmp_dir("window_state");
    let path = dir.join("window-state.json");

    let saved = WindowState {
        x: Some(10),
        y: Some(20),
        width: 800,
        height: 900,
        is_maximized: false,
        is_full_screen: false,
    };
    JsonFileWindowStateStore::from_path(&path)
        .save(&saved)
        .expect("save");

    // A fresh store stands in for the next launch.
    let restored = JsonFileWindowStateStore::from_path(&path).load(defaults());
    assert_eq!(restored, saved);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn saved_file_carries_schema_version() {
    let dir = unique_tmp_dir("window_state");
    let path = dir.join("window-state.json");
    JsonFileWindowStateStore::from_path(&path)
        .save(&WindowState::from_defaults(defaults()))
        .expect("save");

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).expect("read")).expect("json");
    assert_eq!(raw["schema_version"], serde_json::json!(SCHEMA_VERSION));
    assert_eq!(raw["width"], serde_json::json!(640));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = unique_tmp_dir("window_state");
    let path = dir.join("window-state.json");
    std::fs::write(&path, b"{ not json").expect("write");

    let state = JsonFileWindowStateStore::from_path(&path).load(defaults());
    assert_eq!(state, WindowState::from_defaults(defaults()));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn partial_file_fills_missing_fields_from_defaults() {
    let dir = unique_tmp_dir("window_state");
    let path = dir.join("window-state.json");
    std::fs::write(&path, br#"{ "x": 5, "width": 0, "is_maximized": true }"#).expect("write");

    let state = JsonFileWindowStateStore::from_path(&path).load(defaults());
    assert_eq!(state.x, None);
    assert_eq!(state.y, None);
    assert_eq!((state.width, state.height), (640, 800));
    assert!(state.is_maximized);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn record_tracks_normal_bounds() {
    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(100, 50, 1024, 768));

    assert_eq!(state.x, Some(100));
    assert_eq!(state.y, Some(50));
    assert_eq!((state.width, state.height), (1024, 768));
    assert!(!state.is_maximized);
}

#[test]
fn maximized_window_keeps_last_normal_bounds() {
    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(100, 50, 1024, 768));
    state.record(&WindowSnapshot {
        position: Some((0, 0)),
        size: Some((2560, 1400)),
        is_maximized: true,
        ..WindowSnapshot::default()
    });

    assert_eq!((state.x, state.y), (Some(100), Some(50)));
    assert_eq!((state.width, state.height), (1024, 768));
    assert!(state.is_maximized);
}

#[test]
fn leaving_fullscreen_clears_the_flag() {
    let mut state = WindowState::from_defaults(defaults());
    state.record(&WindowSnapshot {
        is_full_screen: true,
        ..WindowSnapshot::default()
    });
    assert!(state.is_full_screen);

    state.record(&normal_snapshot(10, 10, 700, 700));
    assert!(!state.is_full_screen);
    assert_eq!((state.width, state.height), (700, 700));
}

#[test]
fn minimized_window_does_not_move_bounds() {
    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(100, 50, 1024, 768));
    state.record(&WindowSnapshot {
        position: Some((-32000, -32000)),
        size: Some((160, 28)),
        is_minimized: true,
        ..WindowSnapshot::default()
    });

    assert_eq!((state.x, state.y), (Some(100), Some(50)));
    assert_eq!((state.width, state.height), (1024, 768));
}

fn monitor(x: i32, y: i32, width: u32, height: u32) -> MonitorArea {
    MonitorArea {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn off_screen_bounds_are_detected() {
    let monitors = [monitor(0, 0, 1920, 1080), monitor(1920, 0, 1280, 1024)];

    let mut state = WindowState::from_defaults(defaults());
    assert!(state.intersects_any(&monitors));

    state.record(&normal_snapshot(2000, 100, 640, 800));
    assert!(state.intersects_any(&monitors));

    state.record(&normal_snapshot(4000, 100, 640, 800));
    assert!(!state.intersects_any(&monitors));

    state.reset_bounds(defaults());
    assert_eq!(state, WindowState::from_defaults(defaults()));
}

#[test]
fn window_straddling_two_monitors_is_kept() {
    let monitors = [monitor(0, 0, 1920, 1080), monitor(1920, 0, 1920, 1080)];

    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(1600, 100, 640, 800));
    assert!(state.intersects_any(&monitors));
}

#[test]
fn window_larger_than_small_display_is_kept() {
    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(10, 20, 800, 900));
    assert!(state.intersects_any(&[monitor(0, 0, 1366, 768)]));
}

#[test]
fn window_touching_only_a_monitor_edge_is_off_screen() {
    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(1920, 0, 640, 800));
    assert!(!state.intersects_any(&[monitor(0, 0, 1920, 1080)]));

    state.record(&normal_snapshot(1919, 0, 640, 800));
    assert!(state.intersects_any(&[monitor(0, 0, 1920, 1080)]));
}

#[test]
fn memory_store_returns_defaults_until_saved() {
    let store = MemoryWindowStateStore::default();
    assert_eq!(
        store.load(defaults()),
        WindowState::from_defaults(defaults())
    );

    let mut state = WindowState::from_defaults(defaults());
    state.record(&normal_snapshot(1, 2, 300, 400));
    store.save(&state).expect("save");
    assert_eq!(store.load(defaults()), state);
}
