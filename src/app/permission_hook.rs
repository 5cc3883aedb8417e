//! Usage: Routes webview permission requests through `permissions::handle_request`.
//!
//! - Linux: WebKitGTK `permission-request` signal.
//! - Windows: WebView2 `PermissionRequested`, registered after wry's own handler so its
//!   `SetState` is the last word.
//! - macOS: WKWebView grants media capture inside wry's UI delegate before any app code runs,
//!   so denied capabilities are refused at page level instead (`page_guard_script`, injected
//!   into every frame before page scripts).

use crate::permissions::{self, PermissionDecision};

/// Maps a WebKitGTK permission request type name to the web capability it asks for.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn capability_for_webkit_request(type_name: &str) -> &'static str {
    match type_name {
        "WebKitNotificationPermissionRequest" => "notifications",
        "WebKitGeolocationPermissionRequest" => "geolocation",
        "WebKitUserMediaPermissionRequest" | "WebKitDeviceInfoPermissionRequest" => "media",
        "WebKitClipboardPermissionRequest" => "clipboard-read",
        "WebKitPointerLockPermissionRequest" => "pointerLock",
        "WebKitMediaKeySystemPermissionRequest" => "mediaKeySystem",
        "WebKitWebsiteDataAccessPermissionRequest" => "storage-access",
        _ => "unknown",
    }
}

/// Maps a raw `COREWEBVIEW2_PERMISSION_KIND` value to the web capability it asks for.
#[cfg_attr(not(windows), allow(dead_code))]
fn capability_for_webview2_kind(kind: i32) -> &'static str {
    match kind {
        1 => "microphone",
        2 => "camera",
        3 => "geolocation",
        4 => "notifications",
        5 => "sensors",
        6 => "clipboard-read",
        7 => "automatic-downloads",
        8 => "file-system",
        9 => "autoplay",
        10 => "local-fonts",
        11 => "midi-sysex",
        12 => "window-management",
        _ => "unknown",
    }
}

/// Script that makes the page's own capability APIs fail with `NotAllowedError` for every
/// capability the policy denies.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn page_guard_script() -> String {
    let mut script = String::from(
        "(() => {\n  const refuse = (name) => () => Promise.reject(new DOMException(`${name} permission denied`, \"NotAllowedError\"));\n  const pin = (target, key, value) => { if (target) { try { Object.defineProperty(target, key, { value, configurable: false, writable: false }); } catch (_) {} } };\n",
    );

    if permissions::decide("media") == PermissionDecision::Deny {
        script.push_str(
            "  pin(navigator.mediaDevices, \"getUserMedia\", refuse(\"media\"));\n  pin(navigator.mediaDevices, \"getDisplayMedia\", refuse(\"media\"));\n  for (const legacy of [\"getUserMedia\", \"webkitGetUserMedia\"]) {\n    pin(navigator, legacy, (_constraints, _ok, fail) => { if (typeof fail === \"function\") fail(new DOMException(\"media permission denied\", \"NotAllowedError\")); });\n  }\n",
        );
    }

    if permissions::decide("geolocation") == PermissionDecision::Deny {
        script.push_str(
            "  const denied = { code: 1, message: \"User denied Geolocation\", PERMISSION_DENIED: 1, POSITION_UNAVAILABLE: 2, TIMEOUT: 3 };\n  const fail = (_ok, onError) => { if (typeof onError === \"function\") setTimeout(() => onError(denied), 0); };\n  pin(navigator.geolocation, \"getCurrentPosition\", fail);\n  pin(navigator.geolocation, \"watchPosition\", (ok, onError) => { fail(ok, onError); return 0; });\n",
        );
    }

    if permissions::decide("clipboard-read") == PermissionDecision::Deny {
        script.push_str(
            "  pin(navigator.clipboard, \"read\", refuse(\"clipboard-read\"));\n  pin(navigator.clipboard, \"readText\", refuse(\"clipboard-read\"));\n",
        );
    }

    script.push_str("})();\n");
    script
}

#[cfg(target_os = "linux")]
pub(crate) fn install(window: &tauri::WebviewWindow) {
    let label = window.label().to_string();
    let result = window.with_webview(|webview| {
        use webkit2gtk::glib::ObjectExt;
        use webkit2gtk::{PermissionRequestExt, WebViewExt};

        webview
            .inner()
            .connect_permission_request(|_view, request| {
                let capability = capability_for_webkit_request(request.type_().name());
                permissions::handle_request(capability, |granted| {
                    if granted {
                        request.allow();
                    } else {
                        request.deny();
                    }
                });
                true
            });
    });

    if let Err(err) = result {
        tracing::warn!(label = %label, "permission hook not installed: {}", err);
    }
}

#[cfg(windows)]
pub(crate) fn install(window: &tauri::WebviewWindow) {
    let label = window.label().to_string();
    let hook_label = label.clone();
    let result = window.with_webview(move |webview| {
        if let Err(err) = install_webview2(&webview.controller()) {
            tracing::warn!(label = %hook_label, "permission hook not installed: {}", err);
        }
    });

    if let Err(err) = result {
        tracing::warn!(label = %label, "permission hook not installed: {}", err);
    }
}

#[cfg(windows)]
fn install_webview2(
    controller: &webview2_com::Microsoft::Web::WebView2::Win32::ICoreWebView2Controller,
) -> Result<(), String> {
    use webview2_com::Microsoft::Web::WebView2::Win32::{
        COREWEBVIEW2_PERMISSION_KIND_UNKNOWN_PERMISSION, COREWEBVIEW2_PERMISSION_STATE_ALLOW,
        COREWEBVIEW2_PERMISSION_STATE_DENY,
    };
    use webview2_com::PermissionRequestedEventHandler;

    // SAFETY: `with_webview` runs on the thread that owns the WebView2 instance.
    let core = unsafe { controller.CoreWebView2() }
        .map_err(|e| format!("failed to get CoreWebView2: {e}"))?;

    let handler = PermissionRequestedEventHandler::create(Box::new(|_sender, args| {
        let Some(args) = args else {
            return Ok(());
        };
        let mut kind = COREWEBVIEW2_PERMISSION_KIND_UNKNOWN_PERMISSION;
        unsafe { args.PermissionKind(&mut kind) }?;

        let mut state = COREWEBVIEW2_PERMISSION_STATE_DENY;
        permissions::handle_request(capability_for_webview2_kind(kind.0), |granted| {
            if granted {
                state = COREWEBVIEW2_PERMISSION_STATE_ALLOW;
            }
        });
        unsafe { args.SetState(state) }
    }));

    let mut token = 0i64;
    unsafe { core.add_PermissionRequested(&handler, &mut token) }
        .map_err(|e| format!("failed to register PermissionRequested: {e}"))
}

#[cfg(not(any(target_os = "linux", windows)))]
pub(crate) fn install(window: &tauri::WebviewWindow) {
    tracing::debug!(
        label = %window.label(),
        "permissions enforced by the page guard script on this platform"
    );
}
