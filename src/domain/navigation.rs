//! Usage: New-window routing policy (keep Messenger/Facebook in-app, send everything else to the OS).

use tauri::Url;

pub const MESSAGING_DOMAIN: &str = "messenger.com";
pub const PARENT_DOMAIN: &str = "facebook.com";

const IN_APP_DOMAINS: [&str; 2] = [MESSAGING_DOMAIN, PARENT_DOMAIN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    SameWindow,
    SystemBrowser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDecision {
    pub target: NavigationTarget,
    pub url: String,
}

/// Routes a page-initiated new-window request.
///
/// Only the host and path are matched; query strings and fragments are ignored so a
/// tracking link carrying `?next=messenger.com` still leaves the app. Input that does not
/// parse as a URL is handed to the system handler untouched.
pub fn decide(url: &str) -> NavigationDecision {
    let target = match Url::parse(url) {
        Ok(parsed) if stays_in_app(&parsed) => NavigationTarget::SameWindow,
        _ => NavigationTarget::SystemBrowser,
    };

    NavigationDecision {
        target,
        url: url.to_string(),
    }
}

fn stays_in_app(url: &Url) -> bool {
    let host = url.host_str().unwrap_or_default();
    let location = format!("{host}{}", url.path()).to_ascii_lowercase();
    IN_APP_DOMAINS.iter().any(|domain| location.contains(domain))
}
