//! Usage: Title-change notification policy (pure; delivery lives in `app::notifier`).

pub const NOTIFICATION_TITLE: &str = "New Message";

/// Page title Messenger shows when there is nothing unread.
pub const IDLE_TITLE: &str = "Messenger";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNotification {
    pub title: String,
    pub body: String,
    pub silent: bool,
}

/// Decides whether a page title change should raise a desktop notification.
///
/// Every qualifying change yields one notification; nothing is coalesced, so a title that
/// flips between two unread counts produces one notification per flip.
pub fn decide(
    enabled: bool,
    window_focused: bool,
    page_title: &str,
) -> Option<MessageNotification> {
    if !enabled || window_focused || page_title == IDLE_TITLE {
        return None;
    }

    Some(MessageNotification {
        title: NOTIFICATION_TITLE.to_string(),
        body: page_title.to_string(),
        silent: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfocused_window_with_new_title_notifies_once() {
        let notification = decide(true, false, "Alice sent a message").expect("notification");
        assert_eq!(
            notification,
            MessageNotification {
                title: "New Message".to_string(),
                body: "Alice sent a message".to_string(),
                silent: false,
            }
        );
    }

    #[test]
    fn focused_window_never_notifies() {
        assert!(decide(true, true, "Alice sent a message").is_none());
    }

    #[test]
    fn idle_title_never_notifies() {
        assert!(decide(true, false, "Messenger").is_none());
    }

    #[test]
    fn idle_title_match_is_exact() {
        assert!(decide(true, false, "(1) Messenger").is_some());
        assert!(decide(true, false, "messenger").is_some());
    }

    #[test]
    fn disabled_flag_suppresses_everything() {
        for (focused, title) in [
            (false, "Alice sent a message"),
            (true, "Bob"),
            (false, "Messenger"),
        ] {
            assert!(decide(false, focused, title).is_none());
        }
    }

    #[test]
    fn oscillating_titles_are_not_deduplicated() {
        let titles = ["(1) Messenger", "Alice sent a message", "(1) Messenger"];
        let produced = titles
            .iter()
            .filter_map(|title| decide(true, false, title))
            .count();
        assert_eq!(produced, 3);
    }
}
