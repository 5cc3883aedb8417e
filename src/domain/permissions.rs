//! Usage: Page permission policy (default-deny allowlist of exactly one capability).

pub const NOTIFICATIONS: &str = "notifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Grant,
    Deny,
}

impl PermissionDecision {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Grant)
    }
}

pub fn decide(capability: &str) -> PermissionDecision {
    if capability == NOTIFICATIONS {
        PermissionDecision::Grant
    } else {
        PermissionDecision::Deny
    }
}

/// Answers a permission request through a runtime-style callback.
pub fn handle_request(capability: &str, respond: impl FnOnce(bool)) {
    let decision = decide(capability);
    tracing::debug!(
        capability = %capability,
        granted = decision.is_granted(),
        "page permission requested"
    );
    respond(decision.is_granted());
}
