//! Route guards for protected views.
//!
//! Two shapes, matching the two app variants: a session-backed guard that
//! reads the session state, and a token-decoding guard for the host without
//! a session context, which inspects the stored admin token directly.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::time::SystemTime;

use crate::claims::decode_claims;
use crate::session::SessionState;
use crate::store::{ActorKind, TokenStore};

/// What the host should render for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content.
    Allow,
    /// Session still bootstrapping; render a placeholder, decide later.
    Pending,
    /// Deny and send the caller to the login route.
    RedirectToLogin,
}

/// Admin-only guard over the session: authenticated and role matches
/// "admin" case-insensitively.
#[must_use]
pub fn admin_guard(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Pending,
        SessionState::Authenticated(user) if user.is_admin() => GuardDecision::Allow,
        _ => GuardDecision::RedirectToLogin,
    }
}

/// Permissive guard: any authenticated identity may pass.
#[must_use]
pub fn user_guard(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Pending,
        SessionState::Authenticated(_) => GuardDecision::Allow,
        SessionState::Anonymous => GuardDecision::RedirectToLogin,
    }
}

/// Admin guard for the host without a session context: decode the stored
/// admin token directly.
///
/// Decode failure and past expiry read identically as "not authenticated"
/// and clear the admin-side storage. A wrong role denies without clearing —
/// the tokens are still valid, just not admin-grade.
#[must_use]
pub fn admin_token_guard(store: &dyn TokenStore, now: SystemTime) -> GuardDecision {
    let Some(pair) = store.load(ActorKind::Admin) else {
        return GuardDecision::RedirectToLogin;
    };
    let Some(user) = store.load_cached_user(ActorKind::Admin) else {
        return GuardDecision::RedirectToLogin;
    };

    let Some(claims) = decode_claims(&pair.access_token) else {
        store.clear(ActorKind::Admin);
        return GuardDecision::RedirectToLogin;
    };
    if claims.is_expired(now) {
        store.clear(ActorKind::Admin);
        return GuardDecision::RedirectToLogin;
    }

    if user.is_admin() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}
