//! Per-process session state.
//!
//! Three states: `Loading` at construction, then `Authenticated` or
//! `Anonymous` after `initialize`. Auth failures are absorbed here — the
//! session logs them and settles in `Anonymous` rather than propagating.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::error::ApiError;
use crate::net::auth::AuthApi;
use crate::net::types::User;
use crate::store::{ActorKind, TokenStore};

/// Session lifecycle state. `is_authenticated` is derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(User),
    Anonymous,
}

/// The session context: owns the state, drives it through an [`AuthApi`].
pub struct Session<A: AuthApi> {
    auth: A,
    store: Arc<dyn TokenStore>,
    actor: ActorKind,
    state: SessionState,
}

impl<A: AuthApi> Session<A> {
    /// Start in `Loading`; call [`Session::initialize`] to settle.
    pub fn new(auth: A, store: Arc<dyn TokenStore>, actor: ActorKind) -> Self {
        Self {
            auth,
            store,
            actor,
            state: SessionState::Loading,
        }
    }

    /// Bootstrap from stored tokens.
    ///
    /// No stored access token means `Anonymous` without touching the
    /// network. A failed identity fetch clears the stored tokens and also
    /// ends `Anonymous`.
    pub async fn initialize(&mut self) {
        if self.store.load(self.actor).is_none() {
            self.state = SessionState::Anonymous;
            return;
        }
        match self.auth.current_user().await {
            Ok(user) => self.state = SessionState::Authenticated(user),
            Err(e) => {
                tracing::warn!(error = %e, "session bootstrap failed; dropping stored tokens");
                self.store.clear(self.actor);
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// `Anonymous → Authenticated`, or surface the error with the state
    /// left `Anonymous`.
    ///
    /// # Errors
    ///
    /// Propagates the [`AuthApi`] failure (invalid credentials, network).
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        match self.auth.login(username, password).await {
            Ok(session) => {
                self.state = SessionState::Authenticated(session.user);
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Anonymous;
                Err(e)
            }
        }
    }

    /// Always ends `Anonymous` with local tokens cleared, even when the
    /// remote logout call fails.
    pub async fn logout(&mut self) {
        if let Err(e) = self.auth.logout().await {
            tracing::warn!(error = %e, "remote logout failed");
        }
        self.store.clear(self.actor);
        self.state = SessionState::Anonymous;
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }
}
