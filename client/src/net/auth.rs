//! Authentication operations against `/v1/auth/*`.
//!
//! The capability trait [`AuthApi`] is the seam between the session machine
//! and the transport: the session only ever sees `login`/`logout`/
//! `current_user`/`refresh`, so tests drive it with a fake while both app
//! hosts share the single HTTP implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{AuthSession, LoginData, RegisterData, TokenPair, User};
use crate::store::{ActorKind, TokenStore};

/// Auth operations available to a session, independent of transport.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for tokens and an identity. Stores the tokens
    /// on success.
    async fn login(&self, username: &str, password: &str) -> Result<AuthSession, ApiError>;

    /// Create an account; returns the registered email. No token side
    /// effects.
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<String, ApiError>;

    /// Fetch the current identity. Fails before any network call when no
    /// access token is stored.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// Remote logout, then clear local tokens — the clear happens whether
    /// or not the remote call succeeded.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Exchange the stored refresh token for a fresh pair and store it.
    async fn refresh(&self) -> Result<TokenPair, ApiError>;
}

/// HTTP implementation of [`AuthApi`] for one actor kind. The admin
/// variant differs only in which token namespace it reads and writes.
pub struct AuthService {
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    actor: ActorKind,
}

impl AuthService {
    #[must_use]
    pub fn new(client: ApiClient, store: Arc<dyn TokenStore>, actor: ActorKind) -> Self {
        Self { client, store, actor }
    }
}

#[async_trait]
impl AuthApi for AuthService {
    async fn login(&self, username: &str, password: &str) -> Result<AuthSession, ApiError> {
        let data: LoginData = self
            .client
            .post(
                self.actor,
                "/v1/auth/login",
                Some(json!({ "username": username, "password": password })),
            )
            .await?;

        self.store.save(self.actor, &data.tokens)?;
        if self.actor == ActorKind::Admin {
            // The token-decoding guard reads role from this cached identity.
            self.store.save_cached_user(self.actor, &data.user)?;
        }
        Ok(AuthSession {
            user: data.user,
            tokens: data.tokens,
        })
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<String, ApiError> {
        let data: RegisterData = self
            .client
            .post(
                self.actor,
                "/v1/auth/register",
                Some(json!({ "username": username, "email": email, "password": password })),
            )
            .await?;
        Ok(data.email)
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        if self.store.load(self.actor).is_none() {
            return Err(ApiError::Auth("no access token stored".to_owned()));
        }
        self.client.get(self.actor, "/v1/auth/me").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result: Result<Option<serde_json::Value>, ApiError> =
            self.client.post(self.actor, "/v1/auth/logout", None).await;
        // Best-effort policy: local state is dropped no matter what the
        // server said.
        self.store.clear(self.actor);
        result.map(|_| ())
    }

    async fn refresh(&self) -> Result<TokenPair, ApiError> {
        let Some(pair) = self.store.load(self.actor) else {
            return Err(ApiError::Auth("no refresh token stored".to_owned()));
        };
        let tokens: TokenPair = self
            .client
            .post(
                self.actor,
                "/v1/auth/refresh-token",
                Some(json!({ "refreshToken": pair.refresh_token })),
            )
            .await?;
        self.store.save(self.actor, &tokens)?;
        Ok(tokens)
    }
}
