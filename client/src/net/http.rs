//! HTTP client wrapper for the rental backend.
//!
//! Every request goes through `ApiClient`: it attaches the bearer token for
//! the requested actor kind when one is stored, unwraps the backend's
//! response envelope, and applies the invalid-session policy — a 401, or a
//! 400 on a request that carried a token, clears that actor's tokens and
//! navigates to the login route unless the caller is already there.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ApiError;
use crate::net::types::Envelope;
use crate::store::{ActorKind, TokenStore};

/// Route the wrapper redirects to when a session turns out to be invalid.
pub const LOGIN_ROUTE: &str = "/login";

/// Navigation seam standing in for `window.location` in the browser apps.
///
/// The redirect-on-401 contract lives behind this trait so it can be
/// asserted against a recording fake.
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> String;
    fn go_to(&self, route: &str);
}

/// Navigator for hosts with no notion of routes (the CLI). Redirect
/// requests are logged and dropped.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_route(&self) -> String {
        String::new()
    }

    fn go_to(&self, route: &str) {
        tracing::debug!(route, "navigation requested");
    }
}

/// Shared HTTP transport: base URL, fixed timeout, bearer injection,
/// envelope unwrapping.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build the underlying reqwest client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the TLS backend cannot initialize.
    pub fn new(config: &Config, store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            store,
            navigator,
        })
    }

    /// GET a path and unwrap the envelope into `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn get<T: DeserializeOwned>(&self, actor: ActorKind, path: &str) -> Result<T, ApiError> {
        self.execute(reqwest::Method::GET, actor, path, None).await
    }

    /// POST a path with an optional JSON body and unwrap the envelope.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn post<T: DeserializeOwned>(
        &self,
        actor: ActorKind,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        self.execute(reqwest::Method::POST, actor, path, body).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        actor: ActorKind,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.request(method, &url);

        let bearer = bearer_header(self.store.as_ref(), actor);
        let had_token = bearer.is_some();
        if let Some(header) = bearer {
            request = request.header(AUTHORIZATION, header);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            let envelope: Envelope<T> = response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            return Ok(envelope.data);
        }

        let message = failure_message(status, &response.text().await.unwrap_or_default());
        Err(self.handle_failure(status, had_token, actor, message))
    }

    fn handle_failure(&self, status: StatusCode, had_token: bool, actor: ActorKind, message: String) -> ApiError {
        match classify_failure(status, had_token) {
            FailureClass::InvalidSession => {
                self.store.clear(actor);
                redirect_to_login(self.navigator.as_ref());
                ApiError::Auth(message)
            }
            FailureClass::Validation => ApiError::Validation(message),
            FailureClass::Other => ApiError::Http {
                status: status.as_u16(),
                message,
            },
        }
    }
}

pub(crate) enum FailureClass {
    InvalidSession,
    Validation,
    Other,
}

/// Invalid-session policy. A 400 only counts when the request carried a
/// bearer token; unauthenticated 400s are plain validation failures.
pub(crate) fn classify_failure(status: StatusCode, had_token: bool) -> FailureClass {
    if status == StatusCode::UNAUTHORIZED {
        FailureClass::InvalidSession
    } else if status == StatusCode::BAD_REQUEST {
        if had_token {
            FailureClass::InvalidSession
        } else {
            FailureClass::Validation
        }
    } else {
        FailureClass::Other
    }
}

/// Send the caller to the login route, unless already there. The guard
/// breaks the redirect loop a 401 on the login page would otherwise cause.
pub(crate) fn redirect_to_login(navigator: &dyn Navigator) {
    if navigator.current_route() != LOGIN_ROUTE {
        navigator.go_to(LOGIN_ROUTE);
    }
}

/// `Authorization` header value for the actor kind, only when a token
/// exists.
pub(crate) fn bearer_header(store: &dyn TokenStore, actor: ActorKind) -> Option<String> {
    store.load(actor).map(|pair| format!("Bearer {}", pair.access_token))
}

/// Pull the backend's error message out of a failure body, falling back to
/// the bare status when the body is not the usual envelope.
pub(crate) fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| format!("http status {status}"))
}
