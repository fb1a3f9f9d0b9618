//! Error taxonomy for the rental API client.
//!
//! Auth failures are downgraded to the anonymous state at the session
//! boundary; everything else propagates to the caller.

/// Errors surfaced by the HTTP wrapper and the services built on it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Network(String),
    /// Invalid or expired credentials/token (401, or 400 on an
    /// authenticated request).
    #[error("authentication failed: {0}")]
    Auth(String),
    /// The server rejected the request body (400 without a bearer token).
    #[error("invalid request: {0}")]
    Validation(String),
    /// Any other non-2xx response.
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },
    /// A 2xx response whose body did not match the expected envelope.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The token store could not be written.
    #[error("token store unavailable: {0}")]
    Store(String),
}

impl ApiError {
    /// Whether this error means the current session is invalid.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
