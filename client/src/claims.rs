//! Client-side JWT payload decoding.
//!
//! The backend's tokens are only ever *inspected* here (expiry, role), never
//! verified; the server remains the authority on token validity. Both
//! browser apps hand-rolled this base64 parsing in their guards, so it lives
//! in exactly one place now.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decoded token payload. `exp` is seconds since the Unix epoch.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Claims {
    pub exp: u64,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Claims {
    /// Expiry check used by the token-decoding guard. A token expiring
    /// exactly now counts as expired.
    #[must_use]
    pub fn is_expired(&self, now: SystemTime) -> bool {
        let now_secs = now.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
        self.exp <= now_secs
    }

    /// Case-insensitive role check on the claim set itself.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}

/// Decode the payload segment of a compact JWT.
///
/// Any failure — wrong segment count, bad base64, bad JSON, missing `exp` —
/// reads as `None`; callers treat that identically to "not authenticated".
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
