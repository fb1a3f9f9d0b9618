//! Wire types for the rental backend's REST API.
//!
//! Every success response arrives wrapped in the backend's
//! `{statusCode, message, data, timestamp}` envelope; callers of the HTTP
//! wrapper only ever see the unwrapped `data` payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

/// Standard response envelope produced by the backend for every endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Authenticated identity as returned by `GET /v1/auth/me`.
///
/// The backend omits any numeric id from this shape, so none is modeled;
/// `role` is a free-form string compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl User {
    /// Case-insensitive role check; the backend has returned both
    /// `"admin"` and `"ADMIN"` for the same account.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Access/refresh token pair for one actor kind.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// `POST /v1/auth/login` response payload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginData {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: User,
}

/// `POST /v1/auth/register` response payload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterData {
    pub email: String,
}

/// Result of a successful login: the identity plus the stored tokens.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthSession {
    pub user: User,
    #[serde(skip)]
    pub tokens: TokenPair,
}

/// Rental car as listed by the cars endpoints. Read-only view data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub car_type: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Car categories accepted by `GET /v1/cars/type/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Sedan,
    Suv,
    Truck,
}

impl CarType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sedan" => Ok(Self::Sedan),
            "suv" => Ok(Self::Suv),
            "truck" => Ok(Self::Truck),
            other => Err(format!("unknown car type `{other}`")),
        }
    }
}
