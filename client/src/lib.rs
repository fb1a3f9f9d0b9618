//! # client
//!
//! Rust SDK for the car-rental backend: token persistence, the auth
//! service, the per-process session state machine, route guards, and the
//! read-only cars queries. Both app hosts (and the CLI) share this one
//! session module; only the `TokenStore` and `Navigator` wiring differs
//! per host.

pub mod claims;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod session;
pub mod store;

pub use claims::{Claims, decode_claims};
pub use config::Config;
pub use error::ApiError;
pub use guard::{GuardDecision, admin_guard, admin_token_guard, user_guard};
pub use net::auth::{AuthApi, AuthService};
pub use net::cars::CarsApi;
pub use net::http::{ApiClient, LOGIN_ROUTE, Navigator, NoopNavigator};
pub use net::types::{AuthSession, Car, CarType, Envelope, TokenPair, User};
pub use session::{Session, SessionState};
pub use store::{ActorKind, FileTokenStore, MemoryTokenStore, TokenStore};
