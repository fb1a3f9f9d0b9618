//! Token persistence.
//!
//! The browser apps kept tokens in `localStorage` under fixed keys; here the
//! same contract lives behind a `TokenStore` trait so the session machine and
//! guards can run against an in-memory fake in tests, while the CLI uses a
//! JSON file with the original key names.
//!
//! Invariant: at most one token pair per actor kind. `save` overwrites
//! unconditionally; there is no rotation or versioning.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::ApiError;
use crate::net::types::{TokenPair, User};

/// Whether a session belongs to an ordinary user or an admin. Tokens are
/// namespaced per kind and never shared between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    User,
    Admin,
}

/// Key-value persistence for token pairs, namespaced per actor kind.
///
/// `load` degrades storage failures to "absent" the way browser storage
/// does; only writes surface errors.
pub trait TokenStore: Send + Sync {
    /// Store a pair, replacing any existing one for the same actor kind.
    fn save(&self, actor: ActorKind, pair: &TokenPair) -> Result<(), ApiError>;

    /// Load the stored pair, if any.
    fn load(&self, actor: ActorKind) -> Option<TokenPair>;

    /// Drop the pair and any cached identity for this actor kind.
    fn clear(&self, actor: ActorKind);

    /// Store the identity alongside the tokens. The admin guard reads role
    /// from here rather than re-fetching `/v1/auth/me`.
    fn save_cached_user(&self, actor: ActorKind, user: &User) -> Result<(), ApiError>;

    /// Load the cached identity, if any.
    fn load_cached_user(&self, actor: ActorKind) -> Option<User>;
}

#[derive(Debug, Default, Clone)]
struct Slot {
    tokens: Option<TokenPair>,
    cached_user: Option<User>,
}

#[derive(Debug, Default)]
struct Slots {
    user: Slot,
    admin: Slot,
}

impl Slots {
    fn slot_mut(&mut self, actor: ActorKind) -> &mut Slot {
        match actor {
            ActorKind::User => &mut self.user,
            ActorKind::Admin => &mut self.admin,
        }
    }

    fn slot(&self, actor: ActorKind) -> &Slot {
        match actor {
            ActorKind::User => &self.user,
            ActorKind::Admin => &self.admin,
        }
    }
}

/// In-memory store for tests and short-lived tooling.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: Mutex<Slots>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, actor: ActorKind, pair: &TokenPair) -> Result<(), ApiError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.slot_mut(actor).tokens = Some(pair.clone());
        Ok(())
    }

    fn load(&self, actor: ActorKind) -> Option<TokenPair> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.slot(actor).tokens.clone()
    }

    fn clear(&self, actor: ActorKind) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        *slots.slot_mut(actor) = Slot::default();
    }

    fn save_cached_user(&self, actor: ActorKind, user: &User) -> Result<(), ApiError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.slot_mut(actor).cached_user = Some(user.clone());
        Ok(())
    }

    fn load_cached_user(&self, actor: ActorKind) -> Option<User> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.slot(actor).cached_user.clone()
    }
}

// Storage keys carried over from the browser apps. The admin refresh token
// had no key of its own there; it gets one here so both actor kinds hold a
// full pair.
const KEY_TOKEN: &str = "token";
const KEY_REFRESH: &str = "refreshToken";
const KEY_ADMIN_TOKEN: &str = "adminToken";
const KEY_ADMIN_REFRESH: &str = "adminRefreshToken";
const KEY_ADMIN_USER: &str = "adminUser";
const KEY_USER: &str = "user";

/// File-backed store: one flat JSON object using the browser-storage key
/// names. Shared by every process pointing at the same path, so a logout in
/// one invocation invalidates the session everywhere, exactly like tabs
/// sharing an origin.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    io: Mutex<()>,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    /// Missing or corrupt files read as empty, matching browser storage's
    /// tolerance for cleared or mangled state.
    fn read_keys(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_keys(&self, keys: &BTreeMap<String, String>) -> Result<(), ApiError> {
        let raw = serde_json::to_string_pretty(keys).map_err(|e| ApiError::Store(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| ApiError::Store(e.to_string()))
    }

    fn key_names(actor: ActorKind) -> (&'static str, &'static str, &'static str) {
        match actor {
            ActorKind::User => (KEY_TOKEN, KEY_REFRESH, KEY_USER),
            ActorKind::Admin => (KEY_ADMIN_TOKEN, KEY_ADMIN_REFRESH, KEY_ADMIN_USER),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, actor: ActorKind, pair: &TokenPair) -> Result<(), ApiError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (access_key, refresh_key, _) = Self::key_names(actor);
        let mut keys = self.read_keys();
        keys.insert(access_key.to_owned(), pair.access_token.clone());
        keys.insert(refresh_key.to_owned(), pair.refresh_token.clone());
        self.write_keys(&keys)
    }

    fn load(&self, actor: ActorKind) -> Option<TokenPair> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (access_key, refresh_key, _) = Self::key_names(actor);
        let keys = self.read_keys();
        let access_token = keys.get(access_key)?.clone();
        let refresh_token = keys.get(refresh_key).cloned().unwrap_or_default();
        Some(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn clear(&self, actor: ActorKind) {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (access_key, refresh_key, user_key) = Self::key_names(actor);
        let mut keys = self.read_keys();
        keys.remove(access_key);
        keys.remove(refresh_key);
        keys.remove(user_key);
        // Clearing is best-effort, like removeItem on storage.
        if let Err(e) = self.write_keys(&keys) {
            tracing::warn!(error = %e, "failed to persist token removal");
        }
    }

    fn save_cached_user(&self, actor: ActorKind, user: &User) -> Result<(), ApiError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (_, _, user_key) = Self::key_names(actor);
        let encoded = serde_json::to_string(user).map_err(|e| ApiError::Store(e.to_string()))?;
        let mut keys = self.read_keys();
        keys.insert(user_key.to_owned(), encoded);
        self.write_keys(&keys)
    }

    fn load_cached_user(&self, actor: ActorKind) -> Option<User> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (_, _, user_key) = Self::key_names(actor);
        let keys = self.read_keys();
        serde_json::from_str(keys.get(user_key)?).ok()
    }
}
