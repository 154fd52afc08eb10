//! Bearer-token authentication.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::auth::Authenticator;
use crate::error::AppError;
use crate::view::Context;

type HmacSha256 = Hmac<Sha256>;

/// Lookup of hashed API tokens.
///
/// Implementations must not see raw tokens: they only receive the
/// HMAC-SHA256 hash computed by [`TokenAuthenticator`].
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Validates a token hash against stored credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the token is valid and not revoked
    /// - `Ok(false)` if the token is unknown or revoked
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store fails.
    fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;
}

/// In-memory [`TokenStore`].
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    hashes: RwLock<HashSet<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token_hash: impl Into<String>) {
        self.write().insert(token_hash.into());
    }

    /// Returns true if the hash was present.
    pub fn revoke(&self, token_hash: &str) -> bool {
        self.write().remove(token_hash)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashSet<String>> {
        self.hashes.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        let hashes = self
            .hashes
            .read()
            .map_err(|_| AppError::internal("Token store lock poisoned", json!({})))?;
        Ok(hashes.contains(token_hash))
    }
}

/// Authenticates requests carrying an API token.
///
/// The token is taken from `Authorization: Bearer <token>`, or from the
/// configured cookie when the header is absent. Tokens are hashed with
/// HMAC-SHA256 (keyed by `signing_secret`) before they reach the store.
///
/// A request without a token is denied, not failed.
#[derive(Clone)]
pub struct TokenAuthenticator {
    store: Arc<dyn TokenStore>,
    signing_secret: String,
    cookie_name: Option<String>,
}

impl TokenAuthenticator {
    /// # Arguments
    ///
    /// - `store` - token lookup
    /// - `signing_secret` - HMAC key; must match the value used when tokens were stored
    pub fn new(store: Arc<dyn TokenStore>, signing_secret: impl Into<String>) -> Self {
        Self {
            store,
            signing_secret: signing_secret.into(),
            cookie_name: None,
        }
    }

    /// Also accept the token from the cookie `name`.
    pub fn with_cookie(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = Some(name.into());
        self
    }

    /// Hashes a raw token with HMAC-SHA256 using the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        hash_token(&self.signing_secret, token)
    }

    fn token<'a>(&self, ctx: &'a Context) -> Option<&'a str> {
        ctx.bearer_token().or_else(|| {
            self.cookie_name
                .as_deref()
                .and_then(|name| ctx.cookie(name))
                .filter(|t| !t.is_empty())
        })
    }
}

/// Hashes `token` with HMAC-SHA256 keyed by `secret`, as lowercase hex.
pub fn hash_token(secret: &str, token: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

impl Authenticator for TokenAuthenticator {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        let Some(token) = self.token(ctx) else {
            tracing::debug!(path = ctx.path(), "no API token on request");
            return Ok(false);
        };

        let valid = self.store.validate_token(&self.hash_token(token))?;
        if !valid {
            tracing::debug!(path = ctx.path(), "invalid or revoked API token");
        }
        Ok(valid)
    }
}
