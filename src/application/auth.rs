/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session token cache
//!
//! The client keeps two independent session tokens:
//! - the cobrand token, identifying the API partner account
//! - the user token, identifying the logged-in end user
//!
//! Each slot carries a locally computed expiry. A token is served from the
//! cache while it is set and unexpired; otherwise the matching login runs.

use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::future::Future;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Which of the two session slots a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Cobrand (partner) session
    Cobrand,
    /// End-user session
    User,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Cobrand => write!(f, "cobrand"),
            TokenKind::User => write!(f, "user"),
        }
    }
}

/// A cached session token and its expiry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionToken {
    /// Token value, if a login has succeeded
    pub token: Option<String>,
    /// Instant after which the token is no longer trusted
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Creates a token that expires `ttl` from now
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - `ttl` pushes the expiry past the representable range
    pub fn issued_now(token: String, ttl: Duration) -> Result<Self, AppError> {
        let expires_at = Utc::now().checked_add_signed(ttl).ok_or_else(|| {
            AppError::Configuration(format!(
                "session ttl out of range: {} minutes",
                ttl.num_minutes()
            ))
        })?;
        Ok(Self {
            token: Some(token),
            expires_at: Some(expires_at),
        })
    }

    /// Creates a token with an explicit expiry
    pub fn with_expiry(token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: Some(token),
            expires_at: Some(expires_at),
        }
    }

    /// A token is valid iff it is set and its expiry lies in the future
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid_token().is_some()
    }

    /// Returns the token when it is valid
    pub fn valid_token(&self) -> Option<&str> {
        match (&self.token, self.expires_at) {
            (Some(token), Some(expires_at)) if expires_at > Utc::now() => Some(token.as_str()),
            _ => None,
        }
    }
}

/// Both session slots held by a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCache {
    /// Cobrand session slot
    pub cobrand: SessionToken,
    /// User session slot
    pub user: SessionToken,
}

impl TokenCache {
    /// Returns the slot for `kind`
    pub fn slot(&self, kind: TokenKind) -> &SessionToken {
        match kind {
            TokenKind::Cobrand => &self.cobrand,
            TokenKind::User => &self.user,
        }
    }

    /// Overwrites the slot for `kind`
    pub fn store(&mut self, kind: TokenKind, token: SessionToken) {
        match kind {
            TokenKind::Cobrand => self.cobrand = token,
            TokenKind::User => self.user = token,
        }
    }
}

/// Cobrand and user tokens resolved together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Cobrand session token
    pub cobrand: String,
    /// User session token
    pub user: String,
}

/// Serves the token in slot `kind` if it is still valid, otherwise awaits `login`
///
/// `login` is expected to store the fresh token in the cache itself and
/// return it. Its failure is propagated and leaves the slot untouched.
///
/// # Arguments
/// * `cache` - The shared token cache
/// * `kind` - Which slot to read
/// * `login` - Produces a fresh token when the cached one is unusable
pub async fn cached_or_login<F, Fut>(
    cache: &RwLock<TokenCache>,
    kind: TokenKind,
    login: F,
) -> Result<String, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, AppError>>,
{
    {
        let tokens = cache.read().await;
        let slot = tokens.slot(kind);
        if let Some(token) = slot.valid_token() {
            debug!("Using cached {} token", kind);
            return Ok(token.to_string());
        }
        if slot.token.is_some() {
            warn!("{} token expired, logging in again", kind);
        } else {
            debug!("No {} token cached, logging in", kind);
        }
    }
    login().await
}
