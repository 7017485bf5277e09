/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session client for the Yodlee REST API
//!
//! This module provides the client that handles:
//! - Cobrand configuration and environment selection
//! - Cobrand and user logins
//! - Cached session tokens with refresh on expiry
//! - Form-encoded POSTs carrying the session tokens
//!
//! # Example
//! ```ignore
//! use yodlee_client::prelude::*;
//!
//! let config = Config::with_credentials("cobrand", "secret", true);
//! let client = Client::new(config).await?;
//! client.user_login("user", "password").await?;
//! let accounts = client.get_accounts(None).await?;
//! ```

use crate::application::auth::{
    SessionToken, SessionTokens, TokenCache, TokenKind, cached_or_login,
};
use crate::application::config::{Config, RestApiConfig, TokenOverrides};
use crate::constants::{COBRAND_LOGIN_PATH, USER_AGENT, USER_LOGIN_PATH};
use crate::error::AppError;
use crate::model::http::post_form;
use crate::model::requests::{FormFields, UserCredentials, is_blank};
use crate::model::responses::{CobrandLoginResponse, UserLoginResponse};
use chrono::Duration;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session client for the Yodlee API
///
/// Holds the cobrand credentials, the environment base URL and the two
/// cached session tokens. Every call makes exactly one request attempt.
pub struct Client {
    config: Config,
    base_url: String,
    http_client: HttpClient,
    tokens: RwLock<TokenCache>,
}

fn build_http_client(rest_api: &RestApiConfig) -> Result<HttpClient, AppError> {
    let client = HttpClient::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(rest_api.timeout))
        .build()?;
    Ok(client)
}

/// Cache seeded from the overrides when all four are present, empty otherwise
fn seeded_cache(overrides: &TokenOverrides) -> TokenCache {
    let mut cache = TokenCache::default();
    if let (Some(cob), Some(cob_expires), Some(user), Some(user_expires)) = (
        &overrides.cob_session_token,
        overrides.cob_session_expires,
        &overrides.user_session_token,
        overrides.user_session_expires,
    ) {
        cache.cobrand = SessionToken::with_expiry(cob.clone(), cob_expires);
        cache.user = SessionToken::with_expiry(user.clone(), user_expires);
    }
    cache
}

impl Client {
    /// Creates a configured client and logs the cobrand in
    ///
    /// # Arguments
    /// * `config` - Cobrand credentials, environment and optional pre-fetched tokens
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use. No login is made when all four token overrides are supplied.
    /// * `Err(AppError)` - Invalid configuration or failed cobrand login
    pub async fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let client = Self {
            http_client: build_http_client(&config.rest_api)?,
            base_url: config.resolved_base_url(),
            tokens: RwLock::new(seeded_cache(&config.tokens)),
            config,
        };
        client.login_unless_seeded().await?;
        Ok(client)
    }

    /// Creates a client without validating the configuration or logging in
    ///
    /// The first token lookup performs the login.
    pub fn new_lazy(config: Config) -> Self {
        let http_client = build_http_client(&config.rest_api).unwrap_or_else(|e| {
            warn!("Falling back to a default HTTP client: {}", e);
            HttpClient::new()
        });

        Self {
            base_url: config.resolved_base_url(),
            config,
            http_client,
            tokens: RwLock::new(TokenCache::default()),
        }
    }

    /// Applies a new configuration
    ///
    /// Validation happens first; on failure the client is left as it was.
    /// Both token slots are reset. When all four token overrides are present
    /// they seed the cache, otherwise a cobrand login runs immediately and its
    /// failure is returned.
    pub async fn configure(&mut self, config: Config) -> Result<(), AppError> {
        config.validate()?;

        self.http_client = build_http_client(&config.rest_api)?;
        self.base_url = config.resolved_base_url();
        *self.tokens.get_mut() = seeded_cache(&config.tokens);
        self.config = config;

        self.login_unless_seeded().await
    }

    async fn login_unless_seeded(&self) -> Result<(), AppError> {
        info!(
            "Configured {} client at {}",
            if self.config.sandbox { "sandbox" } else { "live" },
            self.base_url
        );

        if self.config.tokens.is_complete() {
            debug!("Using pre-fetched session tokens, skipping cobrand login");
            return Ok(());
        }
        self.cobrand_login().await?;
        Ok(())
    }

    /// Gets the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of both token slots
    pub async fn tokens(&self) -> TokenCache {
        self.tokens.read().await.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn session_ttl(&self) -> Result<Duration, AppError> {
        let minutes = self.config.session_ttl_minutes;
        if minutes <= 0 {
            return Err(AppError::Configuration(format!(
                "session ttl must be positive: {minutes}"
            )));
        }
        Duration::try_minutes(minutes).ok_or_else(|| {
            AppError::Configuration(format!("session ttl out of range: {minutes} minutes"))
        })
    }

    async fn store_token(&self, kind: TokenKind, token: &str) -> Result<(), AppError> {
        let slot = SessionToken::issued_now(token.to_string(), self.session_ttl()?)?;
        let mut tokens = self.tokens.write().await;
        tokens.store(kind, slot);
        Ok(())
    }

    /// Logs the cobrand in and caches its session token
    ///
    /// # Returns
    /// * `Ok(Value)` - Raw login response
    /// * `Err(AppError::Auth)` - Cobrand username or password is unset
    /// * `Err(AppError)` - Transport or API failure; the cached token is left unchanged
    pub async fn cobrand_login(&self) -> Result<Value, AppError> {
        let (response, _) = self.login_cobrand().await?;
        Ok(response)
    }

    async fn login_cobrand(&self) -> Result<(Value, String), AppError> {
        let credentials = &self.config.credentials;
        if is_blank(&credentials.username) || is_blank(&credentials.password) {
            return Err(AppError::Auth(
                "cobrand username or password not set".to_string(),
            ));
        }

        debug!("Sending cobrand login request for {}", credentials.username);
        let form: FormFields = vec![
            ("cobrandLogin".to_string(), credentials.username.clone()),
            ("cobrandPassword".to_string(), credentials.password.clone()),
        ];
        let response = post_form(&self.http_client, &self.url(COBRAND_LOGIN_PATH), &form).await?;

        let token = CobrandLoginResponse::session_token(&response)?;
        debug!("Cobrand session token received (length {})", token.len());
        self.store_token(TokenKind::Cobrand, &token).await?;

        info!("✓ Cobrand login successful");
        Ok((response, token))
    }

    /// Logs an end user in and caches the user session token
    ///
    /// # Arguments
    /// * `username` - User login name
    /// * `password` - User password
    ///
    /// # Returns
    /// * `Ok(Value)` - Raw login response
    /// * `Err(AppError::Validation)` - An argument is empty
    /// * `Err(AppError)` - Cobrand token, transport or API failure
    pub async fn user_login(&self, username: &str, password: &str) -> Result<Value, AppError> {
        let credentials = UserCredentials::new(username, password);
        credentials.validate()?;
        let (response, _) = self.login_user(&credentials).await?;
        Ok(response)
    }

    async fn login_user(&self, credentials: &UserCredentials) -> Result<(Value, String), AppError> {
        let cob_token = self.get_cobrand_token().await?;

        debug!("Sending user login request for {}", credentials.username);
        let form: FormFields = vec![
            ("login".to_string(), credentials.username.clone()),
            ("password".to_string(), credentials.password.clone()),
            ("cobSessionToken".to_string(), cob_token),
        ];
        let response = post_form(&self.http_client, &self.url(USER_LOGIN_PATH), &form).await?;

        let token = UserLoginResponse::session_token(&response)?;
        debug!("User session token received (length {})", token.len());
        self.store_token(TokenKind::User, &token).await?;

        info!("✓ User login successful: {}", credentials.username);
        Ok((response, token))
    }

    async fn fresh_cobrand_token(&self) -> Result<String, AppError> {
        let (_, token) = self.login_cobrand().await?;
        Ok(token)
    }

    async fn fresh_user_token(
        &self,
        credentials: Option<&UserCredentials>,
    ) -> Result<String, AppError> {
        let Some(credentials) = credentials else {
            return Err(AppError::Auth(
                "no valid user session and no user credentials supplied".to_string(),
            ));
        };
        credentials.validate()?;
        let (_, token) = self.login_user(credentials).await?;
        Ok(token)
    }

    /// Returns the cobrand token, logging in again when it is missing or expired
    pub async fn get_cobrand_token(&self) -> Result<String, AppError> {
        cached_or_login(&self.tokens, TokenKind::Cobrand, || self.fresh_cobrand_token()).await
    }

    /// Returns the user token, logging in again when it is missing or expired
    ///
    /// # Arguments
    /// * `credentials` - Used for a fresh login; without them an unusable
    ///   cached token is an [`AppError::Auth`]
    pub async fn get_user_token(
        &self,
        credentials: Option<&UserCredentials>,
    ) -> Result<String, AppError> {
        cached_or_login(&self.tokens, TokenKind::User, || {
            self.fresh_user_token(credentials)
        })
        .await
    }

    /// Resolves the cobrand and user tokens concurrently
    pub async fn get_both_tokens(
        &self,
        credentials: Option<&UserCredentials>,
    ) -> Result<SessionTokens, AppError> {
        let (cobrand, user) =
            tokio::try_join!(self.get_cobrand_token(), self.get_user_token(credentials))?;
        Ok(SessionTokens { cobrand, user })
    }

    /// POSTs `form` with the cobrand token attached
    pub(crate) async fn post_with_cobrand(
        &self,
        path: &str,
        form: FormFields,
    ) -> Result<Value, AppError> {
        let cob_token = self.get_cobrand_token().await?;
        let mut fields: FormFields = vec![("cobSessionToken".to_string(), cob_token)];
        fields.extend(form);
        post_form(&self.http_client, &self.url(path), &fields).await
    }

    /// POSTs `form` with both the cobrand and the user token attached
    ///
    /// `credentials` let an expired or missing user session be renewed.
    pub(crate) async fn post_with_session(
        &self,
        path: &str,
        form: FormFields,
        credentials: Option<&UserCredentials>,
    ) -> Result<Value, AppError> {
        let tokens = self.get_both_tokens(credentials).await?;
        let mut fields: FormFields = vec![
            ("cobSessionToken".to_string(), tokens.cobrand),
            ("userSessionToken".to_string(), tokens.user),
        ];
        fields.extend(form);
        post_form(&self.http_client, &self.url(path), &fields).await
    }

    /// Stores the user token carried by a registration response
    pub(crate) async fn adopt_user_session(&self, response: &Value) {
        match UserLoginResponse::session_token(response) {
            Ok(token) => {
                if let Err(e) = self.store_token(TokenKind::User, &token).await {
                    warn!("Could not cache the registered user session: {}", e);
                }
            }
            Err(e) => debug!("Response carries no user session: {}", e),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new_lazy(Config::default())
    }
}
