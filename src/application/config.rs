/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_SESSION_TTL_MINUTES, DEFAULT_TIMEOUT_SECS, LIVE_BASE_URL, MAX_SESSION_TTL_MINUTES,
    SANDBOX_HOST,
};
use crate::error::AppError;
use crate::model::requests::is_blank;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_timestamp_millis};
use chrono::{DateTime, Utc};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Cobrand credentials used to sign every request
pub struct Credentials {
    /// Cobrand login name
    pub username: String,
    /// Cobrand password
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Explicit base URL. When set it wins over the sandbox/live selection.
    pub base_url: Option<String>,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Pre-fetched session tokens. Either all four fields are set or none.
pub struct TokenOverrides {
    /// Cobrand session token
    #[serde(skip_serializing, default)]
    pub cob_session_token: Option<String>,
    /// User session token
    #[serde(skip_serializing, default)]
    pub user_session_token: Option<String>,
    /// Expiry of the cobrand session token
    pub cob_session_expires: Option<DateTime<Utc>>,
    /// Expiry of the user session token
    pub user_session_expires: Option<DateTime<Utc>>,
}

impl TokenOverrides {
    /// Number of override fields that carry a value
    #[must_use]
    pub fn provided(&self) -> usize {
        [
            self.cob_session_token.is_some(),
            self.user_session_token.is_some(),
            self.cob_session_expires.is_some(),
            self.user_session_expires.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// `true` when no override field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provided() == 0
    }

    /// `true` when all four override fields are set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.provided() == 4
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Yodlee API client
pub struct Config {
    /// Cobrand credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Use the sandbox environment instead of live
    pub sandbox: bool,
    /// Minutes a freshly issued session token is trusted for
    pub session_ttl_minutes: i64,
    /// Optional pre-fetched tokens
    pub tokens: TokenOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment (and a `.env` file when present)
    ///
    /// # Returns
    ///
    /// A new `Config` instance. Missing credentials are logged but not rejected here;
    /// [`Config::validate`] is the gatekeeper.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("YODLEE_USERNAME", String::new());
        let password = get_env_or_default("YODLEE_PASSWORD", String::new());

        if is_blank(&username) {
            error!("YODLEE_USERNAME not found in environment variables or .env file");
        }
        if is_blank(&password) {
            error!("YODLEE_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_none("YODLEE_BASE_URL"),
                timeout: get_env_or_default("YODLEE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            sandbox: get_env_or_default("YODLEE_SANDBOX", false),
            session_ttl_minutes: get_env_or_default(
                "YODLEE_SESSION_TTL_MINUTES",
                DEFAULT_SESSION_TTL_MINUTES,
            ),
            tokens: TokenOverrides {
                cob_session_token: get_env_or_none("YODLEE_COB_SESSION_TOKEN"),
                user_session_token: get_env_or_none("YODLEE_USER_SESSION_TOKEN"),
                cob_session_expires: get_env_timestamp_millis("YODLEE_COB_SESSION_EXPIRES"),
                user_session_expires: get_env_timestamp_millis("YODLEE_USER_SESSION_EXPIRES"),
            },
        }
    }

    /// Creates a configuration from explicit cobrand credentials
    ///
    /// # Arguments
    /// * `username` - Cobrand login name
    /// * `password` - Cobrand password
    /// * `sandbox` - Whether to target the sandbox environment
    pub fn with_credentials(username: &str, password: &str, sandbox: bool) -> Self {
        Self {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig::default(),
            sandbox,
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            tokens: TokenOverrides::default(),
        }
    }

    /// Points the client at an explicit base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = Some(base_url.to_string());
        self
    }

    /// Supplies pre-fetched tokens
    #[must_use]
    pub fn with_tokens(mut self, tokens: TokenOverrides) -> Self {
        self.tokens = tokens;
        self
    }

    /// Checks the configuration before it is applied to a client
    ///
    /// # Returns
    /// * `Ok(())` - Credentials are present, token overrides are all-or-nothing
    ///   and the session ttl lies in `1..=MAX_SESSION_TTL_MINUTES`
    /// * `Err(AppError::Configuration)` - Otherwise
    pub fn validate(&self) -> Result<(), AppError> {
        if is_blank(&self.credentials.username) {
            return Err(AppError::Configuration(
                "invalid cobrand credentials: empty username".to_string(),
            ));
        }
        if is_blank(&self.credentials.password) {
            return Err(AppError::Configuration(
                "invalid cobrand credentials: empty password".to_string(),
            ));
        }
        if !self.tokens.is_empty() && !self.tokens.is_complete() {
            return Err(AppError::Configuration(format!(
                "token overrides must be supplied together: got {} of 4",
                self.tokens.provided()
            )));
        }
        if !(1..=MAX_SESSION_TTL_MINUTES).contains(&self.session_ttl_minutes) {
            return Err(AppError::Configuration(format!(
                "session ttl must be between 1 and {MAX_SESSION_TTL_MINUTES} minutes: {}",
                self.session_ttl_minutes
            )));
        }
        Ok(())
    }

    /// Returns the base URL for the selected environment, always ending in `/`
    pub fn resolved_base_url(&self) -> String {
        let url = match &self.rest_api.base_url {
            Some(url) => url.clone(),
            None if self.sandbox => format!(
                "https://{}/private-{}/v1.0/",
                SANDBOX_HOST, self.credentials.username
            ),
            None => LIVE_BASE_URL.to_string(),
        };
        if url.ends_with('/') {
            url
        } else {
            format!("{url}/")
        }
    }
}
