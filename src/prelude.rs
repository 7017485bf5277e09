/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Yodlee Client Prelude
//!
//! Brings the client, its configuration, the service traits and the models
//! into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use yodlee_client::prelude::*;
//!
//! let config = Config::with_credentials("cobrand", "secret", true);
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Yodlee API client
pub use crate::application::config::{Config, Credentials, RestApiConfig, TokenOverrides};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SESSION MANAGEMENT
// ============================================================================

/// Session client
pub use crate::application::client::Client;

/// Token cache types
pub use crate::application::auth::{SessionToken, SessionTokens, TokenCache, TokenKind};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by the client
pub use crate::application::services::{AccountService, SiteService, UserService};

// ============================================================================
// MODELS
// ============================================================================

/// Request parameter types
pub use crate::model::requests::{
    CredentialField, RegisterRequest, TransactionSearchRequest, UserCredentials,
};

/// Response types
pub use crate::model::responses::{ApiErrorBody, CobrandLoginResponse, UserLoginResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
