//! # Yodlee Client
//!
//! A session-caching client for the Yodlee financial data REST API.
//!
//! The client signs every request with a cobrand session token and, for
//! user-scoped calls, a user session token. Both tokens are cached with a
//! locally computed expiry and re-issued by logging in again once they lapse.
//!
//! ## Features
//!
//! - Sandbox and live environments
//! - Cobrand and user login with cached session tokens
//! - Pre-fetched tokens to skip the initial login
//! - Accounts, transaction search, site search, site login forms,
//!   site account linking and user registration
//! - Typed errors decoded once at the response boundary
//!
//! ## Example
//!
//! ```ignore
//! use yodlee_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!     let user = UserCredentials::new("user", "password");
//!     let transactions = client
//!         .get_transactions(
//!             &TransactionSearchRequest::new().with_result_range(1, 50),
//!             Some(&user),
//!         )
//!         .await?;
//!     info!("{}", transactions);
//!     Ok(())
//! }
//! ```

/// Client, configuration, token cache and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models and the form POST transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
