/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types returned by every client operation.

use thiserror::Error;

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// The client was configured with missing or inconsistent values
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required call argument was empty
    #[error("validation error: {0}")]
    Validation(String),

    /// Credentials are unusable for a login, or no user session is available
    #[error("auth error: {0}")]
    Auth(String),

    /// The request never produced a readable response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote API answered with a structured error body
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Error detail reported by the API
        message: String,
    },

    /// The response body could not be decoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns `true` for network-level failures
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }

    /// Returns `true` when the remote API rejected the call
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, AppError::Api { .. })
    }
}
