use crate::error::AppError;
use crate::model::requests::RegisterRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for end-user management
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new end user under the configured cobrand
    ///
    /// A successful registration also opens a user session, which is cached.
    async fn register(&self, request: &RegisterRequest) -> Result<Value, AppError>;
}
