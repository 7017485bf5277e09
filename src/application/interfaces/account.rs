use crate::error::AppError;
use crate::model::requests::{TransactionSearchRequest, UserCredentials};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account service
///
/// Both calls are user-scoped. The cached user session is used while valid;
/// when it is missing or expired the `user` credentials, if given, log the
/// user in again before the request is sent.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the site accounts linked by the logged-in user
    async fn get_accounts(&self, user: Option<&UserCredentials>) -> Result<Value, AppError>;

    /// Runs a transaction search for the logged-in user
    ///
    /// # Arguments
    /// * `request` - Search parameters; unset fields take the API defaults
    ///   (container `All`, results 1 to 5, currency `USD`)
    /// * `user` - Credentials for renewing the user session
    async fn get_transactions(
        &self,
        request: &TransactionSearchRequest,
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError>;
}
