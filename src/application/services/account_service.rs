use crate::application::client::Client;
use crate::application::interfaces::account::AccountService;
use crate::constants::{SITE_ACCOUNTS_PATH, TRANSACTION_SEARCH_PATH};
use crate::error::AppError;
use crate::model::requests::{TransactionSearchRequest, UserCredentials};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl AccountService for Client {
    async fn get_accounts(&self, user: Option<&UserCredentials>) -> Result<Value, AppError> {
        info!("Getting site accounts");

        let result = self
            .post_with_session(SITE_ACCOUNTS_PATH, Vec::new(), user)
            .await?;

        debug!(
            "Site accounts obtained: {} entries",
            result.as_array().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn get_transactions(
        &self,
        request: &TransactionSearchRequest,
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError> {
        info!("Searching transactions");
        debug!("Transaction search parameters: {:?}", request);

        let result = self
            .post_with_session(TRANSACTION_SEARCH_PATH, request.to_form(), user)
            .await?;

        debug!("Transaction search completed");
        Ok(result)
    }
}
