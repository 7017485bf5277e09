use crate::error::AppError;
use crate::model::requests::{CredentialField, UserCredentials};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the site (financial institution) service
///
/// The user-scoped calls take optional `user` credentials that renew an
/// expired or missing user session.
#[async_trait]
pub trait SiteService: Send + Sync {
    /// Gets the login form a user must fill in to link `site_id`
    async fn get_site_login_form(&self, site_id: &str) -> Result<Value, AppError>;

    /// Searches supported sites by free text
    async fn search_site(
        &self,
        search: &str,
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError>;

    /// Links a site account to the logged-in user
    ///
    /// # Arguments
    /// * `site_id` - Site to link
    /// * `fields` - Filled-in login form fields, at least one
    /// * `user` - Credentials for renewing the user session
    async fn add_site_account(
        &self,
        site_id: &str,
        fields: &[CredentialField],
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError>;

    /// Gets the refresh status of a linked site account
    async fn get_site_refresh_info(
        &self,
        site_account_id: &str,
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError>;
}
