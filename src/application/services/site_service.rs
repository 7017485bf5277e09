use crate::application::client::Client;
use crate::application::interfaces::site::SiteService;
use crate::constants::{
    ADD_SITE_ACCOUNT_PATH, SITE_LOGIN_FORM_PATH, SITE_REFRESH_INFO_PATH, SITE_SEARCH_PATH,
};
use crate::error::AppError;
use crate::model::requests::{
    CredentialField, FormFields, UserCredentials, credential_fields_form, require,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl SiteService for Client {
    async fn get_site_login_form(&self, site_id: &str) -> Result<Value, AppError> {
        require("site id", site_id)?;
        info!("Getting login form for site {}", site_id);

        let form: FormFields = vec![("siteId".to_string(), site_id.to_string())];
        self.post_with_cobrand(SITE_LOGIN_FORM_PATH, form).await
    }

    async fn search_site(
        &self,
        search: &str,
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError> {
        require("site search string", search)?;
        info!("Searching sites: {}", search);

        let form: FormFields = vec![("siteSearchString".to_string(), search.to_string())];
        let result = self.post_with_session(SITE_SEARCH_PATH, form, user).await?;

        debug!(
            "Site search returned {} sites",
            result.as_array().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn add_site_account(
        &self,
        site_id: &str,
        fields: &[CredentialField],
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError> {
        require("site id", site_id)?;
        if fields.is_empty() {
            return Err(AppError::Validation("empty credential fields".to_string()));
        }
        info!("Linking site {} ({} credential fields)", site_id, fields.len());

        let mut form: FormFields = vec![("siteId".to_string(), site_id.to_string())];
        form.extend(credential_fields_form(fields));
        self.post_with_session(ADD_SITE_ACCOUNT_PATH, form, user).await
    }

    async fn get_site_refresh_info(
        &self,
        site_account_id: &str,
        user: Option<&UserCredentials>,
    ) -> Result<Value, AppError> {
        require("site account id", site_account_id)?;
        debug!("Getting refresh info for site account {}", site_account_id);

        let form: FormFields = vec![("memSiteAccId".to_string(), site_account_id.to_string())];
        self.post_with_session(SITE_REFRESH_INFO_PATH, form, user).await
    }
}
