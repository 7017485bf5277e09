use crate::application::client::Client;
use crate::application::interfaces::user::UserService;
use crate::constants::REGISTER_PATH;
use crate::error::AppError;
use crate::model::requests::RegisterRequest;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl UserService for Client {
    async fn register(&self, request: &RegisterRequest) -> Result<Value, AppError> {
        request.validate()?;
        info!("Registering user {}", request.login_name);

        let result = self
            .post_with_cobrand(REGISTER_PATH, request.to_form())
            .await?;
        self.adopt_user_session(&result).await;

        info!("✓ User registered: {}", request.login_name);
        Ok(result)
    }
}
