use yodlee_client::prelude::*;
use yodlee_client::utils::config::get_env_or_default;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting transactions example");

    // Cobrand credentials come from YODLEE_USERNAME / YODLEE_PASSWORD
    let client = Client::new(Config::new()).await?;
    info!("✓ Client configured at {}", client.base_url());

    let username = get_env_or_default("YODLEE_USER_LOGIN", String::new());
    let password = get_env_or_default("YODLEE_USER_PASSWORD", String::new());
    client.user_login(&username, &password).await?;
    let user = UserCredentials::new(&username, &password);

    let accounts = client.get_accounts(Some(&user)).await?;
    info!("Accounts: {}", serde_json::to_string_pretty(&accounts)?);

    let request = TransactionSearchRequest::new().with_result_range(1, 20);
    let transactions = client.get_transactions(&request, Some(&user)).await?;
    info!(
        "Transactions: {}",
        serde_json::to_string_pretty(&transactions)?
    );

    Ok(())
}
