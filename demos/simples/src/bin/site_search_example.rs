use yodlee_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let search = std::env::args().nth(1).unwrap_or_else(|| "bank".to_string());
    let client = Client::new(Config::new()).await?;

    let credentials = UserCredentials::new(
        &std::env::var("YODLEE_USER_LOGIN").unwrap_or_default(),
        &std::env::var("YODLEE_USER_PASSWORD").unwrap_or_default(),
    );
    let tokens = client.get_both_tokens(Some(&credentials)).await?;
    info!(
        "Session ready (cobrand token {} chars, user token {} chars)",
        tokens.cobrand.len(),
        tokens.user.len()
    );

    let sites = client.search_site(&search, Some(&credentials)).await?;
    info!("Sites matching {search}: {sites:#}");

    Ok(())
}
