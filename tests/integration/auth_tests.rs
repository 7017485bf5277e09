use crate::common;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_cobrand_login() {
    let client = common::create_test_client().await;
    let tokens = client.tokens().await;

    assert!(tokens.cobrand.is_valid(), "Cobrand token should be present");
    info!("Cobrand login successful at {}", client.base_url());
}

#[tokio::test]
#[ignore]
async fn test_both_tokens() {
    let client = common::create_test_client().await;
    let credentials = common::user_credentials();

    let tokens = client
        .get_both_tokens(Some(&credentials))
        .await
        .expect("Failed to resolve tokens");

    assert!(!tokens.cobrand.is_empty());
    assert!(!tokens.user.is_empty());
}
