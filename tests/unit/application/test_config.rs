use crate::common::{mock_cobrand_login, mock_config};
use chrono::{Duration, Utc};
use mockito::Server;
use yodlee_client::application::client::Client;
use yodlee_client::application::config::{Config, TokenOverrides};
use yodlee_client::constants::{LIVE_BASE_URL, MAX_SESSION_TTL_MINUTES, SANDBOX_HOST};
use yodlee_client::error::AppError;

fn partial_overrides(count: usize) -> TokenOverrides {
    let expires = Some(Utc::now() + Duration::minutes(10));
    let mut tokens = TokenOverrides::default();
    if count > 0 {
        tokens.cob_session_token = Some("COB".to_string());
    }
    if count > 1 {
        tokens.user_session_token = Some("USER".to_string());
    }
    if count > 2 {
        tokens.cob_session_expires = expires;
    }
    if count > 3 {
        tokens.user_session_expires = expires;
    }
    tokens
}

#[test]
fn test_validate_rejects_missing_username() {
    let config = Config::with_credentials("", "p", false);
    assert!(matches!(config.validate(), Err(AppError::Configuration(msg)) if msg.contains("username")));
}

#[test]
fn test_validate_rejects_missing_password() {
    let config = Config::with_credentials("u", "", true);
    assert!(matches!(config.validate(), Err(AppError::Configuration(msg)) if msg.contains("password")));
}

#[test]
fn test_validate_rejects_partial_token_overrides() {
    for count in 1..=3 {
        let config = Config::with_credentials("u", "p", true).with_tokens(partial_overrides(count));
        assert!(
            matches!(config.validate(), Err(AppError::Configuration(_))),
            "{count} of 4 overrides should be rejected"
        );
    }
}

#[test]
fn test_validate_accepts_complete_or_absent_overrides() {
    let none = Config::with_credentials("u", "p", true);
    assert!(none.validate().is_ok());
    assert!(none.tokens.is_empty());

    let all = Config::with_credentials("u", "p", true).with_tokens(partial_overrides(4));
    assert!(all.tokens.is_complete());
    assert!(all.validate().is_ok());
}

#[test]
fn test_validate_rejects_non_positive_ttl() {
    let mut config = Config::with_credentials("u", "p", true);
    config.session_ttl_minutes = 0;
    assert!(matches!(config.validate(), Err(AppError::Configuration(_))));
}

#[test]
fn test_validate_rejects_ttl_above_maximum() {
    let mut config = Config::with_credentials("u", "p", true);
    config.session_ttl_minutes = MAX_SESSION_TTL_MINUTES;
    assert!(config.validate().is_ok());

    for ttl in [MAX_SESSION_TTL_MINUTES + 1, 1_000_000_000_000, i64::MAX] {
        config.session_ttl_minutes = ttl;
        assert!(
            matches!(config.validate(), Err(AppError::Configuration(msg)) if msg.contains("ttl")),
            "ttl {ttl} should be rejected"
        );
    }
}

#[test]
fn test_validate_rejects_blank_credentials() {
    let config = Config::with_credentials("  ", "p", true);
    assert!(matches!(config.validate(), Err(AppError::Configuration(msg)) if msg.contains("username")));

    let config = Config::with_credentials("u", "\t", true);
    assert!(matches!(config.validate(), Err(AppError::Configuration(msg)) if msg.contains("password")));
}

#[tokio::test]
async fn test_oversized_ttl_is_rejected_before_login() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/authenticate/coblogin")
        .expect(0)
        .create_async()
        .await;
    let mut config = mock_config(&server);
    config.session_ttl_minutes = 1_000_000_000_000;

    let result = Client::new(config).await;

    assert!(matches!(result, Err(AppError::Configuration(_))));
    login.assert_async().await;
}

#[tokio::test]
async fn test_lazy_client_with_oversized_ttl_fails_without_panicking() {
    let mut server = Server::new_async().await;
    let _login = mock_cobrand_login(&mut server, "T").await;

    for ttl in [1_000_000_000_000, i64::MAX, 0] {
        let mut config = mock_config(&server);
        config.session_ttl_minutes = ttl;
        let client = Client::new_lazy(config);

        let result = client.get_cobrand_token().await;

        assert!(
            matches!(result, Err(AppError::Configuration(_))),
            "ttl {ttl} should be a configuration error, got {result:?}"
        );
        assert!(!client.tokens().await.cobrand.is_valid());
    }
}

#[test]
fn test_sandbox_base_url_embeds_username() {
    let config = Config::with_credentials("u", "p", true);
    assert_eq!(
        config.resolved_base_url(),
        format!("https://{SANDBOX_HOST}/private-u/v1.0/")
    );
}

#[test]
fn test_live_base_url() {
    let config = Config::with_credentials("u", "p", false);
    assert_eq!(config.resolved_base_url(), LIVE_BASE_URL);
}

#[test]
fn test_base_url_override_gets_trailing_slash() {
    let config = Config::with_credentials("u", "p", true).with_base_url("http://localhost:8080/api");
    assert_eq!(config.resolved_base_url(), "http://localhost:8080/api/");
}

#[test]
fn test_debug_output_hides_secrets() {
    let config = Config::with_credentials("u", "cobrand-secret", true)
        .with_tokens(TokenOverrides {
            cob_session_token: Some("cob-token-value".to_string()),
            user_session_token: Some("user-token-value".to_string()),
            cob_session_expires: Some(Utc::now()),
            user_session_expires: Some(Utc::now()),
        });
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("cobrand-secret"));
    assert!(!rendered.contains("cob-token-value"));
    assert!(!rendered.contains("user-token-value"));
}
