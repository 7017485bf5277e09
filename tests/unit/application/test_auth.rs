use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tokio_test::{assert_err, assert_ok, block_on};
use yodlee_client::application::auth::{SessionToken, TokenCache, TokenKind, cached_or_login};
use yodlee_client::error::AppError;

#[test]
fn test_session_token_default_is_invalid() {
    let token = SessionToken::default();
    assert!(!token.is_valid());
    assert_eq!(token.valid_token(), None);
}

#[test]
fn test_session_token_issued_now_is_valid() {
    let token = assert_ok!(SessionToken::issued_now("T".to_string(), Duration::minutes(20)));
    assert_eq!(token.valid_token(), Some("T"));

    let expires_at = token.expires_at.expect("expiry should be set");
    let drift = (expires_at - (Utc::now() + Duration::minutes(20))).num_seconds().abs();
    assert!(drift <= 5, "expiry should be ~20 minutes from now, drift {drift}s");
}

#[test]
fn test_session_token_in_the_past_is_invalid() {
    let token = SessionToken::with_expiry("T".to_string(), Utc::now() - Duration::seconds(1));
    assert!(!token.is_valid());
}

#[test]
fn test_session_token_without_value_is_invalid() {
    let token = SessionToken {
        token: None,
        expires_at: Some(Utc::now() + Duration::hours(1)),
    };
    assert!(!token.is_valid());
}

#[test]
fn test_token_cache_slots_are_independent() {
    let mut cache = TokenCache::default();
    cache.store(
        TokenKind::User,
        SessionToken::issued_now("U".to_string(), Duration::minutes(20)).unwrap(),
    );

    assert_eq!(cache.slot(TokenKind::User).valid_token(), Some("U"));
    assert!(!cache.slot(TokenKind::Cobrand).is_valid());
    assert_eq!(TokenKind::Cobrand.to_string(), "cobrand");
}

#[tokio::test]
async fn test_cached_or_login_serves_valid_token() {
    let mut cache = TokenCache::default();
    cache.cobrand = SessionToken::issued_now("CACHED".to_string(), Duration::minutes(5)).unwrap();
    let cache = RwLock::new(cache);
    let calls = AtomicUsize::new(0);
    let counter = &calls;

    let token = cached_or_login(&cache, TokenKind::Cobrand, || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, AppError>("FRESH".to_string())
    })
    .await
    .unwrap();

    assert_eq!(token, "CACHED");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cached_or_login_refreshes_expired_token() {
    let mut cache = TokenCache::default();
    cache.user = SessionToken::with_expiry("OLD".to_string(), Utc::now() - Duration::minutes(1));
    let cache = RwLock::new(cache);
    let calls = AtomicUsize::new(0);
    let counter = &calls;

    let token = cached_or_login(&cache, TokenKind::User, || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, AppError>("FRESH".to_string())
    })
    .await
    .unwrap();

    assert_eq!(token, "FRESH");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cached_or_login_propagates_login_failure() {
    let cache = RwLock::new(TokenCache::default());

    let result = block_on(cached_or_login(&cache, TokenKind::Cobrand, || async {
        Err::<String, _>(AppError::Auth("rejected".to_string()))
    }));

    assert!(matches!(result, Err(AppError::Auth(_))));
    assert_eq!(*block_on(cache.read()), TokenCache::default());
}

#[test]
fn test_session_token_issued_with_overflowing_ttl_is_rejected() {
    let ttl = Duration::try_minutes(1_000_000_000_000).expect("representable delta");
    let result = SessionToken::issued_now("T".to_string(), ttl);
    let err = assert_err!(result);
    assert!(matches!(err, AppError::Configuration(_)));
}
