use yodlee_client::error::AppError;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("empty username".to_string());
    assert_eq!(error.to_string(), "configuration error: empty username");
}

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation("empty site id".to_string());
    assert_eq!(error.to_string(), "validation error: empty site id");
}

#[test]
fn test_app_error_display_auth() {
    let error = AppError::Auth("no user session".to_string());
    assert_eq!(error.to_string(), "auth error: no user session");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: 200,
        message: "Invalid Cobrand Credentials".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "api error (status 200): Invalid Cobrand Credentials"
    );
    assert!(error.is_api());
    assert!(!error.is_transport());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

// reqwest::Error cannot be constructed directly; the Transport conversion is
// covered by the client tests against an unreachable address
