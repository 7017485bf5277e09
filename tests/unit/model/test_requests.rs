use std::collections::HashMap;
use yodlee_client::error::AppError;
use yodlee_client::model::requests::{
    CredentialField, RegisterRequest, TransactionSearchRequest, UserCredentials,
    credential_fields_form,
};

fn as_map(form: Vec<(String, String)>) -> HashMap<String, String> {
    form.into_iter().collect()
}

#[test]
fn test_transaction_search_defaults() {
    let form = as_map(TransactionSearchRequest::new().to_form());

    assert_eq!(form["transactionSearchRequest.containerType"], "All");
    assert_eq!(form["transactionSearchRequest.higherFetchLimit"], "500");
    assert_eq!(form["transactionSearchRequest.lowerFetchLimit"], "1");
    assert_eq!(form["transactionSearchRequest.resultRange.endNumber"], "5");
    assert_eq!(form["transactionSearchRequest.resultRange.startNumber"], "1");
    assert_eq!(form["transactionSearchRequest.searchFilter.currencyCode"], "USD");
    assert_eq!(form["transactionSearchRequest.ignoreUserInput"], "true");
}

#[test]
fn test_transaction_search_overrides() {
    let request = TransactionSearchRequest::new()
        .with_container_type("bank")
        .with_fetch_limits(10, 100)
        .with_result_range(11, 60)
        .with_currency_code("GBP")
        .with_ignore_user_input(false);
    let form = as_map(request.to_form());

    assert_eq!(form["transactionSearchRequest.containerType"], "bank");
    assert_eq!(form["transactionSearchRequest.higherFetchLimit"], "100");
    assert_eq!(form["transactionSearchRequest.lowerFetchLimit"], "10");
    assert_eq!(form["transactionSearchRequest.resultRange.endNumber"], "60");
    assert_eq!(form["transactionSearchRequest.resultRange.startNumber"], "11");
    assert_eq!(form["transactionSearchRequest.searchFilter.currencyCode"], "GBP");
    assert_eq!(form["transactionSearchRequest.ignoreUserInput"], "false");
}

#[test]
fn test_user_credentials_validation() {
    assert!(UserCredentials::new("member", "secret").validate().is_ok());
    assert!(matches!(
        UserCredentials::new("", "secret").validate(),
        Err(AppError::Validation(msg)) if msg.contains("username")
    ));
    assert!(matches!(
        UserCredentials::new("member", " ").validate(),
        Err(AppError::Validation(msg)) if msg.contains("password")
    ));
}

#[test]
fn test_register_request_validation() {
    assert!(RegisterRequest::new("member", "secret", "m@example.com").validate().is_ok());
    assert!(matches!(
        RegisterRequest::new("member", "secret", "").validate(),
        Err(AppError::Validation(msg)) if msg.contains("email")
    ));
}

#[test]
fn test_register_request_form() {
    let form = as_map(RegisterRequest::new("member", "secret", "m@example.com").to_form());
    assert_eq!(form["userCredentials.loginName"], "member");
    assert_eq!(form["userCredentials.password"], "secret");
    assert_eq!(
        form["userCredentials.objectInstanceType"],
        "com.yodlee.ext.login.PasswordCredentials"
    );
    assert_eq!(form["userProfile.emailAddress"], "m@example.com");
}

#[test]
fn test_register_request_debug_hides_password() {
    let request = RegisterRequest::new("member", "very-secret", "m@example.com");
    assert!(!format!("{request:?}").contains("very-secret"));
}

#[test]
fn test_credential_fields_form_indexes_fields() {
    let fields = vec![
        CredentialField::new("LOGIN", "TEXT", "member"),
        CredentialField::new("PASSWORD", "PASSWORD", "secret"),
    ];
    let form = as_map(credential_fields_form(&fields));

    assert_eq!(
        form["credentialFields.enclosedType"],
        "com.yodlee.common.FieldInfoSingle"
    );
    assert_eq!(form["credentialFields[0].name"], "LOGIN");
    assert_eq!(form["credentialFields[0].value"], "member");
    assert_eq!(form["credentialFields[1].fieldType.typeName"], "PASSWORD");
    assert_eq!(form["credentialFields[1].value"], "secret");
    assert_eq!(form["credentialFields[1].isOptional"], "false");
}
