/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_CONTAINER_TYPE, DEFAULT_CURRENCY_CODE, DEFAULT_END_NUMBER,
    DEFAULT_HIGHER_FETCH_LIMIT, DEFAULT_LOWER_FETCH_LIMIT, DEFAULT_START_NUMBER,
    PASSWORD_CREDENTIALS_TYPE,
};
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Form body sent to the API: ordered `(field, value)` pairs
pub type FormFields = Vec<(String, String)>;

/// `true` for empty or whitespace-only values
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns a validation error naming `field` when `value` is blank
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if is_blank(value) {
        return Err(AppError::Validation(format!("empty {field}")));
    }
    Ok(())
}

/// End-user login credentials
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct UserCredentials {
    /// User login name
    pub username: String,
    /// User password
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl UserCredentials {
    /// Creates a new set of user credentials
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Fails with a validation error if either field is empty
    pub fn validate(&self) -> Result<(), AppError> {
        require("user username", &self.username)?;
        require("user password", &self.password)
    }
}

/// Parameters for a transaction search. Unset fields fall back to the API defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionSearchRequest {
    /// Container type filter (default: All)
    pub container_type: Option<String>,
    /// Higher fetch limit (default: 500)
    pub higher_fetch_limit: Option<u32>,
    /// Lower fetch limit (default: 1)
    pub lower_fetch_limit: Option<u32>,
    /// Last result to return (default: 5)
    pub end_number: Option<u32>,
    /// First result to return (default: 1)
    pub start_number: Option<u32>,
    /// Currency filter (default: USD)
    pub currency_code: Option<String>,
    /// Whether the API should ignore user input (default: true)
    pub ignore_user_input: Option<bool>,
}

impl TransactionSearchRequest {
    /// Creates a request where every field takes its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container type
    pub fn with_container_type(mut self, container_type: &str) -> Self {
        self.container_type = Some(container_type.to_string());
        self
    }

    /// Set the fetch limits
    pub fn with_fetch_limits(mut self, lower: u32, higher: u32) -> Self {
        self.lower_fetch_limit = Some(lower);
        self.higher_fetch_limit = Some(higher);
        self
    }

    /// Set the result range
    pub fn with_result_range(mut self, start: u32, end: u32) -> Self {
        self.start_number = Some(start);
        self.end_number = Some(end);
        self
    }

    /// Set the currency code
    pub fn with_currency_code(mut self, currency_code: &str) -> Self {
        self.currency_code = Some(currency_code.to_string());
        self
    }

    /// Set the ignore-user-input flag
    pub fn with_ignore_user_input(mut self, ignore: bool) -> Self {
        self.ignore_user_input = Some(ignore);
        self
    }

    /// Builds the form fields, applying defaults to unset values
    pub fn to_form(&self) -> FormFields {
        let prefix = "transactionSearchRequest";
        vec![
            (
                format!("{prefix}.containerType"),
                self.container_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONTAINER_TYPE.to_string()),
            ),
            (
                format!("{prefix}.higherFetchLimit"),
                self.higher_fetch_limit
                    .unwrap_or(DEFAULT_HIGHER_FETCH_LIMIT)
                    .to_string(),
            ),
            (
                format!("{prefix}.lowerFetchLimit"),
                self.lower_fetch_limit
                    .unwrap_or(DEFAULT_LOWER_FETCH_LIMIT)
                    .to_string(),
            ),
            (
                format!("{prefix}.resultRange.endNumber"),
                self.end_number.unwrap_or(DEFAULT_END_NUMBER).to_string(),
            ),
            (
                format!("{prefix}.resultRange.startNumber"),
                self.start_number.unwrap_or(DEFAULT_START_NUMBER).to_string(),
            ),
            (
                format!("{prefix}.searchFilter.currencyCode"),
                self.currency_code
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string()),
            ),
            (
                format!("{prefix}.ignoreUserInput"),
                self.ignore_user_input.unwrap_or(true).to_string(),
            ),
        ]
    }
}

/// Parameters for registering a new end user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    /// Login name of the new user
    pub login_name: String,
    /// Password of the new user
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Email address of the new user
    pub email: String,
}

impl RegisterRequest {
    /// Creates a new registration request
    pub fn new(login_name: &str, password: &str, email: &str) -> Self {
        Self {
            login_name: login_name.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        }
    }

    /// Fails with a validation error if any field is empty
    pub fn validate(&self) -> Result<(), AppError> {
        require("login name", &self.login_name)?;
        require("password", &self.password)?;
        require("email", &self.email)
    }

    /// Builds the form fields
    pub fn to_form(&self) -> FormFields {
        vec![
            (
                "userCredentials.loginName".to_string(),
                self.login_name.clone(),
            ),
            ("userCredentials.password".to_string(), self.password.clone()),
            (
                "userCredentials.objectInstanceType".to_string(),
                PASSWORD_CREDENTIALS_TYPE.to_string(),
            ),
            ("userProfile.emailAddress".to_string(), self.email.clone()),
        ]
    }
}

/// One filled-in field of a site login form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CredentialField {
    /// Field name as reported by the site login form
    pub name: String,
    /// Display name of the field
    pub display_name: String,
    /// Field type, e.g. `TEXT` or `PASSWORD`
    pub field_type: String,
    /// Value entered by the user
    pub value: String,
    /// Value identifier reported by the site login form
    pub value_identifier: String,
    /// Whether the field may be left blank
    pub is_optional: bool,
}

impl CredentialField {
    /// Creates a mandatory field
    pub fn new(name: &str, field_type: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: name.to_string(),
            field_type: field_type.to_string(),
            value: value.to_string(),
            value_identifier: name.to_string(),
            is_optional: false,
        }
    }
}

/// Encodes login form fields the way `addSiteAccount1` expects them
pub fn credential_fields_form(fields: &[CredentialField]) -> FormFields {
    let mut form: FormFields = vec![(
        "credentialFields.enclosedType".to_string(),
        "com.yodlee.common.FieldInfoSingle".to_string(),
    )];
    for (i, field) in fields.iter().enumerate() {
        let key = |suffix: &str| format!("credentialFields[{i}].{suffix}");
        form.push((key("name"), field.name.clone()));
        form.push((key("displayName"), field.display_name.clone()));
        form.push((key("fieldType.typeName"), field.field_type.clone()));
        form.push((key("value"), field.value.clone()));
        form.push((key("valueIdentifier"), field.value_identifier.clone()));
        form.push((key("isOptional"), field.is_optional.to_string()));
        form.push((key("isEditable"), "true".to_string()));
        form.push((key("valueMask"), "LOGIN_FIELD".to_string()));
    }
    form
}
