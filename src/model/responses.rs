/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session token carrier shared by the login responses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConversationCredentials {
    /// Issued session token
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Response of `authenticate/coblogin`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CobrandLoginResponse {
    /// Cobrand session credentials
    #[serde(rename = "cobrandConversationCredentials")]
    pub cobrand_conversation_credentials: ConversationCredentials,
}

/// User context returned by user login and registration
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserContext {
    /// User session credentials
    #[serde(rename = "conversationCredentials")]
    pub conversation_credentials: ConversationCredentials,
}

/// Response of `authenticate/login` and `register3`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLoginResponse {
    /// Context of the authenticated user
    #[serde(rename = "userContext")]
    pub user_context: UserContext,
}

impl CobrandLoginResponse {
    /// Extracts the cobrand session token from a raw response body
    pub fn session_token(raw: &Value) -> Result<String, serde_json::Error> {
        let parsed = Self::deserialize(raw)?;
        Ok(parsed.cobrand_conversation_credentials.session_token)
    }
}

impl UserLoginResponse {
    /// Extracts the user session token from a raw response body
    pub fn session_token(raw: &Value) -> Result<String, serde_json::Error> {
        let parsed = Self::deserialize(raw)?;
        Ok(parsed.user_context.conversation_credentials.session_token)
    }
}

/// Both error envelopes the API may return.
///
/// Fields are kept untyped so that any JSON object decodes; the shape is
/// interpreted by [`ApiErrorBody::error_message`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    /// Array form: `{"Error":[{"errorDetail":"..."}]}`
    #[serde(rename = "Error")]
    pub error: Option<Value>,
    /// Flag form: `{"errorOccurred":true,"message":"..."}`
    #[serde(rename = "errorOccurred")]
    pub error_occurred: Option<Value>,
    /// Message accompanying the flag form
    pub message: Option<Value>,
    /// Exception type accompanying the flag form
    #[serde(rename = "exceptionType")]
    pub exception_type: Option<Value>,
}

fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

/// `null`, `false`, `0` and `""` carry no error
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl ApiErrorBody {
    /// Returns the reported error message, or `None` when the body is not an error
    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            None => {}
            Some(value) if is_falsy(value) => {}
            Some(Value::Array(entries)) => {
                let first = entries.first();
                let detail = as_text(first.and_then(|e| e.get("errorDetail")))
                    .or_else(|| as_text(first.and_then(|e| e.get("errorMessage"))))
                    .unwrap_or_else(|| "unspecified API error".to_string());
                return Some(detail);
            }
            Some(other) => {
                let detail =
                    as_text(Some(other)).unwrap_or_else(|| "unspecified API error".to_string());
                return Some(detail);
            }
        }
        let occurred = match &self.error_occurred {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        };
        if occurred {
            let message = as_text(self.message.as_ref())
                .or_else(|| as_text(self.exception_type.as_ref()))
                .unwrap_or_else(|| "unspecified API error".to_string());
            return Some(message);
        }
        None
    }
}
