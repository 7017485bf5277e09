/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::responses::ApiErrorBody;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

/// Sends a form-encoded POST and decodes the JSON answer
///
/// Exactly one attempt is made. Any failure to send the request or to read the
/// body is reported as [`AppError::Transport`]; the body is then classified by
/// [`decode_body`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request
/// * `form` - Ordered `(field, value)` pairs, url-encoded into the body
///
/// # Returns
///
/// * `Ok(Value)` - Parsed JSON body of a successful call
/// * `Err(AppError)` - Transport, API or decoding failure
pub async fn post_form(
    client: &Client,
    url: &str,
    form: &[(String, String)],
) -> Result<Value, AppError> {
    debug!("POST {} ({} fields)", url, form.len());

    let response = client.post(url).form(form).send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;
    decode_body(status, &body)
}

/// Classifies a response body as success or API error
///
/// Both error envelopes are checked: an `Error` array and an `errorOccurred`
/// flag. A non-success status without an envelope is still an API error.
pub fn decode_body(status: StatusCode, body: &str) -> Result<Value, AppError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if !status.is_success() => {
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Api {
                status: status.as_u16(),
                message: format!("non-JSON error response: {e}"),
            });
        }
        Err(e) => return Err(AppError::Json(e)),
    };

    if value.is_object() {
        let envelope: ApiErrorBody = serde_json::from_value(value.clone())?;
        if let Some(message) = envelope.error_message() {
            error!("API error with status {}: {}", status, message);
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }
    }

    if !status.is_success() {
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Api {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        });
    }

    Ok(value)
}
