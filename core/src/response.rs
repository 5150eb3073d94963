//! Turns transport responses into payloads or `ApiError`s.
//!
//! # Design
//! Successful bodies are usually wrapped as `{success, data, timestamp}`.
//! `RawBody::classify` makes the one shape check explicit: an object that
//! has a `data` key is an envelope, anything else is passed through as-is.
//! Normalization is permissive; nothing is validated beyond that check.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Prefix of every non-2xx error message.
pub const FAILURE_PREFIX: &str = "API request failed: ";

/// A successful response body, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    /// The value found under the envelope's `data` key.
    Enveloped(Value),
    /// A body that does not follow the envelope shape.
    Raw(Value),
}

impl RawBody {
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(mut map) if map.contains_key("data") => {
                RawBody::Enveloped(map.remove("data").unwrap_or(Value::Null))
            }
            other => RawBody::Raw(other),
        }
    }

    pub fn into_payload(self) -> Value {
        match self {
            RawBody::Enveloped(value) | RawBody::Raw(value) => value,
        }
    }
}

/// Best-effort body parse: JSON when possible, otherwise the text itself.
pub fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn failure(response: &HttpResponse) -> ApiError {
    let details = match parse_body(&response.body) {
        Value::Null => None,
        value => Some(value),
    };
    ApiError::Api {
        message: format!("{FAILURE_PREFIX}{}", response.status_text),
        status: response.status,
        details,
    }
}

/// Unwrap a response to its payload.
///
/// # Errors
///
/// Returns `ApiError::Api` when the response status is not 2xx.
pub fn normalize(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(failure(&response));
    }
    Ok(RawBody::classify(parse_body(&response.body)).into_payload())
}

/// Like `normalize`, but a successful body is returned as raw text.
///
/// # Errors
///
/// Returns `ApiError::Api` when the response status is not 2xx.
pub fn normalize_text(response: HttpResponse) -> Result<String, ApiError> {
    if !response.is_success() {
        return Err(failure(&response));
    }
    Ok(response.body)
}

/// Deserialize an unwrapped payload into `T`.
///
/// # Errors
///
/// Returns `ApiError::Deserialization` when the payload does not fit `T`.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(ApiError::Deserialization)
}
