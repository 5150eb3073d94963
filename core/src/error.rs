//! Error types for the localization API client.
//!
//! # Design
//! Every failure an operation can produce is one `ApiError`. Non-2xx
//! responses become `Api` with the status code and whatever body the server
//! sent as `details`, so callers branch on `status_code()` instead of on
//! per-endpoint error types. Transport failures keep their original source.

use serde_json::Value;
use thiserror::Error;

/// Boxed error produced by a `Transport` implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `LocalizeClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token provider produced no usable token. Raised before any
    /// request reaches the network.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        /// Parsed JSON body when possible, otherwise the raw text.
        details: Option<Value>,
    },

    /// The transport could not complete the exchange.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Query parameters could not be form-encoded.
    #[error("query encoding failed: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// The unwrapped payload did not match the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// Client configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Wrap any transport-level failure.
    pub fn transport(err: impl Into<TransportError>) -> Self {
        ApiError::Transport(err.into())
    }

    /// HTTP status code carried by `Api` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body attached to `Api` errors.
    pub fn details(&self) -> Option<&Value> {
        match self {
            ApiError::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
