//! Bearer-token credentials for transports that do not authenticate on
//! their own.
//!
//! `AuthenticatedTransport` wraps any `Transport` and attaches the headers
//! produced by `auth_headers` to every request marked `authenticated`. The
//! provider is resolved once per request; when it has no token the request
//! fails with `ApiError::Authentication` and the inner transport is never
//! called.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Source of bearer tokens.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Resolve the current token, or `None` when the caller is signed out.
    async fn token(&self) -> Option<String>;
}

/// A fixed token, or a fixed absence of one.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Build the `Authorization` and `Content-Type` headers from `provider`.
///
/// # Errors
///
/// Returns `ApiError::Authentication` when the provider yields no token or
/// an empty one.
pub async fn auth_headers(provider: &dyn TokenProvider) -> Result<Vec<(String, String)>, ApiError> {
    let token = provider
        .token()
        .await
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Authentication("no access token available".to_string()))?;
    Ok(vec![
        ("Authorization".to_string(), format!("Bearer {token}")),
        ("Content-Type".to_string(), "application/json".to_string()),
    ])
}

/// `Transport` decorator that adds bearer credentials.
#[derive(Clone)]
pub struct AuthenticatedTransport<T> {
    inner: T,
    provider: Arc<dyn TokenProvider>,
}

impl<T> AuthenticatedTransport<T> {
    pub fn new(inner: T, provider: impl TokenProvider + 'static) -> Self {
        Self {
            inner,
            provider: Arc::new(provider),
        }
    }

    pub fn with_shared_provider(inner: T, provider: Arc<dyn TokenProvider>) -> Self {
        Self { inner, provider }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for AuthenticatedTransport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedTransport")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthenticatedTransport<T> {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if request.authenticated {
            let headers = match auth_headers(self.provider.as_ref()).await {
                Ok(headers) => headers,
                Err(err) => {
                    warn!(method = request.method.as_str(), url = %request.url, "refusing unauthenticated request");
                    return Err(err);
                }
            };
            for (name, value) in &headers {
                request.set_header(name, value);
            }
        }
        self.inner.send(request).await
    }
}
