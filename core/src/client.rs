//! Stateless façade over an injected `Transport`.
//!
//! # Design
//! `LocalizeClient` holds only its `ClientConfig` and the transport, both
//! behind `Arc` and never mutated, so clones are cheap and concurrent calls
//! are independent. Every operation follows one template: compose the URL
//! (base + API prefix + resource path + query), build an `HttpRequest`, send
//! it, and pass the response through the normalizer in `response`. Resource
//! families add `impl LocalizeClient` blocks in their own modules.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::response::{decode, normalize, normalize_text};
use crate::url::join_url;

/// Whether a request must carry credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Authenticated,
    Public,
}

/// Async, stateless client for the localization API.
#[derive(Clone)]
pub struct LocalizeClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for LocalizeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizeClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LocalizeClient {
    /// Client for `base_url` with the default `api/v1` prefix.
    pub fn new(base_url: &str, transport: impl Transport + 'static) -> Self {
        Self::with_config(ClientConfig::new(base_url), transport)
    }

    pub fn with_config(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Share one transport between several clients.
    pub fn with_shared_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full address for a resource path plus an already formatted query.
    pub(crate) fn url(&self, path: &str, query: &str) -> String {
        let root = join_url(&self.config.base_url, &self.config.api_prefix);
        format!("{}{query}", join_url(&root, path))
    }

    pub(crate) fn build(
        &self,
        method: HttpMethod,
        path: &str,
        query: &str,
        body: Option<String>,
        access: Access,
    ) -> HttpRequest {
        let headers = if body.is_some() {
            vec![("Content-Type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        HttpRequest {
            method,
            url: self.url(path, query),
            headers,
            body,
            authenticated: access == Access::Authenticated,
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(method, %url, "sending request");
        let response = self.transport.send(request).await?;
        debug!(method, %url, status = response.status, "received response");
        Ok(response)
    }

    /// Send and unwrap the envelope.
    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<Value> {
        normalize(self.send(request).await?)
    }

    pub(crate) async fn execute_as<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        decode(self.execute(request).await?)
    }

    /// Send, check the status, and discard the payload.
    pub(crate) async fn execute_unit(&self, request: HttpRequest) -> Result<()> {
        self.execute(request).await.map(drop)
    }

    pub(crate) async fn execute_text(&self, request: HttpRequest) -> Result<String> {
        normalize_text(self.send(request).await?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T> {
        let request = self.build(HttpMethod::Get, path, query, None, Access::Authenticated);
        self.execute_as(request).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.build(HttpMethod::Post, path, "", Some(json_body(body)?), Access::Authenticated);
        self.execute_as(request).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.build(HttpMethod::Put, path, "", Some(json_body(body)?), Access::Authenticated);
        self.execute_as(request).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.build(HttpMethod::Delete, path, "", None, Access::Authenticated);
        self.execute_as(request).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        let request = self.build(HttpMethod::Delete, path, "", None, Access::Authenticated);
        self.execute_unit(request).await
    }
}

pub(crate) fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(ApiError::Serialization)
}
