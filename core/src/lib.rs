//! Async typed client for the localization API.
//!
//! # Overview
//! `LocalizeClient` exposes one method per remote operation: projects,
//! dictionary and glossary entries, endpoints, languages, settings,
//! analytics, rate limits, subscription, and the public translate call.
//! Each method composes a URL, hands a plain-data `HttpRequest` to an
//! injected `Transport`, and normalizes the `HttpResponse` into a typed
//! payload or an `ApiError`.
//!
//! # Design
//! - The client is stateless: an immutable `ClientConfig` plus the
//!   transport. No pooling, caching, retries or timeouts live here.
//! - Authentication is a transport concern. Wrap any transport in
//!   `AuthenticatedTransport` to attach bearer tokens from a
//!   `TokenProvider`; public operations are marked and skipped.
//! - Successful bodies are unwrapped from the `{success, data, timestamp}`
//!   envelope when present and passed through otherwise.
//! - Every non-2xx response becomes `ApiError::Api` with the status code and
//!   the parsed body as details.
//!
//! # Example
//!
//! ```no_run
//! use localize_core::{AuthenticatedTransport, LocalizeClient, ReqwestTransport, StaticToken};
//!
//! # async fn example() -> Result<(), localize_core::ApiError> {
//! let transport = AuthenticatedTransport::new(ReqwestTransport::new(), StaticToken::new("my-token"));
//! let client = LocalizeClient::new("https://api.example.com", transport);
//!
//! match client.get_project("acme", "website").await {
//!     Ok(project) => println!("found {}", project.name),
//!     Err(err) if err.is_not_found() => println!("no such project"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

mod analytics;
pub mod auth;
pub mod client;
pub mod config;
mod dictionary;
mod endpoints;
pub mod error;
mod glossaries;
pub mod http;
mod languages;
mod projects;
mod rate_limits;
pub mod response;
mod settings;
mod subscription;
mod translate;
pub mod types;
pub mod url;

pub use auth::{auth_headers, AuthenticatedTransport, StaticToken, TokenProvider};
pub use client::LocalizeClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result, TransportError};
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::*;
