//! The public translate operation.
//!
//! Translation is reachable without a bearer token. A project API key may
//! be passed instead as the `api_key` query parameter.

use crate::client::{json_body, Access, LocalizeClient};
use crate::error::{ApiError, Result};
use crate::http::HttpMethod;
use crate::rate_limits::test_mode_param;
use crate::types::{TranslateOptions, TranslateRequest, TranslateResponse};
use crate::url::{encode_segment, format_query, QueryValue};

/// `org_path` may contain several `/`-separated segments; each is encoded
/// on its own. Both the organization and the project must be non-empty.
fn translate_path(org_path: &str, project: &str, endpoint: Option<&str>) -> Result<String> {
    let org = org_path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/");
    if org.is_empty() {
        return Err(ApiError::Config("translate requires an organization path".to_string()));
    }
    if project.is_empty() {
        return Err(ApiError::Config("translate requires a project".to_string()));
    }
    let mut path = format!("translate/{org}/{}", encode_segment(project));
    if let Some(endpoint) = endpoint {
        path.push('/');
        path.push_str(&encode_segment(endpoint));
    }
    Ok(path)
}

impl LocalizeClient {
    /// Translate `request.strings` into every target language.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use localize_core::{LocalizeClient, ReqwestTransport, TranslateRequest};
    /// # async fn example() -> Result<(), localize_core::ApiError> {
    /// let client = LocalizeClient::new("https://api.example.com", ReqwestTransport::new());
    /// let request = TranslateRequest::new(["Hello"], ["es", "fr"]);
    /// let response = client.translate("acme", "website", &request).await?;
    /// println!("{:?}", response.translations.get("es"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn translate(&self, org_path: &str, project: &str, request: &TranslateRequest) -> Result<TranslateResponse> {
        self.translate_with(org_path, project, request, &TranslateOptions::default())
            .await
    }

    /// Translate with an explicit endpoint, API key or test mode.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if `org_path` has no segments or `project`
    /// is empty; nothing is sent in that case. Returns `ApiError::Api` on a
    /// non-2xx response.
    pub async fn translate_with(
        &self,
        org_path: &str,
        project: &str,
        request: &TranslateRequest,
        options: &TranslateOptions,
    ) -> Result<TranslateResponse> {
        let path = translate_path(org_path, project, options.endpoint.as_deref())?;
        let query = format_query(&[
            ("testMode", test_mode_param(options.test_mode)),
            ("api_key", options.api_key.as_deref().map(QueryValue::from)),
        ])?;
        let request = self.build(HttpMethod::Post, &path, &query, Some(json_body(request)?), Access::Public);
        self.execute_as(request).await
    }
}
