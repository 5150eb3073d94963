//! Project languages and the public catalog of supported languages.

use crate::client::{Access, LocalizeClient};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::projects::project_path;
use crate::types::{AddLanguageRequest, Language};

impl LocalizeClient {
    /// Languages enabled for a project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_project_languages(&self, entity: &str, project_id: &str) -> Result<Vec<Language>> {
        let path = format!("{}/languages", project_path(entity, project_id));
        self.get(&path, "").await
    }

    /// Enable a language for a project and return the updated list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn add_project_language(
        &self,
        entity: &str,
        project_id: &str,
        request: &AddLanguageRequest,
    ) -> Result<Vec<Language>> {
        let path = format!("{}/languages", project_path(entity, project_id));
        self.post(&path, request).await
    }

    /// Every language the service can translate to. Does not require
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_available_languages(&self) -> Result<Vec<Language>> {
        let request = self.build(HttpMethod::Get, "available-languages", "", None, Access::Public);
        self.execute_as(request).await
    }
}
