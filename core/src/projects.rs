//! Project management operations.

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::types::{CreateProjectRequest, Project, ProjectApiKey, UpdateProjectRequest};
use crate::url::encode_segment;

pub(crate) fn projects_path(entity: &str) -> String {
    format!("entities/{}/projects", encode_segment(entity))
}

pub(crate) fn project_path(entity: &str, project_id: &str) -> String {
    format!("{}/{}", projects_path(entity), encode_segment(project_id))
}

impl LocalizeClient {
    /// List the projects owned by `entity`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use localize_core::{LocalizeClient, ReqwestTransport};
    /// # async fn example() -> Result<(), localize_core::ApiError> {
    /// let client = LocalizeClient::new("https://api.example.com", ReqwestTransport::new());
    /// for project in client.get_projects("acme").await? {
    ///     println!("{}: {}", project.id, project.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_projects(&self, entity: &str) -> Result<Vec<Project>> {
        self.get(&projects_path(entity), "").await
    }

    /// Fetch one project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 when the project does not exist.
    pub async fn get_project(&self, entity: &str, project_id: &str) -> Result<Project> {
        self.get(&project_path(entity, project_id), "").await
    }

    /// Create a project under `entity`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn create_project(&self, entity: &str, request: &CreateProjectRequest) -> Result<Project> {
        self.post(&projects_path(entity), request).await
    }

    /// Apply a partial update. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_project(
        &self,
        entity: &str,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project> {
        self.put(&project_path(entity, project_id), request).await
    }

    /// Delete a project. Nothing is returned on success.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn delete_project(&self, entity: &str, project_id: &str) -> Result<()> {
        self.delete_unit(&project_path(entity, project_id)).await
    }

    /// Issue a new project API key, replacing any previous one.
    ///
    /// The returned key is shown in full only in this response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn create_project_api_key(&self, entity: &str, project_id: &str) -> Result<ProjectApiKey> {
        let path = format!("{}/api-key", project_path(entity, project_id));
        self.post(&path, &serde_json::json!({})).await
    }

    /// Revoke the project's API key.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn revoke_project_api_key(&self, entity: &str, project_id: &str) -> Result<()> {
        let path = format!("{}/api-key", project_path(entity, project_id));
        self.delete_unit(&path).await
    }
}
