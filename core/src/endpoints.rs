//! Named translation endpoints within a project.

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::projects::project_path;
use crate::types::{CreateEndpointRequest, Endpoint, UpdateEndpointRequest};
use crate::url::encode_segment;

fn endpoints_path(entity: &str, project_id: &str) -> String {
    format!("{}/endpoints", project_path(entity, project_id))
}

fn endpoint_path(entity: &str, project_id: &str, endpoint_id: &str) -> String {
    format!("{}/{}", endpoints_path(entity, project_id), encode_segment(endpoint_id))
}

impl LocalizeClient {
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_endpoints(&self, entity: &str, project_id: &str) -> Result<Vec<Endpoint>> {
        self.get(&endpoints_path(entity, project_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_endpoint(&self, entity: &str, project_id: &str, endpoint_id: &str) -> Result<Endpoint> {
        self.get(&endpoint_path(entity, project_id, endpoint_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn create_endpoint(&self, entity: &str, project_id: &str, request: &CreateEndpointRequest) -> Result<Endpoint> {
        self.post(&endpoints_path(entity, project_id), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_endpoint(
        &self,
        entity: &str,
        project_id: &str,
        endpoint_id: &str,
        request: &UpdateEndpointRequest,
    ) -> Result<Endpoint> {
        self.put(&endpoint_path(entity, project_id, endpoint_id), request).await
    }

    /// Delete an endpoint and return its last known state.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn delete_endpoint(&self, entity: &str, project_id: &str, endpoint_id: &str) -> Result<Endpoint> {
        self.delete(&endpoint_path(entity, project_id, endpoint_id)).await
    }
}
