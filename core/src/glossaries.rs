//! Glossary entries, with bulk import and export.

use crate::client::{Access, LocalizeClient};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::projects::project_path;
use crate::types::{
    CreateGlossaryEntryRequest, ExportFormat, GlossaryEntry, GlossaryImportRequest, GlossaryImportResult,
    UpdateGlossaryEntryRequest,
};
use crate::url::{encode_segment, format_query};

fn glossaries_path(entity: &str, project_id: &str) -> String {
    format!("{}/glossaries", project_path(entity, project_id))
}

fn glossary_path(entity: &str, project_id: &str, glossary_id: &str) -> String {
    format!("{}/{}", glossaries_path(entity, project_id), encode_segment(glossary_id))
}

impl LocalizeClient {
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_glossary(&self, entity: &str, project_id: &str) -> Result<Vec<GlossaryEntry>> {
        self.get(&glossaries_path(entity, project_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_glossary_entry(&self, entity: &str, project_id: &str, glossary_id: &str) -> Result<GlossaryEntry> {
        self.get(&glossary_path(entity, project_id, glossary_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn create_glossary_entry(
        &self,
        entity: &str,
        project_id: &str,
        request: &CreateGlossaryEntryRequest,
    ) -> Result<GlossaryEntry> {
        self.post(&glossaries_path(entity, project_id), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_glossary_entry(
        &self,
        entity: &str,
        project_id: &str,
        glossary_id: &str,
        request: &UpdateGlossaryEntryRequest,
    ) -> Result<GlossaryEntry> {
        self.put(&glossary_path(entity, project_id, glossary_id), request).await
    }

    /// Delete a glossary entry. Nothing is returned on success.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn delete_glossary_entry(&self, entity: &str, project_id: &str, glossary_id: &str) -> Result<()> {
        self.delete_unit(&glossary_path(entity, project_id, glossary_id)).await
    }

    /// Bulk-load entries from a JSON or CSV document.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn import_glossary(
        &self,
        entity: &str,
        project_id: &str,
        request: &GlossaryImportRequest,
    ) -> Result<GlossaryImportResult> {
        let path = format!("{}/import", glossaries_path(entity, project_id));
        self.post(&path, request).await
    }

    /// Download the whole glossary. The body is returned as-is, not
    /// unwrapped from an envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn export_glossary(&self, entity: &str, project_id: &str, format: ExportFormat) -> Result<String> {
        let path = format!("{}/export", glossaries_path(entity, project_id));
        let query = format_query(&[("format", Some(format.as_str().into()))])?;
        let request = self.build(HttpMethod::Get, &path, &query, None, Access::Authenticated);
        self.execute_text(request).await
    }
}
