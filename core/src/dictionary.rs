//! Per-project dictionary: fixed translations for specific terms.

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::projects::project_path;
use crate::types::{CreateDictionaryEntryRequest, DictionaryEntry, UpdateDictionaryEntryRequest};
use crate::url::encode_segment;

fn dictionary_path(entity: &str, project_id: &str) -> String {
    format!("{}/dictionary", project_path(entity, project_id))
}

fn entry_path(entity: &str, project_id: &str, entry_id: &str) -> String {
    format!("{}/{}", dictionary_path(entity, project_id), encode_segment(entry_id))
}

impl LocalizeClient {
    /// List every dictionary entry of a project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_dictionary(&self, entity: &str, project_id: &str) -> Result<Vec<DictionaryEntry>> {
        self.get(&dictionary_path(entity, project_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_dictionary_entry(&self, entity: &str, project_id: &str, entry_id: &str) -> Result<DictionaryEntry> {
        self.get(&entry_path(entity, project_id, entry_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn create_dictionary_entry(
        &self,
        entity: &str,
        project_id: &str,
        request: &CreateDictionaryEntryRequest,
    ) -> Result<DictionaryEntry> {
        self.post(&dictionary_path(entity, project_id), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_dictionary_entry(
        &self,
        entity: &str,
        project_id: &str,
        entry_id: &str,
        request: &UpdateDictionaryEntryRequest,
    ) -> Result<DictionaryEntry> {
        self.put(&entry_path(entity, project_id, entry_id), request).await
    }

    /// Delete an entry and return its last known state.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn delete_dictionary_entry(&self, entity: &str, project_id: &str, entry_id: &str) -> Result<DictionaryEntry> {
        self.delete(&entry_path(entity, project_id, entry_id)).await
    }

    /// Find entries whose term in `language_code` matches `text`.
    ///
    /// Both values are percent-encoded into the path.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn search_dictionary(
        &self,
        entity: &str,
        project_id: &str,
        language_code: &str,
        text: &str,
    ) -> Result<Vec<DictionaryEntry>> {
        let path = format!(
            "{}/search/{}/{}",
            dictionary_path(entity, project_id),
            encode_segment(language_code),
            encode_segment(text)
        );
        self.get(&path, "").await
    }
}
