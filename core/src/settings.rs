//! User settings.
//!
//! Multi-tenant deployments address settings per user; single-tenant
//! deployments expose one `settings` resource for the signed-in account.

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::types::{UpdateSettingsRequest, UserSettings};
use crate::url::encode_segment;

fn user_settings_path(user_id: &str) -> String {
    format!("users/{}/settings", encode_segment(user_id))
}

impl LocalizeClient {
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_user_settings(&self, user_id: &str) -> Result<UserSettings> {
        self.get(&user_settings_path(user_id), "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_user_settings(&self, user_id: &str, request: &UpdateSettingsRequest) -> Result<UserSettings> {
        self.put(&user_settings_path(user_id), request).await
    }

    /// Settings of the signed-in account (single-tenant deployments).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_settings(&self) -> Result<UserSettings> {
        self.get("settings", "").await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_settings(&self, request: &UpdateSettingsRequest) -> Result<UserSettings> {
        self.put("settings", request).await
    }
}
