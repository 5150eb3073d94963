//! Billing subscription of the signed-in account (single-tenant deployments).

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::types::{Subscription, UpdateSubscriptionRequest};

impl LocalizeClient {
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_subscription(&self) -> Result<Subscription> {
        self.get("subscription", "").await
    }

    /// Change plan. The server may answer with a checkout-related record in
    /// `Subscription::extra`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn update_subscription(&self, request: &UpdateSubscriptionRequest) -> Result<Subscription> {
        self.post("subscription", request).await
    }

    /// Ask the server to re-read the subscription from the billing provider.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn sync_subscription(&self) -> Result<Subscription> {
        self.post("subscription/sync", &serde_json::json!({})).await
    }
}
