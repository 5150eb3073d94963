//! Usage analytics.

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::types::{AnalyticsData, AnalyticsQuery};
use crate::url::{encode_segment, format_query, QueryValue};

impl AnalyticsQuery {
    fn to_query_string(&self) -> Result<String> {
        let param = |value: &Option<String>| value.as_deref().map(QueryValue::from);
        format_query(&[
            ("start_date", param(&self.start_date)),
            ("end_date", param(&self.end_date)),
            ("project_id", param(&self.project_id)),
        ])
    }
}

impl LocalizeClient {
    /// Usage for `entity`, optionally narrowed to a date range or project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_analytics(&self, entity: &str, query: &AnalyticsQuery) -> Result<AnalyticsData> {
        let path = format!("entities/{}/analytics", encode_segment(entity));
        self.get(&path, &query.to_query_string()?).await
    }
}
