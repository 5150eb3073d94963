//! Rate-limit status and history.

use crate::client::LocalizeClient;
use crate::error::Result;
use crate::types::{HistoryPeriod, RateLimitHistory, RateLimitStatus};
use crate::url::{encode_segment, format_query, QueryValue};

/// `?testMode=true` when set, nothing otherwise.
pub(crate) fn test_mode_param(test_mode: bool) -> Option<QueryValue> {
    test_mode.then_some(QueryValue::Bool(true))
}

impl LocalizeClient {
    /// Current usage against the hourly, daily and monthly limits.
    ///
    /// With `test_mode` the server reports the separate test-mode counters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_rate_limits(&self, entity: &str, test_mode: bool) -> Result<RateLimitStatus> {
        let path = format!("ratelimits/{}", encode_segment(entity));
        let query = format_query(&[("testMode", test_mode_param(test_mode))])?;
        self.get(&path, &query).await
    }

    /// Request counts bucketed by `period`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a non-2xx response.
    pub async fn get_rate_limit_history(
        &self,
        entity: &str,
        period: HistoryPeriod,
        test_mode: bool,
    ) -> Result<RateLimitHistory> {
        let path = format!("ratelimits/{}/history/{}", encode_segment(entity), period.as_str());
        let query = format_query(&[("testMode", test_mode_param(test_mode))])?;
        self.get(&path, &query).await
    }
}
