//! Page-view tracking through `tracing`.

use async_trait::async_trait;

use super::Analytics;
use crate::error::ServiceError;

/// Records page views as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

#[async_trait]
impl Analytics for TracingAnalytics {
    async fn track_page_view(&self, path: &str) -> Result<(), ServiceError> {
        tracing::info!(path = %path, event = "page_view", "Tracked page view");
        Ok(())
    }
}
