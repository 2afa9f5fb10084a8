use async_trait::async_trait;
use std::time::Instant;

use super::{check, decode, AnalyticsApi, ApiError, Client};
use entity::AnalyticsSnapshot;

#[async_trait]
impl AnalyticsApi for Client {
    async fn fetch_analytics(&self, user_id: i64) -> Result<AnalyticsSnapshot, ApiError> {
        let start = Instant::now();
        let res = check(
            self.http
                .get(self.analytics_url.clone())
                .query(&[("user_id", user_id)])
                .send()
                .await?,
        )
        .await?;
        let req_time = start.elapsed();
        tracing::trace! {?req_time, "Time taken by the analytics HTTP request"};
        decode(res).await
    }
}
