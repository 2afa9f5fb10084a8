use async_trait::async_trait;
use std::time::Instant;

use super::{check, decode, ApiError, Client, ReleaseApi};
use entity::{CreatedRelease, NewRelease, Release, ReleaseList, ReleaseStatus, StatusUpdate};

#[async_trait]
impl ReleaseApi for Client {
    async fn fetch_releases(
        &self,
        user_id: i64,
        status: Option<ReleaseStatus>,
    ) -> Result<Vec<Release>, ApiError> {
        let mut req = self
            .http
            .get(self.releases_url.clone())
            .query(&[("user_id", user_id.to_string())]);
        if let Some(status) = status {
            req = req.query(&[("status", status.to_string())]);
        }
        let start = Instant::now();
        let res = check(req.send().await?).await?;
        let req_time = start.elapsed();
        tracing::trace! {?req_time, "Time taken by the releases HTTP request"};
        let list: ReleaseList = decode(res).await?;
        Ok(list.releases)
    }

    async fn create_release(
        &self,
        release: &NewRelease,
    ) -> Result<Option<CreatedRelease>, ApiError> {
        let start = Instant::now();
        let res = check(
            self.http
                .post(self.releases_url.clone())
                .json(release)
                .send()
                .await?,
        )
        .await?;
        let req_time = start.elapsed();
        tracing::trace! {?req_time, "Time taken by the release creation HTTP request"};
        match decode::<CreatedRelease>(res).await {
            Ok(created) => Ok(Some(created)),
            Err(ApiError::Decode(error)) => {
                tracing::warn! {%error, "Release was created but the reply could not be decoded"};
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<(), ApiError> {
        let start = Instant::now();
        check(
            self.http
                .put(self.releases_url.clone())
                .json(update)
                .send()
                .await?,
        )
        .await?;
        let req_time = start.elapsed();
        tracing::trace! {?req_time, id = update.id, status = %update.status, "Time taken by the status update HTTP request"};
        Ok(())
    }
}
