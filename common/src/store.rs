use std::sync::Arc;

use crate::fetch::{AnalyticsApi, ApiError, ReleaseApi};
use entity::{AnalyticsSnapshot, Release};

/// The user's releases, replaced wholesale on every successful refresh.
pub struct ReleaseStore {
    api: Arc<dyn ReleaseApi>,
    user_id: i64,
    releases: Vec<Release>,
}

impl ReleaseStore {
    pub fn new(api: Arc<dyn ReleaseApi>, user_id: i64) -> Self {
        Self {
            api,
            user_id,
            releases: Vec::new(),
        }
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// On failure the previously loaded releases are kept.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.api.fetch_releases(self.user_id, None).await {
            Ok(releases) => {
                tracing::info! {count = releases.len(), "Loaded releases"};
                self.releases = releases;
                Ok(())
            }
            Err(error) => {
                tracing::error! {%error, "Error fetching releases"};
                Err(error)
            }
        }
    }
}

/// The latest analytics snapshot. `loading` stays set until the first
/// refresh completes, whatever its outcome.
pub struct AnalyticsStore {
    api: Arc<dyn AnalyticsApi>,
    user_id: i64,
    snapshot: Option<AnalyticsSnapshot>,
    loading: bool,
}

impl AnalyticsStore {
    pub fn new(api: Arc<dyn AnalyticsApi>, user_id: i64) -> Self {
        Self {
            api,
            user_id,
            snapshot: None,
            loading: true,
        }
    }

    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let res = self.api.fetch_analytics(self.user_id).await;
        self.loading = false;
        match res {
            Ok(snapshot) => {
                tracing::info! {
                    records = snapshot.analytics.len(),
                    financials = snapshot.financials.len(),
                    "Loaded analytics"
                };
                self.snapshot = Some(snapshot);
                Ok(())
            }
            Err(error) => {
                tracing::error! {%error, "Error fetching analytics"};
                Err(error)
            }
        }
    }
}
