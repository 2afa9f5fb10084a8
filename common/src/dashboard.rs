use std::sync::Arc;

use crate::aggregate::{self, StatusCounts};
use crate::fetch::{AnalyticsApi, ApiError, Client, ReleaseApi};
use crate::form::{ReleaseForm, SubmitError};
use crate::notify::{Notification, Notifier};
use crate::router::{Router, View};
use crate::store::{AnalyticsStore, ReleaseStore};
use entity::{AnalyticsSnapshot, CreatedRelease, Release, ReleaseStatus, StatusUpdate, User};

/// The whole client side state: who is signed in, which page is shown, the
/// two stores and the release form.
pub struct Dashboard {
    user: User,
    user_id: i64,
    router: Router,
    releases: ReleaseStore,
    analytics: AnalyticsStore,
    form: ReleaseForm,
    release_api: Arc<dyn ReleaseApi>,
    notifier: Arc<dyn Notifier>,
}

impl Dashboard {
    pub fn new(
        user: User,
        user_id: i64,
        release_api: Arc<dyn ReleaseApi>,
        analytics_api: Arc<dyn AnalyticsApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            user,
            user_id,
            router: Router::default(),
            releases: ReleaseStore::new(release_api.clone(), user_id),
            analytics: AnalyticsStore::new(analytics_api, user_id),
            form: ReleaseForm::default(),
            release_api,
            notifier,
        }
    }

    pub fn with_client(
        user: User,
        user_id: i64,
        client: Arc<Client>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(user, user_id, client.clone(), client, notifier)
    }

    /// Loads both stores. The requests are issued together and complete in
    /// any order.
    pub async fn mount(&mut self) {
        self.refresh_all().await
    }

    pub async fn refresh_all(&mut self) {
        let (releases, analytics) = tokio::join!(self.releases.refresh(), self.analytics.refresh());
        if let Err(error) = releases {
            self.notify_load_error("Could not load releases", &error);
        }
        if let Err(error) = analytics {
            self.notify_load_error("Could not load analytics", &error);
        }
    }

    fn notify_load_error(&self, title: &str, error: &ApiError) {
        let description = error
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        self.notifier.notify(Notification::error(title, description));
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn view(&self) -> View {
        self.router.view()
    }

    pub fn navigate(&mut self, id: impl Into<String>) {
        self.router.navigate(id)
    }

    pub fn releases(&self) -> &[Release] {
        self.releases.releases()
    }

    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        self.analytics.snapshot()
    }

    pub fn analytics_loading(&self) -> bool {
        self.analytics.loading()
    }

    pub fn form(&self) -> &ReleaseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReleaseForm {
        &mut self.form
    }

    pub fn open_release_form(&mut self) {
        self.form.open()
    }

    /// Submits the release form. A successful creation reloads both stores;
    /// the new release only shows up once that reload completes.
    pub async fn submit_release(&mut self) -> Result<Option<CreatedRelease>, SubmitError> {
        let created = self
            .form
            .submit(self.release_api.as_ref(), self.notifier.as_ref(), self.user_id)
            .await?;
        self.refresh_all().await;
        Ok(created)
    }

    /// Moves a release to another moderation status and reloads the
    /// releases.
    pub async fn moderate(&mut self, id: i64, status: ReleaseStatus) -> Result<(), ApiError> {
        let update = StatusUpdate { id, status };
        match self.release_api.update_status(&update).await {
            Ok(()) => {
                tracing::info! {id, %status, "Release status updated"};
                self.notifier.notify(Notification::success(
                    "Release updated",
                    format!("Release {} is now {}", id, status.label().to_lowercase()),
                ));
                if let Err(error) = self.releases.refresh().await {
                    self.notify_load_error("Could not load releases", &error);
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn! {%error, id, "Could not update release status"};
                self.notify_load_error("Could not update the release", &error);
                Err(error)
            }
        }
    }

    pub fn streams_for_release(&self, id: i64) -> i64 {
        aggregate::streams_for_release(self.snapshot(), id)
    }

    pub fn count_by_status(&self, status: ReleaseStatus) -> usize {
        aggregate::count_by_status(self.releases(), status)
    }

    pub fn status_counts(&self) -> StatusCounts {
        aggregate::status_counts(self.releases())
    }

    pub fn pending_payment_total(&self) -> f64 {
        self.snapshot()
            .map(|s| aggregate::pending_payment_total(&s.financials))
            .unwrap_or(0.0)
    }
}
