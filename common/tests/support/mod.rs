#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::fetch::{AnalyticsApi, ApiError, ReleaseApi};
use common::notify::Recorder;
use common::Dashboard;
use entity::{
    AnalyticsSnapshot, CreatedRelease, FinancialRecord, NewRelease, PaymentStatus, Release,
    ReleaseStatus, ReleaseType, StatusUpdate, StreamRecord, Summary, User, UserRole,
};

pub const USER_ID: i64 = 1;

/// What the fake endpoint answers to a creation request.
#[derive(Debug, Clone)]
pub enum CreateReply {
    Created,
    Status(u16, Option<String>),
}

/// In-memory stand-in for both endpoints, counting every call.
pub struct FakeApi {
    pub releases: Mutex<Vec<Release>>,
    pub snapshot: Mutex<AnalyticsSnapshot>,
    pub fail_releases: AtomicBool,
    pub fail_analytics: AtomicBool,
    pub create_reply: Mutex<CreateReply>,
    pub release_fetches: AtomicUsize,
    pub analytics_fetches: AtomicUsize,
    pub created: Mutex<Vec<NewRelease>>,
    pub updates: Mutex<Vec<StatusUpdate>>,
}

impl FakeApi {
    pub fn new(releases: Vec<Release>, snapshot: AnalyticsSnapshot) -> Self {
        Self {
            releases: Mutex::new(releases),
            snapshot: Mutex::new(snapshot),
            fail_releases: AtomicBool::new(false),
            fail_analytics: AtomicBool::new(false),
            create_reply: Mutex::new(CreateReply::Created),
            release_fetches: AtomicUsize::new(0),
            analytics_fetches: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn fetches(&self) -> (usize, usize) {
        (
            self.release_fetches.load(Ordering::SeqCst),
            self.analytics_fetches.load(Ordering::SeqCst),
        )
    }

    pub fn requests(&self) -> usize {
        let (r, a) = self.fetches();
        r + a + self.created.lock().unwrap().len() + self.updates.lock().unwrap().len()
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: None,
    }
}

#[async_trait]
impl ReleaseApi for FakeApi {
    async fn fetch_releases(
        &self,
        user_id: i64,
        status: Option<ReleaseStatus>,
    ) -> Result<Vec<Release>, ApiError> {
        assert_eq!(user_id, USER_ID);
        self.release_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_releases.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self
            .releases
            .lock()
            .unwrap()
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect())
    }

    async fn create_release(
        &self,
        release: &NewRelease,
    ) -> Result<Option<CreatedRelease>, ApiError> {
        self.created.lock().unwrap().push(release.clone());
        let reply = self.create_reply.lock().unwrap().clone();
        match reply {
            CreateReply::Created => {
                let mut releases = self.releases.lock().unwrap();
                let id = releases.iter().map(|r| r.id).max().unwrap_or(0) + 1;
                releases.insert(
                    0,
                    Release {
                        id,
                        title: release.title.clone(),
                        artist_name: release.artist_name.clone(),
                        release_type: release.release_type,
                        genre: Some(release.genre.clone()),
                        release_date: release.release_date,
                        status: ReleaseStatus::Draft,
                        track_count: 0,
                        cover_url: None,
                        upc: None,
                    },
                );
                Ok(Some(CreatedRelease {
                    id,
                    status: Some("created".to_string()),
                }))
            }
            CreateReply::Status(status, message) => Err(ApiError::Status { status, message }),
        }
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<(), ApiError> {
        self.updates.lock().unwrap().push(update.clone());
        let mut releases = self.releases.lock().unwrap();
        match releases.iter_mut().find(|r| r.id == update.id) {
            Some(r) => {
                r.status = update.status;
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: Some("Release not found".to_string()),
            }),
        }
    }
}

#[async_trait]
impl AnalyticsApi for FakeApi {
    async fn fetch_analytics(&self, user_id: i64) -> Result<AnalyticsSnapshot, ApiError> {
        assert_eq!(user_id, USER_ID);
        self.analytics_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_analytics.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }
}

pub fn release(id: i64, title: &str, status: ReleaseStatus) -> Release {
    Release {
        id,
        title: title.to_string(),
        artist_name: "Andrey Volkov".to_string(),
        release_type: ReleaseType::Single,
        genre: Some("Pop".to_string()),
        release_date: NaiveDate::from_ymd_opt(2025, 2, 1),
        status,
        track_count: 3,
        cover_url: None,
        upc: None,
    }
}

pub fn releases() -> Vec<Release> {
    vec![
        release(3, "Night Dreams", ReleaseStatus::Pending),
        release(2, "Summer Collection", ReleaseStatus::Published),
        release(1, "First Album", ReleaseStatus::Draft),
    ]
}

pub fn snapshot() -> AnalyticsSnapshot {
    let date = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
    AnalyticsSnapshot {
        summary: Summary {
            total_streams: 70270,
            balance: 120.5,
            total_paid: 300.0,
        },
        analytics: vec![
            StreamRecord {
                release_id: Some(2),
                streams: 500,
                date: Some(date(3)),
                platform: Some("Spotify".to_string()),
                country: Some("RU".to_string()),
            },
            StreamRecord {
                release_id: Some(2),
                streams: 250,
                date: Some(date(2)),
                platform: Some("Apple Music".to_string()),
                country: Some("US".to_string()),
            },
        ],
        financials: vec![
            FinancialRecord {
                id: 1,
                platform: "Spotify".to_string(),
                amount: 40.0,
                status: PaymentStatus::Pending,
                period_start: date(1),
                period_end: date(3),
                release_title: Some("Summer Collection".to_string()),
            },
            FinancialRecord {
                id: 2,
                platform: "Apple Music".to_string(),
                amount: 300.0,
                status: PaymentStatus::Paid,
                period_start: date(1),
                period_end: date(3),
                release_title: None,
            },
        ],
    }
}

pub fn user() -> User {
    User {
        name: "Andrey Volkov".to_string(),
        role: UserRole::Artist,
        avatar: "AV".to_string(),
    }
}

pub fn dashboard(api: &Arc<FakeApi>, recorder: &Arc<Recorder>) -> Dashboard {
    Dashboard::new(user(), USER_ID, api.clone(), api.clone(), recorder.clone())
}
