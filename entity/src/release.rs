use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReleaseType {
    #[default]
    Single,
    Ep,
    Album,
}

impl ReleaseType {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseType::Single => "Single",
            ReleaseType::Ep => "EP",
            ReleaseType::Album => "Album",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReleaseStatus {
    Draft,
    Pending,
    Published,
}

impl ReleaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseStatus::Draft => "Draft",
            ReleaseStatus::Pending => "In moderation",
            ReleaseStatus::Published => "Published",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: i64,
    pub title: String,
    pub artist_name: String,
    pub release_type: ReleaseType,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    pub status: ReleaseStatus,
    #[serde(default)]
    pub track_count: i64,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
}

/// Envelope of the releases listing.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseList {
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Body of a release creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRelease {
    pub title: String,
    pub artist_name: String,
    pub release_type: ReleaseType,
    pub genre: String,
    pub release_date: Option<NaiveDate>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedRelease {
    pub id: i64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: ReleaseStatus,
}
