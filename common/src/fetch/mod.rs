mod analytics;
mod releases;

use async_trait::async_trait;
use const_format::formatcp;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use thiserror::Error;

use base::setting::Api;
use base::{CLI_NAME, GITHUB, VERSION};
use entity::{AnalyticsSnapshot, CreatedRelease, NewRelease, Release, ReleaseStatus, StatusUpdate};

static MUSICFLOW_USER_AGENT: &str = formatcp!("{}/{} ( {} )", CLI_NAME, VERSION, GITHUB);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request returned non-success status code {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Could not decode the response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The `error` string the endpoint put in the body of a failed response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } if !m.is_empty() => Some(m.as_str()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// The releases endpoint.
#[async_trait]
pub trait ReleaseApi: Send + Sync {
    async fn fetch_releases(
        &self,
        user_id: i64,
        status: Option<ReleaseStatus>,
    ) -> Result<Vec<Release>, ApiError>;

    /// Returns `None` when the endpoint accepted the release but its reply
    /// could not be decoded.
    async fn create_release(
        &self,
        release: &NewRelease,
    ) -> Result<Option<CreatedRelease>, ApiError>;

    async fn update_status(&self, update: &StatusUpdate) -> Result<(), ApiError>;
}

/// The analytics endpoint.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn fetch_analytics(&self, user_id: i64) -> Result<AnalyticsSnapshot, ApiError>;
}

/// HTTP client for both distribution endpoints.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    releases_url: url::Url,
    analytics_url: url::Url,
}

impl Client {
    pub fn new(api: &Api) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(MUSICFLOW_USER_AGENT));
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            releases_url: api.releases_url.clone(),
            analytics_url: api.analytics_url.clone(),
        })
    }
}

/// Turns non-success responses into [`ApiError::Status`], keeping the
/// server supplied message when the body carries one.
async fn check(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error);
    tracing::debug! {%status, ?message, "Request returned non-success status"};
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
