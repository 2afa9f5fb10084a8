use async_once_cell::OnceCell;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use super::{util, CLI_NAME};

lazy_static! {
    pub static ref SETTINGS: Arc<OnceCell<Settings>> = Arc::new(OnceCell::new());
}

static DEFAULT_RELEASES_URL: &str = "http://localhost:8000/releases";
static DEFAULT_ANALYTICS_URL: &str = "http://localhost:8000/analytics";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings global store is uninitialized")]
    Uninitialized,

    #[error("Could not locate program directories")]
    Directories,

    #[error("Could not read the config file: {0}")]
    Read(#[from] io::Error),

    #[error("Could not parse the config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize the settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    #[serde(default = "default_releases_url")]
    pub releases_url: url::Url,
    #[serde(default = "default_analytics_url")]
    pub analytics_url: url::Url,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    /// Request timeout in seconds. Requests never time out when unset.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Api {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl Default for Api {
    fn default() -> Self {
        Self {
            releases_url: default_releases_url(),
            analytics_url: default_analytics_url(),
            user_id: default_user_id(),
            timeout: None,
        }
    }
}

fn default_releases_url() -> url::Url {
    url::Url::parse(DEFAULT_RELEASES_URL).unwrap()
}

fn default_analytics_url() -> url::Url {
    url::Url::parse(DEFAULT_ANALYTICS_URL).unwrap()
}

fn default_user_id() -> i64 {
    1
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Artist,
    Label,
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Artist => write!(f, "artist"),
            Role::Label => write!(f, "label"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default = "default_user_name")]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

fn default_user_name() -> String {
    "Andrey Volkov".to_string()
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            role: Role::default(),
            avatar: None,
        }
    }
}

pub fn default_path() -> Result<PathBuf, SettingsError> {
    let dirs = ProjectDirs::from("com", "github", CLI_NAME).ok_or(SettingsError::Directories)?;
    Ok(dirs.config_dir().join(PathBuf::from("config.toml")))
}

pub fn load(path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(p) => p,
        None => default_path()?,
    };
    tracing::info! {?path, "Loading config file"};
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let mut set: Settings = toml::from_str(content.as_str())?;
    set = generate_default(set);
    tracing::trace! {settings = ?set, "Loaded settings"};
    Ok(set)
}

pub fn generate_default(mut set: Settings) -> Settings {
    if set.user.avatar.as_deref().map_or(true, |a| a.trim().is_empty()) {
        set.user.avatar = Some(util::initials(&set.user.name));
    }
    set
}

pub fn print(set: &Settings) -> Result<String, SettingsError> {
    Ok(toml::to_string(set)?)
}

pub fn get_settings() -> Result<&'static Settings, SettingsError> {
    SETTINGS.get().ok_or(SettingsError::Uninitialized)
}
