use base::setting::{Role, User as UserSettings};
use base::util::initials;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Artist,
    Label,
    Admin,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Artist => "Artist",
            UserRole::Label => "Label",
            UserRole::Admin => "Administrator",
        }
    }
}

impl From<Role> for UserRole {
    fn from(value: Role) -> Self {
        match value {
            Role::Artist => UserRole::Artist,
            Role::Label => UserRole::Label,
            Role::Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for Role {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Artist => Role::Artist,
            UserRole::Label => Role::Label,
            UserRole::Admin => Role::Admin,
        }
    }
}

/// The signed in user. Static for the whole session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
}

impl From<&UserSettings> for User {
    fn from(value: &UserSettings) -> Self {
        Self {
            name: value.name.clone(),
            role: value.role.into(),
            avatar: value
                .avatar
                .clone()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| initials(&value.name)),
        }
    }
}
