use chrono::NaiveDate;
use std::fmt::Display;
use thiserror::Error;

use crate::fetch::{ApiError, ReleaseApi};
use crate::notify::{Notification, Notifier};
use entity::{CreatedRelease, NewRelease, ReleaseType};

pub const CREATED_TITLE: &str = "Release created!";
pub const CREATED_DESCRIPTION: &str = "Your release was added to drafts";
pub const ERROR_TITLE: &str = "Error";
pub const GENERIC_ERROR: &str = "Could not create the release";

/// Unsaved values of the release creation form.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDraft {
    pub title: String,
    pub artist_name: String,
    pub release_type: ReleaseType,
    pub genre: String,
    pub release_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    ArtistName,
    Genre,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::ArtistName => write!(f, "artist name"),
            Field::Genre => write!(f, "genre"),
        }
    }
}

impl ReleaseDraft {
    /// Mandatory fields left blank.
    pub fn missing(&self) -> Vec<Field> {
        [
            (Field::Title, &self.title),
            (Field::ArtistName, &self.artist_name),
            (Field::Genre, &self.genre),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(f, _)| f)
        .collect()
    }

    pub fn to_request(&self, user_id: i64) -> NewRelease {
        NewRelease {
            title: self.title.trim().to_string(),
            artist_name: self.artist_name.trim().to_string(),
            release_type: self.release_type,
            genre: self.genre.trim().to_string(),
            release_date: self.release_date,
            user_id,
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Editing,
    Submitting,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("The release form is not open for editing (currently {0:?})")]
    NotEditing(FormState),

    #[error("Missing required fields: {}", join_fields(.0))]
    Invalid(Vec<Field>),

    #[error("Could not create the release: {0}")]
    Api(#[from] ApiError),
}

/// The release creation modal.
///
/// `Closed -> Editing -> Submitting -> Closed` on success, back to `Editing`
/// with the draft untouched on failure.
#[derive(Default, Debug, Clone)]
pub struct ReleaseForm {
    state: FormState,
    draft: ReleaseDraft,
}

impl ReleaseForm {
    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn draft(&self) -> &ReleaseDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ReleaseDraft {
        &mut self.draft
    }

    pub fn open(&mut self) {
        if self.state == FormState::Closed {
            self.state = FormState::Editing;
        }
    }

    /// Closes the form and discards the draft. Ignored while submitting.
    pub fn cancel(&mut self) {
        if self.state != FormState::Submitting {
            self.state = FormState::Closed;
            self.draft = ReleaseDraft::default();
        }
    }

    /// Sends the draft to the releases endpoint, exactly once.
    pub async fn submit(
        &mut self,
        api: &dyn ReleaseApi,
        notifier: &dyn Notifier,
        user_id: i64,
    ) -> Result<Option<CreatedRelease>, SubmitError> {
        if self.state != FormState::Editing {
            return Err(SubmitError::NotEditing(self.state));
        }
        let missing = self.draft.missing();
        if !missing.is_empty() {
            return Err(SubmitError::Invalid(missing));
        }

        self.state = FormState::Submitting;
        let request = self.draft.to_request(user_id);
        tracing::debug! {title = %request.title, release_type = %request.release_type, "Submitting release"};
        match api.create_release(&request).await {
            Ok(created) => {
                tracing::info! {id = ?created.as_ref().map(|c| c.id), "Release created"};
                notifier.notify(Notification::success(CREATED_TITLE, CREATED_DESCRIPTION));
                self.draft = ReleaseDraft::default();
                self.state = FormState::Closed;
                Ok(created)
            }
            Err(error) => {
                tracing::warn! {%error, "Release creation failed"};
                let description = error.server_message().unwrap_or(GENERIC_ERROR);
                notifier.notify(Notification::error(ERROR_TITLE, description));
                self.state = FormState::Editing;
                Err(error.into())
            }
        }
    }
}
