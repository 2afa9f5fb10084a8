use chrono::NaiveDate;
use dialoguer::console::style;
use dialoguer::{Confirm, Input, Select};
use eyre::Result;
use strum::IntoEnumIterator;

use common::form::{ReleaseDraft, SubmitError};
use common::Dashboard;
use entity::{CreatedRelease, ReleaseType};

use crate::theme::DialoguerTheme;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn text(theme: &DialoguerTheme, prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn parse_date(input: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map(Some)
}

/// Asks for every field, prefilled with what the draft already holds.
fn prompt_draft(theme: &DialoguerTheme, draft: &mut ReleaseDraft) -> Result<()> {
    draft.title = text(theme, "Release title", &draft.title)?;
    draft.artist_name = text(theme, "Artist name", &draft.artist_name)?;

    let types = ReleaseType::iter().collect::<Vec<_>>();
    let current = types
        .iter()
        .position(|t| *t == draft.release_type)
        .unwrap_or_default();
    let picked = Select::with_theme(theme)
        .with_prompt("Release type")
        .items(&types.iter().map(|t| t.label()).collect::<Vec<_>>())
        .default(current)
        .interact()?;
    draft.release_type = types[picked];

    draft.genre = text(theme, "Genre", &draft.genre)?;

    let initial = draft
        .release_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    let date: String = Input::with_theme(theme)
        .with_prompt("Release date (YYYY-MM-DD, optional)")
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_date(input)
                .map(|_| ())
                .map_err(|e| format!("Invalid date: {}", e))
        })
        .interact_text()?;
    draft.release_date = parse_date(&date)?;
    Ok(())
}

/// Runs the creation modal until the release is created or the user gives up.
/// A rejected attempt keeps every answer for the next round.
pub async fn create(dash: &mut Dashboard) -> Result<Option<CreatedRelease>> {
    let theme = DialoguerTheme::default();
    dash.open_release_form();
    loop {
        prompt_draft(&theme, dash.form_mut().draft_mut())?;
        match dash.submit_release().await {
            Ok(created) => return Ok(created),
            Err(e @ SubmitError::Invalid(_)) => eprintln!("{}", style(e).yellow()),
            // already reported through the notifier
            Err(SubmitError::Api(_)) => {}
            Err(e) => return Err(e.into()),
        }
        if !Confirm::with_theme(&theme)
            .with_prompt("Edit the release and try again?")
            .default(true)
            .interact()?
        {
            dash.form_mut().cancel();
            tracing::info!("Release creation cancelled");
            return Ok(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_date_is_unset() {
        assert_eq!(parse_date("  ").unwrap(), None);
    }

    #[test]
    fn iso_date_parses() {
        assert_eq!(
            parse_date("2026-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
        assert!(parse_date("15.01.2026").is_err());
    }
}
