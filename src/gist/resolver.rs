//! Gist selector resolution
//!
//! Turns the user's selector into a concrete gist ID. An explicit selector
//! is passed through untouched; an empty one lists the user's recent gists
//! and asks them to pick one.

use chrono::{DateTime, Utc};
use log::debug;

use super::models::Gist;
use crate::config::api;
use crate::error::{GistError, Result};
use crate::gist::GistClient;
use crate::ui::{clear_spinner, create_spinner, Prompter};

/// Prompt title shown above the gist list
pub const SELECT_PROMPT: &str = "Select a gist";

/// Label used when a gist has no files
const NO_FILES_LABEL: &str = "(no files)";

/// Descriptions longer than this are cut in the prompt
const MAX_DESCRIPTION_WIDTH: usize = 100;

/// Resolve a selector to a gist ID
///
/// # Arguments
/// * `selector` - Gist ID, or empty to choose interactively
/// * `client` - Gist API client
/// * `prompter` - Selection prompt, `None` when no terminal is attached
/// * `quiet` - If true, no spinners
pub async fn resolve_selector(
    selector: &str,
    client: &GistClient,
    prompter: Option<&dyn Prompter>,
    quiet: bool,
) -> Result<String> {
    if !selector.is_empty() {
        debug!("Using gist ID from argument: {}", selector);
        return Ok(selector.to_string());
    }

    let prompter = prompter.ok_or(GistError::NonInteractive)?;

    let spinner = create_spinner("Fetching gists...", quiet);
    let gists = client.list_my_gists(api::PROMPT_GIST_LIMIT).await;
    clear_spinner(spinner);
    let gists = gists?;

    if gists.is_empty() {
        return Err(GistError::NoGists);
    }

    let now = Utc::now();
    let labels: Vec<String> = gists.iter().map(|g| gist_label(g, now)).collect();

    let index = prompter.select(SELECT_PROMPT, &labels)?;
    let gist = gists.get(index).ok_or_else(|| {
        GistError::Resolution(format!(
            "selection {} is out of range ({} gists)",
            index,
            gists.len()
        ))
    })?;

    debug!("User selected gist: {}", gist.id);
    Ok(gist.id.clone())
}

/// Build the prompt label for a gist: file name, description, age
pub fn gist_label(gist: &Gist, now: DateTime<Utc>) -> String {
    let name = gist.first_file_name().unwrap_or(NO_FILES_LABEL);
    let description = truncate(
        &collapse_whitespace(gist.description()),
        MAX_DESCRIPTION_WIDTH,
    );
    format!(
        "{} {} {}",
        name,
        description,
        fuzzy_ago(now, gist.updated_at)
    )
}

/// Human-relative age, e.g. "about 6 hours ago"
pub fn fuzzy_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let ago = now.signed_duration_since(then);
    let hours = ago.num_hours();

    if ago.num_minutes() < 1 {
        "less than a minute ago".to_string()
    } else if hours < 1 {
        about(ago.num_minutes(), "minute")
    } else if hours < 24 {
        about(hours, "hour")
    } else if hours < 30 * 24 {
        about(hours / 24, "day")
    } else if hours < 365 * 24 {
        about(hours / 24 / 30, "month")
    } else {
        about(hours / 24 / 365, "year")
    }
}

fn about(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("about 1 {} ago", unit)
    } else {
        format!("about {} {}s ago", amount, unit)
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to `max` characters, ending with "..." when cut
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
