//! Conference lookup operations

use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::single_match;
use super::urls::build_conferences_url;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Conference, ConferencesResponse};

/// Fetches all currently active conferences in the league.
#[instrument(skip(client, config))]
pub async fn fetch_conferences(
    client: &Client,
    config: &Config,
) -> Result<Vec<Conference>, AppError> {
    let url = build_conferences_url(&config.api_domain, None);
    let response: ConferencesResponse = fetch(client, &url).await?;

    let mut conferences = response.conferences;
    for conference in conferences.iter_mut() {
        conference.absolutize_links(&config.api_domain);
    }
    Ok(conferences)
}

/// Fetches a single conference by id. An empty result collection is
/// `NotFound`; more than one match for an id is `AmbiguousId`.
#[instrument(skip(client, config))]
pub async fn fetch_conference_by_id(
    client: &Client,
    config: &Config,
    id: i64,
) -> Result<Conference, AppError> {
    let url = build_conferences_url(&config.api_domain, Some(id));
    let response: ConferencesResponse = fetch(client, &url).await?;

    let mut conference = single_match(response.conferences, "conference", id)?;
    conference.absolutize_links(&config.api_domain);
    Ok(conference)
}
