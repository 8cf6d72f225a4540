//! Division lookup operations

use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::single_match;
use super::urls::build_divisions_url;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Division, DivisionsResponse};

/// Fetches all currently active divisions. Expand tokens (e.g.
/// `division.conference`) are passed through verbatim.
#[instrument(skip(client, config))]
pub async fn fetch_divisions(
    client: &Client,
    config: &Config,
    expands: &[&str],
) -> Result<Vec<Division>, AppError> {
    let url = build_divisions_url(&config.api_domain, None, expands);
    let response: DivisionsResponse = fetch(client, &url).await?;

    let mut divisions = response.divisions;
    for division in divisions.iter_mut() {
        division.absolutize_links(&config.api_domain);
    }
    Ok(divisions)
}

/// Fetches a single division by id.
#[instrument(skip(client, config))]
pub async fn fetch_division_by_id(
    client: &Client,
    config: &Config,
    id: i64,
    expands: &[&str],
) -> Result<Division, AppError> {
    let url = build_divisions_url(&config.api_domain, Some(id), expands);
    let response: DivisionsResponse = fetch(client, &url).await?;

    let mut division = single_match(response.divisions, "division", id)?;
    division.absolutize_links(&config.api_domain);
    Ok(division)
}
