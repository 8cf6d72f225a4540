//! Franchise fetching
//!
//! This module only performs the raw network fetch of the full franchise
//! list. The public franchise lookups (`all`, `by_id`, `by_name`,
//! `by_location`) live on the client and are served through the
//! populate-once franchise cache, so this fetch runs at most once per cache
//! lifetime.

use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::urls::build_franchises_url;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Franchise, FranchisesResponse};

/// Fetches the complete franchise list (both active and defunct) from the
/// API, with links already rewritten to absolute form.
#[instrument(skip(client, config))]
pub async fn fetch_franchise_list(
    client: &Client,
    config: &Config,
) -> Result<Vec<Franchise>, AppError> {
    let url = build_franchises_url(&config.api_domain);
    let response: FranchisesResponse = fetch(client, &url).await?;

    let mut franchises = response.franchises;
    for franchise in franchises.iter_mut() {
        franchise.absolutize_links(&config.api_domain);
    }
    Ok(franchises)
}
