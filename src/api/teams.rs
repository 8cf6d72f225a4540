//! Team lookup operations
//!
//! Teams are the one entity that cross-references the franchise cache: the
//! inline franchise payload in a /teams response is incomplete, so it is
//! discarded and the `franchise` field is resolved through the cache instead.
//! This also means every team with the same franchise id shares one
//! `Arc<Franchise>` rather than carrying its own copy.

use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::franchises::fetch_franchise_list;
use super::single_match;
use super::urls::build_teams_url;
use crate::cache::FranchiseCache;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Team, TeamsResponse};

async fn finalize_teams(
    client: &Client,
    config: &Config,
    cache: &FranchiseCache,
    mut teams: Vec<Team>,
) -> Result<Vec<Team>, AppError> {
    for team in teams.iter_mut() {
        team.absolutize_links(&config.api_domain);
        let franchise = cache
            .by_id(team.franchise_id, || fetch_franchise_list(client, config))
            .await?;
        team.attach_franchise(franchise);
    }
    Ok(teams)
}

/// Fetches all currently active teams.
#[instrument(skip(client, config, cache))]
pub async fn fetch_teams(
    client: &Client,
    config: &Config,
    cache: &FranchiseCache,
    expands: &[&str],
) -> Result<Vec<Team>, AppError> {
    let url = build_teams_url(&config.api_domain, None, None, expands);
    let response: TeamsResponse = fetch(client, &url).await?;
    finalize_teams(client, config, cache, response.teams).await
}

/// Fetches a single team by id.
#[instrument(skip(client, config, cache))]
pub async fn fetch_team_by_id(
    client: &Client,
    config: &Config,
    cache: &FranchiseCache,
    id: i64,
    expands: &[&str],
) -> Result<Team, AppError> {
    let url = build_teams_url(&config.api_domain, Some(id), None, expands);
    let response: TeamsResponse = fetch(client, &url).await?;

    let team = single_match(response.teams, "team", id)?;
    let mut teams = finalize_teams(client, config, cache, vec![team]).await?;
    Ok(teams.remove(0))
}

/// Fetches the teams that were active during the given season
/// (e.g. `20112012` for the 2011-2012 season).
#[instrument(skip(client, config, cache))]
pub async fn fetch_teams_by_season(
    client: &Client,
    config: &Config,
    cache: &FranchiseCache,
    season: i64,
    expands: &[&str],
) -> Result<Vec<Team>, AppError> {
    let url = build_teams_url(&config.api_domain, None, Some(season), expands);
    let response: TeamsResponse = fetch(client, &url).await?;
    finalize_teams(client, config, cache, response.teams).await
}
