//! High-level client tying the HTTP transport, configuration, and franchise
//! cache together.

use std::sync::Arc;
use tracing::instrument;

use crate::api::http_client::create_http_client_with_timeout;
use crate::api::{conferences, divisions, franchises, teams};
use crate::cache::FranchiseCache;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Conference, Division, Franchise, Team};
use crate::normalize::normalized_eq;

/// Typed client for the NHL stats API.
///
/// Owns the HTTP connection pool and the franchise cache, so lookups made
/// through the same client share franchise instances. Constructing a new
/// client yields a fresh, empty cache.
///
/// # Examples
///
/// ```rust,no_run
/// use nhl_stats_client::{Config, NhlClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), nhl_stats_client::AppError> {
///     let client = NhlClient::new(Config::default())?;
///
///     let bruins = client.franchise_by_id(6).await?;
///     println!("{bruins}"); // "Boston Bruins"
///
///     let oilers = client.team_by_id(22, &["team.stats"]).await?;
///     println!("{} first played in {}", oilers, oilers.first_year_of_play);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct NhlClient {
    http: reqwest::Client,
    config: Config,
    franchise_cache: FranchiseCache,
}

impl NhlClient {
    /// Creates a client for the given configuration.
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(NhlClient {
            http,
            config,
            franchise_cache: FranchiseCache::new(),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // Conferences

    /// Lists all currently active conferences in the league.
    pub async fn conferences(&self) -> Result<Vec<Conference>, AppError> {
        conferences::fetch_conferences(&self.http, &self.config).await
    }

    /// Finds a conference by its id.
    pub async fn conference_by_id(&self, id: i64) -> Result<Conference, AppError> {
        conferences::fetch_conference_by_id(&self.http, &self.config, id).await
    }

    // Divisions

    /// Lists all currently active divisions in the league.
    pub async fn divisions(&self, expands: &[&str]) -> Result<Vec<Division>, AppError> {
        divisions::fetch_divisions(&self.http, &self.config, expands).await
    }

    /// Finds a division by its id.
    pub async fn division_by_id(&self, id: i64, expands: &[&str]) -> Result<Division, AppError> {
        divisions::fetch_division_by_id(&self.http, &self.config, id, expands).await
    }

    // Franchises (all served through the populate-once cache)

    /// Lists every franchise, both active and defunct.
    ///
    /// The franchise list rarely changes, so the first franchise lookup of
    /// any kind fetches and caches the full list; later calls are served
    /// from memory without network traffic.
    pub async fn franchises(&self) -> Result<Vec<Arc<Franchise>>, AppError> {
        self.franchise_cache
            .all(|| franchises::fetch_franchise_list(&self.http, &self.config))
            .await
    }

    /// Finds a franchise by its id.
    pub async fn franchise_by_id(&self, id: i64) -> Result<Arc<Franchise>, AppError> {
        self.franchise_cache
            .by_id(id, || franchises::fetch_franchise_list(&self.http, &self.config))
            .await
    }

    /// Finds a franchise by team name (not including location), matching
    /// case- and accent-insensitively.
    #[instrument(skip(self))]
    pub async fn franchise_by_name(&self, name: &str) -> Result<Arc<Franchise>, AppError> {
        self.franchises()
            .await?
            .into_iter()
            .find(|franchise| normalized_eq(&franchise.team_name, name))
            .ok_or_else(|| AppError::not_found("franchise", format!("name={name}")))
    }

    /// Finds franchises by location, matching case- and accent-insensitively.
    /// Returns an empty list when nothing matches.
    #[instrument(skip(self))]
    pub async fn franchise_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<Arc<Franchise>>, AppError> {
        Ok(self
            .franchises()
            .await?
            .into_iter()
            .filter(|franchise| normalized_eq(&franchise.location, location))
            .collect())
    }

    // Teams

    /// Lists all currently active teams.
    pub async fn teams(&self, expands: &[&str]) -> Result<Vec<Team>, AppError> {
        teams::fetch_teams(&self.http, &self.config, &self.franchise_cache, expands).await
    }

    /// Finds a team by its id.
    pub async fn team_by_id(&self, id: i64, expands: &[&str]) -> Result<Team, AppError> {
        teams::fetch_team_by_id(&self.http, &self.config, &self.franchise_cache, id, expands).await
    }

    /// Lists the teams that were active during the given season
    /// (e.g. `20112012` for the 2011-2012 season).
    pub async fn teams_by_season(
        &self,
        season: i64,
        expands: &[&str],
    ) -> Result<Vec<Team>, AppError> {
        teams::fetch_teams_by_season(&self.http, &self.config, &self.franchise_cache, season, expands)
            .await
    }
}
