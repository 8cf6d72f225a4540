//! URL building for the stats API endpoints

use crate::constants::endpoints;

fn with_query(base: String, pairs: Vec<(&'static str, String)>) -> String {
    if pairs.is_empty() {
        return base;
    }
    let query: Vec<String> = pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("{base}?{}", query.join("&"))
}

fn expand_pairs(expands: &[&str]) -> Vec<(&'static str, String)> {
    expands
        .iter()
        .map(|token| ("expand", (*token).to_string()))
        .collect()
}

/// Builds the conferences URL, optionally filtered by conference id.
///
/// # Example
/// ```
/// use nhl_stats_client::api::urls::build_conferences_url;
///
/// let url = build_conferences_url("https://statsapi.web.nhl.com", Some(6));
/// assert_eq!(url, "https://statsapi.web.nhl.com/api/v1/conferences?conferenceId=6");
/// ```
pub fn build_conferences_url(api_domain: &str, conference_id: Option<i64>) -> String {
    let base = format!("{api_domain}{}", endpoints::CONFERENCES);
    let mut pairs = Vec::new();
    if let Some(id) = conference_id {
        pairs.push(("conferenceId", id.to_string()));
    }
    with_query(base, pairs)
}

/// Builds the divisions URL, optionally filtered by division id, with expand
/// tokens passed through verbatim as repeated `expand` parameters.
///
/// # Example
/// ```
/// use nhl_stats_client::api::urls::build_divisions_url;
///
/// let url = build_divisions_url(
///     "https://statsapi.web.nhl.com",
///     Some(15),
///     &["division.conference"],
/// );
/// assert_eq!(
///     url,
///     "https://statsapi.web.nhl.com/api/v1/divisions?divisionId=15&expand=division.conference"
/// );
/// ```
pub fn build_divisions_url(api_domain: &str, division_id: Option<i64>, expands: &[&str]) -> String {
    let base = format!("{api_domain}{}", endpoints::DIVISIONS);
    let mut pairs = Vec::new();
    if let Some(id) = division_id {
        pairs.push(("divisionId", id.to_string()));
    }
    pairs.extend(expand_pairs(expands));
    with_query(base, pairs)
}

/// Builds the franchises URL. The endpoint takes no filters.
///
/// # Example
/// ```
/// use nhl_stats_client::api::urls::build_franchises_url;
///
/// let url = build_franchises_url("https://statsapi.web.nhl.com");
/// assert_eq!(url, "https://statsapi.web.nhl.com/api/v1/franchises");
/// ```
pub fn build_franchises_url(api_domain: &str) -> String {
    format!("{api_domain}{}", endpoints::FRANCHISES)
}

/// Builds the teams URL with optional id and season filters plus expand
/// tokens.
///
/// # Example
/// ```
/// use nhl_stats_client::api::urls::build_teams_url;
///
/// let url = build_teams_url("https://statsapi.web.nhl.com", Some(22), None, &["team.stats"]);
/// assert_eq!(
///     url,
///     "https://statsapi.web.nhl.com/api/v1/teams?teamId=22&expand=team.stats"
/// );
/// ```
pub fn build_teams_url(
    api_domain: &str,
    team_id: Option<i64>,
    season: Option<i64>,
    expands: &[&str],
) -> String {
    let base = format!("{api_domain}{}", endpoints::TEAMS);
    let mut pairs = Vec::new();
    if let Some(id) = team_id {
        pairs.push(("teamId", id.to_string()));
    }
    if let Some(season) = season {
        pairs.push(("season", season.to_string()));
    }
    pairs.extend(expand_pairs(expands));
    with_query(base, pairs)
}
