use serde::Deserialize;
use std::fmt;

/// A National Hockey League franchise.
///
/// A franchise is not the same as a team. The distinction matters for
/// franchises that have changed name or location over the years: the
/// franchise carries the up-to-date name and location while teams retain the
/// name used at the time. The team "Minnesota North Stars" belongs to the
/// "Dallas Stars" franchise, for example.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Franchise {
    #[serde(rename = "franchiseId")]
    pub id: i64,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "locationName")]
    pub location: String,
    #[serde(rename = "mostRecentTeamId")]
    pub most_recent_team_id: i64,
    #[serde(rename = "firstSeasonId")]
    pub first_season_id: i64,
    #[serde(rename = "lastSeasonId", default)]
    pub last_season_id: Option<i64>,
    pub link: String,
}

impl Franchise {
    /// Rewrites the relative `link` into an absolute address.
    pub(crate) fn absolutize_links(&mut self, api_domain: &str) {
        self.link = format!("{api_domain}{}", self.link);
    }
}

impl fmt::Display for Franchise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.location, self.team_name)
    }
}
