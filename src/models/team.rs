use super::conference::Conference;
use super::division::Division;
use super::franchise::Franchise;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

fn default_first_year_of_play() -> String {
    "unknown".to_string()
}

/// A National Hockey League team.
///
/// Teams exist for multiple seasons but get a new id when a relocation
/// happens. Plain name changes do not ("Mighty Ducks of Anaheim" share their
/// id with the renamed "Anaheim Ducks").
///
/// The typed fields form a closed schema. The expand payloads at the bottom
/// (`team_stats`, `roster`, ...) are deliberately untyped passthrough values:
/// the API is free to put anything inside them, and they stay `None` unless
/// the matching expand option was requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(rename = "locationName")]
    pub location: String,
    #[serde(rename = "franchiseId")]
    pub franchise_id: i64,
    pub active: bool,
    pub link: String,
    #[serde(rename = "firstYearOfPlay", default = "default_first_year_of_play")]
    pub first_year_of_play: String,
    #[serde(default)]
    pub venue: Option<Value>,
    pub division: Division,
    #[serde(default)]
    pub conference: Option<Conference>,
    /// Inline franchise payload from the wire. The /teams endpoint always
    /// includes one but it is incomplete unless `team.franchise` was
    /// expanded, so it is discarded and `franchise` is resolved through the
    /// franchise cache instead.
    #[serde(rename = "franchise", default)]
    pub(crate) raw_franchise: Option<Value>,
    /// Canonical franchise record, shared with every other `Team` that has
    /// the same `franchise_id`. Populated by the lookup operations, never
    /// from the raw response.
    #[serde(skip)]
    pub franchise: Option<Arc<Franchise>>,
    #[serde(rename = "officialSiteUrl", default)]
    pub official_site_url: Option<String>,

    // Untyped payloads added by expand options
    #[serde(rename = "teamStats", default)]
    pub team_stats: Option<Value>,
    #[serde(default)]
    pub roster: Option<Value>,
    #[serde(rename = "nextGameSchedule", default)]
    pub next_game_schedule: Option<Value>,
    #[serde(rename = "previousGameSchedule", default)]
    pub previous_game_schedule: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(rename = "deviceProperties", default)]
    pub device_properties: Option<Value>,
    #[serde(default)]
    pub social: Option<Value>,
    #[serde(default)]
    pub record: Option<Value>,
    #[serde(rename = "playoffInfo", default)]
    pub playoff_info: Option<Value>,
    #[serde(default)]
    pub tickets: Option<Value>,
    #[serde(rename = "otherNames", default)]
    pub other_names: Option<Value>,
}

impl Team {
    /// Rewrites the relative `link` (and the nested division's and
    /// conference's links) into absolute addresses.
    pub(crate) fn absolutize_links(&mut self, api_domain: &str) {
        self.link = format!("{api_domain}{}", self.link);
        self.division.absolutize_links(api_domain);
        if let Some(conference) = self.conference.as_mut() {
            conference.absolutize_links(api_domain);
        }
    }

    /// Drops the incomplete inline franchise payload and attaches the
    /// canonical cached record in its place.
    pub(crate) fn attach_franchise(&mut self, franchise: Arc<Franchise>) {
        self.raw_franchise = None;
        self.franchise = Some(franchise);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
