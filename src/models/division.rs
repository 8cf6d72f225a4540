use super::conference::Conference;
use serde::Deserialize;
use std::fmt;

/// A division in the National Hockey League.
///
/// For most (but not all) of the NHL history the teams playing in the league
/// have been divided into divisions. The names of the divisions (and which
/// teams play in which division) have changed multiple times over the years.
///
/// The nested `conference` is only populated when the `division.conference`
/// expand option was requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Division {
    pub id: i64,
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "nameShort", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub conference: Option<Conference>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Division {
    /// Rewrites the relative `link` (and the nested conference's link, when
    /// present) into absolute addresses.
    pub(crate) fn absolutize_links(&mut self, api_domain: &str) {
        self.link = format!("{api_domain}{}", self.link);
        if let Some(conference) = self.conference.as_mut() {
            conference.absolutize_links(api_domain);
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
