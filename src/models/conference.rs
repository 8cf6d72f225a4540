use serde::Deserialize;
use std::fmt;

/// A conference in the National Hockey League.
///
/// The schema is closed: a response object carrying a field not listed here
/// fails deserialization instead of being silently accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conference {
    pub id: i64,
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Conference {
    /// Rewrites the relative `link` returned by the API into an absolute,
    /// dereferenceable address. Applied unconditionally after parsing.
    pub(crate) fn absolutize_links(&mut self, api_domain: &str) {
        self.link = format!("{api_domain}{}", self.link);
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
