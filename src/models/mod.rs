//! Typed models for the entities served by the stats API.
//!
//! Each entity is a strict, closed schema: unknown fields on a typed record
//! fail parsing. Remote camelCase field names are mapped to local snake_case
//! names with serde renames, and every `link` field is rewritten to an
//! absolute address right after parsing.

pub mod conference;
pub mod division;
pub mod franchise;
pub mod team;

pub use conference::Conference;
pub use division::Division;
pub use franchise::Franchise;
pub use team::Team;

use serde::Deserialize;

/// Response envelope of `/api/v1/conferences`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConferencesResponse {
    pub conferences: Vec<Conference>,
}

/// Response envelope of `/api/v1/divisions`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DivisionsResponse {
    pub divisions: Vec<Division>,
}

/// Response envelope of `/api/v1/franchises`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FranchisesResponse {
    pub franchises: Vec<Franchise>,
}

/// Response envelope of `/api/v1/teams`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TeamsResponse {
    pub teams: Vec<Team>,
}
