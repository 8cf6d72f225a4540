//! Static expand-option tables for each entity type.
//!
//! Expand options are string tokens sent verbatim to the API as repeated
//! `expand` query parameters. The tables are documentation-grade metadata:
//! the client does not validate tokens against them and passes unrecognized
//! tokens through unchanged.

/// A recognized expand option for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOption {
    /// Token sent to the API, e.g. `"team.roster"`.
    pub token: &'static str,
    /// Which optional fields the token populates in the response.
    pub adds: &'static str,
}

/// Conferences support no expand options.
pub const CONFERENCE_EXPANDS: &[ExpandOption] = &[];

/// Franchises support no expand options.
pub const FRANCHISE_EXPANDS: &[ExpandOption] = &[];

pub const DIVISION_EXPANDS: &[ExpandOption] = &[ExpandOption {
    token: "division.conference",
    adds: "conference.{abbreviation,short_name,active}",
}];

pub const TEAM_EXPANDS: &[ExpandOption] = &[
    ExpandOption {
        token: "team.stats",
        adds: "team_stats",
    },
    ExpandOption {
        token: "team.roster",
        adds: "roster",
    },
    ExpandOption {
        token: "team.division",
        adds: "division.conference (conference is already in the team root)",
    },
    ExpandOption {
        token: "team.conference",
        adds: "conference.{abbreviation,short_name,active}",
    },
    // Never needed in practice: the client resolves the full franchise
    // through the franchise cache regardless.
    ExpandOption {
        token: "team.franchise",
        adds: "franchise.{first_season_id,most_recent_team_id,location}",
    },
    ExpandOption {
        token: "team.schedule.previous",
        adds: "previous_game_schedule",
    },
    ExpandOption {
        token: "team.schedule.next",
        adds: "next_game_schedule",
    },
    ExpandOption {
        token: "team.ticket",
        adds: "tickets",
    },
    ExpandOption {
        token: "team.content.home.all",
        adds: "content",
    },
    ExpandOption {
        token: "team.content.sections",
        adds: "content",
    },
    ExpandOption {
        token: "team.record",
        adds: "record (regular season)",
    },
    ExpandOption {
        token: "team.playoffs",
        adds: "playoff_info",
    },
    ExpandOption {
        token: "team.name",
        adds: "other_names",
    },
    ExpandOption {
        token: "team.social",
        adds: "social (twitter, facebook, instagram...)",
    },
    ExpandOption {
        token: "team.deviceProperties",
        adds: "device_properties",
    },
];
