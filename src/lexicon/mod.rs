//! Lexical resolver
//!
//! Maps informal stat vocabulary and team names to canonical identifiers and
//! reports which league a match implies. Both lookups answer `None` when
//! nothing matches; a miss is an ordinary outcome, not an error.

pub mod stats;
pub mod teams;

use std::ops::Range;

use crate::domain::League;

pub use stats::{aliases_for, matcher, StatMatch, StatMatcher};
pub use teams::{normalize_team_key, teams_for, TeamInfo};

/// Find a stat phrase anywhere in `text`.
///
/// Tables are probed in [`League::probe_order`]: `preferred` first when given,
/// otherwise football before basketball. Within a table the longest alias wins.
pub fn resolve_stat(text: &str, preferred: Option<League>) -> Option<StatMatch> {
    find_stat(text, preferred, &[])
}

/// Like [`resolve_stat`], but ignores matches overlapping `skip`
pub fn find_stat(
    text: &str,
    preferred: Option<League>,
    skip: &[Range<usize>],
) -> Option<StatMatch> {
    League::probe_order(preferred)
        .into_iter()
        .find_map(|league| matcher(league).find(text, skip))
}

/// Whether some stat alias of either league begins exactly at byte `pos`
pub fn stat_starts_at(text: &str, pos: usize, preferred: Option<League>) -> bool {
    League::probe_order(preferred)
        .into_iter()
        .any(|league| matcher(league).starts_at(text, pos))
}

/// Resolve a whole phrase to a team, probing both leagues.
///
/// Exact, case-insensitive and whitespace-normalised; never partial.
pub fn resolve_team(text: &str) -> Option<&'static TeamInfo> {
    League::PROBE_ORDER
        .into_iter()
        .find_map(|league| teams::lookup(text, league))
}

/// Resolve a whole phrase against one league only
pub fn resolve_team_in(text: &str, league: League) -> Option<&'static TeamInfo> {
    teams::lookup(text, league)
}
