//! Bet grammar parser
//!
//! Turns free-form text ("mahomes 300+ passing yards", "Chiefs -3.5",
//! "Over 45.5 Chiefs Lions") into [`ParsedBet`] records.
//!
//! A submission is split into fragments, and each fragment is tried against
//! the shapes in a fixed order: moneyline, spread, total (leading and
//! trailing forms), then the player-prop fallback. The first shape that
//! succeeds wins. Fragments that match nothing are dropped; [`BetParser::explain`]
//! reports why when a caller wants to know.

mod prop;
mod span;
mod split;
mod team;

pub use span::Consumed;
pub use split::{split_fragments, strip_league_prefix};

use serde::Serialize;

use crate::domain::{League, ParsedBet};
use crate::error::ParseFailure;
use team::TeamOutcome;

/// Outcome for one fragment of a submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentReport {
    pub fragment: String,
    /// League forced by a prefix or the parser default, if any
    pub forced_league: Option<League>,
    #[serde(flatten)]
    pub outcome: FragmentOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FragmentOutcome {
    Parsed { bet: ParsedBet },
    Dropped { reason: ParseFailure },
}

impl FragmentReport {
    pub fn bet(&self) -> Option<&ParsedBet> {
        match &self.outcome {
            FragmentOutcome::Parsed { bet } => Some(bet),
            FragmentOutcome::Dropped { .. } => None,
        }
    }
}

/// Stateless parser; the only setting is the league applied to input
/// that carries no prefix of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetParser {
    default_league: Option<League>,
}

impl BetParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_league(default_league: Option<League>) -> Self {
        Self { default_league }
    }

    pub fn default_league(&self) -> Option<League> {
        self.default_league
    }

    /// Parse a whole submission, keeping only the fragments that became bets.
    /// Output order follows input order.
    pub fn parse(&self, input: &str) -> Vec<ParsedBet> {
        self.explain(input)
            .into_iter()
            .filter_map(|report| match report.outcome {
                FragmentOutcome::Parsed { bet } => Some(bet),
                FragmentOutcome::Dropped { .. } => None,
            })
            .collect()
    }

    /// Parse a whole submission and report every fragment, parsed or not
    pub fn explain(&self, input: &str) -> Vec<FragmentReport> {
        // A prefix on the submission applies to all of its fragments
        let (input_league, body) = strip_league_prefix(input);
        let input_league = input_league.or(self.default_league);

        split_fragments(body)
            .into_iter()
            .map(|fragment| {
                let (fragment_league, line) = strip_league_prefix(fragment);
                let forced = fragment_league.or(input_league);
                let outcome = match parse_fragment(line, forced) {
                    Ok(bet) => FragmentOutcome::Parsed { bet },
                    Err(reason) => FragmentOutcome::Dropped { reason },
                };
                FragmentReport {
                    fragment: fragment.to_string(),
                    forced_league: forced,
                    outcome,
                }
            })
            .collect()
    }

    /// Parse a single line (no splitting). A league prefix is still honoured.
    pub fn parse_line(&self, line: &str) -> Option<ParsedBet> {
        self.parse_line_detailed(line).ok()
    }

    pub fn parse_line_detailed(&self, line: &str) -> Result<ParsedBet, ParseFailure> {
        let (prefix_league, line) = strip_league_prefix(line);
        parse_fragment(line, prefix_league.or(self.default_league))
    }
}

/// Parse a submission with default settings
pub fn parse_input(input: &str) -> Vec<ParsedBet> {
    BetParser::default().parse(input)
}

/// Parse one line with default settings
pub fn parse_line(line: &str) -> Option<ParsedBet> {
    BetParser::default().parse_line(line)
}

/// Classify one fragment into exactly one bet shape
fn parse_fragment(fragment: &str, forced: Option<League>) -> Result<ParsedBet, ParseFailure> {
    let line = fragment.trim();
    if line.is_empty() {
        return Err(ParseFailure::Empty);
    }

    match team::parse_team_bet(line, forced) {
        TeamOutcome::Parsed(bet) => Ok(bet),
        TeamOutcome::Rejected(reason) => Err(reason),
        TeamOutcome::NoMatch(team_failure) => {
            prop::parse_prop(line, forced).map_err(|prop_failure| {
                // Two real teams from different leagues says more than "no stat"
                match team_failure {
                    Some(ParseFailure::CrossLeagueTotal) => ParseFailure::CrossLeagueTotal,
                    _ => prop_failure,
                }
            })
        }
    }
}
