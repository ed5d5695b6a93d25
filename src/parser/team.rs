//! Team bets: moneyline, spread and game total

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{Direction, League, ParsedBet, TeamMoneyline, TeamSpread, TeamTotal};
use crate::error::ParseFailure;
use crate::lexicon::{self, TeamInfo};

static MONEYLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+(?:ml|moneyline)$").expect("moneyline pattern"));

static SPREAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+([+-]\d+(?:\.\d+)?)$").expect("spread pattern"));

/// "Over 45.5 Chiefs Lions"
static TOTAL_LEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(over|under)\s+(\d+(?:\.\d+)?)\s+(.+)$").expect("total pattern")
});

/// "Chiefs Lions Over 45.5"
static TOTAL_TRAILING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)\s+(over|under)\s+(\d+(?:\.\d+)?)$").expect("total pattern")
});

/// Explicit matchup separator between two team phrases
static MATCHUP_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:vs\.?|v\.?|versus|@|at)\s+").expect("matchup pattern")
});

/// How the team shapes handled a line
#[derive(Debug)]
pub enum TeamOutcome {
    Parsed(ParsedBet),
    /// A shape matched and the whole line is rejected
    Rejected(ParseFailure),
    /// No shape succeeded; carries the failure of any shape that matched syntactically
    NoMatch(Option<ParseFailure>),
}

/// Try the team shapes in order: moneyline, spread, total (both forms)
pub fn parse_team_bet(line: &str, forced: Option<League>) -> TeamOutcome {
    if let Some(caps) = MONEYLINE.captures(line) {
        return match resolve(&caps[1], forced) {
            Some(team) => TeamOutcome::Parsed(ParsedBet::TeamMoneyline(TeamMoneyline {
                league: team.league,
                team: team.to_ref(),
            })),
            None => TeamOutcome::Rejected(ParseFailure::TeamNotFound),
        };
    }

    let mut failure = None;

    if let Some(caps) = SPREAD.captures(line) {
        match (resolve(&caps[1], forced), caps[2].parse::<f64>()) {
            (Some(team), Ok(spread)) => {
                return TeamOutcome::Parsed(ParsedBet::TeamSpread(TeamSpread {
                    league: team.league,
                    team: team.to_ref(),
                    spread,
                }));
            }
            _ => failure = Some(ParseFailure::TeamNotFound),
        }
    }

    let total_parts = TOTAL_LEADING
        .captures(line)
        .map(|c| (c[1].to_string(), c[2].to_string(), c[3].to_string()))
        .or_else(|| {
            TOTAL_TRAILING
                .captures(line)
                .map(|c| (c[2].to_string(), c[3].to_string(), c[1].to_string()))
        });

    if let Some((direction, target, matchup)) = total_parts {
        match parse_total(&direction, &target, &matchup, forced) {
            Ok(bet) => return TeamOutcome::Parsed(bet),
            Err(reason) => failure = Some(reason),
        }
    }

    TeamOutcome::NoMatch(failure)
}

fn parse_total(
    direction: &str,
    target: &str,
    matchup: &str,
    forced: Option<League>,
) -> Result<ParsedBet, ParseFailure> {
    let direction = if direction.eq_ignore_ascii_case("under") {
        Direction::Under
    } else {
        Direction::Over
    };
    let target: f64 = target.parse().map_err(|_| ParseFailure::NoTarget)?;
    let (team1, team2) = resolve_matchup(matchup, forced)?;
    // Same rule as props: a zero line is not a bet
    if target == 0.0 {
        return Err(ParseFailure::ZeroTarget);
    }

    Ok(ParsedBet::TeamTotal(TeamTotal {
        league: team1.league,
        team1: team1.to_ref(),
        team2: team2.to_ref(),
        target,
        direction,
    }))
}

/// Split a matchup phrase into two teams from the same league.
///
/// An explicit separator ("vs", "@") decides the split; otherwise every word
/// boundary is tried left to right.
fn resolve_matchup(
    matchup: &str,
    forced: Option<League>,
) -> Result<(&'static TeamInfo, &'static TeamInfo), ParseFailure> {
    let candidates: Vec<(String, String)> = match MATCHUP_SEPARATOR.find(matchup) {
        Some(sep) => vec![(
            matchup[..sep.start()].to_string(),
            matchup[sep.end()..].to_string(),
        )],
        None => {
            let words: Vec<&str> = matchup.split_whitespace().collect();
            (1..words.len())
                .map(|i| (words[..i].join(" "), words[i..].join(" ")))
                .collect()
        }
    };

    let leagues: Vec<League> = match forced {
        Some(league) => vec![league],
        None => League::PROBE_ORDER.to_vec(),
    };

    let mut cross_league = false;
    for (left, right) in &candidates {
        for &league in &leagues {
            if let (Some(a), Some(b)) = (
                lexicon::resolve_team_in(left, league),
                lexicon::resolve_team_in(right, league),
            ) {
                return Ok((a, b));
            }
        }
        if forced.is_none()
            && lexicon::resolve_team(left).is_some()
            && lexicon::resolve_team(right).is_some()
        {
            cross_league = true;
        }
    }

    if cross_league {
        Err(ParseFailure::CrossLeagueTotal)
    } else {
        Err(ParseFailure::TeamNotFound)
    }
}

/// Resolve a team phrase, restricted to the forced league when there is one
fn resolve(phrase: &str, forced: Option<League>) -> Option<&'static TeamInfo> {
    match forced {
        Some(league) => lexicon::resolve_team_in(phrase, league),
        None => lexicon::resolve_team(phrase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> ParsedBet {
        match parse_team_bet(line, None) {
            TeamOutcome::Parsed(bet) => bet,
            other => panic!("expected a bet for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_moneyline() {
        let ParsedBet::TeamMoneyline(ml) = parsed("Lakers moneyline") else {
            panic!("not a moneyline");
        };
        assert_eq!(ml.team.abbreviation, "LAL");
        assert_eq!(ml.league, League::Nba);
    }

    #[test]
    fn test_moneyline_unknown_team_rejects_line() {
        assert!(matches!(
            parse_team_bet("Lebron ML", None),
            TeamOutcome::Rejected(ParseFailure::TeamNotFound)
        ));
    }

    #[test]
    fn test_spread_keeps_sign() {
        let ParsedBet::TeamSpread(s) = parsed("Celtics +7") else {
            panic!("not a spread");
        };
        assert_eq!(s.spread, 7.0);
        let ParsedBet::TeamSpread(s) = parsed("Kansas City Chiefs -3.5") else {
            panic!("not a spread");
        };
        assert_eq!(s.spread, -3.5);
        assert_eq!(s.team.name, "Chiefs");
    }

    #[test]
    fn test_total_with_separator() {
        let ParsedBet::TeamTotal(t) = parsed("Under 220.5 Lakers vs. Celtics") else {
            panic!("not a total");
        };
        assert_eq!(t.direction, Direction::Under);
        assert_eq!(t.team1.abbreviation, "LAL");
        assert_eq!(t.team2.abbreviation, "BOS");
    }

    #[test]
    fn test_total_multi_word_teams_without_separator() {
        let ParsedBet::TeamTotal(t) = parsed("Kansas City Chiefs Detroit Lions over 47") else {
            panic!("not a total");
        };
        assert_eq!(t.team1.abbreviation, "KC");
        assert_eq!(t.team2.abbreviation, "DET");
        assert_eq!(t.target, 47.0);
    }

    #[test]
    fn test_total_shared_abbreviation_resolves_within_one_league() {
        // "phi" alone would pick the Eagles; paired with the Celtics it must be the 76ers
        let ParsedBet::TeamTotal(t) = parsed("over 220 phi bos") else {
            panic!("not a total");
        };
        assert_eq!(t.league, League::Nba);
        assert_eq!(t.team1.name, "76ers");
    }

    #[test]
    fn test_total_cross_league_rejected() {
        assert!(matches!(
            parse_team_bet("Over 10 Lakers Chiefs", None),
            TeamOutcome::NoMatch(Some(ParseFailure::CrossLeagueTotal))
        ));
    }

    #[test]
    fn test_total_zero_target_rejected() {
        assert!(matches!(
            parse_team_bet("Over 0 Chiefs Lions", None),
            TeamOutcome::NoMatch(Some(ParseFailure::ZeroTarget))
        ));
        assert!(crate::parser::parse_line("Chiefs Lions under 0.0").is_none());
    }

    #[test]
    fn test_forced_league_restricts_team_lookup() {
        let outcome = parse_team_bet("phi ML", Some(League::Nba));
        let TeamOutcome::Parsed(ParsedBet::TeamMoneyline(ml)) = outcome else {
            panic!("expected moneyline");
        };
        assert_eq!(ml.team.name, "76ers");

        assert!(matches!(
            parse_team_bet("Chiefs ML", Some(League::Nba)),
            TeamOutcome::Rejected(ParseFailure::TeamNotFound)
        ));
    }

    #[test]
    fn test_prop_lines_fall_through() {
        assert!(matches!(parse_team_bet("lebron 25+ points", None), TeamOutcome::NoMatch(None)));
    }
}
