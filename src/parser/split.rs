//! Multi-bet splitting and league prefixes

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::League;

/// Separators between bets: commas, semicolons, newlines and the word "and"
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\band\b|[,;\r\n]").expect("separator pattern"));

/// `nfl:` / `nba ` at the very start of a line
static LEAGUE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(nba|nfl)(?:\s*:\s*|\s+)").expect("prefix pattern"));

/// Split a submission into trimmed, non-empty fragments, in input order
pub fn split_fragments(input: &str) -> Vec<&str> {
    SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Strip a leading league prefix, returning the forced league and the rest
pub fn strip_league_prefix(text: &str) -> (Option<League>, &str) {
    let Some(caps) = LEAGUE_PREFIX.captures(text) else {
        return (None, text);
    };
    let league = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<League>().ok());
    let rest = caps.get(0).map_or(text, |m| &text[m.end()..]);
    (league, rest)
}
