//! Stat vocabulary
//!
//! Two alias tables, one per league, because some tokens only make sense in
//! one sport ("td", "rec"). Lookups go through [`StatMatcher`], which orders
//! every table longest phrase first so combo stats ("points rebounds assists")
//! win over their single-stat prefixes ("points").

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::domain::{League, StatKey};

/// Football stat aliases (lowercase)
pub const NFL_STAT_ALIASES: &[(&str, StatKey)] = &[
    // Passing
    ("passing yards", StatKey::PassYards),
    ("passing yds", StatKey::PassYards),
    ("pass yards", StatKey::PassYards),
    ("pass yds", StatKey::PassYards),
    ("passing touchdowns", StatKey::PassTds),
    ("passing tds", StatKey::PassTds),
    ("passing td", StatKey::PassTds),
    ("pass tds", StatKey::PassTds),
    ("pass td", StatKey::PassTds),
    ("completions", StatKey::PassCompletions),
    ("pass completions", StatKey::PassCompletions),
    ("comp", StatKey::PassCompletions),
    ("cmp", StatKey::PassCompletions),
    ("pass attempts", StatKey::PassAttempts),
    ("passing attempts", StatKey::PassAttempts),
    ("pass att", StatKey::PassAttempts),
    ("interceptions", StatKey::Interceptions),
    ("interception", StatKey::Interceptions),
    ("ints", StatKey::Interceptions),
    ("int", StatKey::Interceptions),
    ("picks", StatKey::Interceptions),
    // Rushing
    ("rushing yards", StatKey::RushYards),
    ("rushing yds", StatKey::RushYards),
    ("rush yards", StatKey::RushYards),
    ("rush yds", StatKey::RushYards),
    ("rush attempts", StatKey::RushAttempts),
    ("rushing attempts", StatKey::RushAttempts),
    ("carries", StatKey::RushAttempts),
    // Receiving
    ("receiving yards", StatKey::RecYards),
    ("receiving yds", StatKey::RecYards),
    ("rec yards", StatKey::RecYards),
    ("rec yds", StatKey::RecYards),
    ("receptions", StatKey::Receptions),
    ("reception", StatKey::Receptions),
    ("catches", StatKey::Receptions),
    ("recs", StatKey::Receptions),
    ("rec", StatKey::Receptions),
    // Combos
    ("rushing receiving yards", StatKey::RushRecYards),
    ("rush rec yards", StatKey::RushRecYards),
    ("rush+rec yards", StatKey::RushRecYards),
    ("rush+rec yds", StatKey::RushRecYards),
    ("scrimmage yards", StatKey::RushRecYards),
    // Scoring
    ("anytime td", StatKey::Touchdowns),
    ("touchdowns", StatKey::Touchdowns),
    ("touchdown", StatKey::Touchdowns),
    ("tds", StatKey::Touchdowns),
    ("td", StatKey::Touchdowns),
];

/// Basketball stat aliases (lowercase)
pub const NBA_STAT_ALIASES: &[(&str, StatKey)] = &[
    // Points
    ("points", StatKey::Points),
    ("pts", StatKey::Points),
    ("point", StatKey::Points),
    ("pt", StatKey::Points),
    // Rebounds
    ("rebounds", StatKey::Rebounds),
    ("rebound", StatKey::Rebounds),
    ("rebs", StatKey::Rebounds),
    ("reb", StatKey::Rebounds),
    ("boards", StatKey::Rebounds),
    // Assists
    ("assists", StatKey::Assists),
    ("assist", StatKey::Assists),
    ("asts", StatKey::Assists),
    ("ast", StatKey::Assists),
    ("dimes", StatKey::Assists),
    // 3-pointers
    ("3 pointers", StatKey::Threes),
    ("3-pointers", StatKey::Threes),
    ("threes made", StatKey::Threes),
    ("threes", StatKey::Threes),
    ("three", StatKey::Threes),
    ("triples", StatKey::Threes),
    ("treys", StatKey::Threes),
    ("3pm", StatKey::Threes),
    ("3pt", StatKey::Threes),
    ("3s", StatKey::Threes),
    // Defense
    ("steals", StatKey::Steals),
    ("steal", StatKey::Steals),
    ("stls", StatKey::Steals),
    ("stl", StatKey::Steals),
    ("blocks", StatKey::Blocks),
    ("block", StatKey::Blocks),
    ("blks", StatKey::Blocks),
    ("blk", StatKey::Blocks),
    // Combos
    ("points rebounds assists", StatKey::PtsRebAst),
    ("pts+reb+ast", StatKey::PtsRebAst),
    ("p+r+a", StatKey::PtsRebAst),
    ("pra", StatKey::PtsRebAst),
    ("points rebounds", StatKey::PtsReb),
    ("pts+reb", StatKey::PtsReb),
    ("p+r", StatKey::PtsReb),
    ("pr", StatKey::PtsReb),
    ("points assists", StatKey::PtsAst),
    ("pts+ast", StatKey::PtsAst),
    ("p+a", StatKey::PtsAst),
    ("pa", StatKey::PtsAst),
    ("rebounds assists", StatKey::RebAst),
    ("reb+ast", StatKey::RebAst),
    ("r+a", StatKey::RebAst),
    ("ra", StatKey::RebAst),
    // Fantasy
    ("fantasy points", StatKey::Fantasy),
    ("fantasy", StatKey::Fantasy),
    ("fpts", StatKey::Fantasy),
    ("fp", StatKey::Fantasy),
];

/// Alias table for a league, in declaration order
pub fn aliases_for(league: League) -> &'static [(&'static str, StatKey)] {
    match league {
        League::Nfl => NFL_STAT_ALIASES,
        League::Nba => NBA_STAT_ALIASES,
    }
}

/// A stat phrase found in a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatMatch {
    pub key: StatKey,
    pub league: League,
    /// The alias that matched
    pub alias: &'static str,
    /// Byte range of the phrase in the searched text
    pub span: Range<usize>,
}

struct AliasPattern {
    alias: &'static str,
    key: StatKey,
    regex: Regex,
}

/// Compiled, longest-first view of one league's alias table
pub struct StatMatcher {
    league: League,
    patterns: Vec<AliasPattern>,
}

impl StatMatcher {
    fn build(league: League) -> Self {
        let mut patterns: Vec<AliasPattern> = aliases_for(league)
            .iter()
            .filter_map(|&(alias, key)| {
                alias_regex(alias).map(|regex| AliasPattern { alias, key, regex })
            })
            .collect();

        // Longest phrase first: word count, then characters.
        // Stable sort keeps declaration order for exact ties.
        patterns.sort_by(|a, b| {
            word_count(b.alias)
                .cmp(&word_count(a.alias))
                .then_with(|| b.alias.len().cmp(&a.alias.len()))
        });

        Self { league, patterns }
    }

    /// Aliases in the order they are tried
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, StatKey)> + '_ {
        self.patterns.iter().map(|p| (p.alias, p.key))
    }

    /// Whether any alias occurrence starts exactly at byte `pos`
    pub fn starts_at(&self, text: &str, pos: usize) -> bool {
        self.patterns.iter().any(|pattern| {
            pattern
                .regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .any(|m| m.start() == pos)
        })
    }

    /// First (longest) alias found as a whole phrase in `text`, ignoring
    /// occurrences that overlap any of the `skip` ranges.
    pub fn find(&self, text: &str, skip: &[Range<usize>]) -> Option<StatMatch> {
        for pattern in &self.patterns {
            let hit = pattern
                .regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .find(|m| !skip.iter().any(|s| overlaps(s, &m.range())));

            if let Some(m) = hit {
                return Some(StatMatch {
                    key: pattern.key,
                    league: self.league,
                    alias: pattern.alias,
                    span: m.range(),
                });
            }
        }
        None
    }
}

static NFL_MATCHER: LazyLock<StatMatcher> = LazyLock::new(|| StatMatcher::build(League::Nfl));
static NBA_MATCHER: LazyLock<StatMatcher> = LazyLock::new(|| StatMatcher::build(League::Nba));

/// Shared matcher for a league, compiled on first use
pub fn matcher(league: League) -> &'static StatMatcher {
    match league {
        League::Nfl => &NFL_MATCHER,
        League::Nba => &NBA_MATCHER,
    }
}

/// Whole-phrase, case-insensitive pattern for an alias, captured in group 1.
///
/// The phrase may not continue a word on either side, except that a digit
/// may sit directly before it ("25pts"). Inner spaces accept any whitespace run.
fn alias_regex(alias: &str) -> Option<Regex> {
    let body = alias
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)(?:^|[^\p{{L}}])({body})\b")).ok()
}

fn word_count(alias: &str) -> usize {
    alias.split_whitespace().count()
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
