//! Player props: "<name> <number>[+|-] <stat>" in any word order

use regex::Regex;
use std::sync::LazyLock;

use super::span::Consumed;
use crate::domain::{Direction, League, ParsedBet, PlayerProp};
use crate::error::ParseFailure;
use crate::lexicon;

static UNDER_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(under)\s").expect("keyword pattern"));

static OVER_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(over)\s").expect("keyword pattern"));

/// "25+" / "4.5 -" / "25-pts": the suffix sign sets the direction
static SIGNED_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*([+-])").expect("target pattern"));

/// A number standing on its own ("25", not the 3 in "3pm")
static BARE_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w.])(\d+(?:\.\d+)?)\b").expect("target pattern")
});

/// Any number at all, including one glued to a word ("25pts")
static ANY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern"));

/// Extract a player prop from one line.
///
/// Works on the lowercased line without rewriting it: each step records the
/// byte range it used, and the player name is whatever no step claimed.
pub fn parse_prop(line: &str, forced: Option<League>) -> Result<ParsedBet, ParseFailure> {
    let text = line.trim().to_lowercase();
    if text.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let mut consumed = Consumed::new();

    // Direction keyword; "under" is checked first
    let mut direction = Direction::Over;
    if let Some(m) = UNDER_KEYWORD.captures(&text).and_then(|c| c.get(1)) {
        direction = Direction::Under;
        consumed.claim(m.range());
    } else if let Some(m) = OVER_KEYWORD.captures(&text).and_then(|c| c.get(1)) {
        consumed.claim(m.range());
    }

    // Target; a +/- suffix beats the keyword. A number that opens a stat
    // alias ("3-pointers") is part of the stat, not a signed target.
    let signed = SIGNED_TARGET.captures_iter(&text).find_map(|caps| {
        let (number, sign) = (caps.get(1)?, caps.get(2)?);
        if lexicon::stat_starts_at(&text, number.start(), forced) {
            None
        } else {
            Some((number, sign))
        }
    });

    let target = match signed {
        Some((number, sign)) => {
            direction = if sign.as_str() == "+" {
                Direction::Over
            } else {
                Direction::Under
            };
            consumed.claim(number.start()..sign.end());
            number.as_str().parse::<f64>().ok()
        }
        None => {
            let number = BARE_TARGET
                .captures(&text)
                .and_then(|c| c.get(1))
                .or_else(|| ANY_NUMBER.find(&text));
            number.and_then(|m| {
                consumed.claim(m.range());
                m.as_str().parse::<f64>().ok()
            })
        }
    };

    let target = match target {
        None => return Err(ParseFailure::NoTarget),
        Some(t) if t == 0.0 => return Err(ParseFailure::ZeroTarget),
        Some(t) => t,
    };

    let stat = lexicon::find_stat(&text, forced, consumed.ranges()).ok_or(ParseFailure::NoStat)?;
    consumed.claim(stat.span.clone());

    let player_name = title_case(&clean_name(&consumed.remainder(&text)));
    if player_name.is_empty() {
        return Err(ParseFailure::NoPlayerName);
    }

    Ok(ParsedBet::PlayerProp(PlayerProp {
        league: forced.unwrap_or(stat.league),
        player_name,
        stat_type: stat.key,
        target,
        direction,
        display_stat: stat.key.label().to_string(),
    }))
}

/// Collapse whitespace and drop trailing commas, dots and dashes
fn clean_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches([',', '.', '-'])
        .trim()
        .to_string()
}

/// Upper-case the first letter of every word, leave the rest alone
fn title_case(name: &str) -> String {
    name.split(' ')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
