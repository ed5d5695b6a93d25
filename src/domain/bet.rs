use serde::{Deserialize, Serialize};

use super::{League, StatKey};

/// Which side of a line the bet is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Over,
    Under,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Over => "over",
            Direction::Under => "under",
        }
    }

    /// Suffix used in "25+" / "25-" style lines
    pub fn symbol(&self) -> char {
        match self {
            Direction::Over => '+',
            Direction::Under => '-',
        }
    }

    /// Single-letter prefix used for totals ("O 45.5")
    pub fn initial(&self) -> char {
        match self {
            Direction::Over => 'O',
            Direction::Under => 'U',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A team as resolved from the alias tables
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRef {
    pub abbreviation: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProp {
    pub league: League,
    /// Title-cased player name as typed
    pub player_name: String,
    pub stat_type: StatKey,
    pub target: f64,
    pub direction: Direction,
    pub display_stat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMoneyline {
    pub league: League,
    pub team: TeamRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSpread {
    pub league: League,
    pub team: TeamRef,
    /// Handicap exactly as typed; -3.5 means the team must win by more than 3.5
    pub spread: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTotal {
    pub league: League,
    pub team1: TeamRef,
    pub team2: TeamRef,
    pub target: f64,
    pub direction: Direction,
}

/// Structured bet produced from one line of user input.
///
/// Every variant carries enough to be shown and looked up against a live
/// stats provider without going back to the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "betType", rename_all = "snake_case")]
pub enum ParsedBet {
    PlayerProp(PlayerProp),
    TeamMoneyline(TeamMoneyline),
    TeamSpread(TeamSpread),
    TeamTotal(TeamTotal),
}

/// Bet shape without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetKind {
    PlayerProp,
    TeamMoneyline,
    TeamSpread,
    TeamTotal,
}

impl BetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetKind::PlayerProp => "player_prop",
            BetKind::TeamMoneyline => "team_moneyline",
            BetKind::TeamSpread => "team_spread",
            BetKind::TeamTotal => "team_total",
        }
    }
}

impl std::fmt::Display for BetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ParsedBet {
    pub fn kind(&self) -> BetKind {
        match self {
            ParsedBet::PlayerProp(_) => BetKind::PlayerProp,
            ParsedBet::TeamMoneyline(_) => BetKind::TeamMoneyline,
            ParsedBet::TeamSpread(_) => BetKind::TeamSpread,
            ParsedBet::TeamTotal(_) => BetKind::TeamTotal,
        }
    }

    pub fn league(&self) -> League {
        match self {
            ParsedBet::PlayerProp(p) => p.league,
            ParsedBet::TeamMoneyline(m) => m.league,
            ParsedBet::TeamSpread(s) => s.league,
            ParsedBet::TeamTotal(t) => t.league,
        }
    }

    /// Headline shown on a bet card, e.g. "Lebron 25+ PTS" or "Chiefs -3.5"
    pub fn display_title(&self) -> String {
        match self {
            ParsedBet::PlayerProp(p) => format!(
                "{} {}{} {}",
                p.player_name,
                p.target,
                p.direction.symbol(),
                p.display_stat
            ),
            ParsedBet::TeamMoneyline(m) => format!("{} ML", m.team.name),
            ParsedBet::TeamSpread(s) => format!("{} {}", s.team.name, format_signed(s.spread)),
            ParsedBet::TeamTotal(t) => format!(
                "{} {} {} vs {}",
                t.direction.initial(),
                t.target,
                t.team1.name,
                t.team2.name
            ),
        }
    }
}

/// Format a line with an explicit sign ("+7", "-3.5")
pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        format!("{value}")
    }
}
