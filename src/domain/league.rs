use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sport context that decides which stat and team vocabulary applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Nba,
    Nfl,
}

impl League {
    /// Lookup order when the caller has no league in mind.
    /// Football vocabulary collides less with everyday words, so it goes first.
    pub const PROBE_ORDER: [League; 2] = [League::Nfl, League::Nba];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::Nba => "nba",
            League::Nfl => "nfl",
        }
    }

    /// Probe order with `preferred` moved to the front
    pub fn probe_order(preferred: Option<League>) -> [League; 2] {
        match preferred {
            Some(League::Nba) => [League::Nba, League::Nfl],
            Some(League::Nfl) | None => Self::PROBE_ORDER,
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            League::Nba => write!(f, "NBA"),
            League::Nfl => write!(f, "NFL"),
        }
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nba" | "basketball" => Ok(League::Nba),
            "nfl" | "football" => Ok(League::Nfl),
            other => Err(format!("unknown league '{other}' (expected nba or nfl)")),
        }
    }
}
