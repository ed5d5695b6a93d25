use serde::{Deserialize, Serialize};

use super::League;

/// Canonical stat identifier, independent of how the user typed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    // Basketball
    #[serde(rename = "points")]
    Points,
    #[serde(rename = "rebounds")]
    Rebounds,
    #[serde(rename = "assists")]
    Assists,
    #[serde(rename = "threes")]
    Threes,
    #[serde(rename = "steals")]
    Steals,
    #[serde(rename = "blocks")]
    Blocks,
    #[serde(rename = "pts+reb")]
    PtsReb,
    #[serde(rename = "pts+ast")]
    PtsAst,
    #[serde(rename = "reb+ast")]
    RebAst,
    #[serde(rename = "pts+reb+ast")]
    PtsRebAst,
    #[serde(rename = "fantasy")]
    Fantasy,

    // Football
    #[serde(rename = "pass_yards")]
    PassYards,
    #[serde(rename = "pass_tds")]
    PassTds,
    #[serde(rename = "pass_completions")]
    PassCompletions,
    #[serde(rename = "pass_attempts")]
    PassAttempts,
    #[serde(rename = "interceptions")]
    Interceptions,
    #[serde(rename = "rush_yards")]
    RushYards,
    #[serde(rename = "rush_attempts")]
    RushAttempts,
    #[serde(rename = "rec_yards")]
    RecYards,
    #[serde(rename = "receptions")]
    Receptions,
    #[serde(rename = "rush_rec_yards")]
    RushRecYards,
    #[serde(rename = "touchdowns")]
    Touchdowns,
}

impl StatKey {
    /// Canonical key as stored and sent to stat providers
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::Points => "points",
            StatKey::Rebounds => "rebounds",
            StatKey::Assists => "assists",
            StatKey::Threes => "threes",
            StatKey::Steals => "steals",
            StatKey::Blocks => "blocks",
            StatKey::PtsReb => "pts+reb",
            StatKey::PtsAst => "pts+ast",
            StatKey::RebAst => "reb+ast",
            StatKey::PtsRebAst => "pts+reb+ast",
            StatKey::Fantasy => "fantasy",
            StatKey::PassYards => "pass_yards",
            StatKey::PassTds => "pass_tds",
            StatKey::PassCompletions => "pass_completions",
            StatKey::PassAttempts => "pass_attempts",
            StatKey::Interceptions => "interceptions",
            StatKey::RushYards => "rush_yards",
            StatKey::RushAttempts => "rush_attempts",
            StatKey::RecYards => "rec_yards",
            StatKey::Receptions => "receptions",
            StatKey::RushRecYards => "rush_rec_yards",
            StatKey::Touchdowns => "touchdowns",
        }
    }

    /// Short label used on bet cards (e.g. "PRA", "PASS YDS")
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Points => "PTS",
            StatKey::Rebounds => "REB",
            StatKey::Assists => "AST",
            StatKey::Threes => "3PM",
            StatKey::Steals => "STL",
            StatKey::Blocks => "BLK",
            StatKey::PtsReb => "PTS+REB",
            StatKey::PtsAst => "PTS+AST",
            StatKey::RebAst => "REB+AST",
            StatKey::PtsRebAst => "PRA",
            StatKey::Fantasy => "FPTS",
            StatKey::PassYards => "PASS YDS",
            StatKey::PassTds => "PASS TD",
            StatKey::PassCompletions => "CMP",
            StatKey::PassAttempts => "ATT",
            StatKey::Interceptions => "INT",
            StatKey::RushYards => "RUSH YDS",
            StatKey::RushAttempts => "CAR",
            StatKey::RecYards => "REC YDS",
            StatKey::Receptions => "REC",
            StatKey::RushRecYards => "RUSH+REC YDS",
            StatKey::Touchdowns => "TD",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            StatKey::Points => "Points",
            StatKey::Rebounds => "Rebounds",
            StatKey::Assists => "Assists",
            StatKey::Threes => "3-Pointers",
            StatKey::Steals => "Steals",
            StatKey::Blocks => "Blocks",
            StatKey::PtsReb => "Points + Rebounds",
            StatKey::PtsAst => "Points + Assists",
            StatKey::RebAst => "Rebounds + Assists",
            StatKey::PtsRebAst => "Pts + Reb + Ast",
            StatKey::Fantasy => "Fantasy Points",
            StatKey::PassYards => "Passing Yards",
            StatKey::PassTds => "Passing Touchdowns",
            StatKey::PassCompletions => "Completions",
            StatKey::PassAttempts => "Pass Attempts",
            StatKey::Interceptions => "Interceptions",
            StatKey::RushYards => "Rushing Yards",
            StatKey::RushAttempts => "Rush Attempts",
            StatKey::RecYards => "Receiving Yards",
            StatKey::Receptions => "Receptions",
            StatKey::RushRecYards => "Rush + Rec Yards",
            StatKey::Touchdowns => "Touchdowns",
        }
    }

    /// League whose vocabulary owns this stat
    pub fn league(&self) -> League {
        match self {
            StatKey::Points
            | StatKey::Rebounds
            | StatKey::Assists
            | StatKey::Threes
            | StatKey::Steals
            | StatKey::Blocks
            | StatKey::PtsReb
            | StatKey::PtsAst
            | StatKey::RebAst
            | StatKey::PtsRebAst
            | StatKey::Fantasy => League::Nba,
            _ => League::Nfl,
        }
    }
}

impl std::fmt::Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
