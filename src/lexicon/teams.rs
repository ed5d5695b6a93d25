//! Team vocabulary
//!
//! Each team is reachable by nickname, city + nickname, abbreviation and a
//! handful of common short forms. Keys are unique within a league; a key that
//! exists in both leagues resolves through [`League::PROBE_ORDER`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::League::{Nba, Nfl};
use crate::domain::{League, TeamRef};

/// Static description of one franchise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub abbreviation: &'static str,
    /// Display name (nickname)
    pub name: &'static str,
    pub full_name: &'static str,
    pub league: League,
    /// Extra lowercase keys beyond nickname, full name and abbreviation
    pub aliases: &'static [&'static str],
}

impl TeamInfo {
    pub fn to_ref(&self) -> TeamRef {
        TeamRef {
            abbreviation: self.abbreviation.to_string(),
            name: self.name.to_string(),
        }
    }

    /// Every lookup key for this team, lowercased
    pub fn keys(&self) -> Vec<String> {
        let mut keys = vec![
            self.name.to_lowercase(),
            self.full_name.to_lowercase(),
            self.abbreviation.to_lowercase(),
        ];
        keys.extend(self.aliases.iter().map(|a| a.to_string()));
        keys
    }
}

const fn team(
    league: League,
    abbreviation: &'static str,
    name: &'static str,
    full_name: &'static str,
    aliases: &'static [&'static str],
) -> TeamInfo {
    TeamInfo {
        abbreviation,
        name,
        full_name,
        league,
        aliases,
    }
}

pub const NBA_TEAMS: &[TeamInfo] = &[
    team(Nba, "ATL", "Hawks", "Atlanta Hawks", &[]),
    team(Nba, "BOS", "Celtics", "Boston Celtics", &[]),
    team(Nba, "BKN", "Nets", "Brooklyn Nets", &["bkn nets"]),
    team(Nba, "CHA", "Hornets", "Charlotte Hornets", &[]),
    team(Nba, "CHI", "Bulls", "Chicago Bulls", &[]),
    team(Nba, "CLE", "Cavaliers", "Cleveland Cavaliers", &["cavs"]),
    team(Nba, "DAL", "Mavericks", "Dallas Mavericks", &["mavs"]),
    team(Nba, "DEN", "Nuggets", "Denver Nuggets", &[]),
    team(Nba, "DET", "Pistons", "Detroit Pistons", &[]),
    team(Nba, "GSW", "Warriors", "Golden State Warriors", &["dubs", "gs warriors"]),
    team(Nba, "HOU", "Rockets", "Houston Rockets", &[]),
    team(Nba, "IND", "Pacers", "Indiana Pacers", &[]),
    team(Nba, "LAC", "Clippers", "Los Angeles Clippers", &["la clippers", "clips"]),
    team(Nba, "LAL", "Lakers", "Los Angeles Lakers", &["la lakers"]),
    team(Nba, "MEM", "Grizzlies", "Memphis Grizzlies", &["grizz"]),
    team(Nba, "MIA", "Heat", "Miami Heat", &[]),
    team(Nba, "MIL", "Bucks", "Milwaukee Bucks", &[]),
    team(Nba, "MIN", "Timberwolves", "Minnesota Timberwolves", &["wolves", "twolves"]),
    team(Nba, "NOP", "Pelicans", "New Orleans Pelicans", &["pels"]),
    team(Nba, "NYK", "Knicks", "New York Knicks", &["ny knicks"]),
    team(Nba, "OKC", "Thunder", "Oklahoma City Thunder", &["okc thunder"]),
    team(Nba, "ORL", "Magic", "Orlando Magic", &[]),
    team(Nba, "PHI", "76ers", "Philadelphia 76ers", &["sixers"]),
    team(Nba, "PHX", "Suns", "Phoenix Suns", &[]),
    team(Nba, "POR", "Trail Blazers", "Portland Trail Blazers", &["blazers", "portland blazers"]),
    team(Nba, "SAC", "Kings", "Sacramento Kings", &[]),
    team(Nba, "SAS", "Spurs", "San Antonio Spurs", &[]),
    team(Nba, "TOR", "Raptors", "Toronto Raptors", &["raps"]),
    team(Nba, "UTA", "Jazz", "Utah Jazz", &[]),
    team(Nba, "WAS", "Wizards", "Washington Wizards", &["wiz"]),
];

pub const NFL_TEAMS: &[TeamInfo] = &[
    team(Nfl, "ARI", "Cardinals", "Arizona Cardinals", &["cards"]),
    team(Nfl, "ATL", "Falcons", "Atlanta Falcons", &[]),
    team(Nfl, "BAL", "Ravens", "Baltimore Ravens", &[]),
    team(Nfl, "BUF", "Bills", "Buffalo Bills", &[]),
    team(Nfl, "CAR", "Panthers", "Carolina Panthers", &[]),
    team(Nfl, "CHI", "Bears", "Chicago Bears", &[]),
    team(Nfl, "CIN", "Bengals", "Cincinnati Bengals", &[]),
    team(Nfl, "CLE", "Browns", "Cleveland Browns", &[]),
    team(Nfl, "DAL", "Cowboys", "Dallas Cowboys", &["boys"]),
    team(Nfl, "DEN", "Broncos", "Denver Broncos", &[]),
    team(Nfl, "DET", "Lions", "Detroit Lions", &[]),
    team(Nfl, "GB", "Packers", "Green Bay Packers", &["pack"]),
    team(Nfl, "HOU", "Texans", "Houston Texans", &[]),
    team(Nfl, "IND", "Colts", "Indianapolis Colts", &[]),
    team(Nfl, "JAX", "Jaguars", "Jacksonville Jaguars", &["jags"]),
    team(Nfl, "KC", "Chiefs", "Kansas City Chiefs", &["kc chiefs"]),
    team(Nfl, "LV", "Raiders", "Las Vegas Raiders", &["lv raiders"]),
    team(Nfl, "LAC", "Chargers", "Los Angeles Chargers", &["la chargers", "bolts"]),
    team(Nfl, "LAR", "Rams", "Los Angeles Rams", &["la rams"]),
    team(Nfl, "MIA", "Dolphins", "Miami Dolphins", &["fins"]),
    team(Nfl, "MIN", "Vikings", "Minnesota Vikings", &["vikes"]),
    team(Nfl, "NE", "Patriots", "New England Patriots", &["pats"]),
    team(Nfl, "NO", "Saints", "New Orleans Saints", &[]),
    team(Nfl, "NYG", "Giants", "New York Giants", &["ny giants"]),
    team(Nfl, "NYJ", "Jets", "New York Jets", &["ny jets"]),
    team(Nfl, "PHI", "Eagles", "Philadelphia Eagles", &[]),
    team(Nfl, "PIT", "Steelers", "Pittsburgh Steelers", &[]),
    team(Nfl, "SF", "49ers", "San Francisco 49ers", &["niners", "sf 49ers"]),
    team(Nfl, "SEA", "Seahawks", "Seattle Seahawks", &[]),
    team(Nfl, "TB", "Buccaneers", "Tampa Bay Buccaneers", &["bucs"]),
    team(Nfl, "TEN", "Titans", "Tennessee Titans", &[]),
    team(Nfl, "WAS", "Commanders", "Washington Commanders", &[]),
];

pub fn teams_for(league: League) -> &'static [TeamInfo] {
    match league {
        League::Nba => NBA_TEAMS,
        League::Nfl => NFL_TEAMS,
    }
}

type TeamIndex = HashMap<String, &'static TeamInfo>;

fn build_index(teams: &'static [TeamInfo]) -> TeamIndex {
    let mut index = HashMap::new();
    for info in teams {
        for key in info.keys() {
            index.insert(key, info);
        }
    }
    index
}

static NBA_INDEX: LazyLock<TeamIndex> = LazyLock::new(|| build_index(NBA_TEAMS));
static NFL_INDEX: LazyLock<TeamIndex> = LazyLock::new(|| build_index(NFL_TEAMS));

fn index_for(league: League) -> &'static TeamIndex {
    match league {
        League::Nba => &NBA_INDEX,
        League::Nfl => &NFL_INDEX,
    }
}

/// Lowercase, collapse whitespace and drop surrounding punctuation.
/// Digits stay ("76ers", "49ers").
pub fn normalize_team_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Exact key lookup in a single league's table
pub fn lookup(text: &str, league: League) -> Option<&'static TeamInfo> {
    let key = normalize_team_key(text);
    if key.is_empty() {
        return None;
    }
    index_for(league).get(&key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(NBA_TEAMS.len(), 30);
        assert_eq!(NFL_TEAMS.len(), 32);
    }

    #[test]
    fn test_keys_unique_within_league() {
        for league in League::PROBE_ORDER {
            let mut seen = HashSet::new();
            for info in teams_for(league) {
                assert_eq!(info.league, league);
                for key in info.keys() {
                    assert!(seen.insert(key.clone()), "duplicate {league} key '{key}'");
                }
            }
        }
    }

    #[test]
    fn test_normalize_team_key() {
        assert_eq!(normalize_team_key("  Kansas   City Chiefs. "), "kansas city chiefs");
        assert_eq!(normalize_team_key("76ers"), "76ers");
        assert_eq!(normalize_team_key("..."), "");
    }

    #[test]
    fn test_lookup_exact_only() {
        assert_eq!(lookup("Lakers", League::Nba).map(|t| t.abbreviation), Some("LAL"));
        assert_eq!(lookup("LA LAKERS", League::Nba).map(|t| t.abbreviation), Some("LAL"));
        assert!(lookup("Laker", League::Nba).is_none());
        assert!(lookup("Lakers", League::Nfl).is_none());
    }
}
