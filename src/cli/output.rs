//! Output formatting for `proptrack` commands.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::domain::{League, ParsedBet, StatKey};
use crate::parser::{FragmentOutcome, FragmentReport};
use crate::tracker::{BetStatus, TrackedBet};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Print a vec of Tabled items as a table, or the matching Serialize
/// values as JSON.
pub fn print_items<T: Tabled, S: Serialize>(
    rows: &[T],
    values: &S,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => {
            if rows.is_empty() {
                println!("(no results)");
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(values)?);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize, Tabled)]
pub struct BetRow {
    pub kind: String,
    pub league: String,
    pub bet: String,
    pub detail: String,
}

impl From<&ParsedBet> for BetRow {
    fn from(bet: &ParsedBet) -> Self {
        Self {
            kind: bet.kind().to_string(),
            league: bet.league().to_string(),
            bet: bet.display_title(),
            detail: bet_detail(bet),
        }
    }
}

/// Canonical fields of a bet in one line
fn bet_detail(bet: &ParsedBet) -> String {
    match bet {
        ParsedBet::PlayerProp(p) => format!(
            "player={} stat={} target={} {}",
            p.player_name, p.stat_type, p.target, p.direction
        ),
        ParsedBet::TeamMoneyline(m) => format!("team={}", m.team.abbreviation),
        ParsedBet::TeamSpread(s) => format!("team={} spread={}", s.team.abbreviation, s.spread),
        ParsedBet::TeamTotal(t) => format!(
            "teams={}/{} target={} {}",
            t.team1.abbreviation, t.team2.abbreviation, t.target, t.direction
        ),
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct FragmentRow {
    pub fragment: String,
    pub forced: String,
    pub status: String,
    pub result: String,
}

impl From<&FragmentReport> for FragmentRow {
    fn from(report: &FragmentReport) -> Self {
        let (status, result) = match &report.outcome {
            FragmentOutcome::Parsed { bet } => ("parsed", bet.display_title()),
            FragmentOutcome::Dropped { reason } => ("dropped", reason.to_string()),
        };
        Self {
            fragment: report.fragment.trim().to_string(),
            forced: report
                .forced_league
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: status.to_string(),
            result,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct StatusRow {
    pub id: String,
    pub bet: String,
    pub status: String,
    pub progress: String,
}

impl StatusRow {
    pub fn new(tracked: &TrackedBet, status: &BetStatus) -> Self {
        Self {
            id: tracked.id.simple().to_string()[..8].to_string(),
            bet: tracked.bet.display_title(),
            status: status.text.clone(),
            progress: status
                .progress
                .map(|p| format!("{p:.0}%"))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// JSON shape for `track --json`
#[derive(Debug, Serialize)]
pub struct StatusView<'a> {
    #[serde(flatten)]
    pub tracked: &'a TrackedBet,
    pub status: &'a BetStatus,
}

#[derive(Debug, Serialize, Tabled)]
pub struct AliasRow {
    pub league: String,
    pub alias: String,
    pub key: String,
    pub label: String,
    pub name: String,
}

impl AliasRow {
    pub fn new(league: League, alias: &str, key: StatKey) -> Self {
        Self {
            league: league.to_string(),
            alias: alias.to_string(),
            key: key.as_str().to_string(),
            label: key.label().to_string(),
            name: key.full_name().to_string(),
        }
    }
}
