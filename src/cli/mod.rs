//! proptrack CLI
//!
//! Commands:
//! - `proptrack parse` - Parse bet text into structured bets
//! - `proptrack explain` - Show what happened to every fragment
//! - `proptrack track` - Parse, refresh and show bet statuses
//! - `proptrack aliases` - List the stat vocabulary

pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::League;
use crate::lexicon;
use crate::parser::BetParser;
use crate::tracker::{ManualProvider, Tracker};
use output::{print_items, AliasRow, BetRow, FragmentRow, OutputMode, StatusRow, StatusView};

/// Natural-language sports bet parser and tracker
#[derive(Parser, Debug)]
#[command(name = "proptrack")]
#[command(author, version, about = "Parse and track NBA/NFL bets written in plain text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration directory
    #[arg(long, global = true, default_value = "config")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse bet text (e.g. "lebron 25+ pts, Chiefs -3.5")
    Parse {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Report every fragment of the input, parsed or dropped
    Explain {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Track bets and print their current status
    Track {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List stat aliases
    Aliases {
        /// Only this league (nba or nfl)
        #[arg(short, long)]
        league: Option<League>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Bet text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub text: Vec<String>,

    /// Force a league when the text has no "nba:"/"nfl:" prefix
    #[arg(short, long)]
    pub league: Option<League>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InputArgs {
    fn text(&self) -> String {
        self.text.join(" ")
    }

    fn parser(&self, config: &AppConfig) -> BetParser {
        BetParser::with_default_league(self.league.or(config.parser.default_league))
    }
}

/// Run a parsed command line
pub async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    match cli.command {
        Commands::Parse { input } => {
            let bets = input.parser(config).parse(&input.text());
            debug!(count = bets.len(), "parsed input");
            let rows: Vec<BetRow> = bets.iter().map(BetRow::from).collect();
            print_items(&rows, &bets, OutputMode::from_json_flag(input.json))
        }
        Commands::Explain { input } => {
            let reports = input.parser(config).explain(&input.text());
            let rows: Vec<FragmentRow> = reports.iter().map(FragmentRow::from).collect();
            print_items(&rows, &reports, OutputMode::from_json_flag(input.json))
        }
        Commands::Track { input } => run_track(&input, config).await,
        Commands::Aliases { league, json } => {
            let leagues = match league {
                Some(league) => vec![league],
                None => League::PROBE_ORDER.to_vec(),
            };
            let rows: Vec<AliasRow> = leagues
                .into_iter()
                .flat_map(|league| {
                    lexicon::aliases_for(league)
                        .iter()
                        .map(move |(alias, key)| AliasRow::new(league, alias, *key))
                })
                .collect();
            print_items(&rows, &rows, OutputMode::from_json_flag(json))
        }
    }
}

async fn run_track(input: &InputArgs, config: &AppConfig) -> Result<()> {
    let mut tracker = Tracker::new(input.parser(config), config.tracker.clone());
    tracker.track(&input.text())?;
    tracker.refresh_all(&ManualProvider).await;

    let statuses = tracker.statuses();
    let rows: Vec<StatusRow> = statuses
        .iter()
        .map(|(tracked, status)| StatusRow::new(tracked, status))
        .collect();
    let views: Vec<StatusView<'_>> = statuses
        .iter()
        .map(|(tracked, status)| StatusView { tracked, status })
        .collect();
    print_items(&rows, &views, OutputMode::from_json_flag(input.json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_joins_words() {
        let args = ["proptrack", "parse", "lebron", "25+", "pts", "--league", "nba"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Commands::Parse { input } = cli.command else {
            panic!("expected parse");
        };
        assert_eq!(input.text(), "lebron 25+ pts");
        assert_eq!(input.league, Some(League::Nba));
        assert_eq!(cli.config, PathBuf::from("config"));
    }

    #[test]
    fn test_rejects_unknown_league() {
        assert!(Cli::try_parse_from(["proptrack", "aliases", "--league", "nhl"]).is_err());
    }

    #[test]
    fn test_config_flag_is_global() {
        let args = ["proptrack", "explain", "x", "--config", "/etc/proptrack"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/proptrack"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
