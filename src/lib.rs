//! Natural-language sports bet parsing and tracking.
//!
//! Free text such as `"lebron 25+ pts, Chiefs -3.5, Over 45.5 Chiefs Lions"`
//! is resolved against NBA/NFL vocabularies ([`lexicon`]) and turned into
//! structured bets ([`parser`]), which the [`tracker`] can follow live.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod lexicon;
pub mod parser;
pub mod tracker;

pub use config::AppConfig;
pub use domain::{Direction, League, ParsedBet, StatKey};
pub use error::{ParseFailure, PropError, Result};
pub use parser::{parse_input, parse_line, BetParser};
pub use tracker::{evaluate, BetStatus, StatsProvider, Tracker};
