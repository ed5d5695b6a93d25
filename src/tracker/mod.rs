//! In-memory bet tracking around the parser
//!
//! A [`Tracker`] owns the list of bets a user is following. Bets are added by
//! parsing free text, refreshed through a [`StatsProvider`], and evaluated
//! with [`evaluate`].

mod provider;
mod status;

pub use provider::{LiveResult, LiveValues, ManualProvider, StatsProvider};
pub use status::{evaluate, BetStatus, StatusKind, StatusThresholds};

#[cfg(test)]
pub use provider::MockStatsProvider;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::domain::ParsedBet;
use crate::error::{PropError, Result};
use crate::parser::BetParser;

/// Shown when a submission yields no bets
pub const USAGE_HINT: &str = concat!(
    "Try: \"Lebron 25+ points\", \"Chiefs ML\", \"Celtics -4.5\" ",
    "or \"Over 45.5 Chiefs Lions\""
);

/// One bet the user is following
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedBet {
    pub id: Uuid,
    pub bet: ParsedBet,
    /// Latest provider result, if any refresh has run
    pub live: Option<LiveResult>,
    /// Value typed in by the user; wins over the provider for props
    pub manual_current: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl TrackedBet {
    pub fn new(bet: ParsedBet) -> Self {
        Self {
            id: Uuid::new_v4(),
            bet,
            live: None,
            manual_current: None,
            last_updated: None,
        }
    }
}

pub struct Tracker {
    parser: BetParser,
    config: TrackerConfig,
    bets: Vec<TrackedBet>,
}

impl Tracker {
    pub fn new(parser: BetParser, config: TrackerConfig) -> Self {
        Self {
            parser,
            config,
            bets: Vec::new(),
        }
    }

    pub fn bets(&self) -> &[TrackedBet] {
        &self.bets
    }

    pub fn thresholds(&self) -> StatusThresholds {
        self.config.thresholds()
    }

    /// Parse `input` and start tracking every bet found. Returns the new ids.
    ///
    /// Blank input adds nothing. Non-blank input that yields no bet is an
    /// error carrying a usage hint.
    pub fn track(&mut self, input: &str) -> Result<Vec<Uuid>> {
        if input.trim().is_empty() {
            return Ok(Vec::new());
        }

        let parsed = self.parser.parse(input);
        if parsed.is_empty() {
            debug!(input, "no bets parsed");
            return Err(PropError::NothingParsed {
                hint: USAGE_HINT.to_string(),
            });
        }

        let ids = parsed
            .into_iter()
            .map(|bet| {
                let tracked = TrackedBet::new(bet);
                info!(id = %tracked.id, bet = %tracked.bet.display_title(), "tracking bet");
                let id = tracked.id;
                self.bets.push(tracked);
                id
            })
            .collect();
        Ok(ids)
    }

    /// Refresh one bet from the provider
    pub async fn refresh(&mut self, id: Uuid, provider: &dyn StatsProvider) -> Result<&TrackedBet> {
        let index = self.index_of(id)?;
        let result = provider.fetch(&self.bets[index].bet).await?;
        debug!(id = %id, provider = provider.name(), found = result.found, "refreshed bet");
        let tracked = &mut self.bets[index];
        tracked.live = Some(result);
        tracked.last_updated = Some(Utc::now());
        Ok(&self.bets[index])
    }

    /// Refresh every bet in order, pausing between provider calls.
    ///
    /// Provider failures are logged and skipped; returns how many bets
    /// were updated.
    pub async fn refresh_all(&mut self, provider: &dyn StatsProvider) -> usize {
        let delay = Duration::from_millis(self.config.refresh_delay_ms);
        let mut updated = 0;

        for index in 0..self.bets.len() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let tracked = &mut self.bets[index];
            match provider.fetch(&tracked.bet).await {
                Ok(result) => {
                    tracked.live = Some(result);
                    tracked.last_updated = Some(Utc::now());
                    updated += 1;
                }
                Err(e) => {
                    warn!(
                        id = %tracked.id,
                        provider = provider.name(),
                        error = %e,
                        "refresh failed"
                    );
                }
            }
        }

        info!(updated, total = self.bets.len(), "refresh complete");
        updated
    }

    /// Record a value typed in by the user. Only player props take one.
    pub fn update_manually(&mut self, id: Uuid, value: f64) -> Result<&TrackedBet> {
        let index = self.index_of(id)?;
        let tracked = &mut self.bets[index];
        if !matches!(tracked.bet, ParsedBet::PlayerProp(_)) {
            return Err(PropError::NotAPlayerProp(id));
        }
        tracked.manual_current = Some(value);
        tracked.last_updated = Some(Utc::now());
        debug!(id = %id, value, "manual update");
        Ok(&self.bets[index])
    }

    pub fn remove(&mut self, id: Uuid) -> Result<TrackedBet> {
        let index = self.index_of(id)?;
        Ok(self.bets.remove(index))
    }

    pub fn clear(&mut self) {
        self.bets.clear();
    }

    /// Every tracked bet with its current status
    pub fn statuses(&self) -> Vec<(&TrackedBet, BetStatus)> {
        let thresholds = self.thresholds();
        self.bets
            .iter()
            .map(|b| (b, evaluate(b, &thresholds)))
            .collect()
    }

    fn index_of(&self, id: Uuid) -> Result<usize> {
        self.bets
            .iter()
            .position(|b| b.id == id)
            .ok_or(PropError::BetNotFound(id))
    }
}
