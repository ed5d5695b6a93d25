//! Bet status evaluation: how a tracked bet is doing against its line

use serde::Serialize;

use super::provider::{LiveResult, LiveValues};
use super::TrackedBet;
use crate::domain::{format_signed, Direction, ParsedBet, PlayerProp, TeamTotal};

/// Coarse state of a bet, used for colouring and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Hitting,
    Close,
    NotHitting,
    Pending,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Hitting => "hitting",
            StatusKind::Close => "close",
            StatusKind::NotHitting => "not_hitting",
            StatusKind::Pending => "pending",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetStatus {
    pub kind: StatusKind,
    /// Badge text, e.g. "LIVE - CLOSE" or "COVERING (+4.5)"
    pub text: String,
    /// Progress toward the target in percent, capped at 100 (props and totals only)
    pub progress: Option<f64>,
}

impl BetStatus {
    fn pending(text: &str) -> Self {
        Self {
            kind: StatusKind::Pending,
            text: text.to_string(),
            progress: None,
        }
    }
}

/// Ratios that decide "close" and "on pace" for player props
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusThresholds {
    pub close_ratio: f64,
    pub under_safe_ratio: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            close_ratio: 0.7,
            under_safe_ratio: 0.8,
        }
    }
}

/// Evaluate a tracked bet against its latest numbers
pub fn evaluate(tracked: &TrackedBet, thresholds: &StatusThresholds) -> BetStatus {
    let is_live = tracked.live.as_ref().is_some_and(|l| l.is_live);

    // A manual value stands on its own, with or without a provider result
    if let (ParsedBet::PlayerProp(prop), Some(current)) = (&tracked.bet, tracked.manual_current) {
        return live_prefix(evaluate_prop(prop, current, thresholds), is_live);
    }

    let Some(live) = tracked.live.as_ref() else {
        return BetStatus::pending("AWAITING UPDATE");
    };
    if let Some(pending) = pending_state(live) {
        return pending;
    }

    let status = match (&tracked.bet, &live.values) {
        (ParsedBet::PlayerProp(prop), Some(LiveValues::Prop { current, .. })) => {
            evaluate_prop(prop, *current, thresholds)
        }
        (
            ParsedBet::TeamMoneyline(_),
            Some(LiveValues::Moneyline {
                team_score,
                opponent_score,
                ..
            }),
        ) => evaluate_moneyline(*team_score, *opponent_score),
        (
            ParsedBet::TeamSpread(spread),
            Some(LiveValues::Spread {
                team_score,
                opponent_score,
                ..
            }),
        ) => evaluate_spread(spread.spread, *team_score, *opponent_score),
        (
            ParsedBet::TeamTotal(total),
            Some(LiveValues::Total {
                team1_score,
                team2_score,
            }),
        ) => evaluate_total(total, f64::from(*team1_score) + f64::from(*team2_score)),
        _ => return BetStatus::pending("NO DATA"),
    };

    live_prefix(status, is_live)
}

fn pending_state(live: &LiveResult) -> Option<BetStatus> {
    if live.not_started {
        Some(BetStatus::pending("NOT STARTED"))
    } else if live.no_game || !live.found {
        Some(BetStatus::pending("NO GAME TODAY"))
    } else {
        None
    }
}

fn live_prefix(mut status: BetStatus, is_live: bool) -> BetStatus {
    if is_live && status.kind != StatusKind::Pending {
        status.text = format!("LIVE - {}", status.text);
    }
    status
}

fn progress(current: f64, target: f64) -> Option<f64> {
    if target > 0.0 {
        Some((current / target * 100.0).min(100.0))
    } else {
        Some(0.0)
    }
}

fn evaluate_prop(prop: &PlayerProp, current: f64, thresholds: &StatusThresholds) -> BetStatus {
    let target = prop.target;
    let (kind, text) = match prop.direction {
        Direction::Over => {
            if current >= target {
                (StatusKind::Hitting, "HITTING")
            } else if current >= target * thresholds.close_ratio {
                (StatusKind::Close, "CLOSE")
            } else {
                (StatusKind::NotHitting, "NEEDS MORE")
            }
        }
        Direction::Under => {
            if current < target * thresholds.under_safe_ratio {
                (StatusKind::Hitting, "ON PACE")
            } else if current < target {
                (StatusKind::Close, "CLOSE")
            } else {
                (StatusKind::NotHitting, "OVER")
            }
        }
    };

    BetStatus {
        kind,
        text: text.to_string(),
        progress: progress(current, target),
    }
}

fn evaluate_moneyline(team_score: u32, opponent_score: u32) -> BetStatus {
    let (kind, text) = match team_score.cmp(&opponent_score) {
        std::cmp::Ordering::Greater => (StatusKind::Hitting, "WINNING"),
        std::cmp::Ordering::Equal => (StatusKind::Close, "TIED"),
        std::cmp::Ordering::Less => (StatusKind::NotHitting, "LOSING"),
    };
    BetStatus {
        kind,
        text: text.to_string(),
        progress: None,
    }
}

fn evaluate_spread(spread: f64, team_score: u32, opponent_score: u32) -> BetStatus {
    let margin = f64::from(team_score) + spread - f64::from(opponent_score);
    let (kind, label) = if margin > 0.0 {
        (StatusKind::Hitting, "COVERING")
    } else {
        (StatusKind::NotHitting, "NOT COVERING")
    };
    BetStatus {
        kind,
        text: format!("{label} ({})", format_signed(margin)),
        progress: None,
    }
}

fn evaluate_total(total: &TeamTotal, current: f64) -> BetStatus {
    let hitting = match total.direction {
        Direction::Over => current > total.target,
        Direction::Under => current < total.target,
    };
    let (kind, text) = if hitting {
        (StatusKind::Hitting, "ON PACE")
    } else {
        (StatusKind::NotHitting, "OFF PACE")
    };
    BetStatus {
        kind,
        text: text.to_string(),
        progress: progress(current, total.target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn tracked(line: &str, live: Option<LiveResult>) -> TrackedBet {
        let mut bet = TrackedBet::new(parse_line(line).unwrap());
        bet.live = live;
        bet
    }

    fn prop_at(line: &str, current: f64) -> BetStatus {
        let mut bet = tracked(line, None);
        bet.manual_current = Some(current);
        evaluate(&bet, &StatusThresholds::default())
    }

    #[test]
    fn test_over_prop_thresholds() {
        assert_eq!(prop_at("lebron 25+ pts", 25.0).kind, StatusKind::Hitting);
        assert_eq!(prop_at("lebron 25+ pts", 17.5).kind, StatusKind::Close);

        let status = prop_at("lebron 25+ pts", 10.0);
        assert_eq!(status.kind, StatusKind::NotHitting);
        assert_eq!(status.text, "NEEDS MORE");
        assert_eq!(status.progress, Some(40.0));
    }

    #[test]
    fn test_under_prop_thresholds() {
        assert_eq!(prop_at("lebron 10- reb", 7.0).text, "ON PACE");
        assert_eq!(prop_at("lebron 10- reb", 8.0).text, "CLOSE");
        assert_eq!(prop_at("lebron 10- reb", 10.0).text, "OVER");
    }

    #[test]
    fn test_progress_capped() {
        assert_eq!(prop_at("lebron 20+ pts", 35.0).progress, Some(100.0));
    }

    #[test]
    fn test_live_prefix() {
        let live = LiveResult::in_progress(
            LiveValues::Prop {
                current: 30.0,
                minutes: Some("31:02".to_string()),
                on_court: Some(true),
            },
            Some("Q4 2:10".to_string()),
        );
        let status = evaluate(&tracked("lebron 25+ pts", Some(live)), &StatusThresholds::default());
        assert_eq!(status.text, "LIVE - HITTING");
    }

    #[test]
    fn test_pending_states() {
        let thresholds = StatusThresholds::default();
        assert_eq!(
            evaluate(&tracked("Lakers ML", None), &thresholds).text,
            "AWAITING UPDATE"
        );
        assert_eq!(
            evaluate(&tracked("Lakers ML", Some(LiveResult::not_found())), &thresholds).text,
            "NO GAME TODAY"
        );
        let not_started = tracked("Lakers ML", Some(LiveResult::not_started(None)));
        let status = evaluate(&not_started, &thresholds);
        assert_eq!(status.kind, StatusKind::Pending);
        assert_eq!(status.text, "NOT STARTED");
    }

    #[test]
    fn test_moneyline() {
        let live = |team_score, opponent_score| {
            Some(LiveResult::in_progress(
                LiveValues::Moneyline {
                    team_score,
                    opponent_score,
                    opponent_name: Some("BOS".to_string()),
                },
                None,
            ))
        };
        let thresholds = StatusThresholds::default();
        let status = |team_score, opponent_score| {
            evaluate(&tracked("Lakers ML", live(team_score, opponent_score)), &thresholds)
        };
        assert_eq!(status(100, 90).kind, StatusKind::Hitting);
        assert_eq!(status(90, 90).text, "LIVE - TIED");
        assert_eq!(status(80, 90).kind, StatusKind::NotHitting);
    }

    #[test]
    fn test_spread_margin() {
        let mut result = LiveResult::zeroed(&parse_line("Chiefs -3.5").unwrap());
        result.values = Some(LiveValues::Spread {
            team_score: 24,
            opponent_score: 17,
            opponent_name: None,
        });
        let status = evaluate(&tracked("Chiefs -3.5", Some(result)), &StatusThresholds::default());
        assert_eq!(status.kind, StatusKind::Hitting);
        assert_eq!(status.text, "COVERING (+3.5)");

        let mut result = LiveResult::zeroed(&parse_line("Chiefs -3.5").unwrap());
        result.values = Some(LiveValues::Spread {
            team_score: 20,
            opponent_score: 17,
            opponent_name: None,
        });
        let status = evaluate(&tracked("Chiefs -3.5", Some(result)), &StatusThresholds::default());
        assert_eq!(status.text, "NOT COVERING (-0.5)");
    }

    #[test]
    fn test_total_direction() {
        let scores = |team1_score, team2_score| {
            let mut result = LiveResult::zeroed(&parse_line("Over 45.5 Chiefs Lions").unwrap());
            result.values = Some(LiveValues::Total {
                team1_score,
                team2_score,
            });
            Some(result)
        };
        let thresholds = StatusThresholds::default();

        let status = evaluate(&tracked("Over 45.5 Chiefs Lions", scores(28, 21)), &thresholds);
        assert_eq!(status.kind, StatusKind::Hitting);
        assert_eq!(status.progress, Some(100.0));

        let status = evaluate(&tracked("Under 45.5 Chiefs Lions", scores(28, 21)), &thresholds);
        assert_eq!(status.text, "OFF PACE");
    }

    #[test]
    fn test_total_huge_scores_do_not_wrap() {
        let mut result = LiveResult::zeroed(&parse_line("Over 45.5 Chiefs Lions").unwrap());
        result.values = Some(LiveValues::Total {
            team1_score: u32::MAX,
            team2_score: u32::MAX,
        });
        let status = evaluate(
            &tracked("Over 45.5 Chiefs Lions", Some(result)),
            &StatusThresholds::default(),
        );
        assert_eq!(status.kind, StatusKind::Hitting);
    }

    #[test]
    fn test_mismatched_values_pending() {
        let mut result = LiveResult::zeroed(&parse_line("Lakers ML").unwrap());
        result.values = Some(LiveValues::Total {
            team1_score: 1,
            team2_score: 2,
        });
        let status = evaluate(&tracked("Lakers ML", Some(result)), &StatusThresholds::default());
        assert_eq!(status.text, "NO DATA");
    }
}
