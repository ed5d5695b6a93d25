use thiserror::Error;

/// Main error type for the prop tracker
#[derive(Error, Debug)]
pub enum PropError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Tracking errors
    #[error("Could not understand the input. {hint}")]
    NothingParsed { hint: String },

    #[error("Tracked bet not found: {0}")]
    BetNotFound(uuid::Uuid),

    #[error("Manual updates only apply to player props: {0}")]
    NotAPlayerProp(uuid::Uuid),

    // Live stats provider errors
    #[error("Stats provider error: {0}")]
    Provider(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PropError
pub type Result<T> = std::result::Result<T, PropError>;

/// Why a fragment of input did not become a bet.
///
/// Never surfaced by the default parse path; available through
/// [`crate::parser::BetParser::explain`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailure {
    #[error("empty fragment")]
    Empty,

    #[error("no team found")]
    TeamNotFound,

    #[error("teams are from different leagues")]
    CrossLeagueTotal,

    #[error("no target found")]
    NoTarget,

    #[error("target of zero")]
    ZeroTarget,

    #[error("no stat found")]
    NoStat,

    #[error("no player name left")]
    NoPlayerName,
}

impl ParseFailure {
    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            ParseFailure::Empty => "empty",
            ParseFailure::TeamNotFound => "team_not_found",
            ParseFailure::CrossLeagueTotal => "cross_league_total",
            ParseFailure::NoTarget => "no_target",
            ParseFailure::ZeroTarget => "zero_target",
            ParseFailure::NoStat => "no_stat",
            ParseFailure::NoPlayerName => "no_player_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_code_matches_serde() {
        for failure in [
            ParseFailure::Empty,
            ParseFailure::CrossLeagueTotal,
            ParseFailure::NoPlayerName,
        ] {
            let json = serde_json::to_string(&failure).unwrap();
            assert_eq!(json, format!("\"{}\"", failure.code()));
        }
    }

    #[test]
    fn test_nothing_parsed_message() {
        let err = PropError::NothingParsed {
            hint: "Try: \"Chiefs ML\"".to_string(),
        };
        assert_eq!(err.to_string(), "Could not understand the input. Try: \"Chiefs ML\"");
    }
}
