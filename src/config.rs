use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::domain::League;
use crate::tracker::StatusThresholds;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ParserConfig {
    /// League forced onto input that has no "nba:"/"nfl:" prefix
    #[serde(default)]
    pub default_league: Option<League>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Pause between provider calls during a refresh, in milliseconds
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u64,
    /// Over bets count as "close" from this fraction of the target
    #[serde(default = "default_close_ratio")]
    pub close_ratio: f64,
    /// Under bets count as "on pace" below this fraction of the target
    #[serde(default = "default_under_safe_ratio")]
    pub under_safe_ratio: f64,
}

fn default_refresh_delay() -> u64 {
    300
}

fn default_close_ratio() -> f64 {
    0.7
}

fn default_under_safe_ratio() -> f64 {
    0.8
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            refresh_delay_ms: default_refresh_delay(),
            close_ratio: default_close_ratio(),
            under_safe_ratio: default_under_safe_ratio(),
        }
    }
}

impl TrackerConfig {
    pub fn thresholds(&self) -> StatusThresholds {
        StatusThresholds {
            close_ratio: self.close_ratio,
            under_safe_ratio: self.under_safe_ratio,
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let env_name =
            std::env::var("PROPTRACK_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("tracker.refresh_delay_ms", 300)?
            .set_default("tracker.close_ratio", 0.7)?
            .set_default("tracker.under_safe_ratio", 0.8)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(File::from(config_dir.join(format!("{env_name}.toml"))).required(false))
            // Override with environment variables (PROPTRACK_TRACKER__REFRESH_DELAY_MS, etc.)
            .add_source(
                Environment::with_prefix("PROPTRACK")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let ratios = [
            ("close_ratio", self.tracker.close_ratio),
            ("under_safe_ratio", self.tracker.under_safe_ratio),
        ];
        for (name, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                errors.push(format!("tracker.{name} must be in (0, 1], got {value}"));
            }
        }

        if self.logging.level.trim().is_empty() {
            errors.push("logging.level must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path()).unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.parser.default_league, None);
        assert_eq!(config.tracker.refresh_delay_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[logging]
level = "debug"

[parser]
default_league = "nfl"

[tracker]
refresh_delay_ms = 0
close_ratio = 0.5
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.parser.default_league, Some(League::Nfl));
        assert_eq!(config.tracker.refresh_delay_ms, 0);
        assert_eq!(config.tracker.thresholds().close_ratio, 0.5);
        assert_eq!(config.tracker.under_safe_ratio, 0.8);
    }

    #[test]
    fn test_validate_rejects_bad_ratios() {
        let mut config = AppConfig::default();
        config.tracker.close_ratio = 1.5;
        config.tracker.under_safe_ratio = 0.0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
