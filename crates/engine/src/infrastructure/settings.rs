//! Environment-driven defaults for the CLI.
//!
//! Read after `.env` files are loaded (see `main.rs`). Command-line flags
//! override every value here.
//!
//! | variable        | meaning                          | default     |
//! |-----------------|----------------------------------|-------------|
//! | `SORZI_LOTTERY` | catalog key                      | `mega_sena` |
//! | `SORZI_GAMES`   | games per batch                  | `5`         |
//! | `SORZI_PICKS`   | numbers per game                 | lottery min |
//! | `SORZI_FORMAT`  | `text` or `json`                 | `text`      |

use sorzi_domain::{parse_games_count, LotteryKey};

pub const LOTTERY_VAR: &str = "SORZI_LOTTERY";
pub const GAMES_VAR: &str = "SORZI_GAMES";
pub const PICKS_VAR: &str = "SORZI_PICKS";
pub const FORMAT_VAR: &str = "SORZI_FORMAT";

pub const DEFAULT_GAMES_COUNT: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl SettingsError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per game, zero-padded numbers
    #[default]
    #[value(aliases = ["txt", "plain"])]
    Text,
    /// A single JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lottery: LotteryKey,
    pub games_count: usize,
    /// `None` means the lottery's minimum
    pub pick_count: Option<usize>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lottery: LotteryKey::default(),
            games_count: DEFAULT_GAMES_COUNT,
            pick_count: None,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(value) = get(LOTTERY_VAR) {
            settings.lottery = value
                .parse()
                .map_err(|e| SettingsError::invalid(LOTTERY_VAR, &value, e))?;
        }

        if let Some(value) = get(GAMES_VAR) {
            settings.games_count = parse_games_count(&value)
                .map_err(|e| SettingsError::invalid(GAMES_VAR, &value, e))?;
        }

        if let Some(value) = get(PICKS_VAR) {
            let picks = value
                .trim()
                .parse::<usize>()
                .map_err(|e| SettingsError::invalid(PICKS_VAR, &value, e))?;
            settings.pick_count = Some(picks);
        }

        if let Some(value) = get(FORMAT_VAR) {
            settings.format = value
                .parse()
                .map_err(|e: String| SettingsError::invalid(FORMAT_VAR, &value, e))?;
        }

        Ok(settings)
    }
}
