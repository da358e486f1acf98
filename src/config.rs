//! Demo configuration management.
//!
//! Values come from environment variables (a `.env` file is honoured) and
//! fall back to the walkthrough defaults.
//!
//! # Environment Variables
//!
//! - `DEMO_OWNER`: account owner and person name (default: `Alex`)
//! - `DEMO_OWNER_AGE`: age used in the greeting (default: `30`)
//! - `DEMO_DEPOSIT`: amount deposited into the demo account (default: `100`)
//! - `DEMO_WITHDRAWAL`: amount withdrawn afterwards (default: `30`)
//! - `LOG_FORMAT`: `text` or `json` (default: `text`)

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::account::Money;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Settings for a demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Name used for both the person and the account owner.
    pub owner: String,
    /// Age used in the greeting.
    pub owner_age: u32,
    /// Amount deposited into the demo account.
    pub deposit: Money,
    /// Amount withdrawn after the deposit.
    pub withdrawal: Money,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            owner: "Alex".to_string(),
            owner_age: 30,
            deposit: Money::new(100),
            withdrawal: Money::new(30),
            log_format: LogFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their default value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let owner = lookup("DEMO_OWNER").unwrap_or(defaults.owner);
        let owner_age = parse_or("DEMO_OWNER_AGE", lookup("DEMO_OWNER_AGE"), defaults.owner_age)?;
        let deposit = parse_money_or("DEMO_DEPOSIT", lookup("DEMO_DEPOSIT"), defaults.deposit)?;
        let withdrawal =
            parse_money_or("DEMO_WITHDRAWAL", lookup("DEMO_WITHDRAWAL"), defaults.withdrawal)?;
        let log_format = parse_or("LOG_FORMAT", lookup("LOG_FORMAT"), defaults.log_format)?;

        Ok(Self {
            owner,
            owner_age,
            deposit,
            withdrawal,
            log_format,
        })
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}

fn parse_money_or(key: &str, value: Option<String>, default: Money) -> Result<Money, ConfigError> {
    value.map_or(Ok(default), |raw| {
        Money::parse(&raw).map_err(|error| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}
