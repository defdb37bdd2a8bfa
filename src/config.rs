//! Configuration for the ticket service.
//!
//! Configuration can come from a TOML file ([`ServiceConfig::load`]) or from
//! environment variables ([`ServiceConfig::from_env`]). Anything left unset
//! keeps its default, and every source validates the limits before returning.
//!
//! ```toml
//! log_level = "debug"
//!
//! [limits]
//! max_per_transaction = 25
//! min_per_transaction = 1
//! min_adults = 1
//!
//! [prices]
//! adult = 25
//! child = 15
//! infant = 0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
}

/// Per-transaction quantity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseLimits {
    /// Upper bound for a single request and for the whole transaction.
    pub max_per_transaction: u32,
    /// Lower bound for a single request and for the whole transaction.
    pub min_per_transaction: u32,
    /// Adult tickets required in every transaction.
    pub min_adults: u32,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_per_transaction: 25,
            min_per_transaction: 1,
            min_adults: 1,
        }
    }
}

impl PurchaseLimits {
    /// Rejects limits under which no purchase could ever succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_per_transaction > self.max_per_transaction {
            return Err(ConfigError::InvalidLimits(format!(
                "min_per_transaction ({}) exceeds max_per_transaction ({})",
                self.min_per_transaction, self.max_per_transaction
            )));
        }
        if self.min_adults > self.max_per_transaction {
            return Err(ConfigError::InvalidLimits(format!(
                "min_adults ({}) exceeds max_per_transaction ({})",
                self.min_adults, self.max_per_transaction
            )));
        }
        Ok(())
    }
}

/// Unit price per ticket category, in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketPrices {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            adult: 25,
            child: 15,
            infant: 0,
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub limits: PurchaseLimits,
    pub prices: TicketPrices,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            limits: PurchaseLimits::default(),
            prices: TicketPrices::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Parses configuration from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from `TICKETS_*` environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `TICKETS_MAX_PER_TRANSACTION` | `limits.max_per_transaction` |
    /// | `TICKETS_MIN_PER_TRANSACTION` | `limits.min_per_transaction` |
    /// | `TICKETS_MIN_ADULTS` | `limits.min_adults` |
    /// | `TICKETS_PRICE_ADULT` | `prices.adult` |
    /// | `TICKETS_PRICE_CHILD` | `prices.child` |
    /// | `TICKETS_PRICE_INFANT` | `prices.infant` |
    /// | `TICKETS_LOG_LEVEL` | `log_level` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            limits: PurchaseLimits {
                max_per_transaction: parse_or(
                    &lookup,
                    "TICKETS_MAX_PER_TRANSACTION",
                    defaults.limits.max_per_transaction,
                )?,
                min_per_transaction: parse_or(
                    &lookup,
                    "TICKETS_MIN_PER_TRANSACTION",
                    defaults.limits.min_per_transaction,
                )?,
                min_adults: parse_or(&lookup, "TICKETS_MIN_ADULTS", defaults.limits.min_adults)?,
            },
            prices: TicketPrices {
                adult: parse_or(&lookup, "TICKETS_PRICE_ADULT", defaults.prices.adult)?,
                child: parse_or(&lookup, "TICKETS_PRICE_CHILD", defaults.prices.child)?,
                infant: parse_or(&lookup, "TICKETS_PRICE_INFANT", defaults.prices.infant)?,
            },
            log_level: lookup("TICKETS_LOG_LEVEL").unwrap_or(defaults.log_level),
        };
        config.limits.validate()?;
        Ok(config)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}
