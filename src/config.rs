//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables,
//! optionally seeded from a `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_HORIZON_DAYS;
use std::env;
use std::path::PathBuf;

/// Longest birthday window accepted from the environment.
const MAX_HORIZON_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: "addressbook.json")
    pub data_file: PathBuf,

    /// Window used by `birthdays` without an argument (default: 7)
    pub birthday_horizon_days: u32,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the saved address book (default: addressbook.json)
    /// - `BIRTHDAY_HORIZON_DAYS`: Default birthday window in days (default: 7, max 366)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.data_file,
        };

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", defaults.birthday_horizon_days)?;

        if birthday_horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_HORIZON_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_file,
            birthday_horizon_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("addressbook.json"),
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "error".to_string(),
        }
    }
}
