//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Whether the console view clears the screen before redrawing (default: true)
    pub clear_screen: bool,

    /// Pause between steps of the scripted demos, in milliseconds (default: 2000)
    pub demo_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG_LEVEL`: Logging level (default: "warn")
    /// - `CONTACT_BOOK_CLEAR_SCREEN`: Clear the terminal on redraw (default: true)
    /// - `CONTACT_BOOK_DEMO_DELAY_MS`: Demo step delay (default: 2000)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level =
            env::var("CONTACT_BOOK_LOG_LEVEL").unwrap_or_else(|_| defaults.log_level.clone());
        let clear_screen = Self::parse_env_bool("CONTACT_BOOK_CLEAR_SCREEN", defaults.clear_screen)?;
        let demo_delay_ms = Self::parse_env_u64("CONTACT_BOOK_DEMO_DELAY_MS", defaults.demo_delay_ms)?;

        Ok(Config {
            log_level,
            clear_screen,
            demo_delay_ms,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    ///
    /// Accepts `true/false`, `1/0`, `yes/no`, `on/off` in any case.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            clear_screen: true,
            demo_delay_ms: 2000,
        }
    }
}
