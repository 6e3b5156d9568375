//! Configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gauge full-scale value in Mbps
    #[serde(default = "default_gauge_max_mbps")]
    pub gauge_max_mbps: f64,

    /// Maximum number of results kept in history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Simulated ping delay in milliseconds
    #[serde(default = "default_ping_delay_ms")]
    pub ping_delay_ms: u64,

    /// Throughput accumulation tick interval in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Persist results to history storage after each run
    #[serde(default = "default_save_history")]
    pub save_history: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gauge_max_mbps: default_gauge_max_mbps(),
            history_limit: default_history_limit(),
            ping_delay_ms: default_ping_delay_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            save_history: default_save_history(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the simulated ping delay as a Duration
    pub fn ping_delay(&self) -> Duration {
        Duration::from_millis(self.ping_delay_ms)
    }

    /// Get the throughput tick interval as a Duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if !self.gauge_max_mbps.is_finite() || self.gauge_max_mbps <= 0.0 {
            return Err(AppError::config(
                "Gauge maximum must be a positive finite value",
            ));
        }

        if self.history_limit == 0 {
            return Err(AppError::config("History limit must be greater than 0"));
        }

        if self.history_limit > 100 {
            return Err(AppError::config("History limit cannot exceed 100"));
        }

        if self.ping_delay_ms == 0 {
            return Err(AppError::config("Ping delay must be greater than 0"));
        }

        if self.ping_delay_ms > 60_000 {
            return Err(AppError::config("Ping delay cannot exceed 60 seconds"));
        }

        if self.tick_interval_ms == 0 {
            return Err(AppError::config("Tick interval must be greater than 0"));
        }

        if self.tick_interval_ms > 10_000 {
            return Err(AppError::config("Tick interval cannot exceed 10 seconds"));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    ///
    /// Values already loaded from a `.env` file by the env manager are
    /// visible here through the process environment.
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("SPEEDSIM_GAUGE_MAX_MBPS") {
            self.gauge_max_mbps = value.trim().parse().map_err(|_| {
                AppError::parse(format!("Invalid SPEEDSIM_GAUGE_MAX_MBPS value: {}", value))
            })?;
        }

        if let Ok(value) = std::env::var("SPEEDSIM_HISTORY_LIMIT") {
            self.history_limit = value.trim().parse().map_err(|_| {
                AppError::parse(format!("Invalid SPEEDSIM_HISTORY_LIMIT value: {}", value))
            })?;
        }

        if let Ok(value) = std::env::var("SPEEDSIM_PING_DELAY_MS") {
            self.ping_delay_ms = value.trim().parse().map_err(|_| {
                AppError::parse(format!("Invalid SPEEDSIM_PING_DELAY_MS value: {}", value))
            })?;
        }

        if let Ok(value) = std::env::var("SPEEDSIM_TICK_INTERVAL_MS") {
            self.tick_interval_ms = value.trim().parse().map_err(|_| {
                AppError::parse(format!("Invalid SPEEDSIM_TICK_INTERVAL_MS value: {}", value))
            })?;
        }

        if let Ok(value) = std::env::var("SPEEDSIM_ENABLE_COLOR") {
            self.enable_color = parse_bool(&value).ok_or_else(|| {
                AppError::parse(format!("Invalid SPEEDSIM_ENABLE_COLOR value: {}", value))
            })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_gauge_max_mbps() -> f64 {
    crate::defaults::DEFAULT_GAUGE_MAX_MBPS
}

fn default_history_limit() -> usize {
    crate::defaults::DEFAULT_HISTORY_LIMIT
}

fn default_ping_delay_ms() -> u64 {
    crate::defaults::DEFAULT_PING_DELAY.as_millis() as u64
}

fn default_tick_interval_ms() -> u64 {
    crate::defaults::DEFAULT_TICK_INTERVAL.as_millis() as u64
}

fn default_save_history() -> bool {
    true
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
