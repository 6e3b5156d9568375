//! Configuration parsing from CLI arguments and environment variables

use crate::{cli::Cli, config::env::EnvManager, error::Result, models::Config};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    ///
    /// Precedence: CLI arguments override environment variables, which
    /// override defaults.
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration
        let mut config = Config::default();

        // Load from environment file if it exists
        EnvManager::load_env_file(self.cli.debug)?;

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(tick_interval) = self.cli.tick_interval {
            config.tick_interval_ms = tick_interval;
        }

        if let Some(ping_delay) = self.cli.ping_delay {
            config.ping_delay_ms = ping_delay;
        }

        if let Some(gauge_max) = self.cli.gauge_max {
            config.gauge_max_mbps = gauge_max;
        }

        if self.cli.no_save {
            config.save_history = false;
        }

        config.enable_color = self.cli.use_colors();

        // Verbose and debug flags are CLI-only
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Gauge Max: {} Mbps", config.gauge_max_mbps));
    summary.push(format!("History Limit: {}", config.history_limit));
    summary.push(format!("Ping Delay: {}ms", config.ping_delay_ms));
    summary.push(format!("Tick Interval: {}ms", config.tick_interval_ms));
    summary.push(format!("Save History: {}", config.save_history));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
