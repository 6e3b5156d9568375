//! Command-line interface module

use clap::Parser;

/// Speed Test Simulator - fabricates speed test runs with animated gauges
#[derive(Parser, Debug, Clone)]
#[command(name = "speedsim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show stored history and exit without running a test
    #[arg(long)]
    pub history: bool,

    /// Clear stored history and exit
    #[arg(long)]
    pub clear_history: bool,

    /// Run the test without saving the result to history
    #[arg(long)]
    pub no_save: bool,

    /// Throughput tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_interval: Option<u64>,

    /// Simulated ping delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub ping_delay: Option<u64>,

    /// Gauge full-scale value in Mbps
    #[arg(long, value_name = "MBPS")]
    pub gauge_max: Option<f64>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.history && self.clear_history {
            return Err("Cannot specify both --history and --clear-history".to_string());
        }

        if self.no_save && (self.history || self.clear_history) {
            return Err("--no-save only applies when running a test".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }
}

/// Detect if the terminal supports colored output
fn supports_color() -> bool {
    // Respect NO_COLOR convention
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if output is a terminal
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }

    true
}
