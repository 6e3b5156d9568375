//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Speed Test Simulator Configuration
#
# Values specified here are used as defaults and can be overridden by
# command-line arguments.

# Gauge full-scale value in Mbps
# SPEEDSIM_GAUGE_MAX_MBPS=100

# Maximum number of results kept in history
# SPEEDSIM_HISTORY_LIMIT=5

# Simulated ping delay in milliseconds
# SPEEDSIM_PING_DELAY_MS=1000

# Throughput tick interval in milliseconds
# SPEEDSIM_TICK_INTERVAL_MS=100

# Enable colored output (true/false)
# SPEEDSIM_ENABLE_COLOR=true
"#
        .to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        use std::fs;

        let content = Self::create_example_env_content();
        fs::write(path, content)
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }
}
