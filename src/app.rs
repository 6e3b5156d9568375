//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config},
    error::{AppError, Result},
    history::HistoryStore,
    logging::Logger,
    models::Config,
    output::{ConsoleDisplay, DisplayOptions, TestDisplay},
    runner::TestRunner,
    simulate::Simulator,
    storage::{FallbackStore, FileStore, KeyValueStore, MemoryStore},
};

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate().map_err(AppError::validation)?;
        Ok(Self { cli })
    }

    /// Run the application
    pub async fn run(self) -> Result<()> {
        let config = load_config(self.cli.clone())?;
        let logger = Logger::with_config("APP".to_string(), &config);

        if config.debug {
            println!("Speed Test Simulator v{}", crate::VERSION);
            println!("\nConfiguration Summary:");
            println!("{}", display_config_summary(&config));
            println!();
        }

        let history = HistoryStore::new(build_store(&logger, &config), config.history_limit);
        let mut display = ConsoleDisplay::new(DisplayOptions {
            enable_color: config.enable_color,
            gauge_width: 30,
            gauge_max_mbps: config.gauge_max_mbps,
        });

        if self.cli.clear_history {
            history.clear().await?;
            println!("History cleared.");
            return Ok(());
        }

        if self.cli.history {
            let entries = history.list().await?;
            display.show_history(&entries);
            return Ok(());
        }

        logger
            .info("Starting simulated speed test")
            .field("ping_delay_ms", config.ping_delay_ms)
            .field("tick_interval_ms", config.tick_interval_ms)
            .log();

        let simulator = Simulator::from_config(&config);
        let runner = TestRunner::new(config.clone(), simulator, history);

        println!("Running simulated speed test...\n");
        let result = runner.run(&mut display).await?;

        if let Some(result) = result {
            if config.verbose {
                println!();
                println!("Completed: {}", result);
            }
            logger
                .info("Test sequence completed")
                .field("ping_ms", result.ping)
                .field("download_mbps", result.download)
                .field("upload_mbps", result.upload)
                .log();
        }

        Ok(())
    }
}

/// Build the key-value store backing the history
///
/// Falls back to an in-memory store with a single warning when the
/// file store cannot be set up or fails later, so a broken cache
/// directory never prevents a test run. The runtime wrapper catches
/// unwritable directories and corrupt history files; the early branch
/// covers a process without XDG_CACHE_HOME or HOME.
fn build_store(logger: &Logger, config: &Config) -> Box<dyn KeyValueStore> {
    match FileStore::default_base_dir() {
        Ok(base_dir) => {
            let file_store = FileStore::with_base_dir(base_dir, config.debug);
            Box::new(FallbackStore::new(Box::new(file_store), logger.clone()))
        }
        Err(e) => {
            logger
                .warn("History storage unavailable, results will not persist")
                .error_info(&e)
                .log();
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_app_rejects_conflicting_flags() {
        let cli = Cli::parse_from(["speedsim", "--color", "--no-color"]);
        let app = App::new(cli);
        assert!(matches!(app, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_app_accepts_valid_flags() {
        let cli = Cli::parse_from(["speedsim", "--no-color", "--verbose"]);
        assert!(App::new(cli).is_ok());
    }

    #[tokio::test]
    async fn test_clear_history_short_circuits() {
        let _guard = crate::test_env::lock();
        crate::test_env::scrub_overrides();

        // Point storage at a scratch directory so the test never
        // touches real user history.
        let temp_dir = tempfile::TempDir::new().unwrap();
        let previous = std::env::var("XDG_CACHE_HOME").ok();
        std::env::set_var("XDG_CACHE_HOME", temp_dir.path());

        let cli = Cli::parse_from(["speedsim", "--no-color", "--clear-history"]);
        let app = App::new(cli).unwrap();
        let outcome = app.run().await;

        match previous {
            Some(value) => std::env::set_var("XDG_CACHE_HOME", value),
            None => std::env::remove_var("XDG_CACHE_HOME"),
        }

        assert!(outcome.is_ok());
    }
}
