//! Speed Test Simulator
//!
//! A terminal speed-test simulator: it fabricates ping and throughput
//! readings on timers, animates them as needle gauges, and keeps a
//! bounded history of past results in local storage. No real network
//! measurement takes place.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gauge;
pub mod history;
pub mod logging;
pub mod models;
pub mod output;
pub mod runner;
pub mod simulate;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use gauge::{ColorTier, GaugeReading};
pub use history::HistoryStore;
pub use models::{Config, MeasurementResult};
pub use output::{ConsoleDisplay, DisplayOptions, TestDisplay};
pub use runner::TestRunner;
pub use simulate::Simulator;
pub use storage::{FallbackStore, FileStore, KeyValueStore, MemoryStore};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");


/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_GAUGE_MAX_MBPS: f64 = 100.0;
    pub const DEFAULT_HISTORY_LIMIT: usize = 5;
    pub const DEFAULT_PING_DELAY: Duration = Duration::from_millis(1000);
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
