//! Data models and structures for the speed test simulator

pub mod config;
pub mod result;

// Re-export main model types
pub use config::Config;
pub use result::MeasurementResult;
