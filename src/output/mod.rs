//! Output and display system
//!
//! Defines the display surface the test runner drives, plus the
//! terminal implementation. The runner only ever talks to the
//! [`TestDisplay`] trait, so headless test doubles can observe the
//! full update sequence.

mod console;

pub use console::{format_gauge_line, format_history_entry, ConsoleDisplay};

use crate::gauge::GaugeReading;
use crate::models::MeasurementResult;
use crate::types::ThroughputKind;

/// Configuration options for display rendering
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Gauge bar width in characters
    pub gauge_width: usize,
    /// Gauge full-scale value in Mbps
    pub gauge_max_mbps: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            gauge_width: 30,
            gauge_max_mbps: crate::defaults::DEFAULT_GAUGE_MAX_MBPS,
        }
    }
}

/// Display surface driven by the test runner
///
/// One method per UI mutation the measurement sequence performs:
/// reset at start, ping once resolved, per-tick throughput progress,
/// the settled value per direction, the refreshed history list, and
/// the trigger restore that runs on every exit path.
pub trait TestDisplay: Send {
    /// Reset gauges to zero and the ping display to its placeholder
    fn reset(&mut self);

    /// Show a resolved ping value in milliseconds
    fn show_ping(&mut self, ping_ms: u32);

    /// Show an intermediate throughput value for one direction
    fn show_progress(&mut self, kind: ThroughputKind, speed: f64, reading: GaugeReading);

    /// Show the settled throughput value for one direction
    fn show_final(&mut self, kind: ThroughputKind, speed: f64, reading: GaugeReading);

    /// Render the full history list, newest first
    fn show_history(&mut self, entries: &[MeasurementResult]);

    /// Restore the trigger surface to its enabled, default state
    fn restore_trigger(&mut self);
}
