//! Measurement result data model

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single completed speed test result
///
/// Immutable once created; the timestamp is captured at construction
/// time as a human-readable local-time string, matching what the
/// history listing displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Human-readable local timestamp of the test
    pub timestamp: String,

    /// Download throughput in Mbps
    pub download: f64,

    /// Upload throughput in Mbps
    pub upload: f64,

    /// Round-trip latency in milliseconds
    pub ping: u32,
}

impl MeasurementResult {
    /// Create a result stamped with the current local time
    pub fn new(download: f64, upload: f64, ping: u32) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            download,
            upload,
            ping,
        }
    }

    /// Create a result with an explicit timestamp
    pub fn with_timestamp(
        timestamp: String,
        download: f64,
        upload: f64,
        ping: u32,
    ) -> Self {
        Self {
            timestamp,
            download,
            upload,
            ping,
        }
    }

    /// Format the throughput pair as shown in history listings
    pub fn summary(&self) -> String {
        format!("↓{:.1}Mbps ↑{:.1}Mbps", self.download, self.upload)
    }
}

impl std::fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {}  ping {}ms",
            self.timestamp,
            self.summary(),
            self.ping
        )
    }
}
