//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Direction of a simulated throughput measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThroughputKind {
    /// Downstream bandwidth (server to client)
    Download,
    /// Upstream bandwidth (client to server)
    Upload,
}

impl ThroughputKind {
    /// Get a human-readable name for this measurement direction
    pub fn name(&self) -> &'static str {
        match self {
            ThroughputKind::Download => "Download",
            ThroughputKind::Upload => "Upload",
        }
    }

    /// Arrow symbol used in history listings
    pub fn arrow(&self) -> &'static str {
        match self {
            ThroughputKind::Download => "↓",
            ThroughputKind::Upload => "↑",
        }
    }
}

/// Test sequence state owned by the runner for its lifetime
///
/// At most one measurement sequence runs at a time; a trigger received
/// while `Running` is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestState {
    /// No test in progress, trigger accepted
    #[default]
    Idle,
    /// Measurement sequence in progress, trigger ignored
    Running,
}

impl TestState {
    /// Check whether a new test may start from this state
    pub fn can_start(&self) -> bool {
        matches!(self, TestState::Idle)
    }
}
