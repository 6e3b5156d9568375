//! Test sequence orchestration
//!
//! Drives one full simulated test: ping, then download, then upload,
//! streaming progress into the display after every tick, committing
//! the final result to history and re-rendering the stored list.
//!
//! A single busy flag gates concurrent triggering: a run started while
//! another is in progress returns immediately without touching the
//! display or history. The flag is released through a scoped guard and
//! the trigger surface is restored on every exit path, success or
//! error.

use crate::error::Result;
use crate::gauge;
use crate::history::HistoryStore;
use crate::models::{Config, MeasurementResult};
use crate::output::TestDisplay;
use crate::simulate::Simulator;
use crate::types::{TestState, ThroughputKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Orchestrates the ping, download, upload measurement sequence
pub struct TestRunner {
    config: Config,
    simulator: Simulator,
    history: HistoryStore,
    busy: Arc<AtomicBool>,
}

/// Clears the busy flag when the run scope ends, on any path
struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

impl TestRunner {
    /// Create a runner over a simulator and history store
    pub fn new(config: Config, simulator: Simulator, history: HistoryStore) -> Self {
        Self {
            config,
            simulator,
            history,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current sequence state
    pub fn state(&self) -> TestState {
        if self.busy.load(Ordering::SeqCst) {
            TestState::Running
        } else {
            TestState::Idle
        }
    }

    /// Access the underlying history store
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Run one full measurement sequence
    ///
    /// Returns `Ok(None)` without side effects when a sequence is
    /// already running. Otherwise returns the completed result; the
    /// busy flag and the trigger surface are restored whether the
    /// sequence succeeds or fails.
    pub async fn run(&self, display: &mut dyn TestDisplay) -> Result<Option<MeasurementResult>> {
        // Checked and set before the first suspension point, so a
        // second trigger on the same runner can never interleave.
        if self.busy.swap(true, Ordering::SeqCst) {
            return Ok(None);
        }
        let _guard = BusyGuard {
            busy: Arc::clone(&self.busy),
        };

        let outcome = self.run_sequence(display).await;
        display.restore_trigger();
        outcome.map(Some)
    }

    async fn run_sequence(&self, display: &mut dyn TestDisplay) -> Result<MeasurementResult> {
        display.reset();

        let ping = self.simulator.measure_ping().await;
        display.show_ping(ping);

        let download = self.measure(ThroughputKind::Download, display).await;
        let upload = self.measure(ThroughputKind::Upload, display).await;

        let result = MeasurementResult::new(download, upload, ping);

        if self.config.save_history {
            self.history.append(result.clone()).await?;
        }

        let entries = self.history.list().await?;
        display.show_history(&entries);

        Ok(result)
    }

    async fn measure(&self, kind: ThroughputKind, display: &mut dyn TestDisplay) -> f64 {
        let max = self.config.gauge_max_mbps;
        let speed = self
            .simulator
            .measure_throughput(kind, |k, s| {
                display.show_progress(k, s, gauge::render(s, max));
            })
            .await;

        display.show_final(kind, speed, gauge::render(speed, max));
        speed
    }
}
