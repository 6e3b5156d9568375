//! Simulated measurement engine
//!
//! Fabricates ping and throughput readings on timers. Ping resolves
//! once after a fixed delay; throughput ramps up by a random increment
//! per tick until it crosses a randomly drawn threshold, reporting
//! every intermediate value through a progress callback.
//!
//! Both operations are infallible and non-cancelable once started; the
//! only suspension points are the timer sleeps.

use crate::models::Config;
use crate::types::ThroughputKind;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Ping range in milliseconds, inclusive
const PING_MIN_MS: u32 = 5;
const PING_MAX_MS: u32 = 149;

/// Per-tick speed increment upper bound in Mbps (exclusive)
const TICK_INCREMENT_MAX: f64 = 10.0;

/// Completion threshold range in Mbps: drawn once per measurement
const THRESHOLD_MIN: f64 = 80.0;
const THRESHOLD_MAX: f64 = 100.0;

/// Timer-driven fake measurement generator
#[derive(Debug, Clone)]
pub struct Simulator {
    ping_delay: Duration,
    tick_interval: Duration,
}

impl Simulator {
    /// Create a simulator with explicit timer periods
    pub fn new(ping_delay: Duration, tick_interval: Duration) -> Self {
        Self {
            ping_delay,
            tick_interval,
        }
    }

    /// Create a simulator using the configured timer periods
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ping_delay(), config.tick_interval())
    }

    /// Simulate a ping measurement
    ///
    /// Waits one full ping delay, then produces a uniform random
    /// latency in [5, 149] milliseconds.
    pub async fn measure_ping(&self) -> u32 {
        sleep(self.ping_delay).await;
        rand::thread_rng().gen_range(PING_MIN_MS..=PING_MAX_MS)
    }

    /// Simulate a throughput measurement
    ///
    /// Accumulates a random increment in [0, 10) Mbps per tick and
    /// reports each intermediate total through `progress`. Completes
    /// once the total reaches a threshold drawn uniformly from
    /// [80, 100) at the start of the call. The last increment may
    /// overshoot, so the final value can exceed 100.
    pub async fn measure_throughput<F>(&self, kind: ThroughputKind, mut progress: F) -> f64
    where
        F: FnMut(ThroughputKind, f64),
    {
        let threshold = rand::thread_rng().gen_range(THRESHOLD_MIN..THRESHOLD_MAX);
        let mut speed = 0.0_f64;

        loop {
            sleep(self.tick_interval).await;
            speed += rand::thread_rng().gen_range(0.0..TICK_INCREMENT_MAX);
            progress(kind, speed);

            if speed >= threshold {
                return speed;
            }
        }
    }
}
