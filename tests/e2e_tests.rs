//! End-to-end tests driving the runner through the public library API
//!
//! Uses a recording display so the full update sequence a user would
//! see on the terminal can be asserted headlessly.

use speedtest_simulator::{
    gauge::GaugeReading,
    history::HistoryStore,
    models::{Config, MeasurementResult},
    runner::TestRunner,
    simulate::Simulator,
    storage::MemoryStore,
    types::ThroughputKind,
    TestDisplay,
};

/// What the display was told to show, in order
#[derive(Debug, Clone)]
enum Shown {
    Reset,
    Ping(u32),
    Progress(ThroughputKind, f64),
    Final(ThroughputKind, f64),
    History(Vec<MeasurementResult>),
    Restore,
}

#[derive(Default)]
struct RecordingDisplay {
    shown: Vec<Shown>,
}

impl TestDisplay for RecordingDisplay {
    fn reset(&mut self) {
        self.shown.push(Shown::Reset);
    }

    fn show_ping(&mut self, ping_ms: u32) {
        self.shown.push(Shown::Ping(ping_ms));
    }

    fn show_progress(&mut self, kind: ThroughputKind, speed: f64, _reading: GaugeReading) {
        self.shown.push(Shown::Progress(kind, speed));
    }

    fn show_final(&mut self, kind: ThroughputKind, speed: f64, _reading: GaugeReading) {
        self.shown.push(Shown::Final(kind, speed));
    }

    fn show_history(&mut self, entries: &[MeasurementResult]) {
        self.shown.push(Shown::History(entries.to_vec()));
    }

    fn restore_trigger(&mut self) {
        self.shown.push(Shown::Restore);
    }
}

fn fast_config() -> Config {
    Config {
        ping_delay_ms: 1,
        tick_interval_ms: 1,
        enable_color: false,
        ..Default::default()
    }
}

fn make_runner(config: &Config) -> TestRunner {
    TestRunner::new(
        config.clone(),
        Simulator::from_config(config),
        HistoryStore::new(Box::new(MemoryStore::new()), config.history_limit),
    )
}

#[tokio::test]
async fn test_ping_display_shows_value_in_range() {
    let config = fast_config();
    let runner = make_runner(&config);
    let mut display = RecordingDisplay::default();

    runner.run(&mut display).await.unwrap().unwrap();

    let ping = display
        .shown
        .iter()
        .find_map(|s| match s {
            Shown::Ping(p) => Some(*p),
            _ => None,
        })
        .expect("ping was never shown");
    assert!((5..=149).contains(&ping));
}

#[tokio::test]
async fn test_first_history_entry_matches_completed_run() {
    let config = fast_config();
    let runner = make_runner(&config);
    let mut display = RecordingDisplay::default();

    let result = runner.run(&mut display).await.unwrap().unwrap();

    let entries = display
        .shown
        .iter()
        .find_map(|s| match s {
            Shown::History(entries) => Some(entries.clone()),
            _ => None,
        })
        .expect("history was never rendered");

    assert_eq!(entries[0], result);
    assert_eq!(
        entries[0].summary(),
        format!("↓{:.1}Mbps ↑{:.1}Mbps", result.download, result.upload)
    );
}

#[tokio::test]
async fn test_trigger_restored_after_sequence() {
    let config = fast_config();
    let runner = make_runner(&config);
    let mut display = RecordingDisplay::default();

    runner.run(&mut display).await.unwrap().unwrap();

    assert!(matches!(display.shown.last(), Some(Shown::Restore)));
}

#[tokio::test]
async fn test_progress_streams_into_display_for_both_directions() {
    let config = fast_config();
    let runner = make_runner(&config);
    let mut display = RecordingDisplay::default();

    let result = runner.run(&mut display).await.unwrap().unwrap();

    let download_samples: Vec<f64> = display
        .shown
        .iter()
        .filter_map(|s| match s {
            Shown::Progress(ThroughputKind::Download, v) => Some(*v),
            _ => None,
        })
        .collect();
    let upload_samples: Vec<f64> = display
        .shown
        .iter()
        .filter_map(|s| match s {
            Shown::Progress(ThroughputKind::Upload, v) => Some(*v),
            _ => None,
        })
        .collect();

    assert!(!download_samples.is_empty());
    assert!(!upload_samples.is_empty());
    assert_eq!(*download_samples.last().unwrap(), result.download);
    assert_eq!(*upload_samples.last().unwrap(), result.upload);
}

#[tokio::test]
async fn test_six_runs_keep_only_five_newest_results() {
    let config = fast_config();
    let runner = make_runner(&config);

    let mut results = Vec::new();
    for _ in 0..6 {
        let mut display = RecordingDisplay::default();
        results.push(runner.run(&mut display).await.unwrap().unwrap());
    }

    let entries = runner.history().list().await.unwrap();
    assert_eq!(entries.len(), 5);
    // Newest first, first run evicted
    assert_eq!(entries[0], results[5]);
    assert_eq!(entries[4], results[1]);
}
