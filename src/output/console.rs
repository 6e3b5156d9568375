//! Terminal display implementation
//!
//! Renders each gauge as a colored horizontal bar with the needle
//! angle alongside, using carriage-return rewrites for live progress.

use super::{DisplayOptions, TestDisplay};
use crate::gauge::GaugeReading;
use crate::models::MeasurementResult;
use crate::types::ThroughputKind;
use colored::Colorize;
use std::io::{self, Write};

/// Terminal display for the measurement sequence
pub struct ConsoleDisplay {
    options: DisplayOptions,
}

impl ConsoleDisplay {
    /// Create a console display with the given options
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    fn print_line(&self, line: &str) {
        println!("{}", line);
    }

    fn print_progress(&self, line: &str) {
        // Rewrite the current line in place for live updates
        print!("\r{:<width$}", line, width = self.options.gauge_width + 40);
        let _ = io::stdout().flush();
    }
}

/// Format one gauge line: direction, bar, current value, needle angle
pub fn format_gauge_line(
    kind: ThroughputKind,
    speed: f64,
    reading: GaugeReading,
    options: &DisplayOptions,
) -> String {
    let fraction = (speed / options.gauge_max_mbps).clamp(0.0, 1.0);
    let filled = (fraction * options.gauge_width as f64).round() as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(options.gauge_width - filled);

    let bar = if options.enable_color {
        bar.color(reading.color_tier.color()).to_string()
    } else {
        bar
    };

    format!(
        "{:>8} [{}] {:>6.1} Mbps ({:+.0}°)",
        kind.name(),
        bar,
        speed,
        reading.angle_degrees
    )
}

/// Format one history entry line: timestamp plus throughput summary
pub fn format_history_entry(index: usize, entry: &MeasurementResult, enable_color: bool) -> String {
    let summary = entry.summary();
    let summary = if enable_color {
        summary.cyan().to_string()
    } else {
        summary
    };

    format!(
        "  {}. {}  {}  ping {}ms",
        index + 1,
        entry.timestamp,
        summary,
        entry.ping
    )
}

impl TestDisplay for ConsoleDisplay {
    fn reset(&mut self) {
        let zero = crate::gauge::render(0.0, self.options.gauge_max_mbps);
        self.print_line(&format_gauge_line(
            ThroughputKind::Download,
            0.0,
            zero,
            &self.options,
        ));
        self.print_line(&format_gauge_line(
            ThroughputKind::Upload,
            0.0,
            zero,
            &self.options,
        ));
        self.print_line("    Ping: --");
    }

    fn show_ping(&mut self, ping_ms: u32) {
        let line = format!("    Ping: {} ms", ping_ms);
        if self.options.enable_color {
            self.print_line(&line.bold().to_string());
        } else {
            self.print_line(&line);
        }
    }

    fn show_progress(&mut self, kind: ThroughputKind, speed: f64, reading: GaugeReading) {
        self.print_progress(&format_gauge_line(kind, speed, reading, &self.options));
    }

    fn show_final(&mut self, kind: ThroughputKind, speed: f64, reading: GaugeReading) {
        // Finish the in-place progress line with a newline
        self.print_progress(&format_gauge_line(kind, speed, reading, &self.options));
        println!();
    }

    fn show_history(&mut self, entries: &[MeasurementResult]) {
        if entries.is_empty() {
            self.print_line("No previous results.");
            return;
        }

        let header = "Recent results:";
        if self.options.enable_color {
            self.print_line(&header.bold().to_string());
        } else {
            self.print_line(header);
        }

        for (i, entry) in entries.iter().enumerate() {
            self.print_line(&format_history_entry(i, entry, self.options.enable_color));
        }
    }

    fn restore_trigger(&mut self) {
        self.print_line("Ready for another run.");
    }
}
