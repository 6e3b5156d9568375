//! Speed Test Simulator - Main CLI Application

use clap::Parser;
use speedtest_simulator::{app::App, cli::Cli, error::AppError};
use std::process;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let use_colors = cli.use_colors();

    let outcome = match App::new(cli) {
        Ok(app) => app.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        eprintln!("{}", e.format_for_console(use_colors));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format (SPEEDSIM_* variables)");
            eprintln!("  - Timer values must be positive milliseconds");
            eprintln!("  - Run with --help to see all flags");
        }
        AppError::Storage(_) => {
            eprintln!();
            eprintln!("Storage troubleshooting:");
            eprintln!("  - Check permissions on your cache directory");
            eprintln!("  - Remove a corrupted history file with --clear-history");
            eprintln!("  - Run with --no-save to skip persistence entirely");
        }
        _ => {}
    }
}
