//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `table_dump` library that handles:
//! - Command-line argument parsing (logging options only)
//! - Logger initialization
//! - User-facing output and the process exit code
//!
//! All export logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use table_dump::initialization::init_logger_with;
use table_dump::{run_export_with_progress, Config, ExportProgress, LogFormat, LogLevel, TableOutcome};

/// Dump the Quote and Virtue tables of ./dev.db to JSON files.
#[derive(Debug, Parser)]
#[command(name = "table_dump", version, about)]
struct Cli {
    /// Log level (overrides RUST_LOG; defaults to info when neither is set)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        log_level: cli.log_level,
        log_format: cli.log_format,
        ..Default::default()
    };

    init_logger_with(
        config.log_level.clone().map(Into::into),
        config.log_format.clone(),
    )
    .context("Failed to initialize logger")?;

    match run_export_with_progress(&config, print_progress).await {
        Ok(report) => {
            println!(
                "Read {} in {:.1}s",
                report.db_path.display(),
                report.elapsed_seconds
            );
            if report.has_failures() {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Prints the table list, then one line per table as soon as it finishes.
fn print_progress(progress: ExportProgress<'_>) {
    match progress {
        ExportProgress::TablesFound(tables) => println!("Tables found: {:?}", tables),
        ExportProgress::TableDone(result) => match &result.outcome {
            TableOutcome::Exported { rows, .. } => {
                println!("Dumped {} {} to {}", rows, result.label, result.output);
            }
            TableOutcome::Skipped => {}
            TableOutcome::Failed { error } => eprintln!("Error: {error}"),
        },
    }
}
