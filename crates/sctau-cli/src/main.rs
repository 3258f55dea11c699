//! SCT-AU terminology lookup CLI binary.

mod menu;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sctau_finder::{ConceptFinder, SqliteExecutor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_MAX_ROWS: usize = 100;

/// Command-line lookup over an SCT-AU (SNOMED CT Australian release)
/// terminology database.
#[derive(Parser)]
#[command(name = "sctau", version, about)]
struct Args {
    /// Path to the SCT-AU SQLite database (falls back to SCTAU_DATABASE).
    #[arg(long)]
    database: Option<PathBuf>,

    /// Maximum number of concepts a find operation returns (falls back to
    /// SCTAU_MAX_ROWS).
    #[arg(long)]
    max_rows: Option<usize>,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let Some(database) = args
        .database
        .or_else(|| std::env::var("SCTAU_DATABASE").ok().map(PathBuf::from))
    else {
        tracing::error!("no database given: pass --database or set SCTAU_DATABASE");
        return ExitCode::FAILURE;
    };

    let max_rows = args
        .max_rows
        .or_else(|| std::env::var("SCTAU_MAX_ROWS").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_MAX_ROWS);

    tracing::info!("Connecting to database {}", database.display());

    let executor = match SqliteExecutor::open(&database, max_rows) {
        Ok(executor) => executor,
        Err(err) => {
            tracing::error!("Unable to open database {}: {err}", database.display());
            return ExitCode::FAILURE;
        }
    };

    let finder = ConceptFinder::new(&executor);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(err) = menu::run(&finder, &mut stdin.lock(), &mut stdout.lock()) {
        tracing::error!("I/O failure: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
