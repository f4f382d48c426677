mod config;
mod data;
mod error;
mod ingestion;
mod logger;

use std::process::ExitCode;

use config::AppConfig;
use error::IngestionError;
use ingestion::{DataIngestion, SplitPaths};

fn main() -> anyhow::Result<ExitCode> {
    let app = AppConfig::load()?;
    if let Some(path) = logger::init_logging(&app.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    let ingestion = DataIngestion::new(app.ingestion);
    Ok(ExitCode::from(report(ingestion.initiate_data_ingestion())))
}

/// Print the outcome and pick the exit status.  The error's `Display` already
/// carries the full cause chain, so it is printed once and not re-raised.
fn report(outcome: Result<SplitPaths, IngestionError>) -> u8 {
    match outcome {
        Ok(paths) => {
            println!("train_data_path={}", paths.train.display());
            println!("test_data_path={}", paths.test.display());
            0
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}
