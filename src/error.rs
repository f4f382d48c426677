use std::panic::Location;

use thiserror::Error;

/// The one error kind the ingestion step reports.
///
/// Wraps whatever went wrong (with its context chain) together with the
/// source location where the failure was translated.
#[derive(Debug, Error)]
#[error("error occurred in [{file}] line [{line}]: {source:#}")]
pub struct IngestionError {
    file: &'static str,
    line: u32,
    #[source]
    source: anyhow::Error,
}

impl IngestionError {
    /// Wrap `cause`, recording the caller's file and line.
    #[track_caller]
    pub fn new(cause: impl Into<anyhow::Error>) -> Self {
        let location = Location::caller();
        IngestionError {
            file: location.file(),
            line: location.line(),
            source: cause.into(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}
