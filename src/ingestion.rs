use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::config::DataIngestionConfig;
use crate::data::loader::load_file;
use crate::data::split::train_test_split;
use crate::data::writer::{ensure_parent_dir, write_csv};
use crate::error::IngestionError;

/// Paths of the two subsets produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPaths {
    pub train: PathBuf,
    pub test: PathBuf,
}

/// Reads the source table, stores a raw copy, and writes the train/test split.
#[derive(Debug, Clone, Default)]
pub struct DataIngestion {
    config: DataIngestionConfig,
}

impl DataIngestion {
    pub fn new(config: DataIngestionConfig) -> Self {
        Self { config }
    }

    /// Run the whole step.  Any failure comes back as an [`IngestionError`].
    pub fn initiate_data_ingestion(&self) -> Result<SplitPaths, IngestionError> {
        info!("Entered the data ingestion method or component");
        // Closure so the recorded location is this line, not inside `map_err`.
        self.run().map_err(|e| IngestionError::new(e))
    }

    fn run(&self) -> Result<SplitPaths> {
        let cfg = &self.config;

        let dataset = load_file(&cfg.source_path)
            .with_context(|| format!("reading source dataset {}", cfg.source_path.display()))?;
        info!(
            "Read the dataset as a table: {} rows x {} columns",
            dataset.len(),
            dataset.columns().len()
        );

        for path in [&cfg.raw_data_path, &cfg.train_data_path, &cfg.test_data_path] {
            ensure_parent_dir(path)?;
        }

        write_csv(&dataset, &cfg.raw_data_path).context("saving raw copy")?;

        info!("Train test split initiated");
        let positions: Vec<usize> = (0..dataset.len()).collect();
        let (train_idx, test_idx) = train_test_split(positions, cfg.test_size, cfg.random_state)
            .context("splitting dataset")?;

        let train_set = dataset.select(&train_idx).context("selecting training rows")?;
        let test_set = dataset.select(&test_idx).context("selecting test rows")?;
        write_csv(&train_set, &cfg.train_data_path).context("saving training set")?;
        write_csv(&test_set, &cfg.test_data_path).context("saving test set")?;

        info!(
            "Ingestion of the data is completed: {} train rows, {} test rows",
            train_set.len(),
            test_set.len()
        );

        Ok(SplitPaths {
            train: cfg.train_data_path.clone(),
            test: cfg.test_data_path.clone(),
        })
    }
}
