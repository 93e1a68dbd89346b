use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use aegle_classifiers::config::SearchGrid;

/// Run configuration for one training-plus-prediction session.
///
/// Loadable from a JSON file; every field has a default matching the
/// reference setup (80/20 split, seed 42, 5-fold search).
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    /// Path to the patient dataset CSV.
    pub data_path: String,
    /// Directory holding the two split-cache files.
    pub cache_dir: String,
    /// Fraction of rows held out for testing.
    pub test_fraction: f32,
    /// Seed for the split draw, fold assignment, and forest training.
    pub seed: u64,
    /// Number of cross-validation folds in the grid search.
    pub cv_folds: usize,
    /// Hyperparameter grid to search.
    pub grid: SearchGrid,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_path: "synthetic_health_dataset.csv".to_string(),
            cache_dir: ".".to_string(),
            test_fraction: 0.2,
            seed: 42,
            cv_folds: 5,
            grid: SearchGrid::default(),
        }
    }
}

/// Load a `RunConfig` from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
}
