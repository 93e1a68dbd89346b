//! Cached train/test partitioning.
//!
//! The split is drawn once with a seeded shuffle and persisted to two binary
//! cache files. If both files exist they are loaded and returned
//! unconditionally: the cache is never invalidated against the current
//! dataset, so a stale split survives dataset edits. That is a known
//! limitation carried over from the reference behavior.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::EncodedDataset;

/// One side of the train/test split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    pub x: Array2<f32>,
    pub y: Vec<u32>,
}

impl Partition {
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    fn from_indices(data: &EncodedDataset, indices: &[usize]) -> Self {
        Partition {
            x: data.x.select(Axis(0), indices),
            y: indices.iter().map(|&i| data.y[i]).collect(),
        }
    }
}

/// Paths of the two cache files inside a working directory.
#[derive(Debug, Clone)]
pub struct SplitCache {
    train_path: PathBuf,
    test_path: PathBuf,
}

impl SplitCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        SplitCache {
            train_path: dir.as_ref().join("train.bin"),
            test_path: dir.as_ref().join("test.bin"),
        }
    }

    pub fn train_path(&self) -> &Path {
        &self.train_path
    }

    pub fn test_path(&self) -> &Path {
        &self.test_path
    }

    fn is_populated(&self) -> bool {
        self.train_path.exists() && self.test_path.exists()
    }

    /// Return the persisted partition if present, otherwise draw a fresh
    /// split, persist it, and return it.
    ///
    /// `test_fraction` of the rows (rounded up) go to the test partition;
    /// the draw is a seeded shuffle, unstratified. The cache-miss path is
    /// the only recovered failure here; persistence errors are fatal.
    pub fn get_or_create(
        &self,
        data: &EncodedDataset,
        test_fraction: f32,
        seed: u64,
    ) -> Result<(Partition, Partition)> {
        if self.is_populated() {
            log::info!(
                "Loading cached train/test split from {} and {}",
                self.train_path.display(),
                self.test_path.display()
            );
            let train = load_partition(&self.train_path)?;
            let test = load_partition(&self.test_path)?;
            return Ok((train, test));
        }

        log::info!("No cached split found; splitting data and saving for future use");

        let n_samples = data.n_samples();
        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = ((n_samples as f32) * test_fraction).ceil() as usize;
        let test = Partition::from_indices(data, &indices[..n_test]);
        let train = Partition::from_indices(data, &indices[n_test..]);

        save_partition(&self.train_path, &train)?;
        save_partition(&self.test_path, &test)?;
        log::info!(
            "Saved train ({} rows) and test ({} rows) partitions",
            train.n_samples(),
            test.n_samples()
        );

        Ok((train, test))
    }
}

fn load_partition(path: &Path) -> Result<Partition> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read split cache: {}", path.display()))?;
    rmp_serde::from_slice(&bytes)
        .with_context(|| format!("Failed to decode split cache: {}", path.display()))
}

fn save_partition(path: &Path, partition: &Partition) -> Result<()> {
    let bytes = rmp_serde::to_vec(partition)
        .with_context(|| format!("Failed to encode split cache: {}", path.display()))?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write split cache: {}", path.display()))
}
