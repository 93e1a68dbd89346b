//! Cross-validated grid search over the random-forest hyperparameter grid.
//!
//! Every candidate is independent, so candidates are scored in parallel with
//! rayon; the final selection is a sequential first-strictly-greater scan,
//! which keeps the winner deterministic for a fixed seed regardless of
//! thread scheduling.
use anyhow::{bail, Result};
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::{ForestParams, SearchGrid};
use crate::metrics::accuracy;
use crate::models::ForestClassifier;

/// Result of a grid search: the refit winner and its scores.
pub struct SearchOutcome {
    pub model: ForestClassifier,
    pub best_params: ForestParams,
    pub best_cv_accuracy: f32,
}

/// Exhaustively search `grid`, scoring each candidate by mean k-fold
/// cross-validation accuracy on the training data, then refit the best
/// candidate on the full training set.
pub fn grid_search(
    x: &Array2<f32>,
    y: &[u32],
    grid: &SearchGrid,
    folds: usize,
    seed: u64,
) -> Result<SearchOutcome> {
    let candidates = grid.expand(seed);
    if candidates.is_empty() {
        bail!("Hyperparameter grid is empty");
    }

    let fold_indices = kfold_indices(x.nrows(), folds, seed)?;
    log::info!(
        "Grid search over {} candidates with {}-fold cross-validation",
        candidates.len(),
        folds
    );

    let scores: Vec<f32> = candidates
        .par_iter()
        .map(|params| cross_val_accuracy(x, y, params, &fold_indices))
        .collect::<Result<Vec<f32>>>()?;

    // First strictly-greater score wins, so ties resolve in grid order.
    let mut best_idx = 0;
    for (idx, &score) in scores.iter().enumerate() {
        if score > scores[best_idx] {
            best_idx = idx;
        }
    }

    let best_params = candidates[best_idx].clone();
    let best_cv_accuracy = scores[best_idx];
    log::info!(
        "Best candidate: {:?} (mean CV accuracy {:.4})",
        best_params,
        best_cv_accuracy
    );

    let mut model = ForestClassifier::new(best_params.clone());
    model.fit(x, y)?;

    Ok(SearchOutcome {
        model,
        best_params,
        best_cv_accuracy,
    })
}

/// Mean held-out accuracy of one candidate across the given folds.
fn cross_val_accuracy(
    x: &Array2<f32>,
    y: &[u32],
    params: &ForestParams,
    fold_indices: &[Vec<usize>],
) -> Result<f32> {
    let mut total = 0.0f32;

    for (fold, held_out) in fold_indices.iter().enumerate() {
        let train: Vec<usize> = fold_indices
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != fold)
            .flat_map(|(_, idx)| idx.iter().copied())
            .collect();

        let x_train = x.select(Axis(0), &train);
        let y_train: Vec<u32> = train.iter().map(|&i| y[i]).collect();
        let x_val = x.select(Axis(0), held_out);
        let y_val: Vec<u32> = held_out.iter().map(|&i| y[i]).collect();

        let mut model = ForestClassifier::new(params.clone());
        model.fit(&x_train, &y_train)?;
        let predictions = model.predict(&x_val)?;
        total += accuracy(&y_val, &predictions);
    }

    Ok(total / fold_indices.len() as f32)
}

/// Partition `0..n` into `k` nearly-equal folds after a seeded shuffle.
fn kfold_indices(n: usize, k: usize, seed: u64) -> Result<Vec<Vec<usize>>> {
    if k < 2 {
        bail!("Cross-validation requires at least 2 folds, got {}", k);
    }
    if n < k {
        bail!("Cannot split {} samples into {} folds", n, k);
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    // The first n % k folds take one extra sample.
    let base = n / k;
    let extra = n % k;
    let mut folds = Vec::with_capacity(k);
    let mut start = 0;
    for fold in 0..k {
        let size = base + usize::from(fold < extra);
        folds.push(indices[start..start + size].to_vec());
        start += size;
    }

    Ok(folds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kfold_covers_all_indices_disjointly() {
        let folds = kfold_indices(23, 5, 42).unwrap();
        assert_eq!(folds.len(), 5);

        let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..23).collect::<Vec<_>>());

        let sizes: Vec<usize> = folds.iter().map(|f| f.len()).collect();
        assert_eq!(sizes, vec![5, 5, 5, 4, 4]);
    }

    #[test]
    fn kfold_is_deterministic_per_seed() {
        let a = kfold_indices(50, 5, 7).unwrap();
        let b = kfold_indices(50, 5, 7).unwrap();
        assert_eq!(a, b);

        let c = kfold_indices(50, 5, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn kfold_rejects_tiny_inputs() {
        assert!(kfold_indices(3, 5, 42).is_err());
        assert!(kfold_indices(10, 1, 42).is_err());
    }
}
