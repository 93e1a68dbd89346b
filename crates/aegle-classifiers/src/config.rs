use serde::{Deserialize, Serialize};

/// Hyperparameters for one random-forest candidate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ForestParams {
    pub n_trees: u16,
    /// `None` grows trees to purity.
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        ForestParams {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            seed: 42,
        }
    }
}

/// Hyperparameter grid for the cross-validated search.
///
/// The default grid matches the reference training setup:
/// 3 x 3 x 3 x 3 = 81 candidate combinations.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchGrid {
    pub n_estimators: Vec<u16>,
    pub max_depth: Vec<Option<u16>>,
    pub min_samples_split: Vec<usize>,
    pub min_samples_leaf: Vec<usize>,
}

impl Default for SearchGrid {
    fn default() -> Self {
        SearchGrid {
            n_estimators: vec![50, 100, 200],
            max_depth: vec![None, Some(5), Some(10)],
            min_samples_split: vec![2, 5, 10],
            min_samples_leaf: vec![1, 5, 10],
        }
    }
}

impl SearchGrid {
    /// Expand the grid into its cartesian product, in declaration order.
    ///
    /// The order is part of the search contract: ties in cross-validation
    /// accuracy break to the earliest candidate.
    pub fn expand(&self, seed: u64) -> Vec<ForestParams> {
        let mut candidates = Vec::with_capacity(
            self.n_estimators.len()
                * self.max_depth.len()
                * self.min_samples_split.len()
                * self.min_samples_leaf.len(),
        );
        for &n_trees in &self.n_estimators {
            for &max_depth in &self.max_depth {
                for &min_samples_split in &self.min_samples_split {
                    for &min_samples_leaf in &self.min_samples_leaf {
                        candidates.push(ForestParams {
                            n_trees,
                            max_depth,
                            min_samples_split,
                            min_samples_leaf,
                            seed,
                        });
                    }
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_81_candidates() {
        let grid = SearchGrid::default();
        assert_eq!(grid.expand(42).len(), 81);
    }

    #[test]
    fn expand_is_ordered_and_seeded() {
        let grid = SearchGrid {
            n_estimators: vec![10, 20],
            max_depth: vec![None, Some(3)],
            min_samples_split: vec![2],
            min_samples_leaf: vec![1],
        };
        let candidates = grid.expand(7);
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0].n_trees, 10);
        assert_eq!(candidates[0].max_depth, None);
        assert_eq!(candidates[1].max_depth, Some(3));
        assert_eq!(candidates[3].n_trees, 20);
        assert!(candidates.iter().all(|c| c.seed == 7));
    }
}
