use anyhow::{anyhow, Result};
use ndarray::Array2;
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::config::ForestParams;

type FittedForest = RandomForestClassifier<f32, u32, DenseMatrix<f32>, Vec<u32>>;

/// Random-forest classifier wrapping the smartcore ensemble.
///
/// Deterministic for a fixed `ForestParams::seed`.
pub struct ForestClassifier {
    model: Option<FittedForest>,
    params: ForestParams,
}

impl ForestClassifier {
    pub fn new(params: ForestParams) -> Self {
        ForestClassifier {
            model: None,
            params,
        }
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Train the forest on an encoded feature matrix and label codes.
    pub fn fit(&mut self, x: &Array2<f32>, y: &[u32]) -> Result<()> {
        let mut parameters = RandomForestClassifierParameters::default()
            .with_n_trees(self.params.n_trees)
            .with_min_samples_split(self.params.min_samples_split)
            .with_min_samples_leaf(self.params.min_samples_leaf)
            .with_seed(self.params.seed);
        if let Some(depth) = self.params.max_depth {
            parameters = parameters.with_max_depth(depth);
        }

        let matrix = to_dense_matrix(x);
        let labels: Vec<u32> = y.to_vec();

        let model = RandomForestClassifier::fit(&matrix, &labels, parameters)
            .map_err(|e| anyhow!("Random forest training failed: {}", e))?;
        self.model = Some(model);
        Ok(())
    }

    /// Predict label codes for each row of `x`.
    pub fn predict(&self, x: &Array2<f32>) -> Result<Vec<u32>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| anyhow!("Model has not been fitted"))?;
        model
            .predict(&to_dense_matrix(x))
            .map_err(|e| anyhow!("Random forest prediction failed: {}", e))
    }

    /// Single-record inference.
    pub fn predict_one(&self, features: &[f32]) -> Result<u32> {
        let x = Array2::from_shape_vec((1, features.len()), features.to_vec())?;
        let codes = self.predict(&x)?;
        codes
            .first()
            .copied()
            .ok_or_else(|| anyhow!("Prediction returned no rows"))
    }
}

fn to_dense_matrix(x: &Array2<f32>) -> DenseMatrix<f32> {
    let rows: Vec<Vec<f32>> = x.outer_iter().map(|row| row.to_vec()).collect();
    DenseMatrix::from_2d_vec(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Array2<f32>, Vec<u32>) {
        // Class 1 when the second feature is high, class 0 otherwise.
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                1.0, 0.0, 2.0, 0.5, 1.5, 0.2, 2.5, 0.3, 1.2, 9.0, 2.2, 8.5, 1.8, 9.5, 2.8, 8.8,
            ],
        )
        .unwrap();
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1];
        (x, y)
    }

    #[test]
    fn fit_then_predict_recovers_labels() {
        let (x, y) = separable_data();
        let mut classifier = ForestClassifier::new(ForestParams {
            n_trees: 10,
            ..ForestParams::default()
        });
        classifier.fit(&x, &y).unwrap();
        assert!(classifier.is_fitted());

        let predictions = classifier.predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn predict_before_fit_errors() {
        let classifier = ForestClassifier::new(ForestParams::default());
        let x = Array2::zeros((1, 2));
        assert!(classifier.predict(&x).is_err());
    }

    #[test]
    fn predict_one_matches_batch() {
        let (x, y) = separable_data();
        let mut classifier = ForestClassifier::new(ForestParams {
            n_trees: 10,
            ..ForestParams::default()
        });
        classifier.fit(&x, &y).unwrap();

        let code = classifier.predict_one(&[1.9, 9.2]).unwrap();
        assert_eq!(code, 1);
    }
}
