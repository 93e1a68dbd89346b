//! Training orchestration: load, encode, split (cached), search, evaluate.
use anyhow::{Context, Result};

use aegle_classifiers::config::ForestParams;
use aegle_classifiers::data::{load_records, EncodedDataset, LABEL_COLUMN};
use aegle_classifiers::encoding::{EncoderSet, LabelEncoder};
use aegle_classifiers::metrics::{accuracy, classification_report, ClassificationReport};
use aegle_classifiers::pipeline::FittedPipeline;
use aegle_classifiers::search::grid_search;
use aegle_classifiers::split::SplitCache;

use crate::config::RunConfig;

/// Everything training produces: the fitted pipeline plus its diagnostics.
pub struct TrainOutcome {
    pub pipeline: FittedPipeline,
    pub best_params: ForestParams,
    pub cv_accuracy: f32,
    pub test_accuracy: f32,
    pub report: ClassificationReport,
}

pub fn run_training(config: &RunConfig) -> Result<TrainOutcome> {
    let records = load_records(&config.data_path)
        .with_context(|| format!("Failed to load dataset from {}", config.data_path))?;
    log::info!("Loaded {} patient records", records.len());

    // Encoders are fitted once on the full dataset and reused unmodified
    // for every later encode/decode call, including interactive prediction.
    let encoders = EncoderSet::fit(&records);
    let label_encoder = LabelEncoder::fit(LABEL_COLUMN, records.iter().map(|r| r.disease.as_str()));

    let data = EncodedDataset::from_records(&records, &encoders, &label_encoder)
        .context("Failed to encode dataset")?;
    data.log_summary(&label_encoder);

    let cache = SplitCache::new(&config.cache_dir);
    let (train, test) = cache.get_or_create(&data, config.test_fraction, config.seed)?;
    log::info!(
        "Training on {} rows, testing on {} rows",
        train.n_samples(),
        test.n_samples()
    );

    let outcome = grid_search(
        &train.x,
        &train.y,
        &config.grid,
        config.cv_folds,
        config.seed,
    )
    .context("Grid search failed")?;

    let predictions = outcome.model.predict(&test.x)?;
    let test_accuracy = accuracy(&test.y, &predictions);
    let report = classification_report(&test.y, &predictions, label_encoder.classes());

    Ok(TrainOutcome {
        pipeline: FittedPipeline {
            encoders,
            label_encoder,
            model: outcome.model,
        },
        best_params: outcome.best_params,
        cv_accuracy: outcome.best_cv_accuracy,
        test_accuracy,
        report,
    })
}
