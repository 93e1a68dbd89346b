//! Dataset loading and the encoded feature matrix.
//!
//! Defines the CSV row struct (`PatientRecord`), the loader, and
//! `EncodedDataset`, the numeric matrix/label pair consumed by the split
//! cache and the model trainer.
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array2;

use crate::encoding::{EncoderSet, LabelEncoder};

/// Feature columns in the fixed order the model expects.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "Age",
    "Gender",
    "BMI",
    "Blood_Pressure",
    "Cholesterol",
    "Symptom_1",
    "Symptom_2",
    "Symptom_3",
    "Symptom_4",
];

/// Categorical feature columns (everything except Age and BMI).
pub const CATEGORICAL_COLUMNS: [&str; 7] = [
    "Gender",
    "Blood_Pressure",
    "Cholesterol",
    "Symptom_1",
    "Symptom_2",
    "Symptom_3",
    "Symptom_4",
];

/// Prediction target column.
pub const LABEL_COLUMN: &str = "Disease";

/// One patient row as it appears in the dataset CSV.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "Age")]
    pub age: f32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "BMI")]
    pub bmi: f32,
    #[serde(rename = "Blood_Pressure")]
    pub blood_pressure: String,
    #[serde(rename = "Cholesterol")]
    pub cholesterol: String,
    #[serde(rename = "Symptom_1")]
    pub symptom_1: String,
    #[serde(rename = "Symptom_2")]
    pub symptom_2: String,
    #[serde(rename = "Symptom_3")]
    pub symptom_3: String,
    #[serde(rename = "Symptom_4")]
    pub symptom_4: String,
    #[serde(rename = "Disease")]
    pub disease: String,
}

impl PatientRecord {
    /// Look up a categorical field by column name.
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "Gender" => Some(&self.gender),
            "Blood_Pressure" => Some(&self.blood_pressure),
            "Cholesterol" => Some(&self.cholesterol),
            "Symptom_1" => Some(&self.symptom_1),
            "Symptom_2" => Some(&self.symptom_2),
            "Symptom_3" => Some(&self.symptom_3),
            "Symptom_4" => Some(&self.symptom_4),
            _ => None,
        }
    }
}

/// Read the patient dataset from a CSV file with a header row.
///
/// Schema problems (missing columns, non-numeric Age/BMI) surface as
/// deserialization errors wrapped with the row number; there is no
/// validation pass beyond that.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<PatientRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open dataset: {}", path.as_ref().display()))?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.deserialize::<PatientRecord>().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        records.push(record);
    }

    Ok(records)
}

/// Fully encoded dataset: numeric feature matrix plus integer label codes.
#[derive(Debug, Clone)]
pub struct EncodedDataset {
    pub x: Array2<f32>,
    pub y: Vec<u32>,
    pub feature_names: Vec<String>,
}

impl EncodedDataset {
    /// Encode all records with fitted encoders, in `FEATURE_COLUMNS` order.
    pub fn from_records(
        records: &[PatientRecord],
        encoders: &EncoderSet,
        label_encoder: &LabelEncoder,
    ) -> Result<Self> {
        let mut rows = Vec::with_capacity(records.len() * FEATURE_COLUMNS.len());
        let mut y = Vec::with_capacity(records.len());

        for record in records {
            rows.extend_from_slice(&encoders.encode_features(record)?);
            y.push(label_encoder.transform_one(&record.disease)?);
        }

        let x = Array2::from_shape_vec((records.len(), FEATURE_COLUMNS.len()), rows)
            .context("Feature matrix shape mismatch")?;

        Ok(EncodedDataset {
            x,
            y,
            feature_names: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn log_summary(&self, label_encoder: &LabelEncoder) {
        log::info!(
            "{} samples, {} feature columns",
            self.n_samples(),
            self.x.ncols()
        );
        for (code, class) in label_encoder.classes().iter().enumerate() {
            let count = self.y.iter().filter(|&&v| v == code as u32).count();
            log::info!("  {}: {} samples", class, count);
        }
    }
}
