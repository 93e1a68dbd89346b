//! The fitted prediction pipeline.
//!
//! Training produces one immutable [`FittedPipeline`] value bundling the
//! per-column encoders, the disease label encoder, and the selected model.
//! Prediction is a single pass: normalize, encode, infer, decode.
use anyhow::Result;

use crate::data::PatientRecord;
use crate::encoding::{EncoderSet, LabelEncoder};
use crate::models::ForestClassifier;
use crate::normalize::{normalize, Field};

/// One free-text patient record as entered on the console.
#[derive(Debug, Clone)]
pub struct RawPatientInput {
    pub name: String,
    pub age: f32,
    pub gender: String,
    pub bmi: f32,
    pub blood_pressure: String,
    pub cholesterol: String,
    pub symptoms: [String; 4],
}

/// Immutable bundle of fitted state: encoders plus the trained model.
pub struct FittedPipeline {
    pub encoders: EncoderSet,
    pub label_encoder: LabelEncoder,
    pub model: ForestClassifier,
}

impl FittedPipeline {
    /// Predict the disease label for one record.
    ///
    /// Categorical fields are normalized first; a normalized value outside
    /// the fitted vocabulary propagates an unseen-category error, it is not
    /// defaulted.
    pub fn predict(&self, input: &RawPatientInput) -> Result<String> {
        let record = PatientRecord {
            age: input.age,
            gender: normalize(&input.gender, Field::Gender),
            bmi: input.bmi,
            blood_pressure: normalize(&input.blood_pressure, Field::BloodPressure),
            cholesterol: normalize(&input.cholesterol, Field::Cholesterol),
            symptom_1: normalize(&input.symptoms[0], Field::Symptom),
            symptom_2: normalize(&input.symptoms[1], Field::Symptom),
            symptom_3: normalize(&input.symptoms[2], Field::Symptom),
            symptom_4: normalize(&input.symptoms[3], Field::Symptom),
            // Unknown at inference time; never read by the encoders.
            disease: String::new(),
        };

        let features = self.encoders.encode_features(&record)?;
        let code = self.model.predict_one(&features)?;
        let disease = self.label_encoder.inverse_transform_one(code)?;
        Ok(disease.to_string())
    }
}
