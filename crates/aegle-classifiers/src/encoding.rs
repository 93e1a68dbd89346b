//! Per-column label encoding.
//!
//! Each categorical column (including the disease label) gets its own
//! [`LabelEncoder`], a bidirectional mapping between the distinct string
//! values observed at fit time and dense integer codes. Codes are assigned
//! in lexicographic order of the values, so equal inputs always produce the
//! same assignment. Transforming a string that was not seen at fit time is
//! an error, not a default; that failure is relied upon downstream.
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::data::{PatientRecord, CATEGORICAL_COLUMNS};
use crate::error::EncodeError;

/// Bidirectional string <-> code mapping for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    column: String,
    classes: Vec<String>,
    index: HashMap<String, u32>,
}

impl LabelEncoder {
    /// Fit an encoder from the distinct values of one column.
    ///
    /// Codes follow the lexicographic order of the distinct values.
    pub fn fit<'a, I>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        let classes: Vec<String> = distinct.into_iter().map(|v| v.to_string()).collect();
        let index = classes
            .iter()
            .enumerate()
            .map(|(code, class)| (class.clone(), code as u32))
            .collect();

        LabelEncoder {
            column: column.to_string(),
            classes,
            index,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Fitted classes, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Map one value to its code.
    pub fn transform_one(&self, value: &str) -> Result<u32, EncodeError> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| EncodeError::UnseenCategory {
                column: self.column.clone(),
                value: value.to_string(),
            })
    }

    pub fn transform(&self, values: &[String]) -> Result<Vec<u32>, EncodeError> {
        values.iter().map(|v| self.transform_one(v)).collect()
    }

    /// Map one code back to its value.
    pub fn inverse_transform_one(&self, code: u32) -> Result<&str, EncodeError> {
        self.classes
            .get(code as usize)
            .map(|s| s.as_str())
            .ok_or_else(|| EncodeError::UnknownCode {
                column: self.column.clone(),
                code,
            })
    }

    pub fn inverse_transform(&self, codes: &[u32]) -> Result<Vec<String>, EncodeError> {
        codes
            .iter()
            .map(|&c| self.inverse_transform_one(c).map(|s| s.to_string()))
            .collect()
    }
}

/// One encoder per categorical feature column, keyed by column name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSet {
    encoders: HashMap<String, LabelEncoder>,
}

impl EncoderSet {
    /// Fit an encoder for every categorical feature column from the full
    /// dataset. The disease label gets its own separate encoder.
    pub fn fit(records: &[PatientRecord]) -> Self {
        let mut encoders = HashMap::with_capacity(CATEGORICAL_COLUMNS.len());
        for column in CATEGORICAL_COLUMNS {
            let encoder = LabelEncoder::fit(
                column,
                records
                    .iter()
                    .filter_map(|r| r.categorical(column)),
            );
            encoders.insert(column.to_string(), encoder);
        }
        EncoderSet { encoders }
    }

    pub fn get(&self, column: &str) -> Result<&LabelEncoder, EncodeError> {
        self.encoders
            .get(column)
            .ok_or_else(|| EncodeError::MissingEncoder {
                column: column.to_string(),
            })
    }

    /// Encode one record into the fixed feature order
    /// {Age, Gender, BMI, Blood_Pressure, Cholesterol, Symptom_1..4}.
    pub fn encode_features(&self, record: &PatientRecord) -> Result<Vec<f32>, EncodeError> {
        let code = |column: &str, value: &str| -> Result<f32, EncodeError> {
            self.get(column)?.transform_one(value).map(|c| c as f32)
        };

        Ok(vec![
            record.age,
            code("Gender", &record.gender)?,
            record.bmi,
            code("Blood_Pressure", &record.blood_pressure)?,
            code("Cholesterol", &record.cholesterol)?,
            code("Symptom_1", &record.symptom_1)?,
            code("Symptom_2", &record.symptom_2)?,
            code("Symptom_3", &record.symptom_3)?,
            code("Symptom_4", &record.symptom_4)?,
        ])
    }
}
