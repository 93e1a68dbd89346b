//! Free-text input normalization for the interactive prediction path.
//!
//! Maps abbreviated console input ("m", "l", "na") onto the canonical
//! category strings the encoders were fitted on. This is a total function:
//! unmapped values pass through lowercased and, if they are not part of the
//! fitted vocabulary, fail later at encode time with an unseen-category
//! error.

/// Which lookup table applies to a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Gender,
    BloodPressure,
    Cholesterol,
    Symptom,
}

/// Trim, lowercase, then apply the fixed per-field mapping.
pub fn normalize(raw: &str, field: Field) -> String {
    let value = raw.trim().to_lowercase();

    match field {
        Field::Gender => match value.as_str() {
            "m" => "Male".to_string(),
            "f" => "Female".to_string(),
            _ => value,
        },
        Field::BloodPressure => match value.as_str() {
            "l" => "Low".to_string(),
            "n" => "Normal".to_string(),
            "h" => "High".to_string(),
            _ => value,
        },
        Field::Cholesterol => match value.as_str() {
            "n" => "Normal".to_string(),
            "h" => "High".to_string(),
            _ => value,
        },
        Field::Symptom => {
            if value == "na" {
                "No_symptom".to_string()
            } else {
                capitalize(&value)
            }
        }
    }
}

/// Uppercase the first character, leave the rest as-is.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_abbreviations() {
        assert_eq!(normalize("m", Field::Gender), "Male");
        assert_eq!(normalize("M", Field::Gender), "Male");
        assert_eq!(normalize(" f ", Field::Gender), "Female");
    }

    #[test]
    fn blood_pressure_abbreviations() {
        assert_eq!(normalize("l", Field::BloodPressure), "Low");
        assert_eq!(normalize("n", Field::BloodPressure), "Normal");
        assert_eq!(normalize("H", Field::BloodPressure), "High");
    }

    #[test]
    fn cholesterol_has_no_low() {
        assert_eq!(normalize("n", Field::Cholesterol), "Normal");
        assert_eq!(normalize("h", Field::Cholesterol), "High");
        // "l" is not mapped for cholesterol; it passes through.
        assert_eq!(normalize("l", Field::Cholesterol), "l");
    }

    #[test]
    fn symptoms_map_na_and_capitalize() {
        assert_eq!(normalize("na", Field::Symptom), "No_symptom");
        assert_eq!(normalize("NA", Field::Symptom), "No_symptom");
        assert_eq!(normalize("fever", Field::Symptom), "Fever");
        assert_eq!(normalize("  cough ", Field::Symptom), "Cough");
        assert_eq!(normalize("", Field::Symptom), "");
    }

    #[test]
    fn unmapped_values_pass_through_lowercased() {
        assert_eq!(normalize("Other", Field::Gender), "other");
        assert_eq!(normalize("elevated", Field::BloodPressure), "elevated");
    }

    #[test]
    fn normalize_is_idempotent() {
        for (raw, field) in [
            ("Male", Field::Gender),
            ("High", Field::BloodPressure),
            ("No_symptom", Field::Symptom),
            ("fever", Field::Symptom),
            ("na", Field::Symptom),
        ] {
            let once = normalize(raw, field);
            let twice = normalize(&once, field);
            assert_eq!(once, twice, "normalize not idempotent for {:?}", raw);
        }
    }
}
