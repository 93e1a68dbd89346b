//! Interactive single-record prediction over stdin/stdout.
//!
//! Prompts are sequential and blocking; numeric parse failures and
//! unseen categories are fail-fast and propagate to the caller.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use aegle_classifiers::pipeline::{FittedPipeline, RawPatientInput};

/// Run one prediction round: prompt, predict, print.
pub fn run(pipeline: &FittedPipeline) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock();
    let input = prompt_record(&mut lines)?;

    let disease = pipeline.predict(&input)?;
    println!("Name: {}", input.name);
    println!("Predicted Disease: {}", disease);
    Ok(())
}

/// Collect one raw patient record from sequential prompts.
pub fn prompt_record<R: BufRead>(reader: &mut R) -> Result<RawPatientInput> {
    let name = prompt(reader, "Enter your name: ")?;
    let age = parse_age(&prompt(reader, "Enter your age: ")?)?;
    let gender = prompt(reader, "Enter your gender (m -> Male/f -> Female): ")?;
    let bmi = parse_bmi(&prompt(reader, "Enter your BMI: ")?)?;
    let blood_pressure = prompt(
        reader,
        "Enter your blood pressure (l -> Low/n -> Normal/h -> High): ",
    )?;
    let cholesterol = prompt(reader, "Enter your cholesterol level (n -> Normal/h -> High): ")?;
    let symptoms = [
        prompt(reader, "Enter Symptom 1 (or 'na' if none): ")?,
        prompt(reader, "Enter Symptom 2 (or 'na' if none): ")?,
        prompt(reader, "Enter Symptom 3 (or 'na' if none): ")?,
        prompt(reader, "Enter Symptom 4 (or 'na' if none): ")?,
    ];

    Ok(RawPatientInput {
        name,
        age,
        gender,
        bmi,
        blood_pressure,
        cholesterol,
        symptoms,
    })
}

/// Age is entered as an integer.
pub fn parse_age(raw: &str) -> Result<f32> {
    let age: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid age: '{}'", raw.trim()))?;
    Ok(age as f32)
}

pub fn parse_bmi(raw: &str) -> Result<f32> {
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid BMI: '{}'", raw.trim()))
}

fn prompt<R: BufRead>(reader: &mut R, message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read console input")?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_age_accepts_integers_only() {
        assert_eq!(parse_age("61").unwrap(), 61.0);
        assert_eq!(parse_age(" 61 ").unwrap(), 61.0);
        assert!(parse_age("sixty").is_err());
        assert!(parse_age("61.5").is_err());
    }

    #[test]
    fn parse_bmi_accepts_floats() {
        assert_eq!(parse_bmi("23.4").unwrap(), 23.4);
        assert_eq!(parse_bmi("23").unwrap(), 23.0);
        assert!(parse_bmi("heavy").is_err());
    }

    #[test]
    fn prompt_record_reads_fields_in_order() {
        let mut input =
            "Ada\n61\nm\n29.0\nh\nh\nfever\ncough\nheadache\nfatigue\n".as_bytes();
        let record = prompt_record(&mut input).unwrap();

        assert_eq!(record.name, "Ada");
        assert_eq!(record.age, 61.0);
        assert_eq!(record.gender, "m");
        assert_eq!(record.bmi, 29.0);
        assert_eq!(record.blood_pressure, "h");
        assert_eq!(record.cholesterol, "h");
        assert_eq!(record.symptoms[0], "fever");
        assert_eq!(record.symptoms[3], "fatigue");
    }

    #[test]
    fn prompt_record_fails_fast_on_bad_age() {
        let mut input = "Ada\nnot-a-number\n".as_bytes();
        assert!(prompt_record(&mut input).is_err());
    }
}
