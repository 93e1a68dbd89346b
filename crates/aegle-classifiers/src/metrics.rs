//! Evaluation metrics: accuracy and a per-class classification report.
//!
//! Both are pure values; callers decide what to print.
use std::collections::BTreeSet;
use std::fmt;

/// Fraction of exact label matches. Returns 0.0 for empty input.
pub fn accuracy(y_true: &[u32], y_pred: &[u32]) -> f32 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    if y_true.is_empty() {
        return 0.0;
    }
    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    hits as f32 / y_true.len() as f32
}

/// Precision/recall/F1/support for one class.
#[derive(Debug, Clone)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f32,
    pub recall: f32,
    pub f1: f32,
    pub support: usize,
}

/// Per-class table plus accuracy and macro/weighted averages.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f32,
    pub macro_avg: (f32, f32, f32),
    pub weighted_avg: (f32, f32, f32),
    pub total_support: usize,
}

/// Build a report over every class present in `y_true` or `y_pred`.
///
/// `class_names` maps label codes to display names (code order); codes
/// beyond the known names fall back to the numeric code. Undefined ratios
/// (no predicted or no true samples for a class) score 0.0.
pub fn classification_report(
    y_true: &[u32],
    y_pred: &[u32],
    class_names: &[String],
) -> ClassificationReport {
    let codes: BTreeSet<u32> = y_true.iter().chain(y_pred.iter()).copied().collect();

    let mut classes = Vec::with_capacity(codes.len());
    for code in codes {
        let tp = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| **t == code && **p == code)
            .count() as f32;
        let predicted = y_pred.iter().filter(|&&p| p == code).count() as f32;
        let actual = y_true.iter().filter(|&&t| t == code).count() as f32;

        let precision = if predicted > 0.0 { tp / predicted } else { 0.0 };
        let recall = if actual > 0.0 { tp / actual } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let label = class_names
            .get(code as usize)
            .cloned()
            .unwrap_or_else(|| code.to_string());

        classes.push(ClassMetrics {
            label,
            precision,
            recall,
            f1,
            support: actual as usize,
        });
    }

    let n_classes = classes.len().max(1) as f32;
    let total_support: usize = classes.iter().map(|c| c.support).sum();
    let support_f = total_support.max(1) as f32;

    let macro_avg = (
        classes.iter().map(|c| c.precision).sum::<f32>() / n_classes,
        classes.iter().map(|c| c.recall).sum::<f32>() / n_classes,
        classes.iter().map(|c| c.f1).sum::<f32>() / n_classes,
    );
    let weighted_avg = (
        classes
            .iter()
            .map(|c| c.precision * c.support as f32)
            .sum::<f32>()
            / support_f,
        classes
            .iter()
            .map(|c| c.recall * c.support as f32)
            .sum::<f32>()
            / support_f,
        classes.iter().map(|c| c.f1 * c.support as f32).sum::<f32>() / support_f,
    );

    ClassificationReport {
        classes,
        accuracy: accuracy(y_true, y_pred),
        macro_avg,
        weighted_avg,
        total_support,
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.label.len())
            .max()
            .unwrap_or(0)
            .max("weighted avg".len());

        writeln!(
            f,
            "{:>width$}  precision    recall  f1-score   support",
            "",
            width = width
        )?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label,
                c.precision,
                c.recall,
                c.f1,
                c.support,
                width = width
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.total_support,
            width = width
        )?;
        writeln!(
            f,
            "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
            "macro avg",
            self.macro_avg.0,
            self.macro_avg.1,
            self.macro_avg.2,
            self.total_support,
            width = width
        )?;
        writeln!(
            f,
            "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
            "weighted avg",
            self.weighted_avg.0,
            self.weighted_avg.1,
            self.weighted_avg.2,
            self.total_support,
            width = width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_exact_matches() {
        assert_eq!(accuracy(&[1, 2, 3, 4], &[1, 2, 0, 4]), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn report_perfect_predictions() {
        let names = vec!["Cold".to_string(), "Flu".to_string()];
        let report = classification_report(&[0, 0, 1, 1], &[0, 0, 1, 1], &names);

        assert_eq!(report.classes.len(), 2);
        for c in &report.classes {
            assert_eq!(c.precision, 1.0);
            assert_eq!(c.recall, 1.0);
            assert_eq!(c.f1, 1.0);
            assert_eq!(c.support, 2);
        }
        assert_eq!(report.accuracy, 1.0);
        assert_eq!(report.total_support, 4);
    }

    #[test]
    fn report_handles_mixed_predictions() {
        let names = vec!["Cold".to_string(), "Flu".to_string()];
        // Class 0: tp=1, fp=1, fn=1 -> precision 0.5, recall 0.5
        let report = classification_report(&[0, 0, 1, 1], &[0, 1, 0, 1], &names);

        let cold = &report.classes[0];
        assert!((cold.precision - 0.5).abs() < 1e-6);
        assert!((cold.recall - 0.5).abs() < 1e-6);
        assert!((cold.f1 - 0.5).abs() < 1e-6);
        assert_eq!(report.accuracy, 0.5);
    }

    #[test]
    fn report_zero_division_yields_zero() {
        let names = vec!["Cold".to_string(), "Flu".to_string()];
        // Class 1 never predicted: precision undefined -> 0.0
        let report = classification_report(&[1, 1], &[0, 0], &names);
        let flu = report.classes.iter().find(|c| c.label == "Flu").unwrap();
        assert_eq!(flu.precision, 0.0);
        assert_eq!(flu.recall, 0.0);
        assert_eq!(flu.f1, 0.0);
    }

    #[test]
    fn report_display_renders_table() {
        let names = vec!["Cold".to_string(), "Flu".to_string()];
        let report = classification_report(&[0, 1], &[0, 1], &names);
        let rendered = report.to_string();
        assert!(rendered.contains("precision"));
        assert!(rendered.contains("Flu"));
        assert!(rendered.contains("weighted avg"));
    }
}
