//! Evaluation metrics for the fitted classifier.
//!
//! Diagnostics only: accuracy, per-class precision/recall/F1, and the
//! confusion matrix the trainer logs after each run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Confusion counts over the observed labels, actual rows by predicted
/// columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    classes: Vec<u32>,
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Builds the matrix from paired actual/predicted labels. Classes are
    /// the sorted union of both sides.
    #[must_use]
    pub fn from_predictions(actual: &[u32], predicted: &[u32]) -> Self {
        let classes: Vec<u32> = actual
            .iter()
            .chain(predicted.iter())
            .copied()
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect();

        let mut counts = vec![vec![0usize; classes.len()]; classes.len()];
        for (&a, &p) in actual.iter().zip(predicted.iter()) {
            if let (Ok(row), Ok(col)) = (classes.binary_search(&a), classes.binary_search(&p)) {
                counts[row][col] += 1;
            }
        }

        Self { classes, counts }
    }

    /// Labels covered by the matrix, ascending.
    #[must_use]
    pub fn classes(&self) -> &[u32] {
        &self.classes
    }

    /// Count of samples with the given actual label predicted as `predicted`.
    #[must_use]
    pub fn count(&self, actual: u32, predicted: u32) -> usize {
        match (
            self.classes.binary_search(&actual),
            self.classes.binary_search(&predicted),
        ) {
            (Ok(row), Ok(col)) => self.counts[row][col],
            _ => 0,
        }
    }

    /// Total number of samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Number of correctly classified samples (the diagonal).
    #[must_use]
    pub fn correct(&self) -> usize {
        (0..self.classes.len()).map(|i| self.counts[i][i]).sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>12}", "actual\\pred")?;
        for class in &self.classes {
            write!(f, "{class:>8}")?;
        }
        writeln!(f)?;

        for (row, class) in self.classes.iter().enumerate() {
            write!(f, "{class:>12}")?;
            for count in &self.counts[row] {
                write!(f, "{count:>8}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-class diagnostics derived from the confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of samples with this actual label.
    pub support: usize,
}

/// Accuracy plus per-class precision/recall/F1, printable as a report table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub per_class: BTreeMap<u32, ClassMetrics>,
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    /// Computes the report from paired actual/predicted labels.
    #[must_use]
    pub fn from_predictions(actual: &[u32], predicted: &[u32]) -> Self {
        let confusion = ConfusionMatrix::from_predictions(actual, predicted);
        let total = confusion.total();
        let accuracy = if total > 0 {
            confusion.correct() as f64 / total as f64
        } else {
            0.0
        };

        let mut per_class = BTreeMap::new();
        for &class in confusion.classes() {
            let true_positives = confusion.count(class, class) as f64;
            let predicted_as: f64 = confusion
                .classes()
                .iter()
                .map(|&a| confusion.count(a, class) as f64)
                .sum();
            let support: usize = confusion
                .classes()
                .iter()
                .map(|&p| confusion.count(class, p))
                .sum();

            let precision = if predicted_as > 0.0 {
                true_positives / predicted_as
            } else {
                0.0
            };
            let recall = if support > 0 {
                true_positives / support as f64
            } else {
                0.0
            };
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            per_class.insert(
                class,
                ClassMetrics {
                    precision,
                    recall,
                    f1,
                    support,
                },
            );
        }

        Self {
            accuracy,
            per_class,
            confusion,
        }
    }

    /// Macro-averaged precision.
    #[must_use]
    pub fn macro_precision(&self) -> f64 {
        self.macro_average(|m| m.precision)
    }

    /// Macro-averaged recall.
    #[must_use]
    pub fn macro_recall(&self) -> f64 {
        self.macro_average(|m| m.recall)
    }

    /// Macro-averaged F1.
    #[must_use]
    pub fn macro_f1(&self) -> f64 {
        self.macro_average(|m| m.f1)
    }

    fn macro_average<F: Fn(&ClassMetrics) -> f64>(&self, metric: F) -> f64 {
        if self.per_class.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.per_class.values().map(metric).sum();
        sum / self.per_class.len() as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for (class, metrics) in &self.per_class {
            writeln!(
                f,
                "{:>12} {:>10.3} {:>10.3} {:>10.3} {:>10}",
                class, metrics.precision, metrics.recall, metrics.f1, metrics.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.3} {:>10}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.confusion.total()
        )?;
        writeln!(
            f,
            "{:>12} {:>10.3} {:>10.3} {:>10.3} {:>10}",
            "macro avg",
            self.macro_precision(),
            self.macro_recall(),
            self.macro_f1(),
            self.confusion.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confusion_matrix_counts_pairs() {
        let actual = [0, 0, 1, 1, 2];
        let predicted = [0, 1, 1, 1, 2];
        let matrix = ConfusionMatrix::from_predictions(&actual, &predicted);

        assert_eq!(matrix.classes(), &[0, 1, 2]);
        assert_eq!(matrix.count(0, 0), 1);
        assert_eq!(matrix.count(0, 1), 1);
        assert_eq!(matrix.count(1, 1), 2);
        assert_eq!(matrix.count(2, 2), 1);
        assert_eq!(matrix.total(), 5);
        assert_eq!(matrix.correct(), 4);
    }

    #[test]
    fn report_matches_hand_computed_metrics() {
        // Class 0: 2 correct. Class 1: 1 predicted as 0, 2 correct.
        let actual = [0, 0, 1, 1, 1];
        let predicted = [0, 0, 0, 1, 1];
        let report = ClassificationReport::from_predictions(&actual, &predicted);

        assert!((report.accuracy - 0.8).abs() < 1e-12);

        let class0 = report.per_class[&0];
        assert!((class0.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((class0.recall - 1.0).abs() < 1e-12);
        assert_eq!(class0.support, 2);

        let class1 = report.per_class[&1];
        assert!((class1.precision - 1.0).abs() < 1e-12);
        assert!((class1.recall - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(class1.support, 3);
    }

    #[test]
    fn perfect_predictions_score_one() {
        let labels = [0, 1, 2, 2, 1, 0];
        let report = ClassificationReport::from_predictions(&labels, &labels);

        assert_eq!(report.accuracy, 1.0);
        assert_eq!(report.macro_f1(), 1.0);
        assert_eq!(report.macro_precision(), 1.0);
    }

    #[test]
    fn absent_predicted_class_has_zero_precision() {
        // Class 2 never predicted.
        let actual = [2, 2, 0];
        let predicted = [0, 0, 0];
        let report = ClassificationReport::from_predictions(&actual, &predicted);

        let class2 = report.per_class[&2];
        assert_eq!(class2.precision, 0.0);
        assert_eq!(class2.recall, 0.0);
        assert_eq!(class2.f1, 0.0);
    }

    #[test]
    fn empty_input_yields_zero_report() {
        let report = ClassificationReport::from_predictions(&[], &[]);
        assert_eq!(report.accuracy, 0.0);
        assert!(report.per_class.is_empty());
    }

    #[test]
    fn display_renders_table() {
        let actual = [0, 1, 1];
        let predicted = [0, 1, 0];
        let report = ClassificationReport::from_predictions(&actual, &predicted);
        let rendered = report.to_string();

        assert!(rendered.contains("precision"));
        assert!(rendered.contains("accuracy"));
        assert!(rendered.contains("macro avg"));
    }
}
