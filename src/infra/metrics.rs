// ============================================================
// Layer 6 — Evaluation Metrics
// ============================================================
// Scores predicted locations against ground truth.
//
//   accuracy()        → fraction of exact matches, in [0, 1]
//   ConfusionMatrix   → counts[truth][predicted] over the
//                       full location alphabet
//
// Accuracy is kept at full f64 precision; rounding to two
// decimals happens only when it is displayed.
//
// How to read the confusion matrix:
//   - The diagonal holds correct predictions
//   - Row r, column c > 0 means location r was mistaken for c
//   - Neighbouring locations (A/B, B/C, C/D) are the usual
//     confusions because their offsets are closest

use serde::{Deserialize, Serialize};

use crate::domain::error::{LocalizationError, Result};
use crate::domain::location::Location;

const N: usize = Location::ALL.len();

fn check_lengths(predicted: &[Location], truth: &[Location]) -> Result<()> {
    if predicted.len() != truth.len() {
        return Err(LocalizationError::LengthMismatch {
            features: predicted.len(),
            labels:   truth.len(),
        });
    }
    if truth.is_empty() {
        return Err(LocalizationError::InvalidInput(
            "cannot score an empty set of predictions".into(),
        ));
    }
    Ok(())
}

/// Fraction of positions where `predicted[i] == truth[i]`.
pub fn accuracy(predicted: &[Location], truth: &[Location]) -> Result<f64> {
    check_lengths(predicted, truth)?;
    let correct = predicted.iter().zip(truth).filter(|(p, t)| p == t).count();
    Ok(correct as f64 / truth.len() as f64)
}

/// Truth-by-prediction counts over the location alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: [[usize; N]; N],
}

impl ConfusionMatrix {
    pub fn from_predictions(predicted: &[Location], truth: &[Location]) -> Result<Self> {
        check_lengths(predicted, truth)?;
        let mut counts = [[0usize; N]; N];
        for (p, t) in predicted.iter().zip(truth) {
            counts[t.index()][p.index()] += 1;
        }
        Ok(Self { counts })
    }

    pub fn count(&self, truth: Location, predicted: Location) -> usize {
        self.counts[truth.index()][predicted.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        (0..N).map(|i| self.counts[i][i]).sum()
    }

    /// Share of `location`'s samples predicted as `location`.
    /// None when the location never occurs in the ground truth.
    pub fn recall(&self, location: Location) -> Option<f64> {
        let row: usize = self.counts[location.index()].iter().sum();
        (row > 0).then(|| self.counts[location.index()][location.index()] as f64 / row as f64)
    }

    /// Per-location recall for every location present in the ground truth
    pub fn per_class_recall(&self) -> Vec<ClassRecall> {
        Location::ALL
            .iter()
            .filter_map(|&location| {
                self.recall(location).map(|recall| ClassRecall { location, recall })
            })
            .collect()
    }
}

/// One row of a per-class report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecall {
    pub location: Location,
    pub recall:   f64,
}
