// ============================================================
// Layer 3 — Labelled Sets
// ============================================================
// Samples and their locations kept in two parallel vectors:
//
//   samples[i] ↔ labels[i]
//
// Construction enforces equal counts and one shared
// dimensionality, so downstream stages never re-check it.
//
//   CsiDataset     → what a CsiSource hands the pipeline
//   FeatureDataset → the same rows after feature extraction

use serde::{Deserialize, Serialize};

use crate::domain::csi::{CsiSample, Dimensioned, FeatureVector};
use crate::domain::error::{LocalizationError, Result};
use crate::domain::location::Location;

/// Samples and labels with parallel ordering: labels[i] belongs to samples[i].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSet<T> {
    samples: Vec<T>,
    labels:  Vec<Location>,
}

pub type CsiDataset     = LabeledSet<CsiSample>;
pub type FeatureDataset = LabeledSet<FeatureVector>;

impl<T: Dimensioned> LabeledSet<T> {
    /// Fails if the counts differ or the samples disagree on dimensionality.
    pub fn new(samples: Vec<T>, labels: Vec<Location>) -> Result<Self> {
        if samples.len() != labels.len() {
            return Err(LocalizationError::LengthMismatch {
                features: samples.len(),
                labels:   labels.len(),
            });
        }
        if let Some(first) = samples.first() {
            let expected = first.dim();
            if let Some(bad) = samples.iter().find(|s| s.dim() != expected) {
                return Err(LocalizationError::DimensionMismatch {
                    expected,
                    actual: bad.dim(),
                });
            }
        }
        Ok(Self { samples, labels })
    }

    /// Shared dimensionality of the samples, None when empty
    pub fn dim(&self) -> Option<usize> {
        self.samples.first().map(Dimensioned::dim)
    }
}

impl<T> LabeledSet<T> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&T, Location)> {
        Some((self.samples.get(index)?, self.labels[index]))
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn labels(&self) -> &[Location] {
        &self.labels
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<Location>) {
        (self.samples, self.labels)
    }

    /// Number of samples carrying each label, indexed like `Location::ALL`
    pub fn label_counts(&self) -> [usize; Location::ALL.len()] {
        let mut counts = [0usize; Location::ALL.len()];
        for label in &self.labels {
            counts[label.index()] += 1;
        }
        counts
    }
}
