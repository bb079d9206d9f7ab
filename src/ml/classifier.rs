// ============================================================
// Layer 5 — Forest Location Classifier
// ============================================================
// Wraps RandomForest behind the LocationClassifier trait and
// owns the Untrained → Trained state machine:
//
//   new()     → Untrained (model = None)
//   train()   → Trained   (any previous model is dropped first)
//   predict() → requires Trained, never mutates
//   evaluate()→ requires Trained, never mutates
//
// Labels are encoded as indices into the sorted list of
// classes seen in training. A location that never appears in
// the training labels has no index and can never be predicted;
// train() logs a warning listing such locations.

use crate::domain::csi::{Dimensioned, FeatureVector};
use crate::domain::error::{LocalizationError, Result};
use crate::domain::location::Location;
use crate::domain::traits::LocationClassifier;
use crate::infra::metrics::accuracy;
use crate::ml::forest::{ForestConfig, RandomForest};

/// The fitted state, only reachable through a successful train().
#[derive(Debug, Clone)]
struct TrainedModel {
    forest:     RandomForest,
    /// Sorted, deduplicated training labels. Class index i ↔ classes[i].
    classes:    Vec<Location>,
    n_features: usize,
}

#[derive(Debug, Clone)]
pub struct ForestLocationClassifier {
    config: ForestConfig,
    model:  Option<TrainedModel>,
}

impl ForestLocationClassifier {
    pub fn new(config: ForestConfig) -> Self {
        Self { config, model: None }
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Locations the current model can predict
    pub fn classes(&self) -> Result<&[Location]> {
        self.model
            .as_ref()
            .map(|m| m.classes.as_slice())
            .ok_or(LocalizationError::NotTrained)
    }

    /// Locations of the alphabet the current model can never predict
    pub fn missing_classes(&self) -> Result<Vec<Location>> {
        let classes = self.classes()?;
        Ok(Location::ALL
            .iter()
            .copied()
            .filter(|loc| !classes.contains(loc))
            .collect())
    }

    fn model(&self) -> Result<&TrainedModel> {
        self.model.as_ref().ok_or(LocalizationError::NotTrained)
    }
}

impl Default for ForestLocationClassifier {
    fn default() -> Self {
        Self::new(ForestConfig::default())
    }
}

fn common_dimension(features: &[FeatureVector]) -> Result<usize> {
    let expected = features
        .first()
        .map(Dimensioned::dim)
        .ok_or_else(|| LocalizationError::InvalidInput("cannot train on zero samples".into()))?;
    if let Some(bad) = features.iter().find(|f| f.dim() != expected) {
        return Err(LocalizationError::DimensionMismatch { expected, actual: bad.dim() });
    }
    Ok(expected)
}

impl LocationClassifier for ForestLocationClassifier {
    fn train(&mut self, features: &[FeatureVector], labels: &[Location]) -> Result<()> {
        // A failed re-train must not leave the old model behind
        self.model = None;

        if features.len() != labels.len() {
            return Err(LocalizationError::LengthMismatch {
                features: features.len(),
                labels:   labels.len(),
            });
        }
        let n_features = common_dimension(features)?;

        let mut classes = labels.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let encoded: Vec<usize> = labels
            .iter()
            .map(|l| classes.binary_search(l).unwrap_or_default())
            .collect();

        tracing::info!(
            "Training random forest: {} trees on {} samples, {} features, classes [{}]",
            self.config.n_trees,
            features.len(),
            n_features,
            classes.iter().map(|l| l.as_str()).collect::<Vec<_>>().join(", "),
        );

        let forest = RandomForest::fit(features, &encoded, classes.len(), &self.config)?;
        self.model = Some(TrainedModel { forest, classes, n_features });

        let missing = self.missing_classes()?;
        if !missing.is_empty() {
            tracing::warn!(
                "Locations absent from training data can never be predicted: [{}]",
                missing.iter().map(|l| l.as_str()).collect::<Vec<_>>().join(", "),
            );
        }
        Ok(())
    }

    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<Location>> {
        let model = self.model()?;
        features
            .iter()
            .map(|f| {
                if f.dim() != model.n_features {
                    return Err(LocalizationError::DimensionMismatch {
                        expected: model.n_features,
                        actual:   f.dim(),
                    });
                }
                Ok(model.classes[model.forest.predict(f)])
            })
            .collect()
    }

    fn evaluate(&self, features: &[FeatureVector], labels: &[Location]) -> Result<f64> {
        self.model()?;
        if features.len() != labels.len() {
            return Err(LocalizationError::LengthMismatch {
                features: features.len(),
                labels:   labels.len(),
            });
        }
        let predicted = self.predict(features)?;
        accuracy(&predicted, labels)
    }
}
