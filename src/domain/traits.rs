// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The three seams of the pipeline. The application layer only
// talks to these traits, so any stage can be swapped:
//
//   CsiSource          → SyntheticCsiSource today,
//                        a capture-hardware adapter later
//   FeatureExtractor   → MeanExtractor, MeanStdExtractor,
//                        (future) AOA/ToF-based extractors
//   LocationClassifier → ForestLocationClassifier,
//                        (future) any other supervised backend
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use crate::domain::csi::{CsiSample, FeatureVector};
use crate::domain::dataset::CsiDataset;
use crate::domain::error::Result;
use crate::domain::location::Location;

// ─── CsiSource ────────────────────────────────────────────────────────────────
/// Anything that can hand the pipeline a batch of labelled CSI samples.
///
/// A hardware-backed source is the only place in the pipeline allowed
/// to block on I/O; it must still return a complete batch synchronously.
pub trait CsiSource {
    /// Acquire `num_samples` labelled samples.
    fn acquire(&mut self, num_samples: usize) -> Result<CsiDataset>;
}

// ─── FeatureExtractor ─────────────────────────────────────────────────────────
/// A pure, deterministic transform from one CSI sample to a feature vector.
///
/// Implementations must return vectors of exactly `dimension()` values
/// for every input.
pub trait FeatureExtractor {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Length of every vector this extractor produces
    fn dimension(&self) -> usize;

    fn extract(&self, sample: &CsiSample) -> Result<FeatureVector>;

    /// Apply `extract` to every sample, preserving order.
    fn extract_batch(&self, samples: &[CsiSample]) -> Result<Vec<FeatureVector>> {
        samples.iter().map(|s| self.extract(s)).collect()
    }
}

// ─── LocationClassifier ───────────────────────────────────────────────────────
/// A supervised model mapping feature vectors to locations.
///
/// Untrained instances fail `predict` and `evaluate` with
/// `LocalizationError::NotTrained`.
pub trait LocationClassifier {
    /// Fit on the given data, discarding any previous model.
    fn train(&mut self, features: &[FeatureVector], labels: &[Location]) -> Result<()>;

    /// One label per input vector, in input order.
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<Location>>;

    /// Fraction of `labels` the model predicts exactly, in [0, 1].
    ///
    /// The trained state is checked before the inputs.
    fn evaluate(&self, features: &[FeatureVector], labels: &[Location]) -> Result<f64>;
}
