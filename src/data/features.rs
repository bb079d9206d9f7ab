// ============================================================
// Layer 4 — Feature Extractors
// ============================================================
// Turn a raw CSI sample into a fixed-size feature vector.
//
//   MeanExtractor    → [mean]          (baseline, dimension 1)
//   MeanStdExtractor → [mean, std]     (dimension 2)
//
// Both are stateless unit structs; extraction is a pure
// function of the sample. It only fails when the statistics
// overflow f64 (values near f64::MAX).
//
// Richer extractors plug in through the FeatureExtractor
// trait without touching the classifier.

use crate::domain::csi::{CsiSample, FeatureVector};
use crate::domain::error::Result;
use crate::domain::traits::FeatureExtractor;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation
fn std_dev(values: &[f64], mean: f64) -> f64 {
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanExtractor;

impl FeatureExtractor for MeanExtractor {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn dimension(&self) -> usize {
        1
    }

    fn extract(&self, sample: &CsiSample) -> Result<FeatureVector> {
        FeatureVector::new(vec![mean(sample.values())])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanStdExtractor;

impl FeatureExtractor for MeanStdExtractor {
    fn name(&self) -> &'static str {
        "mean-std"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn extract(&self, sample: &CsiSample) -> Result<FeatureVector> {
        let values = sample.values();
        let m      = mean(values);
        FeatureVector::new(vec![m, std_dev(values, m)])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[f64]) -> CsiSample {
        CsiSample::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_mean_of_sample() {
        let f = MeanExtractor.extract(&sample(&[1.0, 2.0, 3.0, 6.0])).unwrap();
        assert_eq!(f.values(), &[3.0]);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let s = sample(&[10.3, 9.7, 11.1, 8.4, 10.0]);
        assert_eq!(MeanExtractor.extract(&s).unwrap(), MeanExtractor.extract(&s).unwrap());
        assert_eq!(MeanStdExtractor.extract(&s).unwrap(), MeanStdExtractor.extract(&s).unwrap());
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch = vec![sample(&[1.0]), sample(&[5.0, 7.0]), sample(&[2.0])];
        let out   = MeanExtractor.extract_batch(&batch).unwrap();
        let means: Vec<f64> = out.iter().map(|f| f.get(0)).collect();
        assert_eq!(means, vec![1.0, 6.0, 2.0]);
    }

    #[test]
    fn test_mean_std_dimension() {
        let f = MeanStdExtractor.extract(&sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])).unwrap();
        assert_eq!(f.values().len(), MeanStdExtractor.dimension());
        assert_eq!(f.get(0), 5.0);
        assert!((f.get(1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_overflowing_sample_is_rejected() {
        let err = MeanExtractor.extract(&sample(&[f64::MAX, f64::MAX])).unwrap_err();
        assert!(matches!(err, crate::domain::error::LocalizationError::NonFinite { .. }));
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let f = MeanStdExtractor.extract(&sample(&[3.0; 56])).unwrap();
        assert_eq!(f.values(), &[3.0, 0.0]);
    }
}
