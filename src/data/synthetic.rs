// ============================================================
// Layer 4 — Synthetic CSI Source
// ============================================================
// Stand-in for real capture hardware. Produces labelled CSI
// samples whose per-label distributions are separable but
// overlapping:
//
//   label    ~ Uniform{A, B, C, D}
//   value[k] ~ Normal(label.mean_offset(), noise_std)
//              for k in 0..num_subcarriers
//
// With the default noise_std = 2 and offsets 10/15/20/25
// individual subcarrier values overlap between neighbours,
// while the per-sample mean is well separated.
//
// The source owns its RNG. Repeated calls continue the same
// random stream, so a second batch differs from the first,
// and two sources built with the same seed agree bit-for-bit.
//
// Reference: rand / rand_distr crate documentation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::domain::dataset::CsiDataset;
use crate::domain::csi::CsiSample;
use crate::domain::error::{LocalizationError, Result};
use crate::domain::location::Location;
use crate::domain::traits::CsiSource;

/// Default number of subcarriers in a CSI sample
pub const DEFAULT_SUBCARRIERS: usize = 56;

/// Default standard deviation of every subcarrier value
pub const DEFAULT_NOISE_STD: f64 = 2.0;

pub struct SyntheticCsiSource {
    num_subcarriers: usize,
    noise_std:       f64,
    rng:             StdRng,
}

impl SyntheticCsiSource {
    /// Create an unseeded source with the given subcarrier count.
    pub fn new(num_subcarriers: usize) -> Result<Self> {
        Self::build(num_subcarriers, DEFAULT_NOISE_STD, StdRng::from_entropy())
    }

    /// Create a reproducible source.
    pub fn with_seed(num_subcarriers: usize, seed: u64) -> Result<Self> {
        Self::build(num_subcarriers, DEFAULT_NOISE_STD, StdRng::seed_from_u64(seed))
    }

    /// Override the per-subcarrier standard deviation.
    pub fn noise_std(mut self, noise_std: f64) -> Result<Self> {
        validate_noise(noise_std)?;
        self.noise_std = noise_std;
        Ok(self)
    }

    fn build(num_subcarriers: usize, noise_std: f64, rng: StdRng) -> Result<Self> {
        if num_subcarriers == 0 {
            return Err(LocalizationError::InvalidInput(
                "num_subcarriers must be positive".into(),
            ));
        }
        validate_noise(noise_std)?;
        Ok(Self { num_subcarriers, noise_std, rng })
    }

    pub fn num_subcarriers(&self) -> usize {
        self.num_subcarriers
    }

    /// Draw `num_samples` labelled CSI samples.
    pub fn generate(&mut self, num_samples: usize) -> Result<CsiDataset> {
        if num_samples == 0 {
            return Err(LocalizationError::InvalidInput(
                "num_samples must be positive".into(),
            ));
        }

        // One distribution per location, built once per batch
        let dists = Location::ALL
            .iter()
            .map(|loc| {
                Normal::new(loc.mean_offset(), self.noise_std)
                    .map_err(|e| LocalizationError::InvalidInput(format!("noise distribution: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut samples = Vec::with_capacity(num_samples);
        let mut labels  = Vec::with_capacity(num_samples);

        for _ in 0..num_samples {
            let location = Location::ALL[self.rng.gen_range(0..Location::ALL.len())];
            let dist     = &dists[location.index()];

            let values: Vec<f64> = (0..self.num_subcarriers)
                .map(|_| dist.sample(&mut self.rng))
                .collect();

            samples.push(CsiSample::new(values)?);
            labels.push(location);
        }

        tracing::debug!(
            "Generated {} synthetic samples x {} subcarriers",
            num_samples,
            self.num_subcarriers
        );

        CsiDataset::new(samples, labels)
    }
}

fn validate_noise(noise_std: f64) -> Result<()> {
    if !noise_std.is_finite() || noise_std <= 0.0 {
        return Err(LocalizationError::InvalidInput(format!(
            "noise_std must be finite and positive, got {noise_std}"
        )));
    }
    Ok(())
}

impl CsiSource for SyntheticCsiSource {
    fn acquire(&mut self, num_samples: usize) -> Result<CsiDataset> {
        self.generate(num_samples)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_shape() {
        let mut src = SyntheticCsiSource::with_seed(DEFAULT_SUBCARRIERS, 7).unwrap();
        let ds      = src.generate(1000).unwrap();

        assert_eq!(ds.len(), 1000);
        assert_eq!(ds.labels().len(), 1000);
        assert!(ds.samples().iter().all(|s| s.num_subcarriers() == 56));
        assert!(ds.labels().iter().all(|l| Location::ALL.contains(l)));
    }

    #[test]
    fn test_unseeded_source_generates() {
        let mut src = SyntheticCsiSource::new(12).unwrap();
        assert_eq!(src.num_subcarriers(), 12);
        let ds      = src.generate(9).unwrap();
        assert_eq!(ds.len(), 9);
        assert_eq!(ds.dim(), Some(12));
    }

    #[test]
    fn test_count_not_divisible_by_label_count() {
        let mut src = SyntheticCsiSource::with_seed(8, 1).unwrap();
        assert_eq!(src.generate(7).unwrap().len(), 7);
        assert_eq!(src.generate(1).unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_zero_counts() {
        assert!(SyntheticCsiSource::with_seed(0, 1).is_err());

        let mut src = SyntheticCsiSource::with_seed(56, 1).unwrap();
        assert!(matches!(src.generate(0), Err(LocalizationError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bad_noise() {
        let src = SyntheticCsiSource::with_seed(56, 1).unwrap();
        assert!(src.noise_std(0.0).is_err());
        let src = SyntheticCsiSource::with_seed(56, 1).unwrap();
        assert!(src.noise_std(f64::NAN).is_err());
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = SyntheticCsiSource::with_seed(56, 42).unwrap().generate(50).unwrap();
        let b = SyntheticCsiSource::with_seed(56, 42).unwrap().generate(50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_batches_differ() {
        let mut src = SyntheticCsiSource::with_seed(56, 42).unwrap();
        let a       = src.generate(20).unwrap();
        let b       = src.generate(20).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_every_label_appears_in_large_batch() {
        let mut src = SyntheticCsiSource::with_seed(56, 3).unwrap();
        let counts  = src.generate(400).unwrap().label_counts();
        assert!(counts.iter().all(|&c| c > 50), "counts: {counts:?}");
    }

    #[test]
    fn test_sample_means_follow_label_offsets() {
        let mut src = SyntheticCsiSource::with_seed(56, 11).unwrap();
        let ds      = src.generate(200).unwrap();

        for (sample, label) in ds.samples().iter().zip(ds.labels()) {
            let mean = sample.values().iter().sum::<f64>() / sample.num_subcarriers() as f64;
            // std of the mean is 2/sqrt(56) ≈ 0.27, half the label gap is 2.5
            assert!((mean - label.mean_offset()).abs() < 2.0);
        }
    }
}
