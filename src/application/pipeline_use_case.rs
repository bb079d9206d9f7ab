// ============================================================
// Layer 2 — PipelineUseCase
// ============================================================
// Orchestrates the localization pipeline in order:
//
//   Step 1: Acquire labelled CSI samples      (Layer 4 - data)
//   Step 2: Extract one feature vector each   (Layer 4 - data)
//   Step 3: Split train/test with a seed      (Layer 4 - data)
//   Step 4: Train the location classifier     (Layer 5 - ml)
//   Step 5: Evaluate on the held-out set      (Layer 5 - ml)
//   Step 6: Acquire + extract a fresh batch   (Layer 4 - data)
//   Step 7: Predict its locations             (Layer 5 - ml)
//
// Every stage receives the previous stage's output and
// returns a new value; nothing is shared or mutated across
// stages except the source's own RNG.
//
// The same `seed` drives the synthetic source, the split and
// the forest, so two runs with one config give one result.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::run_report::RunReport;
use crate::data::features::{MeanExtractor, MeanStdExtractor};
use crate::data::splitter::split_train_test;
use crate::data::synthetic::{SyntheticCsiSource, DEFAULT_NOISE_STD, DEFAULT_SUBCARRIERS};
use crate::domain::traits::{CsiSource, FeatureExtractor, LocationClassifier};
use crate::infra::metrics::{accuracy, ConfusionMatrix};
use crate::ml::classifier::ForestLocationClassifier;
use crate::ml::forest::ForestConfig;

// ─── Extractor Selection ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractorKind {
    /// [mean]
    #[default]
    Mean,
    /// [mean, std]
    MeanStd,
}

impl ExtractorKind {
    pub fn build(self) -> Box<dyn FeatureExtractor> {
        match self {
            ExtractorKind::Mean    => Box::new(MeanExtractor),
            ExtractorKind::MeanStd => Box::new(MeanStdExtractor),
        }
    }
}

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// All knobs of a run. Serialisable so it can be embedded in
// the run report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub num_samples:     usize,
    pub num_subcarriers: usize,
    pub noise_std:       f64,
    pub test_fraction:   f64,
    pub seed:            u64,
    pub n_trees:         usize,
    pub max_depth:       Option<usize>,
    pub predict_samples: usize,
    pub extractor:       ExtractorKind,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_samples:     1000,
            num_subcarriers: DEFAULT_SUBCARRIERS,
            noise_std:       DEFAULT_NOISE_STD,
            test_fraction:   0.3,
            seed:            42,
            n_trees:         100,
            max_depth:       None,
            predict_samples: 5,
            extractor:       ExtractorKind::Mean,
        }
    }
}

impl PipelineConfig {
    /// Reject configurations that would fail partway through the run.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.num_samples > 0, "num_samples must be positive");
        anyhow::ensure!(self.num_subcarriers > 0, "num_subcarriers must be positive");
        anyhow::ensure!(self.predict_samples > 0, "predict_samples must be positive");
        anyhow::ensure!(
            self.noise_std.is_finite() && self.noise_std > 0.0,
            "noise_std must be finite and positive, got {}",
            self.noise_std
        );
        anyhow::ensure!(
            self.test_fraction > 0.0 && self.test_fraction < 1.0,
            "test_fraction must be in (0, 1), got {}",
            self.test_fraction
        );
        self.forest_config().validate()?;
        Ok(())
    }

    pub fn forest_config(&self) -> ForestConfig {
        ForestConfig {
            n_trees:   self.n_trees,
            max_depth: self.max_depth,
            seed:      self.seed,
            ..ForestConfig::default()
        }
    }
}

// ─── PipelineUseCase ─────────────────────────────────────────────────────────
pub struct PipelineUseCase {
    config:    PipelineConfig,
    extractor: Box<dyn FeatureExtractor>,
}

impl PipelineUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        let extractor = config.extractor.build();
        Self { config, extractor }
    }

    /// Run the pipeline on the seeded synthetic source.
    pub fn execute(&self) -> Result<RunReport> {
        self.config.validate()?;
        let cfg = &self.config;

        let mut source = SyntheticCsiSource::with_seed(cfg.num_subcarriers, cfg.seed)?
            .noise_std(cfg.noise_std)?;
        self.run(&mut source)
    }

    /// Run the pipeline on any CSI source.
    pub fn execute_with(&self, source: &mut dyn CsiSource) -> Result<RunReport> {
        self.config.validate()?;
        self.run(source)
    }

    /// The stages themselves; callers validate the config first.
    fn run(&self, source: &mut dyn CsiSource) -> Result<RunReport> {
        let cfg = &self.config;

        // ── Step 1: Acquire labelled CSI samples ─────────────────────────────
        tracing::info!(
            "1. Generating CSI dataset: {} samples x {} subcarriers",
            cfg.num_samples,
            cfg.num_subcarriers
        );
        let (samples, labels) = source
            .acquire(cfg.num_samples)
            .context("CSI acquisition failed")?
            .into_parts();

        // ── Step 2: Feature extraction ───────────────────────────────────────
        // Raw samples are dropped as soon as features exist
        tracing::info!(
            "2. Extracting features with the '{}' extractor ({} per sample)",
            self.extractor.name(),
            self.extractor.dimension()
        );
        let features = self.extractor.extract_batch(&samples)?;
        drop(samples);

        // ── Step 3: Train / test split ───────────────────────────────────────
        tracing::info!(
            "3. Splitting dataset: test_fraction={}, seed={}",
            cfg.test_fraction,
            cfg.seed
        );
        let (train_x, test_x, train_y, test_y) =
            split_train_test(features, labels, cfg.test_fraction, cfg.seed)?.into_tuple();
        tracing::info!("Split: {} train, {} test", train_x.len(), test_x.len());

        // ── Step 4: Train ────────────────────────────────────────────────────
        tracing::info!("4. Training location model");
        let mut classifier = ForestLocationClassifier::new(cfg.forest_config());
        classifier.train(&train_x, &train_y).context("training failed")?;

        // ── Step 5: Evaluate ─────────────────────────────────────────────────
        // One pass over the test set feeds both accuracy and recall
        tracing::info!("5. Evaluating on {} held-out samples", test_x.len());
        let predicted_test = classifier.predict(&test_x)?;
        let accuracy       = accuracy(&predicted_test, &test_y)?;
        tracing::info!("accuracy: {:.2}", accuracy);

        let confusion = ConfusionMatrix::from_predictions(&predicted_test, &test_y)?;
        let per_class = confusion.per_class_recall();
        for row in &per_class {
            tracing::debug!("recall[{}] = {:.3}", row.location, row.recall);
        }

        // ── Step 6 + 7: Predict locations for a fresh batch ──────────────────
        tracing::info!(
            "6. Predicting locations for {} new CSI samples",
            cfg.predict_samples
        );
        let (new_samples, _) = source
            .acquire(cfg.predict_samples)
            .context("CSI acquisition failed")?
            .into_parts();
        let new_features = self.extractor.extract_batch(&new_samples)?;
        let predictions  = classifier.predict(&new_features)?;

        let report = RunReport {
            config:          cfg.clone(),
            extractor:       self.extractor.name().to_string(),
            n_train:         train_x.len(),
            n_test:          test_x.len(),
            classes:         classifier.classes()?.to_vec(),
            missing_classes: classifier.missing_classes()?,
            accuracy,
            per_class,
            predictions,
        };
        tracing::info!("Predicted locations: [{}]", report.predictions_display());

        Ok(report)
    }
}
