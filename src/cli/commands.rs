// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `run` subcommand and its flags. Every flag has
// a default, so `csi-locator run` reproduces the reference
// scenario: 1000 samples, 56 subcarriers, 30% test, seed 42,
// 100 trees, 5 fresh samples to predict.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::pipeline_use_case::{ExtractorKind, PipelineConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate CSI data, train the locator, evaluate and predict
    Run(RunArgs),
}

/// Feature extractor choices exposed on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractorArg {
    /// Mean of all subcarriers
    Mean,
    /// Mean and standard deviation of all subcarriers
    MeanStd,
}

impl From<ExtractorArg> for ExtractorKind {
    fn from(a: ExtractorArg) -> Self {
        match a {
            ExtractorArg::Mean    => ExtractorKind::Mean,
            ExtractorArg::MeanStd => ExtractorKind::MeanStd,
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of labelled CSI samples to generate
    #[arg(long, default_value_t = 1000)]
    pub num_samples: usize,

    /// Subcarriers per CSI sample
    #[arg(long, default_value_t = 56)]
    pub num_subcarriers: usize,

    /// Standard deviation of every synthetic subcarrier value
    #[arg(long, default_value_t = 2.0)]
    pub noise_std: f64,

    /// Fraction of samples held out for evaluation, in (0, 1)
    #[arg(long, default_value_t = 0.3)]
    pub test_fraction: f64,

    /// Seed for data generation, the split and the forest
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of trees in the random forest
    #[arg(long, default_value_t = 100)]
    pub n_trees: usize,

    /// Depth limit per tree (unlimited when omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Fresh samples to predict after evaluation
    #[arg(long, default_value_t = 5)]
    pub predict_samples: usize,

    /// Feature extractor applied to every CSI sample
    #[arg(long, value_enum, default_value_t = ExtractorArg::Mean)]
    pub extractor: ExtractorArg,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<String>,
}

impl Default for RunArgs {
    fn default() -> Self {
        let cfg = PipelineConfig::default();
        Self {
            num_samples:     cfg.num_samples,
            num_subcarriers: cfg.num_subcarriers,
            noise_std:       cfg.noise_std,
            test_fraction:   cfg.test_fraction,
            seed:            cfg.seed,
            n_trees:         cfg.n_trees,
            max_depth:       cfg.max_depth,
            predict_samples: cfg.predict_samples,
            extractor:       ExtractorArg::Mean,
            report:          None,
        }
    }
}

/// Convert CLI RunArgs into the application-layer PipelineConfig.
/// The application layer never sees clap types.
impl From<&RunArgs> for PipelineConfig {
    fn from(a: &RunArgs) -> Self {
        PipelineConfig {
            num_samples:     a.num_samples,
            num_subcarriers: a.num_subcarriers,
            noise_std:       a.noise_std,
            test_fraction:   a.test_fraction,
            seed:            a.seed,
            n_trees:         a.n_trees,
            max_depth:       a.max_depth,
            predict_samples: a.predict_samples,
            extractor:       a.extractor.into(),
        }
    }
}
