// ============================================================
// Layer 2 — Run Report
// ============================================================
// The summary of one pipeline run:
//   - the PipelineConfig that produced the run
//   - train/test sizes and the classes the model learned
//   - full-precision accuracy and per-location recall
//   - the labels predicted for the fresh batch
//
// Example file (written by infra::report::ReportWriter):
//   {
//     "config": { "num_samples": 1000, ... },
//     "n_train": 700,
//     "n_test": 300,
//     "accuracy": 0.9966666666666667,
//     ...
//   }

use serde::{Deserialize, Serialize};

use crate::application::pipeline_use_case::PipelineConfig;
use crate::domain::location::Location;
use crate::infra::metrics::ClassRecall;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub config:          PipelineConfig,
    pub extractor:       String,
    pub n_train:         usize,
    pub n_test:          usize,
    pub classes:         Vec<Location>,
    pub missing_classes: Vec<Location>,
    /// Full precision; only the log line rounds it
    pub accuracy:        f64,
    pub per_class:       Vec<ClassRecall>,
    pub predictions:     Vec<Location>,
}

impl RunReport {
    /// Predicted labels as "A, C, D"
    pub fn predictions_display(&self) -> String {
        self.predictions
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
