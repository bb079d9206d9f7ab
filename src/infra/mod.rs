// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one stage:
//
//   metrics.rs — Accuracy and confusion matrix
//                Used by the classifier's evaluate() and by
//                the pipeline's per-location breakdown.
//
//   report.rs  — Pretty JSON writer
//                Saves the optional on-disk record of a run.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Accuracy and confusion matrix
pub mod metrics;

/// JSON persistence for run summaries
pub mod report;
