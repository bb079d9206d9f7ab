// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal: run
// the localization pipeline end to end and summarise it.
//
// Rules for this layer:
//   - No learning-algorithm code here
//   - No printing here (that's Layer 1)
//   - No clap types here
//   - Only workflow coordination and progress logging
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Generate → extract → split → train → evaluate → predict
pub mod pipeline_use_case;

// What one run produced, ready to print or save
pub mod run_report;
