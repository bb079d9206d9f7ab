// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the core
// concepts of the localization pipeline.
//
// Rules for this layer:
//   - NO random number generation
//   - NO file I/O
//   - NO learning algorithm code
//   - Only data types, validation and traits
//
// Everything else in the crate speaks in these types:
//   CsiSample     → raw per-subcarrier measurements
//   FeatureVector → what an extractor derives from a sample
//   Location      → the label we are trying to infer
//   LabeledSet    → samples paired with their locations
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A location label from the closed alphabet {A, B, C, D}
pub mod location;

// CSI samples and the feature vectors derived from them
pub mod csi;

// Parallel sample/label sets with shape validation
pub mod dataset;

// Error taxonomy shared by the data and ml layers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
