// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw CSI readings up to the train/test sets
// the classifier consumes.
//
// The pipeline flows in this order:
//
//   SyntheticCsiSource → labelled CSI samples (CsiDataset)
//       │
//       ▼
//   FeatureExtractor   → one FeatureVector per sample
//       │
//       ▼
//   split_train_test   → shuffled, seeded train/test sets
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Seedable synthetic CSI generator
pub mod synthetic;

/// Mean and mean+std feature extractors
pub mod features;

/// Shuffles and splits data into train/test sets
pub mod splitter;
