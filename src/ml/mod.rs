// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All learning-algorithm code lives here. Other layers only
// see the LocationClassifier trait from the domain layer.
//
// What's in this layer:
//
//   tree.rs       — CART decision tree
//                   Gini impurity, midpoint thresholds,
//                   random feature subsets per split
//
//   forest.rs     — Random forest
//                   Bootstrap resampling, one seeded RNG
//                   per tree, majority vote
//
//   classifier.rs — ForestLocationClassifier
//                   Untrained/Trained state machine,
//                   Location ↔ class index encoding
//
// Reference: Breiman et al. (1984) CART
//            Breiman (2001) Random Forests

/// CART decision tree
pub mod tree;

/// Bagged ensemble of decision trees
pub mod forest;

/// LocationClassifier implementation backed by the forest
pub mod classifier;
