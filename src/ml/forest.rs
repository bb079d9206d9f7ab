// ============================================================
// Layer 5 — Random Forest
// ============================================================
// An ensemble of CART trees (see tree.rs). Each tree is grown
// on a bootstrap resample of the training rows and looks at
// floor(sqrt(n_features)) random features per split (at least
// one). Prediction is a hard majority vote over the trees;
// ties go to the lowest class index.
//
// Reproducibility: a master StdRng seeded from `seed` draws
// one u64 per tree, and every tree gets its own StdRng from
// that value. Same seed + same data → identical forest.
//
// Reference: Breiman (2001) Random Forests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::csi::FeatureVector;
use crate::domain::error::{LocalizationError, Result};
use crate::ml::tree::{argmax, DecisionTree, TreeParams};

/// Hyperparameters of the forest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the ensemble
    pub n_trees: usize,

    /// Depth limit per tree, None grows until leaves are pure
    pub max_depth: Option<usize>,

    /// Nodes with fewer samples than this become leaves (min 2)
    pub min_samples_split: usize,

    /// Draw a bootstrap resample per tree, otherwise use every row
    pub bootstrap: bool,

    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees:           100,
            max_depth:         None,
            min_samples_split: 2,
            bootstrap:         true,
            seed:              42,
        }
    }
}

impl ForestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(LocalizationError::InvalidInput("n_trees must be positive".into()));
        }
        if self.min_samples_split < 2 {
            return Err(LocalizationError::InvalidInput(
                "min_samples_split must be at least 2".into(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(LocalizationError::InvalidInput("max_depth must be positive".into()));
        }
        Ok(())
    }
}

/// Candidate features examined at each split
pub fn max_features(n_features: usize) -> usize {
    ((n_features as f64).sqrt().floor() as usize).max(1)
}

#[derive(Debug, Clone)]
pub struct RandomForest {
    trees:      Vec<DecisionTree>,
    n_classes:  usize,
    n_features: usize,
}

impl RandomForest {
    /// Fit a forest on rows `x` with class indices `y` in `0..n_classes`.
    pub fn fit(
        x:         &[FeatureVector],
        y:         &[usize],
        n_classes: usize,
        config:    &ForestConfig,
    ) -> Result<Self> {
        config.validate()?;
        if x.is_empty() {
            return Err(LocalizationError::InvalidInput("cannot fit on an empty dataset".into()));
        }
        if x.len() != y.len() {
            return Err(LocalizationError::LengthMismatch { features: x.len(), labels: y.len() });
        }
        if let Some(&bad) = y.iter().find(|&&c| c >= n_classes) {
            return Err(LocalizationError::InvalidInput(format!(
                "class index {bad} out of range for {n_classes} classes"
            )));
        }

        let n_features = x[0].values().len();
        let params = TreeParams {
            max_depth:         config.max_depth,
            min_samples_split: config.min_samples_split,
            max_features:      max_features(n_features),
        };

        let n_rows     = x.len();
        let mut master = StdRng::seed_from_u64(config.seed);
        let mut trees  = Vec::with_capacity(config.n_trees);

        for _ in 0..config.n_trees {
            let mut rng = StdRng::seed_from_u64(master.gen());
            let sample: Vec<usize> = if config.bootstrap {
                (0..n_rows).map(|_| rng.gen_range(0..n_rows)).collect()
            } else {
                (0..n_rows).collect()
            };
            trees.push(DecisionTree::fit(x, y, sample, n_classes, params, &mut rng));
        }

        tracing::debug!(
            "Fitted {} trees (max_features={}, mean depth={:.1})",
            trees.len(),
            params.max_features,
            trees.iter().map(DecisionTree::depth).sum::<usize>() as f64 / trees.len() as f64,
        );

        Ok(Self { trees, n_classes, n_features })
    }

    /// Votes per class for one row
    pub fn votes(&self, x: &FeatureVector) -> Vec<usize> {
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.predict(x)] += 1;
        }
        votes
    }

    /// Majority-vote class index for one row
    pub fn predict(&self, x: &FeatureVector) -> usize {
        argmax(&self.votes(x))
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}
