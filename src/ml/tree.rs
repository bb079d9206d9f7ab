// ============================================================
// Layer 5 — CART Decision Tree
// ============================================================
// A binary classification tree grown greedily with Gini
// impurity:
//
//   gini(node) = 1 - Σ_k p_k²
//
// At every node a random subset of `max_features` features is
// examined. For each, the node's samples are sorted by that
// feature and every boundary between two distinct values is
// a candidate threshold (the midpoint of the two values).
// The candidate with the lowest weighted child impurity wins;
// ties keep the first candidate found.
//
// A node becomes a leaf when it is pure, when it holds fewer
// than `min_samples_split` samples, when `max_depth` is hit,
// or when no split lowers the impurity.
//
// Routing rule: x[feature] <= threshold → left, else right.
//
// Reference: Breiman et al. (1984) Classification and
//            Regression Trees

use rand::seq::index;
use rand::Rng;

use crate::domain::csi::FeatureVector;

#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf {
        /// Majority class of the training samples that reached this leaf
        class:  usize,
        counts: Vec<usize>,
    },
    Split {
        feature:   usize,
        threshold: f64,
        left:      Box<TreeNode>,
        right:     Box<TreeNode>,
    },
}

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    pub max_depth:         Option<usize>,
    pub min_samples_split: usize,
    pub max_features:      usize,
}

#[derive(Debug, Clone)]
pub struct DecisionTree {
    root:       TreeNode,
    n_features: usize,
}

/// Borrowed training data shared by every recursive call.
struct Grower<'a, R: Rng> {
    x:          &'a [FeatureVector],
    y:          &'a [usize],
    n_classes:  usize,
    n_features: usize,
    params:     TreeParams,
    rng:        &'a mut R,
}

struct BestSplit {
    feature:   usize,
    threshold: f64,
    impurity:  f64,
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    1.0 - counts.iter().map(|&c| (c as f64 / n).powi(2)).sum::<f64>()
}

/// Index of the largest count; the lowest index wins ties.
pub(crate) fn argmax(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = i;
        }
    }
    best
}

impl DecisionTree {
    /// Grow a tree on the rows of `x` listed in `sample`.
    ///
    /// `sample` may repeat rows (bootstrap); it must not be empty.
    /// Every entry of `y` must be below `n_classes`.
    pub fn fit<R: Rng>(
        x:         &[FeatureVector],
        y:         &[usize],
        sample:    Vec<usize>,
        n_classes: usize,
        params:    TreeParams,
        rng:       &mut R,
    ) -> Self {
        debug_assert!(!sample.is_empty());
        let n_features = x.first().map_or(0, |f| f.values().len());

        let mut grower = Grower { x, y, n_classes, n_features, params, rng };
        let root       = grower.grow(sample, 0);

        Self { root, n_features }
    }

    pub fn predict(&self, x: &FeatureVector) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf { class, .. } => return *class,
                TreeNode::Split { feature, threshold, left, right } => {
                    node = if x.get(*feature) <= *threshold { left } else { right };
                }
            }
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_nodes(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Split { left, right, .. } => 1 + count(left) + count(right),
            }
        }
        count(&self.root)
    }

    pub fn n_leaves(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Split { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Number of splits on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        fn depth(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }
}

impl<'a, R: Rng> Grower<'a, R> {
    fn class_counts(&self, rows: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &r in rows {
            counts[self.y[r]] += 1;
        }
        counts
    }

    fn grow(&mut self, rows: Vec<usize>, depth: usize) -> TreeNode {
        let counts = self.class_counts(&rows);
        let pure   = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let capped = self.params.max_depth.is_some_and(|d| depth >= d);

        if pure || capped || rows.len() < self.params.min_samples_split {
            return TreeNode::Leaf { class: argmax(&counts), counts };
        }

        let parent_impurity = gini(&counts, rows.len());
        let best = match self.best_split(&rows) {
            Some(b) if b.impurity < parent_impurity => b,
            _ => return TreeNode::Leaf { class: argmax(&counts), counts },
        };

        let (left, right): (Vec<usize>, Vec<usize>) = rows
            .into_iter()
            .partition(|&r| self.x[r].get(best.feature) <= best.threshold);

        TreeNode::Split {
            feature:   best.feature,
            threshold: best.threshold,
            left:      Box::new(self.grow(left, depth + 1)),
            right:     Box::new(self.grow(right, depth + 1)),
        }
    }

    fn best_split(&mut self, rows: &[usize]) -> Option<BestSplit> {
        let k        = self.params.max_features.clamp(1, self.n_features);
        let features = index::sample(&mut *self.rng, self.n_features, k).into_vec();
        let total    = rows.len();

        let mut best: Option<BestSplit> = None;

        for feature in features {
            let mut sorted: Vec<(f64, usize)> = rows
                .iter()
                .map(|&r| (self.x[r].get(feature), self.y[r]))
                .collect();
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left  = vec![0usize; self.n_classes];
            let mut right = self.class_counts(rows);

            for i in 0..total - 1 {
                let (value, class) = sorted[i];
                left[class]  += 1;
                right[class] -= 1;

                let next = sorted[i + 1].0;
                if value >= next {
                    continue;
                }

                let n_left   = i + 1;
                let n_right  = total - n_left;
                let impurity = (n_left as f64 * gini(&left, n_left)
                    + n_right as f64 * gini(&right, n_right))
                    / total as f64;

                if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                    // The midpoint can round up to `next` for adjacent floats
                    let mid       = value + (next - value) / 2.0;
                    let threshold = if mid < next { mid } else { value };
                    best = Some(BestSplit { feature, threshold, impurity });
                }
            }
        }

        best
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows(values: &[&[f64]]) -> Vec<FeatureVector> {
        values.iter().map(|v| FeatureVector::new(v.to_vec()).unwrap()).collect()
    }

    fn params() -> TreeParams {
        TreeParams { max_depth: None, min_samples_split: 2, max_features: 1 }
    }

    fn fit_all(x: &[FeatureVector], y: &[usize], n_classes: usize, params: TreeParams) -> DecisionTree {
        let mut rng = StdRng::seed_from_u64(0);
        DecisionTree::fit(x, y, (0..x.len()).collect(), n_classes, params, &mut rng)
    }

    #[test]
    fn test_gini() {
        assert_eq!(gini(&[4, 0], 4), 0.0);
        assert!((gini(&[2, 2], 4) - 0.5).abs() < 1e-12);
        assert_eq!(gini(&[0, 0], 0), 0.0);
    }

    #[test]
    fn test_argmax_prefers_lowest_index_on_tie() {
        assert_eq!(argmax(&[3, 5, 5, 1]), 1);
        assert_eq!(argmax(&[0, 0]), 0);
    }

    #[test]
    fn test_single_threshold_split() {
        let x    = rows(&[&[1.0], &[2.0], &[3.0], &[10.0], &[11.0], &[12.0]]);
        let y    = vec![0, 0, 0, 1, 1, 1];
        let tree = fit_all(&x, &y, 2, params());

        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.depth(), 1);
        match tree.root() {
            TreeNode::Split { feature, threshold, .. } => {
                assert_eq!(*feature, 0);
                assert_eq!(*threshold, 6.5);
            }
            other => panic!("expected a split, got {other:?}"),
        }

        assert_eq!(tree.predict(&FeatureVector::new(vec![6.0]).unwrap()), 0);
        assert_eq!(tree.predict(&FeatureVector::new(vec![7.0]).unwrap()), 1);
    }

    #[test]
    fn test_pure_node_is_leaf() {
        let x    = rows(&[&[1.0], &[2.0], &[3.0]]);
        let tree = fit_all(&x, &[2, 2, 2], 3, params());
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.predict(&x[0]), 2);
    }

    #[test]
    fn test_identical_features_cannot_split() {
        let x    = rows(&[&[5.0], &[5.0], &[5.0], &[5.0]]);
        let tree = fit_all(&x, &[0, 1, 1, 0], 2, params());
        assert_eq!(tree.n_nodes(), 1);
        // 2 vs 2 tie → lowest class index
        assert_eq!(tree.predict(&x[0]), 0);
    }

    #[test]
    fn test_max_depth_is_respected() {
        let x = rows(&[&[1.0], &[2.0], &[3.0], &[4.0], &[5.0], &[6.0]]);
        let y = vec![0, 1, 0, 1, 0, 1];
        let capped = TreeParams { max_depth: Some(1), ..params() };
        assert!(fit_all(&x, &y, 2, capped).depth() <= 1);
        // Unlimited depth separates every alternating sample
        let full = fit_all(&x, &y, 2, params());
        for (row, &label) in x.iter().zip(&y) {
            assert_eq!(full.predict(row), label);
        }
    }

    #[test]
    fn test_picks_informative_feature() {
        // Feature 0 is noise, feature 1 separates the classes
        let x    = rows(&[&[3.0, 0.0], &[1.0, 0.5], &[2.0, 9.0], &[4.0, 9.5]]);
        let y    = vec![0, 0, 1, 1];
        let p    = TreeParams { max_features: 2, ..params() };
        let tree = fit_all(&x, &y, 2, p);
        assert_eq!(tree.n_leaves(), 2);
        match tree.root() {
            TreeNode::Split { feature, .. } => assert_eq!(*feature, 1),
            other => panic!("expected a split, got {other:?}"),
        }
    }

    #[test]
    fn test_adjacent_floats_still_partition() {
        let a    = 1.0f64;
        let b    = f64::from_bits(a.to_bits() + 1);
        let x    = rows(&[&[a], &[b]]);
        let tree = fit_all(&x, &[0, 1], 2, params());
        assert_eq!(tree.predict(&x[0]), 0);
        assert_eq!(tree.predict(&x[1]), 1);
    }
}
