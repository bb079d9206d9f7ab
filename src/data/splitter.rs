// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles sample indices and splits them into two sets:
//   - Training set: what the forest is fitted on
//   - Test set:     held out to measure accuracy
//
// Rounding policy:
//   n_test  = round(test_fraction * n)   (half away from zero)
//   n_train = n - n_test
//
// The first n_test indices of the shuffled order form the
// test set, the remainder the training set. Both keep the
// shuffled order.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom on a
// StdRng seeded from `seed`, so the same seed and input
// always give the same split.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::error::{LocalizationError, Result};

/// The four outputs of a split, in parallel pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit<T, L> {
    pub train_features: Vec<T>,
    pub test_features:  Vec<T>,
    pub train_labels:   Vec<L>,
    pub test_labels:    Vec<L>,
}

impl<T, L> TrainTestSplit<T, L> {
    pub fn into_tuple(self) -> (Vec<T>, Vec<T>, Vec<L>, Vec<L>) {
        (self.train_features, self.test_features, self.train_labels, self.test_labels)
    }
}

/// Number of test samples for `total` samples.
pub fn test_size(total: usize, test_fraction: f64) -> usize {
    (test_fraction * total as f64).round() as usize
}

/// Shuffle `features`/`labels` together and split into train and test.
///
/// # Errors
/// * `LengthMismatch` if the two inputs differ in length
/// * `InvalidInput`   if `test_fraction` is not in (0, 1)
/// * `EmptySplit`     if either side would end up empty
///
/// # Example
/// ```ignore
/// let split = split_train_test(features, labels, 0.3, 42)?;
/// // 1000 samples → 700 train, 300 test
/// ```
pub fn split_train_test<T, L>(
    features:      Vec<T>,
    labels:        Vec<L>,
    test_fraction: f64,
    seed:          u64,
) -> Result<TrainTestSplit<T, L>> {
    if features.len() != labels.len() {
        return Err(LocalizationError::LengthMismatch {
            features: features.len(),
            labels:   labels.len(),
        });
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(LocalizationError::InvalidInput(format!(
            "test_fraction must be in (0, 1), got {test_fraction}"
        )));
    }

    let total  = features.len();
    let n_test = test_size(total, test_fraction);

    if n_test == 0 {
        return Err(LocalizationError::EmptySplit { side: "test", total, test_fraction });
    }
    if n_test >= total {
        return Err(LocalizationError::EmptySplit { side: "train", total, test_fraction });
    }

    let mut rng   = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..total).collect();
    order.shuffle(&mut rng);

    // Position in the shuffled order for every original index.
    // Test set = ranks [0, n_test), train set = the rest.
    let mut rank = vec![0usize; total];
    for (r, &idx) in order.iter().enumerate() {
        rank[idx] = r;
    }

    let mut test_slots:  Vec<Option<(T, L)>> = (0..n_test).map(|_| None).collect();
    let mut train_slots: Vec<Option<(T, L)>> = (0..total - n_test).map(|_| None).collect();

    for (idx, pair) in features.into_iter().zip(labels).enumerate() {
        let r = rank[idx];
        if r < n_test {
            test_slots[r] = Some(pair);
        } else {
            train_slots[r - n_test] = Some(pair);
        }
    }

    let (test_features, test_labels): (Vec<T>, Vec<L>) = test_slots.into_iter().flatten().unzip();
    let (train_features, train_labels): (Vec<T>, Vec<L>) = train_slots.into_iter().flatten().unzip();

    tracing::debug!(
        "Dataset split: {} training, {} test ({}% / {}%)",
        train_features.len(),
        test_features.len(),
        (train_features.len() * 100) / total,
        (test_features.len() * 100) / total,
    );

    Ok(TrainTestSplit { train_features, test_features, train_labels, test_labels })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn indices(n: usize) -> (Vec<usize>, Vec<usize>) {
        ((0..n).collect(), (0..n).map(|i| i * 10).collect())
    }

    #[test]
    fn test_correct_split_sizes() {
        let (f, l) = indices(1000);
        let split  = split_train_test(f, l, 0.3, 42).unwrap();
        assert_eq!(split.train_features.len(), 700);
        assert_eq!(split.test_features.len(), 300);
        assert_eq!(split.train_labels.len(), 700);
        assert_eq!(split.test_labels.len(), 300);
    }

    #[test]
    fn test_rounding_policy() {
        assert_eq!(test_size(10, 0.25), 3); // 2.5 rounds away from zero
        assert_eq!(test_size(10, 0.24), 2);
        assert_eq!(test_size(7, 0.5), 4);   // 3.5 → 4
        assert_eq!(test_size(1000, 0.3), 300);
    }

    #[test]
    fn test_reproducible_with_same_seed() {
        let (f, l) = indices(200);
        let a      = split_train_test(f.clone(), l.clone(), 0.3, 7).unwrap();
        let b      = split_train_test(f, l, 0.3, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let (f, l) = indices(200);
        let a      = split_train_test(f.clone(), l.clone(), 0.3, 1).unwrap();
        let b      = split_train_test(f, l, 0.3, 2).unwrap();
        assert_ne!(a.test_features, b.test_features);
    }

    #[test]
    fn test_labels_stay_paired() {
        let (f, l) = indices(100);
        let split  = split_train_test(f, l, 0.4, 9).unwrap();
        for (x, y) in split.train_features.iter().zip(&split.train_labels) {
            assert_eq!(*y, x * 10);
        }
        for (x, y) in split.test_features.iter().zip(&split.test_labels) {
            assert_eq!(*y, x * 10);
        }
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = split_train_test(vec![1, 2, 3], vec!['a', 'b'], 0.3, 0).unwrap_err();
        assert_eq!(err, LocalizationError::LengthMismatch { features: 3, labels: 2 });
    }

    #[test]
    fn test_fraction_out_of_range() {
        let (f, l) = indices(10);
        for frac in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                split_train_test(f.clone(), l.clone(), frac, 0),
                Err(LocalizationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_empty_sides_rejected() {
        let (f, l) = indices(3);
        // 0.1 * 3 = 0.3 → 0 test samples
        assert!(matches!(
            split_train_test(f.clone(), l.clone(), 0.1, 0),
            Err(LocalizationError::EmptySplit { side: "test", .. })
        ));
        // 0.9 * 3 = 2.7 → 3 test samples, none left to train on
        assert!(matches!(
            split_train_test(f, l, 0.9, 0),
            Err(LocalizationError::EmptySplit { side: "train", .. })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let err = split_train_test(Vec::<u8>::new(), Vec::<u8>::new(), 0.3, 0).unwrap_err();
        assert!(matches!(err, LocalizationError::EmptySplit { .. }));
    }

    proptest! {
        #[test]
        fn split_is_disjoint_and_exhaustive(
            n in 2usize..400,
            frac in 0.05f64..0.95,
            seed in any::<u64>(),
        ) {
            let (f, l) = indices(n);
            let n_test = test_size(n, frac);
            prop_assume!(n_test > 0 && n_test < n);

            let split = split_train_test(f, l, frac, seed).unwrap();
            prop_assert_eq!(split.test_features.len(), n_test);

            let mut seen: Vec<usize> = split
                .train_features
                .iter()
                .chain(split.test_features.iter())
                .copied()
                .collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        }
    }
}
