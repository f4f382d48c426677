// Seeded train/test splitter.
//
// Draws one permutation of the row positions from a PRNG seeded with a fixed
// value, then cuts it: the leading `n_test` positions are the test set, the
// remainder the training set.  The test side is rounded up, so 0.2 of 11
// rows is 3 test rows and 8 training rows.

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Split `items` into `(train, test)`.
///
/// * `test_size` - fraction of items placed in the test set, strictly between 0 and 1
/// * `seed`      - PRNG seed; the same items and seed always give the same split
///
/// Both halves come back in permuted order.  An empty input, or one too small
/// to leave any training rows, is rejected.
pub fn train_test_split<T>(items: Vec<T>, test_size: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        bail!("test_size must be between 0 and 1 exclusive, got {test_size}");
    }

    let total = items.len();
    if total == 0 {
        bail!("cannot split an empty dataset");
    }

    let n_test = (test_size * total as f64).ceil() as usize;
    let n_train = total - n_test.min(total);
    if n_train == 0 {
        bail!(
            "with {total} rows and test_size={test_size} the training set would be empty"
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..total).collect();
    order.shuffle(&mut rng);

    // Move items out in permuted order without cloning.
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut permuted = Vec::with_capacity(total);
    for i in order {
        if let Some(item) = slots[i].take() {
            permuted.push(item);
        }
    }

    let train = permuted.split_off(n_test);
    let test = permuted;

    log::debug!(
        "Dataset split: {} training, {} test ({}% / {}%)",
        train.len(),
        test.len(),
        (train.len() * 100) / total,
        (test.len() * 100) / total,
    );

    Ok((train, test))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_side_rounds_up() {
        let (train, test) = train_test_split((0..100).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);

        let (train, test) = train_test_split((0..11).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn halves_are_disjoint_and_cover_everything() {
        let items: Vec<usize> = (0..57).collect();
        let (train, test) = train_test_split(items, 0.2, 42).unwrap();

        let train_set: HashSet<_> = train.iter().copied().collect();
        let test_set: HashSet<_> = test.iter().copied().collect();
        assert!(train_set.is_disjoint(&test_set));

        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_split() {
        let a = train_test_split((0..40).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        let b = train_test_split((0..40).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_split() {
        let a = train_test_split((0..200).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        let b = train_test_split((0..200).collect::<Vec<usize>>(), 0.2, 7).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = train_test_split(Vec::<usize>::new(), 0.2, 42).unwrap_err();
        assert!(err.to_string().contains("empty dataset"));
    }

    #[test]
    fn single_row_leaves_no_training_data() {
        assert!(train_test_split(vec![1], 0.2, 42).is_err());
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        assert!(train_test_split(vec![1, 2, 3], 0.0, 42).is_err());
        assert!(train_test_split(vec![1, 2, 3], 1.0, 42).is_err());
        assert!(train_test_split(vec![1, 2, 3], f64::NAN, 42).is_err());
    }

    #[test]
    fn two_rows_give_one_each() {
        let (train, test) = train_test_split(vec!["a", "b"], 0.2, 42).unwrap();
        assert_eq!(train.len(), 1);
        assert_eq!(test.len(), 1);
    }
}
