use std::collections::HashSet;
use std::sync::Arc;

use deferred_seq::{
    buffer, except_with, median, pad_left, pad_right, sequence, shuffle, Randomizer,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn buffer_windows_concatenate_to_source(
        source in proptest::collection::vec(any::<i32>(), 0..64),
        size in 1usize..10,
    ) {
        let windows: Vec<Vec<&i32>> = buffer(&source, size).unwrap().iter().collect();

        prop_assert_eq!(windows.is_empty(), source.is_empty());
        if let Some((last, full)) = windows.split_last() {
            prop_assert!(full.iter().all(|w| w.len() == size));
            prop_assert!((1..=size).contains(&last.len()));
        }
        let flattened: Vec<i32> = windows.into_iter().flatten().copied().collect();
        prop_assert_eq!(flattened, source);
    }

    #[test]
    fn except_with_keeps_exactly_unmatched(
        source in proptest::collection::vec(0u8..20, 0..40),
        other in proptest::collection::vec(0u8..20, 0..10),
    ) {
        let excluded: HashSet<u8> = other.iter().copied().collect();
        let expected: Vec<u8> = source.iter().copied().filter(|n| !excluded.contains(n)).collect();
        let actual: Vec<u8> = except_with(&source, other.clone(), |n| **n).iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn except_with_empty_other_is_identity(source in proptest::collection::vec(any::<u16>(), 0..32)) {
        let actual: Vec<u16> = except_with(&source, Vec::<u16>::new(), |n| **n).iter().copied().collect();
        prop_assert_eq!(actual, source);
    }

    #[test]
    fn median_lies_within_bounds(values in proptest::collection::vec(-1000i64..1000, 1..50)) {
        let m = median(&values, |n| *n);
        let min = *values.iter().min().unwrap();
        let max = *values.iter().max().unwrap();
        prop_assert!(min <= m && m <= max);

        if values.len() % 2 == 1 {
            let below = values.iter().filter(|v| **v < m).count();
            let above = values.iter().filter(|v| **v > m).count();
            let half = (values.len() - 1) / 2;
            prop_assert!(below <= half && above <= half);
        }
    }

    #[test]
    fn sequence_tags_are_offset_indices(
        source in proptest::collection::vec(any::<u8>(), 0..32),
        start in -100i64..100,
    ) {
        for (index, tagged) in sequence(&source, start).iter().enumerate() {
            prop_assert_eq!(tagged.tag, start + index as i64);
            prop_assert_eq!(*tagged.item, source[index]);
        }
    }

    #[test]
    fn padding_yields_max_of_width_and_length(
        source in proptest::collection::vec(any::<u8>(), 0..20),
        width in 0usize..30,
    ) {
        let expected_len = width.max(source.len());
        let right: Vec<u8> = pad_right(source.iter().copied(), width, |_| 0).iter().collect();
        let left: Vec<u8> = pad_left(source.iter().copied(), width, |_| 0).iter().collect();
        prop_assert_eq!(right.len(), expected_len);
        prop_assert_eq!(left.len(), expected_len);
        prop_assert_eq!(&right[..source.len()], &source[..]);
        prop_assert_eq!(&left[expected_len - source.len()..], &source[..]);
        if source.len() >= width {
            prop_assert_eq!(&right, &source);
            prop_assert_eq!(&left, &source);
        }
    }

    #[test]
    fn shuffle_is_a_permutation(
        source in proptest::collection::vec(any::<u8>(), 0..64),
        seed in any::<u64>(),
    ) {
        let mut shuffled: Vec<u8> = shuffle(&source, Arc::new(Randomizer::from_seed(seed)))
            .iter()
            .copied()
            .collect();
        let mut expected = source.clone();
        shuffled.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn buffer_rejects_zero(source in proptest::collection::vec(any::<u8>(), 0..8)) {
        prop_assert!(buffer(&source, 0).is_err());
    }
}
