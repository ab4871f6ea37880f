use proptest::prelude::*;

use super::*;

fn samples(lengths: &[f64]) -> Vec<ShapeSample> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &length)| ShapeSample {
            shape: ShapeId(i as u32),
            length,
        })
        .collect()
}

#[test]
fn keeps_longest_with_first_occurrence_on_ties() {
    let set = select(&samples(&[500.0, 1500.0, 500.0]), 2);
    let ranked: Vec<_> = set.members().iter().map(|s| (s.shape, s.length)).collect();
    assert_eq!(ranked, vec![(ShapeId(1), 1500.0), (ShapeId(0), 500.0)]);
    assert_eq!(set.hidden(), &[ShapeId(2)]);
}

#[test]
fn keep_larger_than_input_keeps_everything() {
    let set = select(&samples(&[1.0, 3.0, 2.0]), 25);
    assert_eq!(set.len(), 3);
    assert!(set.hidden().is_empty());
}

#[test]
fn keep_zero_still_keeps_one() {
    let set = select(&samples(&[1.0, 3.0]), 0);
    assert_eq!(set.len(), 1);
    assert_eq!(set.members()[0].shape, ShapeId(1));
    assert_eq!(set.hidden(), &[ShapeId(0)]);
}

#[test]
fn empty_input_is_empty_set() {
    let set = select(&[], 5);
    assert!(set.is_empty());
    assert!(set.hidden().is_empty());
}

proptest! {
    #[test]
    fn size_is_min_of_keep_and_count(
        lengths in prop::collection::vec(1u32..50, 1..40),
        keep in 1usize..60,
    ) {
        let input: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
        let set = select(&samples(&input), keep);
        prop_assert_eq!(set.len(), keep.min(input.len()));
        prop_assert_eq!(set.len() + set.hidden().len(), input.len());
    }

    #[test]
    fn ranking_is_descending_and_stable(
        lengths in prop::collection::vec(1u32..6, 1..40),
        keep in 1usize..60,
    ) {
        let input: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
        let set = select(&samples(&input), keep);
        for pair in set.members().windows(2) {
            prop_assert!(pair[0].length >= pair[1].length);
            if pair[0].length == pair[1].length {
                prop_assert!(pair[0].shape < pair[1].shape);
            }
        }
    }
}
