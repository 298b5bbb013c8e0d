use super::*;
use crate::utils::DefaultRandom;

#[test]
fn can_reverse_segment() {
    let mut path = vec![0, 1, 2, 3, 4];

    inversion(&mut path, 1, 3);

    assert_eq!(path, vec![0, 3, 2, 1, 4]);
}

#[test]
fn can_reverse_segment_with_swapped_bounds() {
    let mut path = vec![0, 1, 2, 3, 4];

    inversion(&mut path, 4, 2);

    assert_eq!(path, vec![0, 1, 4, 3, 2]);
}

#[test]
fn can_skip_mutation_with_zero_rate() {
    let random = DefaultRandom::new_repeatable(1);
    let mut path = vec![0, 1, 2, 3, 4];

    assert!(!mutate(&mut path, 0., &random));
    assert_eq!(path, vec![0, 1, 2, 3, 4]);
}

#[test]
fn can_keep_permutation_after_mutation() {
    let random = DefaultRandom::new_repeatable(2);
    let mut path: Path = (0..20).collect();

    (0..100).for_each(|_| assert!(mutate(&mut path, 1., &random)));

    let mut sorted = path.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>());
}

#[test]
fn can_skip_mutation_of_short_path() {
    let random = DefaultRandom::new_repeatable(3);
    let mut path = vec![0];

    assert!(!mutate(&mut path, 1., &random));
}
