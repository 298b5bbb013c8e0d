use super::*;
use crate::utils::DefaultRandom;

fn create_population(distances: &[f64]) -> Vec<Individual> {
    distances.iter().enumerate().map(|(idx, &distance)| Individual { path: vec![idx], distance }).collect()
}

#[test]
fn can_select_single_individual() {
    let population = create_population(&[10.]);

    let selected = tournament(population.as_slice(), &DefaultRandom::new_repeatable(0));

    assert_eq!(selected.path, vec![0]);
}

#[test]
fn can_prefer_fitter_individuals() {
    let random = DefaultRandom::new_repeatable(5);
    let population = create_population(&[50., 10., 40., 30., 20.]);
    let mut counter = [0_usize; 5];

    (0..1000).for_each(|_| counter[tournament(population.as_slice(), &random).path[0]] += 1);

    // the fittest individual wins every tournament it takes part in, the least fit wins only alone
    assert!(counter[1] > counter[4]);
    assert!(counter[4] > counter[0]);
    assert!(counter[0] < 50);
}
