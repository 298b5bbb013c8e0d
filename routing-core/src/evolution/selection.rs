#[cfg(test)]
#[path = "../../tests/unit/evolution/selection_test.rs"]
mod selection_test;

use super::Individual;
use crate::utils::Random;

/// An amount of individuals competing in a tournament.
pub const TOURNAMENT_SIZE: usize = 3;

/// Samples `TOURNAMENT_SIZE` individuals at random (with replacement) and returns the fittest one.
pub fn tournament<'a>(population: &'a [Individual], random: &dyn Random) -> &'a Individual {
    assert!(!population.is_empty());

    let last = population.len() as i32 - 1;

    (0..TOURNAMENT_SIZE)
        .map(|_| &population[random.uniform_int(0, last) as usize])
        .min_by(|a, b| a.cmp_fitness(b))
        .unwrap_or(&population[0])
}
