//! This module contains a genetic algorithm which searches for a short visiting order.
//!
//! Each individual is a permutation of point indices, its fitness is `1 / (1 + distance)`.
//! A generation keeps the best individuals as is (elitism) and fills the rest of population with
//! offspring produced by tournament selection, order preserving crossover and inversion mutation.
//!
//! The algorithm is stochastic: use `Environment::new_with_seed` to get a repeatable run.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

mod config;
pub use self::config::*;

mod crossover;
pub use self::crossover::*;

mod individual;
pub use self::individual::Individual;

mod mutation;
pub use self::mutation::*;

mod selection;
pub use self::selection::*;

use crate::models::{DistanceMatrix, GeneticResult, Path, Point, to_points};
use crate::utils::{Environment, Float, Random, Timer};
use rand::seq::SliceRandom;

/// Keeps the state of evolution between generations.
pub struct EvolutionState {
    /// Current population sorted by fitness, the fittest first.
    pub population: Vec<Individual>,
    /// The best individual seen so far.
    pub best: Individual,
    /// Best known distance after each generation.
    pub history: Vec<Float>,
}

/// Runs genetic algorithm on given points.
pub fn run_evolution(points: &[Point], config: &GeneticConfig, environment: &Environment) -> GeneticResult {
    if points.len() < 2 {
        return GeneticResult::empty(points);
    }

    let config = config.resolve(points.len());
    let matrix = DistanceMatrix::new(points);
    let random = environment.random.as_ref();
    let timer = Timer::start();

    let mut state = create_initial_state(&matrix, &config, random);
    log(
        environment,
        &timer,
        format!(
            "created initial population of {} individuals, best distance: {:.2}km",
            state.population.len(),
            state.best.distance
        ),
    );

    while state.history.len() < config.generations && !environment.is_quota_reached() {
        state = evolve(state, &matrix, &config, random);

        let generation = state.history.len();
        if generation % config.log_best == 0 {
            log(environment, &timer, format!("generation {generation}, best distance: {:.2}km", state.best.distance));
        }
    }

    log(
        environment,
        &timer,
        format!(
            "evolution is completed in {} generations, best distance: {:.2}km",
            state.history.len(),
            state.best.distance
        ),
    );

    GeneticResult::new(to_points(points, state.best.path.as_slice()), state.best.distance, state.history)
}

/// Creates initial population from random permutations.
pub fn create_initial_state(
    matrix: &DistanceMatrix,
    config: &ResolvedGeneticConfig,
    random: &dyn Random,
) -> EvolutionState {
    let mut rng = random.get_rng();

    let mut population = (0..config.population_size)
        .map(|_| {
            let mut path: Path = (0..matrix.size()).collect();
            path.shuffle(&mut rng);
            Individual::new(path, matrix)
        })
        .collect::<Vec<_>>();
    population.sort_by(|a, b| a.cmp_fitness(b));

    let best = population.first().cloned().unwrap_or_else(|| Individual::new((0..matrix.size()).collect(), matrix));

    EvolutionState { population, best, history: vec![] }
}

/// Produces the next generation and updates the best known individual.
pub fn evolve(
    state: EvolutionState,
    matrix: &DistanceMatrix,
    config: &ResolvedGeneticConfig,
    random: &dyn Random,
) -> EvolutionState {
    let EvolutionState { population, best, mut history } = state;

    let offspring_size = config.population_size.saturating_sub(config.elite_size);
    let offspring = (0..offspring_size).map(|_| {
        let parent1 = tournament(population.as_slice(), random);
        let parent2 = tournament(population.as_slice(), random);

        let mut child = crossover(config.crossover_type, &parent1.path, &parent2.path, random);
        mutate(&mut child, config.mutation_rate, random);

        Individual::new(child, matrix)
    });

    let mut next = population.iter().take(config.elite_size).cloned().chain(offspring).collect::<Vec<_>>();
    next.sort_by(|a, b| a.cmp_fitness(b));

    let best = match next.first() {
        Some(candidate) if candidate.distance < best.distance => candidate.clone(),
        _ => best,
    };
    history.push(best.distance);

    EvolutionState { population: next, best, history }
}

fn log(environment: &Environment, timer: &Timer, message: String) {
    (environment.logger)(format!("[{}ms] {message}", timer.elapsed_millis()).as_str());
}
