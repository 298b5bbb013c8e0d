use super::*;
use crate::helpers::models::{assert_permutation, create_point, create_points};
use crate::models::route_distance;
use crate::utils::{DefaultRandom, TimeQuota};
use std::sync::{Arc, Mutex};

fn create_small_config(generations: usize) -> GeneticConfig {
    GeneticConfig { population_size: Some(20), generations: Some(generations), ..GeneticConfig::default() }
}

fn create_random_points(size: usize, seed: u64) -> Vec<Point> {
    let random = DefaultRandom::new_repeatable(seed);
    let coordinates = (0..size).map(|_| (random.uniform_real(-1., 1.), random.uniform_real(-1., 1.))).collect::<Vec<_>>();

    create_points(coordinates.as_slice())
}

#[test]
fn can_handle_empty_input() {
    let result = run_evolution(&[], &GeneticConfig::default(), &Environment::default());

    assert!(result.best_route.is_empty());
    assert_eq!(result.best_distance, 0.);
    assert_eq!(result.generations, 0);
    assert!(result.improvement_history.is_empty());
}

#[test]
fn can_handle_single_point() {
    let points = vec![create_point("a", 10., 10.)];

    let result = run_evolution(points.as_slice(), &GeneticConfig::default(), &Environment::default());

    assert_eq!(result.best_route, points);
    assert_eq!(result.generations, 0);
}

parameterized_test! {can_keep_history_non_increasing, (size, crossover_type), {
    let points = create_random_points(size, 42);
    let config = GeneticConfig { crossover_type: Some(crossover_type), ..create_small_config(50) };

    let result = run_evolution(points.as_slice(), &config, &Environment::new_with_seed(42));

    assert_eq!(result.generations, 50);
    assert_eq!(result.improvement_history.len(), 50);
    assert!(result.improvement_history.windows(2).all(|pair| pair[1] <= pair[0]));
    assert_eq!(result.improvement_history.last().copied(), Some(result.best_distance));
    assert_permutation(result.best_route.as_slice(), points.as_slice());
}}

can_keep_history_non_increasing! {
    case01_two_pmx: (2, CrossoverType::Pmx),
    case02_two_order: (2, CrossoverType::Order),
    case03_ten_pmx: (10, CrossoverType::Pmx),
    case04_ten_order: (10, CrossoverType::Order),
    case05_thirty_pmx: (30, CrossoverType::Pmx),
}

#[test]
fn can_run_with_non_finite_rates() {
    let points = create_random_points(8, 3);
    let config = GeneticConfig {
        mutation_rate: Some(Float::NAN),
        elitism_rate: Some(Float::NAN),
        ..create_small_config(10)
    };

    let result = run_evolution(points.as_slice(), &config, &Environment::new_with_seed(3));

    assert_eq!(result.generations, 10);
    assert_permutation(result.best_route.as_slice(), points.as_slice());
}

#[test]
fn can_reproduce_run_with_same_seed() {
    let points = create_random_points(15, 1);
    let config = create_small_config(30);

    let first = run_evolution(points.as_slice(), &config, &Environment::new_with_seed(7));
    let second = run_evolution(points.as_slice(), &config, &Environment::new_with_seed(7));

    assert_eq!(first.best_route, second.best_route);
    assert_eq!(first.improvement_history, second.improvement_history);
}

#[test]
fn can_improve_clearly_bad_order() {
    // zigzag over a line: the longest possible visiting order
    let points = create_points(&[(0., 0.), (0., 5.), (0., 1.), (0., 4.), (0., 2.), (0., 3.)]);

    let result = run_evolution(points.as_slice(), &create_small_config(100), &Environment::new_with_seed(3));

    assert!(result.best_distance < route_distance(points.as_slice()));
}

#[test]
fn can_stop_when_quota_is_reached() {
    let points = create_random_points(10, 3);
    let environment = Environment { quota: Some(Arc::new(TimeQuota::new(-1.))), ..Environment::new_with_seed(3) };

    let result = run_evolution(points.as_slice(), &create_small_config(100), &environment);

    assert_eq!(result.generations, 0);
    assert_permutation(result.best_route.as_slice(), points.as_slice());
}

#[test]
fn can_keep_elite_individuals() {
    let points = create_random_points(12, 9);
    let matrix = DistanceMatrix::new(points.as_slice());
    let config = GeneticConfig { mutation_rate: Some(1.), ..create_small_config(1) }.resolve(points.len());
    let random = DefaultRandom::new_repeatable(9);

    let initial = create_initial_state(&matrix, &config, &random);
    let initial_best = initial.best.clone();
    let next = evolve(initial, &matrix, &config, &random);

    assert_eq!(next.population.len(), config.population_size);
    assert!(next.population[0].distance <= initial_best.distance);
    assert!(next.best.distance <= initial_best.distance);
    assert_eq!(next.history, vec![next.best.distance]);
}

#[test]
fn can_log_progress() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let environment = Environment {
        logger: Arc::new({
            let messages = messages.clone();
            move |msg: &str| messages.lock().unwrap().push(msg.to_string())
        }),
        ..Environment::new_with_seed(5)
    };
    let config = GeneticConfig { log_best: Some(10), ..create_small_config(30) };

    run_evolution(create_random_points(8, 5).as_slice(), &config, &environment);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 5);
    assert!(messages[0].contains("initial population of 20 individuals"));
    assert!(messages[3].contains("generation 30"));
    assert!(messages[4].contains("completed in 30 generations"));
}
