//! This module contains a facade which orchestrates route optimization algorithms.
//!
//! The default path is deterministic: nearest neighbour builds a seed which is refined by 2-opt.
//! A genetic algorithm is available as an alternative for larger point sets or for benchmarking.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod comparison;
pub use self::comparison::*;

mod validation;
pub use self::validation::validate_points;

use crate::construction::nearest_neighbour;
use crate::evolution::{GeneticConfig, run_evolution};
use crate::models::{DistanceMatrix, GeneticResult, OptimizationResult, Path, Point, route_distance, to_points};
use crate::search::{DEFAULT_MAX_ITERATIONS, TwoOpt};
use crate::utils::{Environment, Timer, parallel_collect};
use std::sync::Arc;

/// Optimizes visiting order of points using nearest neighbour and 2-opt with default settings.
pub fn optimize_route(points: &[Point]) -> OptimizationResult {
    RouteOptimizer::default().optimize(points)
}

/// Optimizes visiting order of points using genetic algorithm with default environment.
pub fn optimize_route_with_ga(points: &[Point], config: &GeneticConfig) -> GeneticResult {
    RouteOptimizer::default().optimize_with_ga(points, config)
}

/// Optimizes many independent routes in parallel. Results have the same order as input routes.
pub fn optimize_routes(routes: &[Vec<Point>]) -> Vec<OptimizationResult> {
    RouteOptimizer::default().optimize_many(routes)
}

/// Runs both optimizers on the same points and reports which one produced a shorter route.
pub fn compare_optimizers(points: &[Point], config: &GeneticConfig) -> Comparison {
    RouteOptimizer::default().compare(points, config)
}

/// Provides configurable way to run route optimization algorithms.
#[derive(Clone)]
pub struct RouteOptimizer {
    environment: Arc<Environment>,
    max_iterations: usize,
}

impl RouteOptimizer {
    /// Creates a new instance of `RouteOptimizer`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, max_iterations: DEFAULT_MAX_ITERATIONS }
    }

    /// Sets max amount of 2-opt scans. Default is 1000.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns environment used by the optimizer.
    pub fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    /// Optimizes visiting order using nearest neighbour construction refined by 2-opt.
    pub fn optimize(&self, points: &[Point]) -> OptimizationResult {
        let original_distance = route_distance(points);

        // NOTE any order of two points has the same distance
        if points.len() <= 2 {
            return OptimizationResult::unchanged(points, original_distance);
        }

        let timer = Timer::start();
        let matrix = DistanceMatrix::new(points);

        let seed = nearest_neighbour(&matrix);
        let outcome = TwoOpt::new(self.max_iterations).improve(&matrix, seed.clone(), self.environment.as_ref());
        let two_opt_distance = matrix.path_distance(outcome.path.as_slice());

        // NOTE 2-opt evaluates the path as a cycle, so its open path can be longer than the seed or the input
        let fallbacks: [(&str, Path); 2] = [("nearest neighbour", seed), ("original", (0..points.len()).collect())];
        let (path, optimized_distance, iterations) =
            fallbacks.into_iter().fold((outcome.path, two_opt_distance, outcome.iterations), |best, (name, path)| {
                let distance = matrix.path_distance(path.as_slice());
                if distance < best.1 {
                    self.log(format!(
                        "2-opt distance {two_opt_distance:.2}km is longer than {name} order {distance:.2}km, \
                         keeping {name} order"
                    ));
                    (path, distance, 0)
                } else {
                    best
                }
            });

        self.log(format!(
            "[{}ms] optimized {} points in {} iterations: {original_distance:.2}km -> {optimized_distance:.2}km",
            timer.elapsed_millis(),
            points.len(),
            iterations,
        ));

        OptimizationResult::new(
            points.to_vec(),
            to_points(points, path.as_slice()),
            original_distance,
            optimized_distance,
            iterations,
        )
    }

    /// Optimizes visiting order using genetic algorithm.
    pub fn optimize_with_ga(&self, points: &[Point], config: &GeneticConfig) -> GeneticResult {
        run_evolution(points, config, self.environment.as_ref())
    }

    /// Optimizes many independent routes in parallel.
    pub fn optimize_many(&self, routes: &[Vec<Point>]) -> Vec<OptimizationResult> {
        parallel_collect(routes, |points| self.optimize(points.as_slice()))
    }

    /// Runs both optimizers on the same points.
    pub fn compare(&self, points: &[Point], config: &GeneticConfig) -> Comparison {
        Comparison::new(self.optimize(points), self.optimize_with_ga(points, config))
    }

    fn log(&self, message: String) {
        (self.environment.logger)(message.as_str());
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}
