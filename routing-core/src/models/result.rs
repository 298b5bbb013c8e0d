#[cfg(test)]
#[path = "../../tests/unit/models/result_test.rs"]
mod result_test;

use crate::models::Point;
use crate::utils::{Float, round_to};
use serde::Serialize;

/// An amount of decimal places kept for distances in results.
const DISTANCE_PRECISION: i32 = 2;

/// A result of route optimization with nearest neighbour construction and 2-opt refinement.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Points in the order they were given.
    pub original_order: Vec<Point>,
    /// Points in the optimized order.
    pub optimized_order: Vec<Point>,
    /// Total distance of the original order, km.
    pub original_distance: Float,
    /// Total distance of the optimized order, km.
    pub optimized_distance: Float,
    /// A difference between original and optimized distances, km.
    pub savings: Float,
    /// Savings relative to original distance, percents.
    pub savings_percentage: Float,
    /// An amount of local search iterations performed.
    pub iterations: usize,
}

impl OptimizationResult {
    /// Creates a new instance of `OptimizationResult` from raw (not rounded) distances.
    pub fn new(
        original_order: Vec<Point>,
        optimized_order: Vec<Point>,
        original_distance: Float,
        optimized_distance: Float,
        iterations: usize,
    ) -> Self {
        let savings = (original_distance - optimized_distance).max(0.);
        let savings_percentage = if original_distance > 0. { savings / original_distance * 100. } else { 0. };

        Self {
            original_order,
            optimized_order,
            original_distance: round_to(original_distance, DISTANCE_PRECISION),
            optimized_distance: round_to(optimized_distance, DISTANCE_PRECISION),
            savings: round_to(savings, DISTANCE_PRECISION),
            savings_percentage: round_to(savings_percentage, DISTANCE_PRECISION),
            iterations,
        }
    }

    /// Creates a result which keeps original order as is.
    pub fn unchanged(points: &[Point], distance: Float) -> Self {
        Self::new(points.to_vec(), points.to_vec(), distance, distance, 0)
    }
}

/// A result of route optimization with genetic algorithm.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticResult {
    /// Points in the best order found.
    pub best_route: Vec<Point>,
    /// Total distance of the best route, km.
    pub best_distance: Float,
    /// An amount of generations actually run.
    pub generations: usize,
    /// Best known distance after each generation.
    pub improvement_history: Vec<Float>,
}

impl GeneticResult {
    /// Creates a new instance of `GeneticResult` from raw (not rounded) distances.
    pub fn new(best_route: Vec<Point>, best_distance: Float, improvement_history: Vec<Float>) -> Self {
        Self {
            best_route,
            best_distance: round_to(best_distance, DISTANCE_PRECISION),
            generations: improvement_history.len(),
            improvement_history: improvement_history
                .into_iter()
                .map(|distance| round_to(distance, DISTANCE_PRECISION))
                .collect(),
        }
    }

    /// Creates an empty result used for degenerate inputs.
    pub fn empty(points: &[Point]) -> Self {
        Self::new(points.to_vec(), 0., vec![])
    }
}
