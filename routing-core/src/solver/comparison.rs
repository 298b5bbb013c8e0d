use crate::models::{GeneticResult, OptimizationResult};
use crate::utils::Float;
use serde::Serialize;

/// Specifies an optimizer kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptimizerKind {
    /// Nearest neighbour construction refined by 2-opt.
    TwoOpt,
    /// Genetic algorithm.
    Genetic,
}

/// Keeps results of both optimizers run on the same input.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// A result of nearest neighbour with 2-opt.
    pub two_opt: OptimizationResult,
    /// A result of genetic algorithm.
    pub genetic: GeneticResult,
    /// An optimizer which found a shorter route, 2-opt wins ties.
    pub winner: OptimizerKind,
}

impl Comparison {
    /// Creates a new instance of `Comparison`.
    pub fn new(two_opt: OptimizationResult, genetic: GeneticResult) -> Self {
        let winner = if genetic.best_distance < two_opt.optimized_distance {
            OptimizerKind::Genetic
        } else {
            OptimizerKind::TwoOpt
        };

        Self { two_opt, genetic, winner }
    }

    /// Returns the shortest distance found by any optimizer.
    pub fn best_distance(&self) -> Float {
        self.two_opt.optimized_distance.min(self.genetic.best_distance)
    }
}
