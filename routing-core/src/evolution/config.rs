#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::utils::Float;
use serde::{Deserialize, Serialize};

const DEFAULT_MUTATION_RATE: Float = 0.1;
const DEFAULT_ELITISM_RATE: Float = 0.1;

/// Specifies crossover operator type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    /// Order crossover (OX).
    #[serde(rename = "order")]
    Order,
    /// Partially mapped crossover (PMX).
    #[default]
    #[serde(rename = "pmx")]
    Pmx,
}

/// A genetic algorithm configuration. Unset values are derived from the amount of points.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticConfig {
    /// Population size. Default is `2n` clamped to `[50, 200]`.
    pub population_size: Option<usize>,
    /// Amount of generations. Default is `5n` clamped to `[100, 500]`.
    pub generations: Option<usize>,
    /// Probability of inversion mutation. Default is 0.1.
    pub mutation_rate: Option<Float>,
    /// Share of best individuals copied to the next generation as is. Default is 0.1.
    pub elitism_rate: Option<Float>,
    /// Crossover operator. Default is PMX.
    pub crossover_type: Option<CrossoverType>,
    /// Specifies how often best individual is logged. Default is 100 (generations).
    pub log_best: Option<usize>,
}

/// A genetic algorithm configuration with all values resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGeneticConfig {
    /// Population size.
    pub population_size: usize,
    /// Amount of generations.
    pub generations: usize,
    /// Probability of inversion mutation.
    pub mutation_rate: Float,
    /// Amount of best individuals copied to the next generation as is.
    pub elite_size: usize,
    /// Crossover operator.
    pub crossover_type: CrossoverType,
    /// Specifies how often best individual is logged.
    pub log_best: usize,
}

impl GeneticConfig {
    /// Resolves configuration for the given amount of points.
    pub fn resolve(&self, size: usize) -> ResolvedGeneticConfig {
        let population_size = self.population_size.unwrap_or_else(|| (2 * size).clamp(50, 200)).max(1);
        let elitism_rate = resolve_rate(self.elitism_rate, DEFAULT_ELITISM_RATE);

        ResolvedGeneticConfig {
            population_size,
            generations: self.generations.unwrap_or_else(|| (5 * size).clamp(100, 500)),
            mutation_rate: resolve_rate(self.mutation_rate, DEFAULT_MUTATION_RATE),
            elite_size: ((elitism_rate * population_size as Float).floor() as usize).min(population_size),
            crossover_type: self.crossover_type.unwrap_or_default(),
            log_best: self.log_best.unwrap_or(100).max(1),
        }
    }
}

/// Returns the rate clamped to `[0, 1]`, non finite or missing values are replaced with the default.
fn resolve_rate(rate: Option<Float>, default: Float) -> Float {
    rate.filter(|rate| rate.is_finite()).unwrap_or(default).clamp(0., 1.)
}
