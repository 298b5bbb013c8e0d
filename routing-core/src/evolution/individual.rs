use crate::models::{DistanceMatrix, Path};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Represents a single candidate solution: a permutation of nodes with its evaluated distance.
#[derive(Clone, Debug)]
pub struct Individual {
    /// A visiting order.
    pub path: Path,
    /// Total distance of the path.
    pub distance: Float,
}

impl Individual {
    /// Creates and evaluates a new individual.
    pub fn new(path: Path, matrix: &DistanceMatrix) -> Self {
        let distance = matrix.path_distance(path.as_slice());
        Self { path, distance }
    }

    /// Returns fitness of the individual, higher is better.
    pub fn fitness(&self) -> Float {
        1. / (1. + self.distance)
    }

    /// Compares individuals by fitness, the fittest goes first.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        compare_floats(other.fitness(), self.fitness())
    }
}
