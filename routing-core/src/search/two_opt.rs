#[cfg(test)]
#[path = "../../tests/unit/search/two_opt_test.rs"]
mod two_opt_test;

use crate::models::{DistanceMatrix, Path};
use crate::utils::{Environment, Float};

/// A default limit for amount of 2-opt scans.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// A minimal gain required to accept a move, protects from cycling on floating point noise.
const IMPROVEMENT_THRESHOLD: Float = 1E-9;

/// Implements a classical TSP's two opt local search with first improvement strategy: as soon as
/// an improving reversal is found, it is applied and the scan starts over.
///
/// The first node of the path never moves. The edge which follows the last node wraps around to the
/// first one, so the path is evaluated as a cycle when looking for improving moves.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
pub struct TwoOpt {
    max_iterations: usize,
}

/// Keeps outcome of 2-opt search.
pub struct TwoOptOutcome {
    /// A refined path.
    pub path: Path,
    /// An amount of scans performed.
    pub iterations: usize,
}

impl TwoOpt {
    /// Creates a new instance of `TwoOpt` with given limit of scans.
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    /// Improves given path until no improving move exists, max iterations or quota is reached.
    pub fn improve(&self, matrix: &DistanceMatrix, path: Path, environment: &Environment) -> TwoOptOutcome {
        let mut path = path;

        // NOTE at least four nodes are required to have a non-trivial reversal
        if path.len() < 4 {
            return TwoOptOutcome { path, iterations: 0 };
        }

        let mut iterations = 0;
        while iterations < self.max_iterations && !environment.is_quota_reached() {
            iterations += 1;

            match find_first_improvement(matrix, path.as_slice()) {
                Some((i, j)) => path[i + 1..=j].reverse(),
                None => break,
            }
        }

        TwoOptOutcome { path, iterations }
    }
}

impl Default for TwoOpt {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

/// Returns a pair of edge start indices `(i, j)` where reversal of `i + 1..=j` shortens the tour.
fn find_first_improvement(matrix: &DistanceMatrix, path: &[usize]) -> Option<(usize, usize)> {
    let size = path.len();

    (0..size - 2).find_map(|i| {
        (i + 2..size).find_map(|j| {
            let (a, b) = (path[i], path[i + 1]);
            let (c, d) = (path[j], path[(j + 1) % size]);

            let delta = matrix.distance(a, c) + matrix.distance(b, d) - matrix.distance(a, b) - matrix.distance(c, d);

            (delta < -IMPROVEMENT_THRESHOLD).then_some((i, j))
        })
    })
}
