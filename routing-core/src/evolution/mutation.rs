#[cfg(test)]
#[path = "../../tests/unit/evolution/mutation_test.rs"]
mod mutation_test;

use crate::models::Path;
use crate::utils::{Float, Random};

/// Reverses the `start..=end` segment of the path.
pub fn inversion(path: &mut Path, start: usize, end: usize) {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    path[start..=end].reverse();
}

/// Applies inversion mutation to a random segment with given probability.
/// Returns true if the path was mutated.
pub fn mutate(path: &mut Path, mutation_rate: Float, random: &dyn Random) -> bool {
    if path.len() < 2 || !random.is_hit(mutation_rate) {
        return false;
    }

    let last = path.len() as i32 - 1;
    let start = random.uniform_int(0, last) as usize;
    let end = random.uniform_int(0, last) as usize;

    inversion(path, start, end);

    true
}
