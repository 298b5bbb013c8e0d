#[cfg(test)]
#[path = "../../tests/unit/evolution/crossover_test.rs"]
mod crossover_test;

use super::CrossoverType;
use crate::models::{Node, Path};
use crate::utils::Random;

/// Produces an offspring from two parents using the given crossover type and a random segment.
pub fn crossover(crossover_type: CrossoverType, parent1: &[Node], parent2: &[Node], random: &dyn Random) -> Path {
    debug_assert_eq!(parent1.len(), parent2.len());

    if parent1.len() < 2 {
        return parent1.to_vec();
    }

    let last = parent1.len() as i32 - 1;
    let start = random.uniform_int(0, last);
    let end = random.uniform_int(start, last);
    let (start, end) = (start as usize, end as usize);

    match crossover_type {
        CrossoverType::Pmx => partially_mapped_crossover(parent1, parent2, start, end),
        CrossoverType::Order => order_crossover(parent1, parent2, start, end),
    }
}

/// Partially mapped crossover (PMX): the `start..=end` segment is copied from the first parent,
/// other positions are taken from the second parent. When a value from the second parent already
/// exists in the copied segment, it is substituted through the mapping defined by the segment
/// until a free value is found.
pub fn partially_mapped_crossover(parent1: &[Node], parent2: &[Node], start: usize, end: usize) -> Path {
    let size = parent1.len();

    // position of each node in the first parent
    let mut positions = vec![0; size];
    parent1.iter().enumerate().for_each(|(idx, &node)| positions[node] = idx);

    let in_segment = |node: Node| (start..=end).contains(&positions[node]);

    (0..size)
        .map(|idx| {
            if (start..=end).contains(&idx) {
                return parent1[idx];
            }

            let mut node = parent2[idx];
            while in_segment(node) {
                node = parent2[positions[node]];
            }

            node
        })
        .collect()
}

/// Order crossover (OX): the `start..=end` segment is copied from the first parent, remaining
/// positions are filled left to right by scanning the second parent and skipping used values.
pub fn order_crossover(parent1: &[Node], parent2: &[Node], start: usize, end: usize) -> Path {
    let size = parent1.len();

    let mut used = vec![false; size];
    parent1[start..=end].iter().for_each(|&node| used[node] = true);

    let mut donors = parent2.iter().copied().filter(|&node| !used[node]);

    (0..size)
        .map(|idx| {
            if (start..=end).contains(&idx) {
                parent1[idx]
            } else {
                donors.next().expect("parents must be permutations of the same nodes")
            }
        })
        .collect()
}
