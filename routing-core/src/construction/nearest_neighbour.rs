#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_neighbour_test.rs"]
mod nearest_neighbour_test;

use crate::models::{DistanceMatrix, Node, Path};
use crate::utils::Float;

/// Builds a path which starts at the first node and always continues to the nearest unvisited node.
/// Ties are resolved in favor of the node with the lowest index.
pub fn nearest_neighbour(matrix: &DistanceMatrix) -> Path {
    let size = matrix.size();
    if size < 2 {
        return (0..size).collect();
    }

    let mut visited = vec![false; size];
    let mut path = Vec::with_capacity(size);

    let mut current: Node = 0;
    visited[current] = true;
    path.push(current);

    while path.len() < size {
        let next = (0..size)
            .filter(|&node| !visited[node])
            .fold(None, |nearest: Option<(Node, Float)>, node| {
                let distance = matrix.distance(current, node);
                match nearest {
                    Some((_, best)) if best <= distance => nearest,
                    _ => Some((node, distance)),
                }
            })
            .map(|(node, _)| node);

        let Some(node) = next else { break };

        visited[node] = true;
        path.push(node);
        current = node;
    }

    path
}
