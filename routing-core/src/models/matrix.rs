#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::{Node, Point};
use crate::utils::Float;

/// A symmetric matrix of great-circle distances between all pairs of points.
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a new instance of `DistanceMatrix` for given points.
    pub fn new(points: &[Point]) -> Self {
        let size = points.len();
        let mut values = vec![0.; size * size];

        for (from, from_point) in points.iter().enumerate() {
            for (to, to_point) in points.iter().enumerate().skip(from + 1) {
                let distance = from_point.distance_to(to_point);
                values[from * size + to] = distance;
                values[to * size + from] = distance;
            }
        }

        Self { size, values }
    }

    /// Returns distance between two nodes.
    #[inline]
    pub fn distance(&self, from: Node, to: Node) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns amount of points in the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns total distance of the path, closing leg back to the start is not included.
    pub fn path_distance(&self, path: &[Node]) -> Float {
        path.windows(2).map(|leg| self.distance(leg[0], leg[1])).sum()
    }
}
