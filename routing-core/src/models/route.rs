#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use crate::models::{Node, Point};
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// Returns total distance of the route in kilometers: a sum of consecutive legs without a closing
/// leg back to the first point.
pub fn route_distance(points: &[Point]) -> Float {
    leg_distances(points).into_iter().sum()
}

/// Returns distances of each consecutive leg of the route.
pub fn leg_distances(points: &[Point]) -> Vec<Float> {
    points.windows(2).map(|leg| leg[0].distance_to(&leg[1])).collect()
}

/// Returns true if both routes contain the same multiset of point ids.
pub fn is_permutation_of(route: &[Point], other: &[Point]) -> bool {
    if route.len() != other.len() {
        return false;
    }

    let mut counts: FxHashMap<&str, i64> = FxHashMap::default();
    route.iter().for_each(|point| *counts.entry(point.id.as_str()).or_insert(0) += 1);
    other.iter().for_each(|point| *counts.entry(point.id.as_str()).or_insert(0) -= 1);

    counts.values().all(|&count| count == 0)
}

/// Materializes points in the order defined by path.
pub(crate) fn to_points(points: &[Point], path: &[Node]) -> Vec<Point> {
    path.iter().map(|&node| points[node].clone()).collect()
}
