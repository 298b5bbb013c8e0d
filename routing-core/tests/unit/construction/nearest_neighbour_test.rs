use super::*;
use crate::helpers::models::{create_cross_points, create_points};

fn create_path(coordinates: &[(Float, Float)]) -> Path {
    let points = create_points(coordinates);
    nearest_neighbour(&DistanceMatrix::new(points.as_slice()))
}

parameterized_test! {can_build_path_for_degenerate_input, (coordinates, expected), {
    assert_eq!(create_path(coordinates.as_slice()), expected);
}}

can_build_path_for_degenerate_input! {
    case01_empty: (Vec::<(Float, Float)>::new(), Vec::<usize>::new()),
    case02_single: (vec![(10., 10.)], vec![0]),
    case03_pair: (vec![(10., 10.), (11., 11.)], vec![0, 1]),
}

#[test]
fn can_always_move_to_nearest_unvisited_point() {
    let path = create_path(&[(0., 0.), (3., 0.), (1., 0.), (2., 0.)]);

    assert_eq!(path, vec![0, 2, 3, 1]);
}

#[test]
fn can_start_from_first_point() {
    let path = create_path(&[(2., 0.), (0., 0.), (1., 0.)]);

    assert_eq!(path, vec![0, 2, 1]);
}

#[test]
fn can_break_ties_by_lowest_index() {
    let points = create_cross_points();

    let path = nearest_neighbour(&DistanceMatrix::new(points.as_slice()));

    // north -> center, then south/east/west are equally far: south goes first
    assert_eq!(path, vec![0, 4, 1, 2, 3]);
}

#[test]
fn can_produce_same_path_for_same_input() {
    let coordinates = &[(0.5, 0.2), (0.1, 0.9), (0.7, 0.7), (0.3, 0.3), (0.9, 0.1), (0.2, 0.6)];

    assert_eq!(create_path(coordinates), create_path(coordinates));
}
