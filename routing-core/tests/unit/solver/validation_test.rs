use super::*;
use crate::helpers::models::*;
use crate::utils::Float;

#[test]
fn can_accept_valid_points() {
    assert_eq!(validate_points(create_cross_points().as_slice()), Ok(()));
    assert_eq!(validate_points(&[]), Ok(()));
}

parameterized_test! {can_detect_invalid_coordinates, (lat, lng, expected), {
    can_detect_invalid_coordinates_impl(lat, lng, expected);
}}

can_detect_invalid_coordinates! {
    case01_lat_too_big: (90.5, 0., "point 'a' has invalid latitude: 90.5"),
    case02_lat_too_small: (-91., 0., "point 'a' has invalid latitude: -91"),
    case03_lng_too_big: (0., 180.1, "point 'a' has invalid longitude: 180.1"),
    case04_lng_too_small: (0., -200., "point 'a' has invalid longitude: -200"),
    case05_lat_nan: (Float::NAN, 0., "point 'a' has invalid latitude: NaN"),
    case06_lng_inf: (0., Float::INFINITY, "point 'a' has invalid longitude: inf"),
}

fn can_detect_invalid_coordinates_impl(lat: Float, lng: Float, expected: &str) {
    let result = validate_points(&[create_point("a", lat, lng)]);

    assert_eq!(result, Err(expected.into()));
}

#[test]
fn can_accept_boundary_coordinates() {
    let points = vec![create_point("a", 90., 180.), create_point("b", -90., -180.)];

    assert_eq!(validate_points(points.as_slice()), Ok(()));
}

#[test]
fn can_detect_duplicate_ids() {
    let points = vec![create_point("a", 0., 0.), create_point("b", 1., 1.), create_point("a", 2., 2.)];

    assert_eq!(validate_points(points.as_slice()), Err("point id 'a' is not unique".into()));
}

#[test]
fn can_join_multiple_errors() {
    let points = vec![create_point("a", 100., 0.), create_point("a", 0., 190.)];

    let err = validate_points(points.as_slice()).expect_err("should fail");

    assert_eq!(
        err.to_string(),
        "point 'a' has invalid latitude: 100, point 'a' has invalid longitude: 190, point id 'a' is not unique"
    );
}
