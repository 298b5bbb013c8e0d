#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/haversine_test.rs"]
mod haversine_test;

use crate::utils::Float;

/// A mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Computes great-circle distance in kilometers between two points given by latitude and longitude
/// in degrees using haversine formula.
///
/// Coordinates are not validated: out of range values produce a mathematically valid distance and
/// NaN is propagated as is.
pub fn haversine_distance(lat1: Float, lng1: Float, lat2: Float, lng2: Float) -> Float {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    // NOTE a can slightly exceed 1 on antipodal points due to rounding
    let a = ((d_lat / 2.).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.).sin().powi(2))
    .clamp(0., 1.);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}
