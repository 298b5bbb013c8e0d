#[cfg(test)]
#[path = "../../tests/unit/solver/validation_test.rs"]
mod validation_test;

use crate::models::Point;
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashSet;

/// Validates points before optimization: coordinates must be finite and within range, ids must be
/// unique. Optimization algorithms never call it implicitly.
pub fn validate_points(points: &[Point]) -> GenericResult<()> {
    let mut ids = FxHashSet::default();

    let errors = points
        .iter()
        .flat_map(|point| {
            let mut errors = Vec::new();

            if !point.lat.is_finite() || !(-90. ..=90.).contains(&point.lat) {
                errors.push(GenericError::from(format!("point '{}' has invalid latitude: {}", point.id, point.lat)));
            }

            if !point.lng.is_finite() || !(-180. ..=180.).contains(&point.lng) {
                errors.push(GenericError::from(format!("point '{}' has invalid longitude: {}", point.id, point.lng)));
            }

            if !ids.insert(point.id.as_str()) {
                errors.push(GenericError::from(format!("point id '{}' is not unique", point.id)));
            }

            errors
        })
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(errors.as_slice(), ", ").into()) }
}
