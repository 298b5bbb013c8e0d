#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::algorithms::geometry::haversine_distance;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Represents a geographic stop which should be visited by a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// An opaque point identity.
    pub id: String,
    /// A display name.
    #[serde(default)]
    pub name: String,
    /// Latitude in degrees.
    pub lat: Float,
    /// Longitude in degrees.
    pub lng: Float,
    /// An amount of passengers (or other demand) associated with the stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers: Option<u32>,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: Float, lng: Float) -> Self {
        Self { id: id.into(), name: name.into(), lat, lng, passengers: None }
    }

    /// Sets passengers count.
    pub fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = Some(passengers);
        self
    }

    /// Computes great-circle distance in kilometers to `other` point.
    pub fn distance_to(&self, other: &Point) -> Float {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}
