//! Common types used across the planner

use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees
///
/// Latitude drives the evapotranspiration model; longitude is carried for
/// record-keeping only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
