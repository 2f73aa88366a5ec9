//! Session history models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Crop, GrowthPhase, IrrigationMethod};
use crate::types::GeoPoint;

/// Immutable snapshot of one completed forecast
///
/// Created once per forecast the caller chooses to keep; never mutated or
/// deleted within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub crop: Crop,
    pub phase: GrowthPhase,
    pub method: IrrigationMethod,
    /// Crop coefficient the forecast ran with
    pub kc: f64,
    /// Application efficiency the forecast ran with
    pub efficiency: f64,
    pub location: GeoPoint,
    pub mean_depth_mm: f64,
}
