//! Validation utilities for the Hydromodule Irrigation Planner

use crate::models::{MAX_HORIZON_DAYS, MIN_HORIZON_DAYS};

// ============================================================================
// Forecast Request Validations
// ============================================================================

/// Validate the forecast horizon is within the supported range
pub fn validate_horizon(horizon_days: u32) -> Result<(), &'static str> {
    if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&horizon_days) {
        return Err("Forecast horizon must be between 1 and 30 days");
    }
    Ok(())
}

/// Validate latitude is a real coordinate
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    Ok(())
}

/// Validate the precipitation series covers exactly the forecast horizon
pub fn validate_precipitation_length(
    precipitation_mm: &[f64],
    horizon_days: u32,
) -> Result<(), &'static str> {
    if precipitation_mm.len() != horizon_days as usize {
        return Err("Precipitation series length must match the forecast horizon");
    }
    Ok(())
}

/// Validate every precipitation value is a finite, non-negative depth
pub fn validate_precipitation_values(precipitation_mm: &[f64]) -> Result<(), &'static str> {
    if precipitation_mm.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err("Precipitation values must be finite and non-negative");
    }
    Ok(())
}
