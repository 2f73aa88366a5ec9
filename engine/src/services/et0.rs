//! Reference evapotranspiration (ET₀) estimator
//!
//! Simplified seasonal model: a latitude-scaled sine over the ordinal day of
//! year, crossing its base value near the spring equinox. The output is
//! mathematically bounded to [1.5, 5.5] mm/day for any real latitude and
//! date, so the estimator is total.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

/// Base daily ET₀ [mm/day]
const ET0_BASE_MM: f64 = 3.5;
/// Seasonal swing around the base at |sin(latitude)| = 1 [mm/day]
const ET0_AMPLITUDE_MM: f64 = 2.0;
/// Day of year at which the seasonal term crosses zero upward
const SPRING_CROSSING_DOY: f64 = 80.0;

/// Estimate reference evapotranspiration for a date and latitude [mm/day]
///
/// `ET0 = 3.5 + 2.0 × |sin(lat)| × sin(2π × (doy − 80) / 365)`, rounded to
/// two decimals. Leap years use the actual ordinal day, shifting the seasonal
/// phase by at most one day.
pub fn reference_et0(date: NaiveDate, latitude_deg: f64) -> f64 {
    let doy = date.ordinal() as f64;
    let seasonal = (2.0 * PI * (doy - SPRING_CROSSING_DOY) / 365.0).sin();
    round_mm(ET0_BASE_MM + ET0_AMPLITUDE_MM * latitude_deg.to_radians().sin().abs() * seasonal)
}

/// Round to the 2-decimal millimetre precision used throughout the forecast
pub(crate) fn round_mm(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
