//! Forecast request and result models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Crop, GrowthPhase, IrrigationMethod};
use crate::types::GeoPoint;
use crate::validation::{
    validate_horizon, validate_latitude, validate_precipitation_length,
    validate_precipitation_values,
};

/// Shortest supported forecast horizon [days]
pub const MIN_HORIZON_DAYS: u32 = 1;
/// Longest supported forecast horizon [days]
pub const MAX_HORIZON_DAYS: u32 = 30;

/// A fully assembled, validated forecast request
///
/// Requests are produced by [`ForecastRequestBuilder`], which is the single
/// validation gate between input collection and the calculation engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRequest {
    pub crop: Crop,
    pub phase: GrowthPhase,
    pub method: IrrigationMethod,
    pub start_date: NaiveDate,
    pub horizon_days: u32,
    pub location: GeoPoint,
    /// One value per forecast day [mm]
    pub precipitation_mm: Vec<f64>,
}

impl ForecastRequest {
    /// Start assembling a request from the agronomy choices
    pub fn builder(
        crop: Crop,
        phase: GrowthPhase,
        method: IrrigationMethod,
        start_date: NaiveDate,
    ) -> ForecastRequestBuilder {
        ForecastRequestBuilder::new(crop, phase, method, start_date)
    }
}

/// Incremental assembly of a [`ForecastRequest`]
///
/// Mirrors the two-stage input flow: crop, phase, and method are chosen
/// first; geography and per-day precipitation follow. [`Self::build`] is the
/// explicit completion step that validates everything at once.
#[derive(Debug, Clone)]
pub struct ForecastRequestBuilder {
    crop: Crop,
    phase: GrowthPhase,
    method: IrrigationMethod,
    start_date: NaiveDate,
    horizon_days: u32,
    location: GeoPoint,
    precipitation_mm: Option<Vec<f64>>,
}

impl ForecastRequestBuilder {
    fn new(
        crop: Crop,
        phase: GrowthPhase,
        method: IrrigationMethod,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            crop,
            phase,
            method,
            start_date,
            horizon_days: 3,
            location: GeoPoint::new(42.616328, 69.549866),
            precipitation_mm: None,
        }
    }

    /// Set the number of forecast days
    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Set the field location
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = location;
        self
    }

    /// Set the per-day precipitation series [mm]
    ///
    /// Days without a supplied value default to dry (0.0) when the series is
    /// never set.
    pub fn with_precipitation(mut self, precipitation_mm: Vec<f64>) -> Self {
        self.precipitation_mm = Some(precipitation_mm);
        self
    }

    /// Complete and validate the request
    pub fn build(self) -> Result<ForecastRequest, &'static str> {
        validate_horizon(self.horizon_days)?;
        validate_latitude(self.location.latitude)?;

        let precipitation_mm = self
            .precipitation_mm
            .unwrap_or_else(|| vec![0.0; self.horizon_days as usize]);
        validate_precipitation_length(&precipitation_mm, self.horizon_days)?;
        validate_precipitation_values(&precipitation_mm)?;

        Ok(ForecastRequest {
            crop: self.crop,
            phase: self.phase,
            method: self.method,
            start_date: self.start_date,
            horizon_days: self.horizon_days,
            location: self.location,
            precipitation_mm,
        })
    }
}

/// One day of the forecast series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Reference evapotranspiration [mm], rounded to 2 decimals
    pub et0_mm: f64,
    pub precipitation_mm: f64,
    /// Net irrigation depth [mm], never negative
    pub hydromodule_mm: f64,
}

/// A completed forecast: the daily series and its summary statistic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    /// One record per forecast day, chronological from the start date
    pub records: Vec<DailyRecord>,
    /// Arithmetic mean of the daily depths, rounded to 2 decimals [mm/day]
    pub mean_depth_mm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_builder() -> ForecastRequestBuilder {
        ForecastRequest::builder(
            Crop::Wheat,
            GrowthPhase::Initial,
            IrrigationMethod::Surface,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn defaults_fill_a_dry_three_day_request() {
        let request = march_builder().build().unwrap();
        assert_eq!(request.horizon_days, 3);
        assert_eq!(request.precipitation_mm, vec![0.0, 0.0, 0.0]);
        assert_eq!(request.location.latitude, 42.616328);
        assert_eq!(request.location.longitude, 69.549866);
    }

    #[test]
    fn build_rejects_out_of_range_horizon() {
        assert!(march_builder().with_horizon_days(0).build().is_err());
        assert!(march_builder().with_horizon_days(31).build().is_err());
    }

    #[test]
    fn build_rejects_bad_latitude() {
        let result = march_builder()
            .with_location(GeoPoint::new(95.0, 69.549866))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_mismatched_precipitation() {
        let result = march_builder()
            .with_horizon_days(3)
            .with_precipitation(vec![0.0, 1.0])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_negative_precipitation() {
        let result = march_builder()
            .with_horizon_days(2)
            .with_precipitation(vec![0.0, -1.0])
            .build();
        assert!(result.is_err());
    }
}
