//! Forecast service producing the daily hydromodule series

use chrono::Duration;
use shared::models::{DailyRecord, ForecastRequest, ForecastResult};
use shared::validation::{
    validate_horizon, validate_latitude, validate_precipitation_length,
    validate_precipitation_values,
};

use super::et0::{reference_et0, round_mm};
use super::water::daily_depth;
use crate::error::{EngineError, EngineResult, RequestFault};

/// Forecast service for computing the daily irrigation series
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastService;

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new() -> Self {
        Self
    }

    /// Build the forecast series for a request
    ///
    /// Validates the request, then computes one record per day of the
    /// horizon and the mean depth over the series. Deterministic and
    /// side-effect free: identical requests produce identical results, and
    /// nothing is recorded anywhere unless the caller appends the outcome to
    /// a [`super::HistoryLog`].
    pub fn build(&self, request: &ForecastRequest) -> EngineResult<ForecastResult> {
        Self::validate(request)?;

        let kc = request.crop.kc(request.phase);
        let efficiency = request.method.efficiency();
        tracing::debug!(
            "Building {}-day forecast: {} ({} phase), {} irrigation",
            request.horizon_days,
            request.crop,
            request.phase,
            request.method
        );

        let mut records = Vec::with_capacity(request.horizon_days as usize);
        for (i, precipitation_mm) in request.precipitation_mm.iter().copied().enumerate() {
            let date = request.start_date + Duration::days(i as i64);
            let et0_mm = reference_et0(date, request.location.latitude);
            let hydromodule_mm = daily_depth(et0_mm, kc, precipitation_mm, efficiency);
            records.push(DailyRecord {
                date,
                et0_mm,
                precipitation_mm,
                hydromodule_mm,
            });
        }

        let mean_depth_mm =
            round_mm(records.iter().map(|r| r.hydromodule_mm).sum::<f64>() / records.len() as f64);
        tracing::info!("Forecast complete: mean hydromodule {:.2} mm/day", mean_depth_mm);

        Ok(ForecastResult {
            records,
            mean_depth_mm,
        })
    }

    /// Revalidate a request before any per-day computation
    ///
    /// The builder in `shared` already gates assembly, but the engine checks
    /// again so a hand-constructed request cannot reach the formulas.
    fn validate(request: &ForecastRequest) -> EngineResult<()> {
        validate_horizon(request.horizon_days).map_err(|message| EngineError::InvalidRequest {
            code: RequestFault::HorizonOutOfRange,
            message: message.to_string(),
        })?;
        validate_latitude(request.location.latitude).map_err(|message| {
            EngineError::InvalidRequest {
                code: RequestFault::LatitudeOutOfRange,
                message: message.to_string(),
            }
        })?;
        validate_precipitation_length(&request.precipitation_mm, request.horizon_days).map_err(
            |message| EngineError::InvalidRequest {
                code: RequestFault::PrecipitationLengthMismatch,
                message: message.to_string(),
            },
        )?;
        validate_precipitation_values(&request.precipitation_mm).map_err(|message| {
            EngineError::InvalidRequest {
                code: RequestFault::NegativePrecipitation,
                message: message.to_string(),
            }
        })?;
        Ok(())
    }
}
