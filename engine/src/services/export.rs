//! Delimited-text export of forecast results

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::ForecastResult;

use crate::error::{EngineError, EngineResult};

/// One exported forecast row
#[derive(Debug, Serialize)]
struct ExportRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "ET0")]
    et0: f64,
    #[serde(rename = "Precipitation")]
    precipitation: f64,
    #[serde(rename = "HydroModule")]
    hydromodule: f64,
}

/// Export a forecast as UTF-8 delimited text
///
/// Header row `Date,ET0,Precipitation,HydroModule`, then one row per
/// [`shared::models::DailyRecord`] in chronological order.
pub fn forecast_to_csv(result: &ForecastResult) -> EngineResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in &result.records {
        wtr.serialize(ExportRow {
            date: record.date,
            et0: record.et0_mm,
            precipitation: record.precipitation_mm,
            hydromodule: record.hydromodule_mm,
        })
        .map_err(|e| EngineError::Export(format!("CSV serialization error: {}", e)))?;
    }
    let csv_data = String::from_utf8(
        wtr.into_inner()
            .map_err(|e| EngineError::Export(format!("CSV writer error: {}", e)))?,
    )
    .map_err(|e| EngineError::Export(format!("UTF-8 conversion error: {}", e)))?;
    Ok(csv_data)
}
