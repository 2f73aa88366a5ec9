//! Error handling for the Hydromodule calculation engine
//!
//! All failures are detected before any per-day computation runs; the
//! estimator and calculator themselves are total on validated inputs.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    // Catalog errors
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Unknown irrigation method: {0}")]
    UnknownMethod(String),

    // Request validation errors
    #[error("Invalid request ({code}): {message}")]
    InvalidRequest {
        code: RequestFault,
        message: String,
    },

    // Construction-time table verification
    #[error("Catalog invariant violated: {0}")]
    CatalogInvariant(String),

    // Export errors
    #[error("Export error: {0}")]
    Export(String),
}

/// Reason codes for request validation failures
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestFault {
    HorizonOutOfRange,
    LatitudeOutOfRange,
    PrecipitationLengthMismatch,
    NegativePrecipitation,
}

impl fmt::Display for RequestFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFault::HorizonOutOfRange => write!(f, "horizon_out_of_range"),
            RequestFault::LatitudeOutOfRange => write!(f, "latitude_out_of_range"),
            RequestFault::PrecipitationLengthMismatch => {
                write!(f, "precipitation_length_mismatch")
            }
            RequestFault::NegativePrecipitation => write!(f, "negative_precipitation"),
        }
    }
}

/// Convenience result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
