//! Calculation engine for the Hydromodule Irrigation Planner
//!
//! Estimates the daily net irrigation depth ("hydromodule") for a crop,
//! growth phase, and irrigation method over a short horizon, combining a
//! simplified reference-evapotranspiration model with user-supplied
//! precipitation. The engine is synchronous and pure: catalogs are read-only,
//! every forecast is a one-shot computation, and the only session state is
//! the caller-owned history log.

pub mod catalog;
pub mod error;
pub mod services;

pub use catalog::{CropCatalog, IrrigationCatalog};
pub use error::{EngineError, EngineResult, RequestFault};
pub use services::{ForecastService, HistoryLog};
